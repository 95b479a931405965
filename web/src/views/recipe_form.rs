//! Create and edit recipe views sharing one editor form.
//!
//! Both routes are wrapped in the cook-or-admin guard; the editor itself
//! additionally hides behind the author-or-admin check when editing.

use api::models::{Category, RecipeForm};
use dioxus::prelude::*;
use store::{authz, Role, RouteRequirement};
use ui::{use_api, use_session, ErrorBanner, Guarded};

use crate::Route;

#[component]
pub fn CreateRecipe() -> Element {
    rsx! {
        Guarded {
            requirement: RouteRequirement::Roles(vec![Role::Cook, Role::Admin]),
            RecipeEditor { recipe_id: None }
        }
    }
}

#[component]
pub fn EditRecipe(id: i64) -> Element {
    rsx! {
        Guarded {
            requirement: RouteRequirement::Roles(vec![Role::Cook, Role::Admin]),
            RecipeEditor { recipe_id: Some(id) }
        }
    }
}

#[component]
fn RecipeEditor(recipe_id: Option<i64>) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut ingredients = use_signal(String::new);
    let mut instructions = use_signal(String::new);
    let mut category = use_signal(|| Option::<Category>::None);
    let mut image_url = use_signal(String::new);
    let mut video_url = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut allowed = use_signal(|| true);

    let editing = recipe_id.is_some();

    // Editing starts by loading the current recipe into the form. Editors
    // who are neither the author nor an admin get bounced home.
    let load_api = api.clone();
    let load_session = session.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        let viewer = load_session.current();
        async move {
            let Some(id) = recipe_id else { return };
            match api.recipe(id).await {
                Ok(full) => {
                    if !authz::can_manage_recipe(viewer.as_ref(), full.user.as_ref().map(|u| u.id))
                    {
                        allowed.set(false);
                        return;
                    }
                    title.set(full.title);
                    description.set(full.description);
                    ingredients.set(full.ingredients);
                    instructions.set(full.instructions);
                    category.set(Some(full.category));
                    image_url.set(full.image_url.unwrap_or_default());
                    video_url.set(full.video_url.unwrap_or_default());
                }
                Err(err) => {
                    tracing::error!("loading recipe {id} for editing: {err}");
                    error.set(format!("Could not load recipe: {}", err.message()));
                }
            }
        }
    });

    if !allowed() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let submit_api = api.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() {
            error.set("Title is required".to_string());
            return;
        }
        if category().is_none() {
            error.set("Please pick a category".to_string());
            return;
        }
        let api = submit_api.clone();
        let form = RecipeForm {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            ingredients: ingredients(),
            instructions: instructions(),
            category: category(),
            image_url: image_url().trim().to_string(),
            video_url: video_url().trim().to_string(),
        };
        spawn(async move {
            error.set(String::new());
            saving.set(true);
            let result = match recipe_id {
                Some(id) => api.update_recipe(id, &form).await,
                None => api.create_recipe(&form).await,
            };
            match result {
                Ok(saved) => {
                    nav.push(Route::RecipeDetail { id: saved.id });
                }
                Err(err) => {
                    tracing::error!("saving recipe: {err}");
                    saving.set(false);
                    error.set(err.message().to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page recipe-form-page",
            h1 {
                if editing { "Edit Recipe" } else { "Create New Recipe" }
            }

            ErrorBanner { message: error() }

            form {
                class: "recipe-form",
                onsubmit: handle_submit,

                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    r#type: "text",
                    placeholder: "Recipe title",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }

                label { r#for: "description", "Description" }
                textarea {
                    id: "description",
                    placeholder: "A short description of the dish",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }

                label { "Category" }
                div {
                    class: "category-filter",
                    for option in Category::ALL {
                        button {
                            r#type: "button",
                            class: if category() == Some(option) { "chip chip-active" } else { "chip" },
                            onclick: move |_| category.set(Some(option)),
                            "{option.label()}"
                        }
                    }
                }

                label { r#for: "ingredients", "Ingredients (one per line)" }
                textarea {
                    id: "ingredients",
                    class: "tall",
                    placeholder: "2 cups flour\n1 tsp salt\n...",
                    value: ingredients(),
                    oninput: move |evt| ingredients.set(evt.value()),
                }

                label { r#for: "instructions", "Instructions" }
                textarea {
                    id: "instructions",
                    class: "tall",
                    placeholder: "Step by step instructions",
                    value: instructions(),
                    oninput: move |evt| instructions.set(evt.value()),
                }

                label { r#for: "image-url", "Image URL" }
                input {
                    id: "image-url",
                    r#type: "url",
                    placeholder: "https://...",
                    value: image_url(),
                    oninput: move |evt| image_url.set(evt.value()),
                }

                label { r#for: "video-url", "Video URL" }
                input {
                    id: "video-url",
                    r#type: "url",
                    placeholder: "https://...",
                    value: video_url(),
                    oninput: move |evt| video_url.set(evt.value()),
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| { nav.go_back(); },
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: saving(),
                        if saving() {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Publish Recipe"
                        }
                    }
                }
            }
        }
    }
}
