//! Recipe detail: full recipe, rating, follow control, comments.

use api::models::{display_rating, Comment, Recipe};
use dioxus::prelude::*;
use store::authz;
use ui::{
    confirm, use_api, use_session, ErrorBanner, RatingInput, Stars, SuccessBanner,
    PLACEHOLDER_IMAGE,
};

use crate::Route;

#[component]
pub fn RecipeDetail(id: i64) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut average = use_signal(|| Option::<f64>::None);
    let mut following = use_signal(|| false);
    let mut comment_text = use_signal(String::new);
    let mut my_score = use_signal(|| 0u8);
    let mut error = use_signal(String::new);
    let mut success = use_signal(String::new);

    let current = session.current();
    let logged_in = current.is_some();

    let recipe_api = api.clone();
    let _recipe_loader = use_resource(move || {
        let api = recipe_api.clone();
        async move {
            match api.recipe(id).await {
                Ok(full) => recipe.set(Some(full)),
                Err(err) => {
                    tracing::error!("fetching recipe {id}: {err}");
                    error.set(format!("Could not load recipe: {}", err.message()));
                }
            }
        }
    });

    let comments_api = api.clone();
    let mut comments_loader = use_resource(move || {
        let api = comments_api.clone();
        async move {
            match api.comments(id).await {
                Ok(list) => comments.set(list),
                Err(err) => tracing::error!("fetching comments for recipe {id}: {err}"),
            }
        }
    });

    let rating_api = api.clone();
    let mut rating_loader = use_resource(move || {
        let api = rating_api.clone();
        async move {
            match api.average_rating(id).await {
                Ok(avg) => average.set(Some(avg)),
                Err(err) => tracing::error!("fetching average rating for recipe {id}: {err}"),
            }
        }
    });

    // The follow state depends on the author, so this reruns once the
    // recipe arrives and again after a follow/unfollow restart.
    let follow_api = api.clone();
    let follow_session = session.clone();
    let mut follow_loader = use_resource(move || {
        let api = follow_api.clone();
        let viewer = follow_session.current();
        let author = recipe().and_then(|r| r.user);
        async move {
            let (Some(author), Some(_)) = (author, viewer) else {
                return;
            };
            match api.follow_status(author.id).await {
                Ok(status) => following.set(status),
                Err(err) => tracing::error!("fetching follow status: {err}"),
            }
        }
    });

    let author = recipe().and_then(|r| r.user);
    let author_id = author.as_ref().map(|u| u.id);
    let author_role = author.as_ref().and_then(|u| u.role);
    let author_name = author
        .as_ref()
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let can_manage = authz::can_manage_recipe(current.as_ref(), author_id);
    let can_follow = authz::can_follow_author(current.as_ref(), author_id, author_role);
    let is_author = current.as_ref().map(|s| s.user_id) == author_id;

    let toggle_api = api.clone();
    let toggle_follow = move |_| {
        let api = toggle_api.clone();
        let Some(author_id) = author_id else { return };
        let currently = following();
        spawn(async move {
            let result = if currently {
                api.unfollow(author_id).await
            } else {
                api.follow(author_id).await
            };
            match result {
                Ok(()) => follow_loader.restart(),
                Err(err) => {
                    tracing::error!("toggling follow: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    };

    let rate_api = api.clone();
    let submit_rating = move |score: u8| {
        let api = rate_api.clone();
        spawn(async move {
            my_score.set(score);
            match api.rate_recipe(id, score).await {
                Ok(()) => {
                    success.set("Thanks for rating!".to_string());
                    rating_loader.restart();
                }
                Err(err) => {
                    tracing::error!("rating recipe {id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    };

    let comment_api = api.clone();
    let submit_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let api = comment_api.clone();
        let content = comment_text().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            match api.add_comment(id, &content).await {
                Ok(_) => {
                    comment_text.set(String::new());
                    comments_loader.restart();
                }
                Err(err) => {
                    tracing::error!("posting comment on recipe {id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    };

    let delete_comment_api = api.clone();
    let remove_comment = use_callback(move |comment_id: i64| {
        if !confirm("Delete this comment?") {
            return;
        }
        let api = delete_comment_api.clone();
        spawn(async move {
            match api.delete_comment(id, comment_id).await {
                Ok(()) => comments_loader.restart(),
                Err(err) => {
                    tracing::error!("deleting comment {comment_id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    });

    let delete_api = api.clone();
    let remove_recipe = move |_| {
        if !confirm("Delete this recipe? This cannot be undone.") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_recipe(id).await {
                Ok(()) => {
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("deleting recipe {id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    };

    let Some(full) = recipe() else {
        return rsx! {
            div {
                class: "page recipe-detail",
                ErrorBanner { message: error() }
                if error().is_empty() {
                    div { class: "loading", "Loading recipe..." }
                }
            }
        };
    };

    let image = full
        .image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    rsx! {
        div {
            class: "page recipe-detail",
            ErrorBanner { message: error() }
            SuccessBanner { message: success() }

            div {
                class: "detail-hero",
                img { class: "detail-image", src: image, alt: full.title.clone() }
                div {
                    class: "detail-heading",
                    span { class: "chip", "{full.category.label()}" }
                    h1 { "{full.title}" }
                    div {
                        class: "detail-author",
                        span { "By {author_name}" }
                        if can_follow {
                            button {
                                class: if following() { "follow-btn following" } else { "follow-btn" },
                                onclick: toggle_follow,
                                if following() { "Following" } else { "Follow" }
                            }
                        }
                    }
                    // Unrated recipes get no rating row at all; the backend
                    // reports 0.0 for them, which display_rating maps to None.
                    if let Some(text) = display_rating(average()) {
                        div {
                            class: "detail-rating",
                            Stars { value: average().unwrap_or(0.0) }
                            span { class: "rating-value", "{text}" }
                        }
                    }
                    if can_manage {
                        div {
                            class: "detail-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| { nav.push(Route::EditRecipe { id }); },
                                "Edit"
                            }
                            button {
                                class: "danger",
                                onclick: remove_recipe,
                                "Delete"
                            }
                        }
                    }
                }
            }

            p { class: "detail-description", "{full.description}" }

            section {
                class: "detail-section",
                h2 { "Ingredients" }
                ul {
                    class: "ingredient-list",
                    for (index, line) in full.ingredient_lines().iter().enumerate() {
                        li { key: "{index}", "{line}" }
                    }
                }
            }

            section {
                class: "detail-section",
                h2 { "Instructions" }
                p { class: "instructions", "{full.instructions}" }
            }

            if let Some(video) = full.video_url.clone().filter(|url| !url.is_empty()) {
                section {
                    class: "detail-section",
                    h2 { "Video" }
                    video { class: "detail-video", controls: true, src: video }
                }
            }

            if logged_in && !is_author {
                section {
                    class: "detail-section",
                    h2 { "Rate this recipe" }
                    RatingInput {
                        value: my_score(),
                        disabled: false,
                        on_rate: submit_rating,
                    }
                }
            }

            section {
                class: "detail-section comments",
                h2 { "Comments ({comments().len()})" }

                if logged_in {
                    form {
                        class: "comment-form",
                        onsubmit: submit_comment,
                        textarea {
                            placeholder: "Share your thoughts about this recipe...",
                            value: comment_text(),
                            oninput: move |evt| comment_text.set(evt.value()),
                        }
                        button { class: "primary", r#type: "submit", "Post Comment" }
                    }
                } else {
                    p {
                        class: "comment-login-hint",
                        Link { to: Route::Login {}, "Log in" }
                        " to join the conversation."
                    }
                }

                if comments().is_empty() {
                    p { class: "empty-state", "No comments yet. Be the first to comment!" }
                }
                for comment in comments() {
                    div {
                        key: "{comment.id}",
                        class: "comment",
                        div {
                            class: "comment-meta",
                            span {
                                class: "comment-author",
                                {comment.user.as_ref().and_then(|u| u.username.clone()).unwrap_or_else(|| "Anonymous".to_string())}
                            }
                            if let Some(ts) = comment.created_at.as_ref() {
                                span { class: "comment-date", "{ts}" }
                            }
                            if authz::can_delete_comment(current.as_ref(), comment.user.as_ref().map(|u| u.id)) {
                                button {
                                    class: "comment-delete",
                                    onclick: move |_| remove_comment.call(comment.id),
                                    "Delete"
                                }
                            }
                        }
                        p { class: "comment-body", "{comment.content}" }
                    }
                }
            }
        }
    }
}
