use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUtensils;
use dioxus_free_icons::Icon;

/// Top navigation shell: brand on the left, caller-supplied links on the
/// right. The launcher composes the typed router links into `children`.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaUtensils, width: 22, height: 22 }
                span { class: "navbar-title", "Recipe Platform" }
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Up to two uppercase initials for the avatar badge, `"U"` when the name
/// is empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let picked: String = letters.chars().take(2).collect();
    if picked.is_empty() {
        "U".to_string()
    } else {
        picked.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_letter_of_up_to_two_words() {
        assert_eq!(initials("maria"), "M");
        assert_eq!(initials("Maria Lopez"), "ML");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }
}
