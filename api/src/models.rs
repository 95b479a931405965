//! Wire DTOs for the recipe platform REST backend.
//!
//! Field names are camelCase on the wire. Everything the backend may omit
//! is optional with a serde default so a lean payload still deserializes.

use serde::{Deserialize, Serialize};
use store::Role;

/// Recipe category codes as the backend stores them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "VEGETARIAN")]
    Vegetarian,
    #[serde(rename = "VEGAN")]
    Vegan,
    #[serde(rename = "NON_VEGETARIAN")]
    NonVegetarian,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Vegetarian,
        Category::Vegan,
        Category::NonVegetarian,
    ];

    /// Uppercase-with-underscore wire token.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Vegetarian => "VEGETARIAN",
            Category::Vegan => "VEGAN",
            Category::NonVegetarian => "NON_VEGETARIAN",
        }
    }

    /// Human label derived from the code.
    pub fn label(&self) -> String {
        format_category_label(self.code())
    }
}

/// Capitalize each underscore-separated word and join with spaces:
/// `NON_VEGETARIAN` → `"Non Vegetarian"`. Labels everywhere go through
/// this one transform so they cannot drift between views.
pub fn format_category_label(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rating text shown next to the stars, or nothing at all.
///
/// The rating UI is omitted entirely (not rendered as zero) unless the
/// average is a finite number strictly greater than zero.
pub fn display_rating(average: Option<f64>) -> Option<String> {
    match average {
        Some(avg) if avg.is_finite() && avg > 0.0 => Some(format!("{avg:.1}")),
        _ => None,
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
    pub user_id: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Author as embedded in recipes and comments. The role rides along so the
/// client can decide whether a follow control makes sense.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Flattened listing projection used by every collection endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Full recipe as returned by `GET /api/recipes/{id}`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Recipe {
    /// Newline-delimited ingredients as a cleaned list.
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Create/update payload for a recipe.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: Option<Category>,
    pub image_url: String,
    pub video_url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub recipe: Option<RecipeRef>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Shallow recipe reference embedded in profile comments/ratings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub id: i64,
    pub score: u8,
    #[serde(default)]
    pub recipe: Option<RecipeRef>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RatingRequest {
    pub score: u8,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageRating {
    #[serde(default)]
    pub average_rating: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    #[serde(default)]
    pub is_following: bool,
}

/// Account row in the admin user list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_match_the_display_transform() {
        assert_eq!(Category::NonVegetarian.label(), "Non Vegetarian");
        assert_eq!(Category::Vegan.label(), "Vegan");
        assert_eq!(Category::Vegetarian.label(), "Vegetarian");
        assert_eq!(format_category_label("NON_VEGETARIAN"), "Non Vegetarian");
    }

    #[test]
    fn rating_text_is_absent_for_zero_or_missing_averages() {
        assert_eq!(display_rating(None), None);
        assert_eq!(display_rating(Some(0.0)), None);
        assert_eq!(display_rating(Some(-1.0)), None);
        assert_eq!(display_rating(Some(f64::NAN)), None);
        assert_eq!(display_rating(Some(4.5)), Some("4.5".to_string()));
        assert_eq!(display_rating(Some(4.0)), Some("4.0".to_string()));
    }

    #[test]
    fn login_response_deserializes_all_four_session_fields() {
        let json = r#"{"token":"abc","username":"maria","role":"COOK","userId":7}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.username, "maria");
        assert_eq!(resp.role, Role::Cook);
        assert_eq!(resp.user_id, 7);
    }

    #[test]
    fn recipe_summary_tolerates_missing_optionals() {
        let json = r#"{"id":1,"title":"Dal","category":"VEGAN"}"#;
        let summary: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.category, Category::Vegan);
        assert!(summary.image_url.is_none());
        assert!(summary.average_rating.is_none());
    }

    #[test]
    fn recipe_detail_carries_the_author_role() {
        let json = r#"{
            "id": 3,
            "title": "Paella",
            "description": "Rice dish",
            "ingredients": "rice\n  saffron \n\nstock",
            "instructions": "Cook it.",
            "category": "NON_VEGETARIAN",
            "user": {"id": 9, "username": "chef", "role": "COOK"}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        let author = recipe.user.as_ref().unwrap();
        assert_eq!(author.role, Some(Role::Cook));
        assert_eq!(recipe.ingredient_lines(), vec!["rice", "saffron", "stock"]);
    }

    #[test]
    fn follow_status_and_average_default_when_fields_are_missing() {
        let status: FollowStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.is_following);
        let avg: AverageRating = serde_json::from_str(r#"{"averageRating":3.25}"#).unwrap();
        assert!((avg.average_rating - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn recipe_form_serializes_camel_case() {
        let form = RecipeForm {
            title: "Dal".into(),
            category: Some(Category::Vegan),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["title"], "Dal");
        assert_eq!(value["category"], "VEGAN");
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("videoUrl").is_some());
    }
}
