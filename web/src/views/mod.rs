mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod recipe_form;
pub use recipe_form::{CreateRecipe, EditRecipe};

mod reels;
pub use reels::ReelsFeed;

mod profile;
pub use profile::Profile;

mod admin_users;
pub use admin_users::AdminDashboard;

mod admin_user_recipes;
pub use admin_user_recipes::AdminUserRecipes;
