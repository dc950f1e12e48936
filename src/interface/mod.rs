pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_activity, prompt_body_fat, prompt_client_profile,
    prompt_entry_position, prompt_food, prompt_formula, prompt_meal, prompt_meal_description,
    prompt_menu, prompt_quantity, prompt_settings, prompt_targets, prompt_yes_no,
};
pub use render::{display_energy, display_entry_added, display_plan, display_progress};
