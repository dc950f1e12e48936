pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{Food, FoodGroup, Meal, PlanEntry, Targets};
