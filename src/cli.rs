use clap::{Parser, Subcommand};

use crate::export::{DEFAULT_AI_URL, DEFAULT_EXPORT_URL};
use crate::models::Sex;
use crate::planner::{ActivityLevel, Formula};

/// NutriSolver, an inverse meal-planning CLI for nutrition practitioners.
#[derive(Parser, Debug)]
#[command(name = "nutri_solver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food composition CSV.
    #[arg(short, long, default_value = "ciqual.csv")]
    pub catalog: String,

    /// Path to the practitioner settings file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: String,

    /// Document-generation webhook endpoint.
    #[arg(long, default_value = DEFAULT_EXPORT_URL)]
    pub export_url: String,

    /// Meal-analysis webhook endpoint.
    #[arg(long, default_value = DEFAULT_AI_URL)]
    pub ai_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a client plan interactively.
    Plan,

    /// Compute BMR and TDEE from profile values.
    Energy {
        #[arg(long, value_enum)]
        sex: Sex,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimetres.
        #[arg(long)]
        height: f64,

        /// Body fat percentage (lean-mass formulas only).
        #[arg(long, default_value_t = 15.0)]
        body_fat: f64,

        #[arg(long, value_enum)]
        formula: Formula,

        #[arg(long, value_enum, default_value = "moderate")]
        activity: ActivityLevel,
    },

    /// Show or edit practitioner settings.
    Settings {
        /// Edit values interactively and save.
        #[arg(long)]
        edit: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
