pub mod classifier;
pub mod constants;
pub mod energy;
pub mod equivalence;
pub mod solver;

pub use classifier::detect_group;
pub use constants::{GROUP_PROFILES, MAX_EQUIVALENCE_SUGGESTIONS, group_profile};
pub use energy::{ActivityLevel, Formula, compute_bmr, compute_tdee, lean_body_mass};
pub use equivalence::{equivalence_sentence, generate_equivalences};
pub use solver::solve_for_protein;
