use crate::error::{NutriError, Result};
use crate::models::Food;

/// Quantity of `food`, in grams, that closes a protein deficit.
///
/// Fails with `AlreadyMet` when there is nothing left to close and
/// with `NoProteinContent` when the food cannot contribute protein.
/// The quantity is rounded to one decimal for display and entry
/// creation; callers building a solved entry must store the deficit
/// itself as the entry's protein, not the value this quantity would
/// recompute to.
pub fn solve_for_protein(remaining_protein_g: f64, food: &Food) -> Result<f64> {
    if remaining_protein_g <= 0.0 {
        return Err(NutriError::AlreadyMet);
    }
    if food.protein_per_100g <= 0.0 {
        return Err(NutriError::NoProteinContent(food.name.clone()));
    }

    let quantity_g = remaining_protein_g * 100.0 / food.protein_per_100g;
    Ok((quantity_g * 10.0).round() / 10.0)
}
