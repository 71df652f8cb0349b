//! MatchupMatrix - flat square lookup table of elemental multipliers
//!
//! Storage is row-major: `attacker_index * size + defender_index`. The
//! element set can grow across the project's lifetime, so every access
//! first checks that the backing length still equals `size²` and migrates
//! otherwise: new cells start at the default 1.0 and the old top-left
//! submatrix is copied forward. Authored data survives enum growth without
//! re-entry.

use crate::types::ElementType;
use serde::{Deserialize, Serialize};

/// Multiplier for any pair that was never explicitly authored
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Square (attacker element, defender element) → multiplier table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupMatrix {
    /// Row-major cells; length is a perfect square but may lag behind the
    /// current element count when loaded from older data
    data: Vec<f64>,
}

impl Default for MatchupMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchupMatrix {
    /// An all-default matrix sized to the current element set
    pub fn new() -> Self {
        let size = ElementType::all().len();
        MatchupMatrix {
            data: vec![DEFAULT_MULTIPLIER; size * size],
        }
    }

    /// Current side length implied by the element enum
    pub fn size(&self) -> usize {
        ElementType::all().len()
    }

    /// Side length of the stored data (integer square root of its length)
    fn stored_size(&self) -> usize {
        let mut side = 0usize;
        while (side + 1) * (side + 1) <= self.data.len() {
            side += 1;
        }
        side
    }

    /// Grow (or shrink) the backing store to match the current element set,
    /// preserving the overlapping top-left submatrix
    pub fn resize_preserving(&mut self) {
        let size = self.size();
        if self.data.len() == size * size {
            return;
        }

        let old_size = self.stored_size();
        let old_data = std::mem::replace(&mut self.data, vec![DEFAULT_MULTIPLIER; size * size]);

        let copy_size = old_size.min(size);
        for row in 0..copy_size {
            for col in 0..copy_size {
                let old_index = row * old_size + col;
                if old_index < old_data.len() {
                    self.data[row * size + col] = old_data[old_index];
                }
            }
        }

        tracing::debug!(
            old_size,
            new_size = size,
            "matchup matrix migrated to new element count"
        );
    }

    /// Multiplier applied to damage of `attacker` element hitting a
    /// `defender` element unit
    ///
    /// Unknown or stale indices fall back to [`DEFAULT_MULTIPLIER`]; lookups
    /// never fail.
    pub fn get(&mut self, attacker: ElementType, defender: ElementType) -> f64 {
        self.resize_preserving();
        let size = self.size();
        let (row, col) = (attacker.index(), defender.index());
        if row >= size || col >= size {
            return DEFAULT_MULTIPLIER;
        }
        self.data
            .get(row * size + col)
            .copied()
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Author a multiplier for a specific pair
    pub fn set(&mut self, attacker: ElementType, defender: ElementType, multiplier: f64) {
        self.resize_preserving();
        let size = self.size();
        let (row, col) = (attacker.index(), defender.index());
        if row < size && col < size {
            self.data[row * size + col] = multiplier;
        }
    }

    /// Reset every cell to the default multiplier
    pub fn clear(&mut self) {
        self.resize_preserving();
        self.data.fill(DEFAULT_MULTIPLIER);
    }

    /// Load the stock matchup table: the authored overrides layered over an
    /// all-1.0 base. Pairs outside the override set, self-pairs included,
    /// stay at the default.
    pub fn load_defaults(&mut self) {
        self.clear();
        for &(attacker, defender, multiplier) in DEFAULT_MATCHUPS {
            self.set(attacker, defender, multiplier);
        }
    }

    /// Construct a matrix pre-filled with the stock table
    pub fn with_defaults() -> Self {
        let mut matrix = Self::new();
        matrix.load_defaults();
        matrix
    }
}

/// Stock override table. The elemental wheel is Water > Fire > Wind >
/// Earth > Lightning > Water, with Dark and Light strong against each
/// other and everything slightly favored against Dark/Light/Normal.
const DEFAULT_MATCHUPS: &[(ElementType, ElementType, f64)] = &[
    (ElementType::Water, ElementType::Fire, 1.5),
    (ElementType::Water, ElementType::Dark, 1.15),
    (ElementType::Water, ElementType::Light, 1.15),
    (ElementType::Water, ElementType::Normal, 1.15),
    (ElementType::Fire, ElementType::Water, 0.5),
    (ElementType::Fire, ElementType::Wind, 1.5),
    (ElementType::Fire, ElementType::Dark, 1.15),
    (ElementType::Fire, ElementType::Light, 1.15),
    (ElementType::Fire, ElementType::Normal, 1.15),
    (ElementType::Wind, ElementType::Fire, 0.5),
    (ElementType::Wind, ElementType::Earth, 1.5),
    (ElementType::Wind, ElementType::Dark, 1.15),
    (ElementType::Wind, ElementType::Light, 1.15),
    (ElementType::Wind, ElementType::Normal, 1.15),
    (ElementType::Earth, ElementType::Wind, 0.5),
    (ElementType::Earth, ElementType::Lightning, 1.5),
    (ElementType::Earth, ElementType::Dark, 1.15),
    (ElementType::Earth, ElementType::Light, 1.15),
    (ElementType::Earth, ElementType::Normal, 1.15),
    (ElementType::Lightning, ElementType::Water, 1.5),
    (ElementType::Lightning, ElementType::Earth, 0.5),
    (ElementType::Lightning, ElementType::Dark, 1.15),
    (ElementType::Lightning, ElementType::Light, 1.15),
    (ElementType::Lightning, ElementType::Normal, 1.15),
    (ElementType::Dark, ElementType::Lightning, 0.5),
    (ElementType::Dark, ElementType::Dark, 1.15),
    (ElementType::Dark, ElementType::Light, 1.5),
    (ElementType::Dark, ElementType::Normal, 1.15),
    (ElementType::Light, ElementType::Dark, 1.5),
    (ElementType::Light, ElementType::Light, 1.15),
    (ElementType::Light, ElementType::Normal, 1.15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_pair_returns_default() {
        let mut matrix = MatchupMatrix::new();
        let mult = matrix.get(ElementType::Fire, ElementType::Fire);
        assert!((mult - DEFAULT_MULTIPLIER).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_then_get() {
        let mut matrix = MatchupMatrix::new();
        matrix.set(ElementType::Water, ElementType::Fire, 1.5);
        assert!((matrix.get(ElementType::Water, ElementType::Fire) - 1.5).abs() < f64::EPSILON);
        // Reverse pair stays at default
        assert!(
            (matrix.get(ElementType::Fire, ElementType::Water) - 1.0).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_resize_preserves_authored_submatrix() {
        // Simulate a matrix serialized when the enum had only 4 elements:
        // None, Water, Fire, Wind. Water(1) -> Fire(2) was authored to 1.5.
        let old_size = 4;
        let mut old_data = vec![DEFAULT_MULTIPLIER; old_size * old_size];
        old_data[1 * old_size + 2] = 1.5;
        let mut matrix = MatchupMatrix { data: old_data };

        // First access migrates to the current element count
        let mult = matrix.get(ElementType::Water, ElementType::Fire);
        assert!((mult - 1.5).abs() < f64::EPSILON);
        assert_eq!(matrix.data.len(), matrix.size() * matrix.size());

        // Cells outside the old bounds start at the default
        let mult = matrix.get(ElementType::Normal, ElementType::Normal);
        assert!((mult - DEFAULT_MULTIPLIER).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_with_empty_data() {
        let mut matrix = MatchupMatrix { data: Vec::new() };
        let mult = matrix.get(ElementType::Dark, ElementType::Light);
        assert!((mult - DEFAULT_MULTIPLIER).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_wheel() {
        let mut matrix = MatchupMatrix::with_defaults();
        assert!((matrix.get(ElementType::Water, ElementType::Fire) - 1.5).abs() < f64::EPSILON);
        assert!((matrix.get(ElementType::Fire, ElementType::Water) - 0.5).abs() < f64::EPSILON);
        assert!((matrix.get(ElementType::Light, ElementType::Dark) - 1.5).abs() < f64::EPSILON);
        // Self-pair not in the override set stays neutral
        assert!((matrix.get(ElementType::Water, ElementType::Water) - 1.0).abs() < f64::EPSILON);
        // Dark vs Dark IS in the override set
        assert!((matrix.get(ElementType::Dark, ElementType::Dark) - 1.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut matrix = MatchupMatrix::with_defaults();
        matrix.clear();
        for &attacker in ElementType::all() {
            for &defender in ElementType::all() {
                assert!((matrix.get(attacker, defender) - 1.0).abs() < f64::EPSILON);
            }
        }
    }
}
