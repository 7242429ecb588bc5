//! Ship assembly
//!
//! Consumes the loaded part lines, shuffles them, and classifies each line
//! into its category. Singular categories keep one line each (a later match
//! overwrites an earlier one); weapon matches fill a fixed number of slots
//! in encounter order and overflow is dropped.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::category::{Category, SINGULAR_CATEGORIES};

/// Fixed capacity of the weapon rack.
pub const WEAPON_SLOTS: usize = 4;

/// The assembled ship: one part per singular category plus up to
/// [`WEAPON_SLOTS`] weapons. Built once from a consumed part list,
/// read-only afterward.
///
/// Comparison is structural over (singular slots, weapon slots), so two
/// assemblies built from the same ordered input compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShipAssembly {
    parts: BTreeMap<Category, String>,
    weapons: [String; WEAPON_SLOTS],
}

impl ShipAssembly {
    /// Shuffle `parts` with the supplied generator, then classify in
    /// shuffled order. The generator is injected so callers can pin the
    /// permutation; pass a freshly seeded rng for real runs.
    pub fn assemble(mut parts: Vec<String>, rng: &mut impl Rng) -> Self {
        parts.shuffle(rng);
        Self::from_ordered(parts)
    }

    /// Classify `parts` in the given order, without shuffling.
    ///
    /// This is `assemble` under the identity permutation: deterministic for
    /// a fixed input, which is what tests want.
    pub fn from_ordered(parts: Vec<String>) -> Self {
        let mut assembly = Self::default();
        let mut weapon_parts = Vec::new();

        for line in parts {
            // Weapon takes priority over any singular keyword the line
            // might also contain.
            if Category::Weapon.matches(&line) {
                weapon_parts.push(line);
                continue;
            }

            if let Some(category) = SINGULAR_CATEGORIES.iter().find(|c| c.matches(&line)) {
                assembly.parts.insert(*category, line);
            }
            // No match: the line is dropped.
        }

        for (slot, part) in assembly.weapons.iter_mut().zip(weapon_parts) {
            *slot = part;
        }

        assembly
    }

    /// Part assigned to a singular category, if any. Always `None` for
    /// `Category::Weapon`; use [`weapons`](Self::weapons) for those.
    pub fn part(&self, category: Category) -> Option<&str> {
        self.parts.get(&category).map(|s| s.as_str())
    }

    /// Occupied weapon slots, in assignment order.
    pub fn weapons(&self) -> impl Iterator<Item = &str> {
        self.weapons.iter().filter(|w| !w.is_empty()).map(|w| w.as_str())
    }

    /// Raw weapon rack, empty slots included.
    pub fn weapon_slots(&self) -> &[String; WEAPON_SLOTS] {
        &self.weapons
    }
}
