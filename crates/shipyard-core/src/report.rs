//! Report rendering
//!
//! Formats an assembled ship for terminal output. A singular category with
//! no assigned part is an error here, not at assembly time.

use crate::assembly::ShipAssembly;
use crate::category::{Category, SINGULAR_CATEGORIES};
use crate::error::{Result, ShipyardError};

/// Render the loadout report.
///
/// Fails with [`ShipyardError::MissingCategory`] for the first singular
/// category (in `Engine..Armor` order) that has no part. The weapons line
/// lists only occupied slots, comma-joined inside brackets; an empty rack
/// renders as `[]`.
pub fn render(assembly: &ShipAssembly) -> Result<String> {
    let mut out = String::from("This ship is loaded with:\n");

    for category in SINGULAR_CATEGORIES {
        let part = assembly
            .part(*category)
            .ok_or(ShipyardError::MissingCategory {
                category: *category,
            })?;
        out.push_str(&format!("  {}: {}\n", category.label(), part));
    }

    let weapons: Vec<_> = assembly.weapons().collect();
    out.push_str(&format!(
        "  {}: [{}]\n",
        Category::Weapon.label(),
        weapons.join(", ")
    ));

    Ok(out)
}
