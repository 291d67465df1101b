//! Gameplay modifiers.
//!
//! A modifier carries selection-screen metadata through [`GameplayMod`] and
//! hooks into the play session through the seams it needs
//! ([`InputFilter`](crate::input::InputFilter),
//! [`FrameObserver`](crate::play::FrameObserver)); the ruleset wires the two
//! together at install time.

pub mod force_alternate;

pub use force_alternate::ForceAlternate;

use serde::{Deserialize, Serialize};

/// Selection-screen category of a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModKind {
    DifficultyReduction,
    DifficultyIncrease,
    /// Changes how the beatmap is played without easing or hardening it.
    Conversion,
    Automation,
    Fun,
}

/// Metadata shared by every gameplay modifier.
pub trait GameplayMod {
    fn name(&self) -> &'static str;

    fn acronym(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn kind(&self) -> ModKind;

    fn score_multiplier(&self) -> f64 {
        1.0
    }

    /// Acronyms of modifiers this one cannot be combined with.
    fn incompatible_acronyms(&self) -> &'static [&'static str] {
        &[]
    }
}

/// True when no modifier in the set declares another member incompatible.
pub fn compatible(mods: &[&dyn GameplayMod]) -> bool {
    for (i, a) in mods.iter().enumerate() {
        for (j, b) in mods.iter().enumerate() {
            if i != j && a.incompatible_acronyms().contains(&b.acronym()) {
                return false;
            }
        }
    }
    true
}
