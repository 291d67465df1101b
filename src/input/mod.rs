//! Drum input actions and the press-filter seam.
//!
//! This module provides:
//! - [`TaikoAction`]: the four discrete drum inputs in binding order
//! - [`Side`]: the left/right hand partition the alternation rule checks
//! - [`InputEvent`]: press/release events as delivered by the host
//! - [`InputFilter`]: the hook that can block a press before it reaches
//!   gameplay

use serde::{Deserialize, Serialize};

use crate::play::FrameInfo;

/// A discrete drum input. Binding order matters: the first two actions are
/// the left hand, the last two the right hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaikoAction {
    LeftRim,
    LeftCentre,
    RightCentre,
    RightRim,
}

impl TaikoAction {
    /// All actions in binding order.
    pub fn all() -> &'static [TaikoAction] {
        &[
            TaikoAction::LeftRim,
            TaikoAction::LeftCentre,
            TaikoAction::RightCentre,
            TaikoAction::RightRim,
        ]
    }

    /// Position in binding order.
    pub fn ordinal(self) -> usize {
        match self {
            TaikoAction::LeftRim => 0,
            TaikoAction::LeftCentre => 1,
            TaikoAction::RightCentre => 2,
            TaikoAction::RightRim => 3,
        }
    }

    /// The hand this action belongs to, derived from binding order: the
    /// first two actions are left-hand, the rest right-hand.
    pub fn side(self) -> Side {
        if self.ordinal() < 2 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Which hand an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A raw input event from the host's binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(TaikoAction),
    Released(TaikoAction),
}

/// Intercepts presses before they reach gameplay.
///
/// Returning `false` from [`on_press`](Self::on_press) blocks the press from
/// propagating to judgement and scoring. Releases are observational only and
/// always pass through.
pub trait InputFilter {
    fn on_press(&mut self, action: TaikoAction, frame: FrameInfo<'_>) -> bool;

    fn on_release(&mut self, _action: TaikoAction, _frame: FrameInfo<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_partition_follows_binding_order() {
        assert_eq!(TaikoAction::LeftRim.side(), Side::Left);
        assert_eq!(TaikoAction::LeftCentre.side(), Side::Left);
        assert_eq!(TaikoAction::RightCentre.side(), Side::Right);
        assert_eq!(TaikoAction::RightRim.side(), Side::Right);
    }

    #[test]
    fn ordinals_match_binding_order() {
        for (i, action) in TaikoAction::all().iter().enumerate() {
            assert_eq!(action.ordinal(), i);
        }
    }
}
