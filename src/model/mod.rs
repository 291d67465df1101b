// Data model for the drum timeline: hit objects, judgement windows, breaks.

pub mod beatmap;
pub mod hit_object;
pub mod hit_window;

pub use beatmap::{Beatmap, BreakPeriod};
pub use hit_object::{HitKind, HitObject};
pub use hit_window::{HitResult, HitWindows};
