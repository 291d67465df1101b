// Play-session wiring: live object state, frame hooks, input routing.

pub mod playfield;
pub mod ruleset;

pub use playfield::{DEFAULT_LEAD_IN_MS, FrameInfo, ObjectEntry, Playfield};
pub use ruleset::{FrameObserver, Ruleset};
