//! Force Alternate: left and right hand presses must strictly alternate.
//!
//! The gate sits between raw drum presses and gameplay. A press on the same
//! hand as the previous accepted press is blocked before it can reach
//! judgement. The rule is suspended wherever input cannot count toward
//! scoring (the lead-in before the first note and every beatmap break), and
//! tolerated around strong notes, which legitimately want both hands at once.

use tracing::debug;

use crate::input::{InputFilter, Side, TaikoAction};
use crate::model::Beatmap;
use crate::mods::{GameplayMod, ModKind};
use crate::play::playfield::FrameInfo;
use crate::play::ruleset::FrameObserver;
use crate::util::period::{Period, PeriodTracker};

pub struct ForceAlternate {
    /// Hand of the last accepted press. Absent at session start and whenever
    /// a suspension window is entered, so play always resumes with a free
    /// first press.
    last_accepted: Option<Side>,
    /// One-shot tolerance armed while a strong note is next to be judged.
    bypass: bool,
    suspension: PeriodTracker,
}

impl ForceAlternate {
    pub fn new() -> Self {
        Self {
            last_accepted: None,
            bypass: false,
            suspension: PeriodTracker::default(),
        }
    }

    /// Precomputes the suspension windows for a beatmap and resets gate
    /// state. Called once when the ruleset installs the modifier.
    pub fn attach(&mut self, beatmap: &Beatmap) {
        self.suspension = PeriodTracker::new(suspension_periods(beatmap));
        self.last_accepted = None;
        self.bypass = false;
        debug!(periods = self.suspension.len(), "alternation gate attached");
    }

    pub fn last_accepted(&self) -> Option<Side> {
        self.last_accepted
    }

    pub fn bypass_armed(&self) -> bool {
        self.bypass
    }

    pub fn is_suspended_at(&self, time: f64) -> bool {
        self.suspension.is_in_any(time)
    }

    fn check_action(&mut self, action: TaikoAction, frame: FrameInfo<'_>) -> bool {
        // Input cannot count toward scoring here; let everything through
        // without touching the alternation memory.
        if self.suspension.is_in_any(frame.time) {
            return true;
        }

        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(action.side());
            return true;
        };

        // A strong note next in line wants both hands at once. Arm the
        // tolerance and freeze side tracking; the flag is intentionally not
        // consumed on this path, so it stays armed for as long as the strong
        // note remains unresolved.
        if let Some(next) = frame.playfield.first_unresolved() {
            if next.object.is_strong() && !next.object.is_drum_roll() {
                self.bypass = true;
                return true;
            }
        }

        if self.bypass {
            self.bypass = false;
            self.last_accepted = Some(action.side());
            return true;
        }

        if action.side() != last {
            self.last_accepted = Some(action.side());
            return true;
        }

        debug!(?action, time = frame.time, "same-hand repeat blocked");
        false
    }
}

impl Default for ForceAlternate {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFilter for ForceAlternate {
    fn on_press(&mut self, action: TaikoAction, frame: FrameInfo<'_>) -> bool {
        self.check_action(action, frame)
    }

    // Releases never affect the gate.
}

impl FrameObserver for ForceAlternate {
    /// Clears the alternation memory while inside a suspension window, so
    /// the first press after play resumes is always accepted.
    fn on_tick(&mut self, frame: FrameInfo<'_>) {
        if !self.suspension.is_in_any(frame.time) {
            return;
        }

        self.last_accepted = None;
    }
}

impl GameplayMod for ForceAlternate {
    fn name(&self) -> &'static str {
        "Force Alternate"
    }

    fn acronym(&self) -> &'static str {
        "FA"
    }

    fn description(&self) -> &'static str {
        "Must alternate between left and right."
    }

    fn kind(&self) -> ModKind {
        ModKind::Conversion
    }

    fn incompatible_acronyms(&self) -> &'static [&'static str] {
        // Autoplay, cinema and relax already decide or ignore inputs.
        &["AT", "CN", "RX"]
    }
}

/// The windows where alternation is not enforced: all time before the first
/// note becomes judgeable, and each break up to the point the first note
/// after it becomes judgeable.
fn suspension_periods(beatmap: &Beatmap) -> Vec<Period> {
    let mut periods = Vec::new();
    let Some(first) = beatmap.hit_objects.first() else {
        return periods;
    };

    periods.push(Period::new(
        f64::NEG_INFINITY,
        first.earliest_judgement_time() - 1.0,
    ));

    for brk in &beatmap.breaks {
        // A trailing break with no note after it never resumes play, so
        // there is nothing to suspend into.
        if let Some(next) = beatmap.first_object_at_or_after(brk.end_time) {
            let end = next.earliest_judgement_time() - 1.0;
            // A break shorter than the next note's most lenient window is
            // already judgeable when it starts; no stretch to suspend.
            if end >= brk.start_time {
                periods.push(Period::new(brk.start_time, end));
            }
        }
    }

    periods
}
