use crate::model::hit_window::{HitResult, HitWindows};

/// The gameplay shape of a hit object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitKind {
    /// A single drum hit on either the centre or the rim.
    Hit { rim: bool },
    /// A sustained roll; mashed freely, not judged as one press.
    DrumRoll { duration_ms: f64 },
    /// A spinner-like object hit repeatedly until filled.
    Swell { duration_ms: f64 },
}

/// A single object on the drum timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct HitObject {
    /// Nominal time of the object in gameplay milliseconds.
    pub start_time: f64,
    pub kind: HitKind,
    strong: bool,
    pub hit_windows: HitWindows,
}

impl HitObject {
    pub fn hit(start_time: f64, rim: bool, hit_windows: HitWindows) -> Self {
        Self {
            start_time,
            kind: HitKind::Hit { rim },
            strong: false,
            hit_windows,
        }
    }

    /// Rolls are judged per tick rather than as a single press, so they carry
    /// no windows of their own.
    pub fn drum_roll(start_time: f64, duration_ms: f64) -> Self {
        Self {
            start_time,
            kind: HitKind::DrumRoll { duration_ms },
            strong: false,
            hit_windows: HitWindows::empty(),
        }
    }

    pub fn swell(start_time: f64, duration_ms: f64) -> Self {
        Self {
            start_time,
            kind: HitKind::Swell { duration_ms },
            strong: false,
            hit_windows: HitWindows::empty(),
        }
    }

    /// Marks the object as its strong (big) variant, requiring both hands at
    /// once. Swells have no strong variant; for them this is a no-op.
    pub fn strong(mut self) -> Self {
        if !matches!(self.kind, HitKind::Swell { .. }) {
            self.strong = true;
        }
        self
    }

    pub fn is_strong(&self) -> bool {
        self.strong
    }

    pub fn is_drum_roll(&self) -> bool {
        matches!(self.kind, HitKind::DrumRoll { .. })
    }

    /// End of the object on the timeline; equals `start_time` for plain hits.
    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitKind::Hit { .. } => self.start_time,
            HitKind::DrumRoll { duration_ms } | HitKind::Swell { duration_ms } => {
                self.start_time + duration_ms
            }
        }
    }

    /// The earliest instant a press could legitimately be judged against this
    /// object: its nominal time minus the most lenient window.
    pub fn earliest_judgement_time(&self) -> f64 {
        self.start_time - self.hit_windows.window_for(HitResult::Meh)
    }
}
