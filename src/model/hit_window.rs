use serde::{Deserialize, Serialize};

/// Result tiers a drum press can be judged with.
///
/// `Meh` is the most lenient scoreable tier; its window defines the earliest
/// moment a press can legitimately count against a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitResult {
    Great,
    Ok,
    Meh,
    Miss,
}

/// Three-point range for a timing window: the value at overall difficulty
/// 0, 5 and 10, interpolated linearly between.
type DifficultyRange = (f64, f64, f64);

const GREAT_RANGE: DifficultyRange = (50.0, 35.0, 20.0);
const OK_RANGE: DifficultyRange = (120.0, 80.0, 50.0);
const MEH_RANGE: DifficultyRange = (135.0, 95.0, 70.0);

/// Per-tier judgement windows in milliseconds, symmetric around a note's
/// nominal time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitWindows {
    pub great: f64,
    pub ok: f64,
    pub meh: f64,
}

impl HitWindows {
    /// Windows derived from the beatmap's overall difficulty (0 to 10).
    pub fn from_overall_difficulty(od: f64) -> Self {
        Self {
            great: difficulty_range(od, GREAT_RANGE),
            ok: difficulty_range(od, OK_RANGE),
            meh: difficulty_range(od, MEH_RANGE),
        }
    }

    /// All-zero windows for objects that are not judged as individual
    /// presses (rolls, swells).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.great == 0.0 && self.ok == 0.0 && self.meh == 0.0
    }

    /// The half-width of the window for the given result. `Miss` has no
    /// window of its own.
    pub fn window_for(&self, result: HitResult) -> f64 {
        match result {
            HitResult::Great => self.great,
            HitResult::Ok => self.ok,
            HitResult::Meh => self.meh,
            HitResult::Miss => 0.0,
        }
    }
}

/// Maps a 0-10 difficulty value onto `(min, mid, max)`, anchored at 0, 5
/// and 10 with linear interpolation between the anchors.
fn difficulty_range(difficulty: f64, (min, mid, max): DifficultyRange) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_at_anchor_difficulties() {
        let od0 = HitWindows::from_overall_difficulty(0.0);
        assert_eq!(od0.great, 50.0);
        assert_eq!(od0.ok, 120.0);
        assert_eq!(od0.meh, 135.0);

        let od5 = HitWindows::from_overall_difficulty(5.0);
        assert_eq!(od5.great, 35.0);
        assert_eq!(od5.ok, 80.0);
        assert_eq!(od5.meh, 95.0);

        let od10 = HitWindows::from_overall_difficulty(10.0);
        assert_eq!(od10.great, 20.0);
        assert_eq!(od10.ok, 50.0);
        assert_eq!(od10.meh, 70.0);
    }

    #[test]
    fn windows_interpolate_between_anchors() {
        let od = HitWindows::from_overall_difficulty(2.5);
        assert!((od.great - 42.5).abs() < 1e-9);
        assert!((od.ok - 100.0).abs() < 1e-9);
        assert!((od.meh - 115.0).abs() < 1e-9);

        let od = HitWindows::from_overall_difficulty(7.5);
        assert!((od.great - 27.5).abs() < 1e-9);
        assert!((od.ok - 65.0).abs() < 1e-9);
        assert!((od.meh - 82.5).abs() < 1e-9);
    }

    #[test]
    fn meh_is_the_most_lenient_tier() {
        for od in [0.0, 2.0, 5.0, 8.0, 10.0] {
            let w = HitWindows::from_overall_difficulty(od);
            assert!(w.great < w.ok);
            assert!(w.ok < w.meh);
        }
    }

    #[test]
    fn window_for_each_result() {
        let w = HitWindows::from_overall_difficulty(5.0);
        assert_eq!(w.window_for(HitResult::Great), 35.0);
        assert_eq!(w.window_for(HitResult::Ok), 80.0);
        assert_eq!(w.window_for(HitResult::Meh), 95.0);
        assert_eq!(w.window_for(HitResult::Miss), 0.0);
    }

    #[test]
    fn empty_windows() {
        let w = HitWindows::empty();
        assert!(w.is_empty());
        assert_eq!(w.window_for(HitResult::Meh), 0.0);
        assert!(!HitWindows::from_overall_difficulty(5.0).is_empty());
    }
}
