//! Test fixtures for beatmaps and hit objects.

use crate::model::{Beatmap, BreakPeriod, HitObject, HitResult, HitWindows};

pub fn windows() -> HitWindows {
    HitWindows::from_overall_difficulty(5.0)
}

/// A plain centre hit with OD 5 windows.
pub fn hit(start_time: f64) -> HitObject {
    HitObject::hit(start_time, false, windows())
}

/// A strong (big) centre hit with OD 5 windows.
pub fn strong_hit(start_time: f64) -> HitObject {
    HitObject::hit(start_time, false, windows()).strong()
}

/// A hit whose earliest judgeable instant is exactly `judgeable_from`.
/// Handy when a test wants suspension window edges at round numbers.
pub fn hit_at_judgeable_from(judgeable_from: f64) -> HitObject {
    let w = windows();
    HitObject::hit(judgeable_from + w.window_for(HitResult::Meh), false, w)
}

pub fn beatmap(hit_objects: Vec<HitObject>) -> Beatmap {
    Beatmap::new(hit_objects, vec![])
}

pub fn beatmap_with_breaks(hit_objects: Vec<HitObject>, breaks: Vec<BreakPeriod>) -> Beatmap {
    Beatmap::new(hit_objects, breaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgeable_from_fixture_lands_on_the_requested_instant() {
        let object = hit_at_judgeable_from(1000.0);
        assert_eq!(object.earliest_judgement_time(), 1000.0);
    }
}
