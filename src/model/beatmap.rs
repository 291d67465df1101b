use crate::model::hit_object::HitObject;

/// A beatmap-authored interval where no hit objects are judged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakPeriod {
    /// Start timestamp of the break in gameplay milliseconds.
    pub start_time: f64,
    /// End timestamp of the break.
    pub end_time: f64,
}

impl BreakPeriod {
    pub fn new(start_time: f64, end_time: f64) -> Self {
        debug_assert!(
            start_time <= end_time,
            "break start {start_time} exceeds end {end_time}"
        );
        Self {
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// The slice of a beatmap this crate consumes: hit objects in timeline order
/// plus break periods. Parsing and difficulty computation stay with the host.
#[derive(Debug, Clone, Default)]
pub struct Beatmap {
    pub hit_objects: Vec<HitObject>,
    pub breaks: Vec<BreakPeriod>,
}

impl Beatmap {
    /// Builds a beatmap, ordering hit objects by start time.
    pub fn new(mut hit_objects: Vec<HitObject>, breaks: Vec<BreakPeriod>) -> Self {
        hit_objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        Self {
            hit_objects,
            breaks,
        }
    }

    /// First hit object starting at or after `time`, if any.
    pub fn first_object_at_or_after(&self, time: f64) -> Option<&HitObject> {
        self.hit_objects.iter().find(|h| h.start_time >= time)
    }
}
