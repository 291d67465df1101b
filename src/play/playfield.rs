use crate::model::{Beatmap, HitObject};

/// How far ahead of a note's nominal time it becomes visible on the
/// playfield, and therefore queryable as a live object.
pub const DEFAULT_LEAD_IN_MS: f64 = 600.0;

/// A hit object together with its live gameplay state.
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    pub object: HitObject,
    alive: bool,
    resolved: bool,
}

impl ObjectEntry {
    /// Whether the object is currently on the playfield.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether judgement has produced a result for this object.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Live object state for a play session, in beatmap order.
///
/// Judgement itself stays with the host: it marks objects resolved as results
/// come in. Lifetimes can either be driven explicitly or refreshed from the
/// clock via [`update_lifetimes`](Self::update_lifetimes).
#[derive(Debug, Clone)]
pub struct Playfield {
    entries: Vec<ObjectEntry>,
    lead_in_ms: f64,
}

impl Playfield {
    pub fn new(beatmap: &Beatmap) -> Self {
        Self::with_lead_in(beatmap, DEFAULT_LEAD_IN_MS)
    }

    pub fn with_lead_in(beatmap: &Beatmap, lead_in_ms: f64) -> Self {
        Self {
            entries: beatmap
                .hit_objects
                .iter()
                .cloned()
                .map(|object| ObjectEntry {
                    object,
                    alive: false,
                    resolved: false,
                })
                .collect(),
            lead_in_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ObjectEntry] {
        &self.entries
    }

    pub fn set_alive(&mut self, index: usize, alive: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.alive = alive;
        }
    }

    /// Records that judgement produced a result for the object at `index`.
    pub fn resolve(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.resolved = true;
        }
    }

    /// Refreshes which objects are live: an entry is alive once the clock
    /// reaches its lead-in and until it has been resolved.
    pub fn update_lifetimes(&mut self, now: f64) {
        for entry in &mut self.entries {
            entry.alive = !entry.resolved && now >= entry.object.start_time - self.lead_in_ms;
        }
    }

    /// The first live object whose result is still unresolved. This is what
    /// an incoming press would be judged against next.
    pub fn first_unresolved(&self) -> Option<&ObjectEntry> {
        self.entries.iter().find(|e| e.alive && !e.resolved)
    }
}

/// Per-call snapshot handed to input filters and frame observers: the
/// current gameplay clock plus a view of the live objects.
#[derive(Clone, Copy)]
pub struct FrameInfo<'a> {
    pub time: f64,
    pub playfield: &'a Playfield,
}
