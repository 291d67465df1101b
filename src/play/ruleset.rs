use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::GameplayConfig;
use crate::input::{InputEvent, InputFilter};
use crate::model::Beatmap;
use crate::mods::GameplayMod;
use crate::mods::force_alternate::ForceAlternate;
use crate::play::playfield::{FrameInfo, Playfield};

/// Observes the per-frame update driven by the host's render loop.
pub trait FrameObserver {
    fn on_tick(&mut self, frame: FrameInfo<'_>);
}

/// Wires a beatmap, its playfield state, and registered gameplay hooks
/// together for one play session.
///
/// Everything runs on one thread: hooks are shared as `Rc<RefCell<_>>` so a
/// single modifier can observe frames and filter input over the same state.
///
/// The host must call [`update`](Self::update) for a frame before dispatching
/// that frame's input events, so a boundary-crossing frame resets observers
/// before its own inputs are judged.
pub struct Ruleset {
    beatmap: Beatmap,
    playfield: Playfield,
    current_time: f64,
    filters: Vec<Rc<RefCell<dyn InputFilter>>>,
    observers: Vec<Rc<RefCell<dyn FrameObserver>>>,
    blocked_presses: u64,
}

impl Ruleset {
    pub fn new(beatmap: Beatmap) -> Self {
        let playfield = Playfield::new(&beatmap);
        Self {
            beatmap,
            playfield,
            current_time: 0.0,
            filters: Vec::new(),
            observers: Vec::new(),
            blocked_presses: 0,
        }
    }

    /// Builds a ruleset according to the player's gameplay configuration.
    pub fn from_config(beatmap: Beatmap, config: &GameplayConfig) -> Self {
        let playfield = Playfield::with_lead_in(&beatmap, config.object_lead_in_ms);
        let mut ruleset = Self {
            beatmap,
            playfield,
            current_time: 0.0,
            filters: Vec::new(),
            observers: Vec::new(),
            blocked_presses: 0,
        };
        if config.force_alternate {
            ruleset.install_force_alternate();
        }
        ruleset
    }

    pub fn beatmap(&self) -> &Beatmap {
        &self.beatmap
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Presses rejected by a filter so far this session.
    pub fn blocked_presses(&self) -> u64 {
        self.blocked_presses
    }

    pub fn register_filter(&mut self, filter: Rc<RefCell<dyn InputFilter>>) {
        self.filters.push(filter);
    }

    pub fn register_observer(&mut self, observer: Rc<RefCell<dyn FrameObserver>>) {
        self.observers.push(observer);
    }

    /// Installs the Force Alternate modifier: attaches it to the beatmap and
    /// registers it as both input filter and frame observer. Returns the
    /// shared handle for inspection.
    pub fn install_force_alternate(&mut self) -> Rc<RefCell<ForceAlternate>> {
        let mut modifier = ForceAlternate::new();
        modifier.attach(&self.beatmap);
        info!(
            name = modifier.name(),
            acronym = modifier.acronym(),
            "installed gameplay modifier"
        );
        let modifier = Rc::new(RefCell::new(modifier));
        self.filters.push(modifier.clone());
        self.observers.push(modifier.clone());
        modifier
    }

    /// Per-frame hook: advances the clock, refreshes object lifetimes, then
    /// ticks every registered observer.
    pub fn update(&mut self, now: f64) {
        self.current_time = now;
        self.playfield.update_lifetimes(now);
        let frame = FrameInfo {
            time: now,
            playfield: &self.playfield,
        };
        for observer in &self.observers {
            observer.borrow_mut().on_tick(frame);
        }
    }

    /// Routes a raw input event through the registered filters.
    ///
    /// Returns whether the event is allowed to reach gameplay. A press is
    /// blocked as soon as any filter rejects it; releases are forwarded to
    /// every filter and always pass.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let frame = FrameInfo {
            time: self.current_time,
            playfield: &self.playfield,
        };
        match event {
            InputEvent::Pressed(action) => {
                for filter in &self.filters {
                    if !filter.borrow_mut().on_press(action, frame) {
                        self.blocked_presses += 1;
                        debug!(?action, time = self.current_time, "press blocked");
                        return false;
                    }
                }
                true
            }
            InputEvent::Released(action) => {
                for filter in &self.filters {
                    filter.borrow_mut().on_release(action, frame);
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TaikoAction;
    use crate::test_utils::{beatmap, hit};

    #[test]
    fn events_pass_with_no_filters() {
        let mut ruleset = Ruleset::new(beatmap(vec![hit(1000.0)]));
        ruleset.update(1000.0);
        assert!(ruleset.handle_event(InputEvent::Pressed(TaikoAction::LeftCentre)));
        assert!(ruleset.handle_event(InputEvent::Released(TaikoAction::LeftCentre)));
        assert_eq!(ruleset.blocked_presses(), 0);
    }

    #[test]
    fn update_refreshes_lifetimes_before_observers_run() {
        struct SawAlive(bool);
        impl FrameObserver for SawAlive {
            fn on_tick(&mut self, frame: FrameInfo<'_>) {
                self.0 = frame.playfield.first_unresolved().is_some();
            }
        }

        let mut ruleset = Ruleset::new(beatmap(vec![hit(1000.0)]));
        let observer = Rc::new(RefCell::new(SawAlive(false)));
        ruleset.register_observer(observer.clone());

        ruleset.update(100.0);
        assert!(!observer.borrow().0);

        ruleset.update(900.0);
        assert!(observer.borrow().0);
    }

    #[test]
    fn rejecting_filter_blocks_presses_only() {
        struct RejectAll;
        impl InputFilter for RejectAll {
            fn on_press(&mut self, _action: TaikoAction, _frame: FrameInfo<'_>) -> bool {
                false
            }
        }

        let mut ruleset = Ruleset::new(beatmap(vec![hit(1000.0)]));
        ruleset.register_filter(Rc::new(RefCell::new(RejectAll)));
        ruleset.update(1000.0);

        assert!(!ruleset.handle_event(InputEvent::Pressed(TaikoAction::RightRim)));
        assert!(ruleset.handle_event(InputEvent::Released(TaikoAction::RightRim)));
        assert_eq!(ruleset.blocked_presses(), 1);
    }
}
