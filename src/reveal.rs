use std::collections::HashMap;
use std::hash::Hash;

/// Fraction of an element that has to be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One intersection notification for a tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    pub intersecting: bool,
    pub ratio: f64,
}

impl VisibilitySample {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The element became visible for the first time.
    Revealed,
    Unchanged,
}

/// Something that can report visibility crossings for registered elements.
pub trait VisibilityObserver<K> {
    type Target;

    fn observe(&mut self, key: &K, target: Self::Target);
    fn unobserve(&mut self, key: &K);
    fn disconnect(&mut self);
}

/// Reveal flags for one mounted view. Flags only ever go from hidden to revealed.
///
/// Without an observer every element is revealed as soon as it registers, so
/// content never stays hidden in environments that can't report visibility.
pub struct RevealTracker<K, O> {
    revealed: HashMap<K, bool>,
    observer: Option<O>,
    threshold: f64,
}

impl<K, O> RevealTracker<K, O>
where
    K: Clone + Eq + Hash,
    O: VisibilityObserver<K>,
{
    pub fn new(observer: Option<O>) -> Self {
        if observer.is_none() {
            log::debug!("visibility observer unavailable, revealing eagerly");
        }
        Self {
            revealed: HashMap::new(),
            observer,
            threshold: REVEAL_THRESHOLD,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.observer.is_some()
    }

    /// Starts tracking `key`. Registering a known key again is ignored.
    pub fn register(&mut self, key: K, target: O::Target) -> RevealOutcome {
        if self.revealed.contains_key(&key) {
            return RevealOutcome::Unchanged;
        }
        match self.observer.as_mut() {
            Some(observer) => {
                observer.observe(&key, target);
                self.revealed.insert(key, false);
                RevealOutcome::Unchanged
            }
            None => {
                self.revealed.insert(key, true);
                RevealOutcome::Revealed
            }
        }
    }

    pub fn record(&mut self, key: &K, sample: VisibilitySample) -> RevealOutcome {
        let Some(flag) = self.revealed.get_mut(key) else {
            return RevealOutcome::Unchanged;
        };
        if *flag || !sample.crosses(self.threshold) {
            return RevealOutcome::Unchanged;
        }
        *flag = true;
        if let Some(observer) = self.observer.as_mut() {
            observer.unobserve(key);
        }
        RevealOutcome::Revealed
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.revealed.values().filter(|r| !**r).count()
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeObserver {
        observed: HashSet<u32>,
        disconnected: bool,
    }

    impl VisibilityObserver<u32> for FakeObserver {
        type Target = ();

        fn observe(&mut self, key: &u32, _target: ()) {
            self.observed.insert(*key);
        }

        fn unobserve(&mut self, key: &u32) {
            self.observed.remove(key);
        }

        fn disconnect(&mut self) {
            self.observed.clear();
            self.disconnected = true;
        }
    }

    const VISIBLE: VisibilitySample = VisibilitySample {
        intersecting: true,
        ratio: 0.5,
    };
    const HIDDEN: VisibilitySample = VisibilitySample {
        intersecting: false,
        ratio: 0.0,
    };

    fn observed(tracker: &RevealTracker<u32, FakeObserver>) -> &HashSet<u32> {
        &tracker.observer.as_ref().expect("observer").observed
    }

    #[test]
    fn test_elements_start_hidden() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        assert_eq!(tracker.register(1, ()), RevealOutcome::Unchanged);
        assert_eq!(tracker.register(2, ()), RevealOutcome::Unchanged);

        assert!(!tracker.is_revealed(&1));
        assert!(!tracker.is_revealed(&2));
        assert_eq!(tracker.pending(), 2);
        assert!(observed(&tracker).contains(&1));
    }

    #[test]
    fn test_first_visibility_reveals_and_unobserves() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        tracker.register(1, ());
        tracker.register(2, ());

        assert_eq!(tracker.record(&1, VISIBLE), RevealOutcome::Revealed);

        assert!(tracker.is_revealed(&1));
        assert!(!tracker.is_revealed(&2));
        assert!(!observed(&tracker).contains(&1));
        assert!(observed(&tracker).contains(&2));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        tracker.register(7, ());
        tracker.record(&7, VISIBLE);

        assert_eq!(tracker.record(&7, HIDDEN), RevealOutcome::Unchanged);
        assert_eq!(tracker.record(&7, VISIBLE), RevealOutcome::Unchanged);
        assert_eq!(tracker.register(7, ()), RevealOutcome::Unchanged);
        assert!(tracker.is_revealed(&7));
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        tracker.register(1, ());

        let sliver = VisibilitySample {
            intersecting: true,
            ratio: 0.05,
        };
        assert_eq!(tracker.record(&1, sliver), RevealOutcome::Unchanged);
        assert_eq!(tracker.record(&1, HIDDEN), RevealOutcome::Unchanged);
        assert!(!tracker.is_revealed(&1));

        let edge = VisibilitySample {
            intersecting: true,
            ratio: REVEAL_THRESHOLD,
        };
        assert_eq!(tracker.record(&1, edge), RevealOutcome::Revealed);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        assert_eq!(tracker.record(&42, VISIBLE), RevealOutcome::Unchanged);
        assert!(!tracker.is_revealed(&42));
    }

    #[test]
    fn test_fallback_reveals_without_events() {
        let mut tracker: RevealTracker<u32, FakeObserver> = RevealTracker::new(None);
        assert!(!tracker.is_supported());

        assert_eq!(tracker.register(1, ()), RevealOutcome::Revealed);
        assert_eq!(tracker.register(2, ()), RevealOutcome::Revealed);

        assert!(tracker.is_revealed(&1));
        assert!(tracker.is_revealed(&2));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_disconnect_stops_observing() {
        let mut tracker = RevealTracker::new(Some(FakeObserver::default()));
        tracker.register(1, ());
        tracker.disconnect();

        let observer = tracker.observer.as_ref().expect("observer");
        assert!(observer.disconnected);
        assert!(observer.observed.is_empty());
    }

    #[test]
    fn test_fresh_tracker_rearms_reveals() {
        let mut first = RevealTracker::new(Some(FakeObserver::default()));
        first.register(1, ());
        first.record(&1, VISIBLE);
        drop(first);

        let mut second = RevealTracker::new(Some(FakeObserver::default()));
        second.register(1, ());
        assert!(!second.is_revealed(&1));
    }
}
