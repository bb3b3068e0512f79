use std::time::Duration;

/// How long the machine rests in `Waiting` before the next fetch
pub const WAIT_INTERVAL: Duration = Duration::from_millis(2000);

/// The two phases of the polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Idle between fetch attempts
    Waiting,
    /// Exactly one fetch attempt in flight
    Loading,
}

/// Background work requested from the driver after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm a single delayed wake after `WAIT_INTERVAL`
    Wait,
    /// Issue exactly one outbound fetch
    Fetch,
}

/// The polling state machine.
///
/// Owns the phase flag and the last successfully fetched image URL.
/// It performs no I/O itself: every transition hands the driver an
/// `Effect` naming the one task to start next, so a single timer or
/// request is in flight at any moment.
#[derive(Debug)]
pub struct Poller {
    phase: Phase,
    /// Last successfully fetched image URL. Sticky: set on success,
    /// never cleared by a later failed cycle.
    displayed: Option<String>,
}

impl Poller {
    /// Create the machine in its initial phase.
    ///
    /// The loop starts in `Loading`, so the first fetch goes out
    /// immediately rather than after an initial wait.
    pub fn new() -> (Self, Effect) {
        let poller = Poller {
            phase: Phase::Loading,
            displayed: None,
        };
        (poller, Effect::Fetch)
    }

    /// Current phase of the loop
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The displayed image URL, once any fetch has ever succeeded
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    /// The delayed wake fired: leave `Waiting` and start a new fetch.
    ///
    /// The timer is armed only on entry to `Waiting`, so a wake
    /// arriving in any other phase is ignored.
    pub fn wake(&mut self) -> Option<Effect> {
        match self.phase {
            Phase::Waiting => {
                self.phase = Phase::Loading;
                Some(Effect::Fetch)
            }
            Phase::Loading => None,
        }
    }

    /// The in-flight fetch settled: record the URL on success, then
    /// return to `Waiting` either way and rest for another interval.
    ///
    /// `fetched` is `Some(url)` when the cycle succeeded and `None`
    /// when it failed. Failure leaves the displayed URL untouched, so
    /// a stale picture stays up rather than blanking the view.
    pub fn settle(&mut self, fetched: Option<String>) -> Option<Effect> {
        match self.phase {
            Phase::Loading => {
                if let Some(url) = fetched {
                    self.displayed = Some(url);
                }
                self.phase = Phase::Waiting;
                Some(Effect::Wait)
            }
            Phase::Waiting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_with_a_fetch() {
        let (poller, effect) = Poller::new();

        assert_eq!(poller.phase(), Phase::Loading);
        assert_eq!(effect, Effect::Fetch);
        assert_eq!(poller.displayed(), None);
    }

    #[test]
    fn test_success_records_url_then_returns_to_waiting() {
        let (mut poller, _) = Poller::new();

        let effect = poller.settle(Some("http://x/1.png".to_string()));

        assert_eq!(poller.phase(), Phase::Waiting);
        assert_eq!(poller.displayed(), Some("http://x/1.png"));
        assert_eq!(effect, Some(Effect::Wait));
    }

    #[test]
    fn test_failure_returns_to_waiting_without_a_url() {
        let (mut poller, _) = Poller::new();

        let effect = poller.settle(None);

        assert_eq!(poller.phase(), Phase::Waiting);
        assert_eq!(poller.displayed(), None);
        assert_eq!(effect, Some(Effect::Wait));
    }

    #[test]
    fn test_wake_starts_the_next_fetch() {
        let (mut poller, _) = Poller::new();
        poller.settle(Some("http://x/1.png".to_string()));

        let effect = poller.wake();

        assert_eq!(poller.phase(), Phase::Loading);
        assert_eq!(effect, Some(Effect::Fetch));
    }

    #[test]
    fn test_failed_cycle_keeps_the_stale_url() {
        let (mut poller, _) = Poller::new();
        poller.settle(Some("http://x/1.png".to_string()));
        poller.wake();

        poller.settle(None);

        assert_eq!(poller.phase(), Phase::Waiting);
        assert_eq!(poller.displayed(), Some("http://x/1.png"));
    }

    #[test]
    fn test_consecutive_successes_display_the_latest() {
        let (mut poller, _) = Poller::new();

        poller.settle(Some("a.png".to_string()));
        poller.wake();
        poller.settle(Some("b.png".to_string()));

        assert_eq!(poller.displayed(), Some("b.png"));
    }

    #[test]
    fn test_displayed_url_tracks_the_nth_success() {
        let (mut poller, _) = Poller::new();

        for n in 1..=5 {
            if n > 1 {
                poller.wake();
            }
            poller.settle(Some(format!("http://x/{}.png", n)));
            assert_eq!(poller.phase(), Phase::Waiting);
        }

        assert_eq!(poller.displayed(), Some("http://x/5.png"));
    }

    #[test]
    fn test_wake_is_ignored_while_loading() {
        let (mut poller, _) = Poller::new();

        assert_eq!(poller.wake(), None);
        assert_eq!(poller.phase(), Phase::Loading);
    }

    #[test]
    fn test_settle_is_ignored_while_waiting() {
        let (mut poller, _) = Poller::new();
        poller.settle(None);

        assert_eq!(poller.settle(Some("late.png".to_string())), None);
        assert_eq!(poller.displayed(), None);
        assert_eq!(poller.phase(), Phase::Waiting);
    }
}
