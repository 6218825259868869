/// Process-wide game state, passed by reference into tick/draw paths.
///
/// Created once per game session and never duplicated. The frame counter
/// is the only clock in the simulation: all timers are compared against it
/// rather than wall time, keeping the sim deterministic.

pub struct GameContext {
    /// Frames elapsed since the session started.
    pub tick: u64,
    /// Clicks resolve to card actions only after the tutorial is dismissed.
    pub tutorial_done: bool,
}

impl GameContext {
    pub fn new() -> Self {
        GameContext { tick: 0, tutorial_done: false }
    }

    pub fn advance_frame(&mut self) {
        self.tick += 1;
    }
}

/// An optional recorded start tick. Unset means "not running".
///
/// Starting is record-if-absent: re-requesting while already running keeps
/// the original start, it never resets. Elapsed time is only defined while
/// the timer holds a value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StageTimer {
    started_at: Option<u64>,
}

impl StageTimer {
    pub fn unset() -> Self {
        StageTimer { started_at: None }
    }

    /// Record `now` as the start unless a start is already recorded.
    pub fn start_if_unset(&mut self, now: u64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Ticks since the recorded start, or None while unset.
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.started_at.map(|start| now.saturating_sub(start))
    }

    pub fn clear(&mut self) {
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_once() {
        let mut t = StageTimer::unset();
        assert!(!t.running());
        assert_eq!(t.elapsed(10), None);

        t.start_if_unset(10);
        assert!(t.running());
        assert_eq!(t.elapsed(10), Some(0));
        assert_eq!(t.elapsed(55), Some(45));

        // record-if-absent: a second request keeps the original start
        t.start_if_unset(40);
        assert_eq!(t.elapsed(55), Some(45));
    }

    #[test]
    fn timer_clears_to_unset() {
        let mut t = StageTimer::unset();
        t.start_if_unset(3);
        t.clear();
        assert!(!t.running());
        assert_eq!(t.elapsed(100), None);

        // restartable after a clear
        t.start_if_unset(100);
        assert_eq!(t.elapsed(101), Some(1));
    }

    #[test]
    fn context_frame_counter() {
        let mut ctx = GameContext::new();
        assert_eq!(ctx.tick, 0);
        ctx.advance_frame();
        ctx.advance_frame();
        assert_eq!(ctx.tick, 2);
        assert!(!ctx.tutorial_done);
    }
}
