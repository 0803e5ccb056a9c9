//! Game countdown
//!
//! Driven by a once-per-second tick from whatever owns the session. The clock
//! only counts; ending the game is up to the caller.

use std::fmt;

/// Length of a game in seconds
pub const DEFAULT_GAME_SECONDS: u32 = 180;

/// Milestones announced while the clock runs down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerNotice {
    TwoMinutesLeft,
    OneMinuteLeft,
    TimeUp,
}

impl fmt::Display for TimerNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoMinutesLeft => write!(f, "Two minutes left!"),
            Self::OneMinuteLeft => write!(f, "One minute left!"),
            Self::TimeUp => write!(f, "Time's up!"),
        }
    }
}

/// Seconds remaining in the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_GAME_SECONDS)
    }
}

impl Countdown {
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
        }
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the game still to play, from 1.0 down to 0.0
    #[must_use]
    pub fn fraction_left(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.remaining) / f64::from(self.total)
        }
    }

    /// Advance the clock by one second
    ///
    /// `TimeUp` is reported exactly once, on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<TimerNotice> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.remaining {
            0 => Some(TimerNotice::TimeUp),
            120 => Some(TimerNotice::TwoMinutesLeft),
            60 => Some(TimerNotice::OneMinuteLeft),
            _ => None,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_minutes_and_seconds() {
        assert_eq!(Countdown::new(180).to_string(), "3:00");
        assert_eq!(Countdown::new(65).to_string(), "1:05");
        assert_eq!(Countdown::new(9).to_string(), "0:09");
    }

    #[test]
    fn announces_milestones() {
        let mut clock = Countdown::default();
        let notices: Vec<(u32, TimerNotice)> = (0..200)
            .filter_map(|_| clock.tick().map(|n| (clock.remaining(), n)))
            .collect();

        assert_eq!(
            notices,
            vec![
                (120, TimerNotice::TwoMinutesLeft),
                (60, TimerNotice::OneMinuteLeft),
                (0, TimerNotice::TimeUp),
            ]
        );
        assert!(clock.is_expired());
    }

    #[test]
    fn expired_clock_stays_silent() {
        let mut clock = Countdown::new(1);
        assert_eq!(clock.tick(), Some(TimerNotice::TimeUp));
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn fraction_left_runs_down() {
        let mut clock = Countdown::new(4);
        assert!((clock.fraction_left() - 1.0).abs() < f64::EPSILON);
        clock.tick();
        assert!((clock.fraction_left() - 0.75).abs() < f64::EPSILON);
        assert!(Countdown::new(0).fraction_left().abs() < f64::EPSILON);
    }
}
