//! file: clock.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:33:18 Monday
//! brief: the twelve-hour ring a team walks around

pub const CLOCK_SIZE: i64 = 12;
pub const LAP_BONUS: i64 = 1_020_000;

/// Position on the clock, always in `0..12`. Zero is shown as 12.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClockPosition(u8);

impl ClockPosition {
    pub fn new(value: i64) -> Self {
        Self(value.rem_euclid(CLOCK_SIZE) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn displayed(self) -> u8 {
        if self.0 == 0 { CLOCK_SIZE as u8 } else { self.0 }
    }

    pub fn advance(self, step: i64) -> Self {
        Self::new(i64::from(self.0) + step.rem_euclid(CLOCK_SIZE))
    }

    /// Landing on twelve o'clock is what earns the lap bonus.
    pub fn completes_lap(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_is_shown_for_zero() {
        assert_eq!(ClockPosition::default().displayed(), 12);
        assert_eq!(ClockPosition::new(5).displayed(), 5);
        assert_eq!(ClockPosition::new(11).displayed(), 11);
    }

    #[test]
    fn advance_wraps_around() {
        let eleven = ClockPosition::new(11);
        assert_eq!(eleven.advance(1), ClockPosition::new(0));
        assert!(eleven.advance(1).completes_lap());
        assert_eq!(eleven.advance(3).value(), 2);
        assert_eq!(ClockPosition::default().advance(12).value(), 0);
        assert_eq!(ClockPosition::default().advance(25).value(), 1);
    }

    #[test]
    fn negative_steps_stay_on_the_ring() {
        assert_eq!(ClockPosition::new(2).advance(-3).value(), 11);
        assert_eq!(ClockPosition::new(-1).value(), 11);
        assert_eq!(ClockPosition::new(5).advance(i64::MIN).value(), 9);
        assert_eq!(ClockPosition::new(11).advance(i64::MAX).value(), 6);
    }
}
