//! Player experience and level-ups.

/// Player experience track.
///
/// Surplus XP carries over on level-up and each threshold grows by the
/// configured factor (floored), so a single large award can grant several
/// levels at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    pub level: u32,
    pub xp: u32,
    pub next_level_at: u32,
}

impl Experience {
    pub fn new(first_threshold: u32) -> Self {
        Self {
            level: 1,
            xp: 0,
            next_level_at: first_threshold.max(1),
        }
    }

    /// Adds `amount` XP and returns how many levels were gained.
    pub fn gain(&mut self, amount: u32, growth: f32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.xp >= self.next_level_at {
            self.xp -= self.next_level_at;
            self.level += 1;
            gained += 1;
            let grown = (self.next_level_at as f64 * growth as f64).floor() as u32;
            self.next_level_at = grown.max(self.next_level_at + 1);
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surplus_carries_over() {
        let mut experience = Experience::new(100);
        assert_eq!(experience.gain(115, 1.5), 1);
        assert_eq!(experience.level, 2);
        assert_eq!(experience.xp, 15);
        assert_eq!(experience.next_level_at, 150);
    }

    #[test]
    fn large_award_grants_several_levels() {
        let mut experience = Experience::new(100);
        assert_eq!(experience.gain(260, 1.5), 2);
        assert_eq!(experience.level, 3);
        assert_eq!(experience.xp, 10);
        assert_eq!(experience.next_level_at, 225);
    }

    #[test]
    fn below_threshold_is_a_no_op() {
        let mut experience = Experience::new(100);
        assert_eq!(experience.gain(99, 1.5), 0);
        assert_eq!(experience.level, 1);
    }
}
