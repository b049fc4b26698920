use super::params::{
    DEFAULT_MOVE_TIME_MS, EASY_SKIP_PROBABILITY, HARD_SKIP_PROBABILITY, NORMAL_SKIP_PROBABILITY,
};
use rand::Rng;
use strum_macros::{Display, EnumIter, EnumString};

/// Search limits and parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: Option<usize>,
    pub max_time_ms: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_time_ms: Some(DEFAULT_MOVE_TIME_MS),
        }
    }
}

impl SearchLimits {
    pub fn depth(depth: usize) -> Self {
        Self {
            max_depth: Some(depth),
            max_time_ms: None,
        }
    }

    pub fn movetime(max_time_ms: u64) -> Self {
        Self {
            max_depth: None,
            max_time_ms: Some(max_time_ms),
        }
    }

    /// Without any limit the deepening would never end, so fall back to the
    /// default move time.
    pub fn bounded(self) -> Self {
        match (self.max_depth, self.max_time_ms) {
            (None, None) => Self::default(),
            _ => self,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter, EnumString, Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn skip_probability(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_SKIP_PROBABILITY,
            Difficulty::Normal => NORMAL_SKIP_PROBABILITY,
            Difficulty::Hard => HARD_SKIP_PROBABILITY,
        }
    }

    /// Picks an index into a best-first ranking of `count` moves: starting at
    /// the best, keep moving to the next one (wrapping around) with the skip
    /// probability.
    pub fn pick<R: Rng>(self, count: usize, rng: &mut R) -> usize {
        let p = self.skip_probability();
        let mut index = 0;

        if count == 0 || p <= 0.0 {
            return index;
        }

        while rng.random_bool(p) {
            index = (index + 1) % count;
        }

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hard_always_picks_the_best() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(Difficulty::Hard.pick(13, &mut rng), 0);
        }
    }

    #[test]
    fn easy_often_settles_for_worse() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<usize> = (0..1000).map(|_| Difficulty::Easy.pick(13, &mut rng)).collect();

        let best = picks.iter().filter(|&&i| i == 0).count();
        assert!((400..600).contains(&best), "best picked {} times", best);
        assert!(picks.iter().all(|&i| i < 13));
    }

    #[test]
    fn normal_is_mostly_best() {
        let mut rng = StdRng::seed_from_u64(11);
        let best = (0..1000)
            .filter(|_| Difficulty::Normal.pick(13, &mut rng) == 0)
            .count();

        assert!((720..880).contains(&best), "best picked {} times", best);
    }

    #[test]
    fn single_choice_wraps_to_itself() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(Difficulty::Easy.pick(1, &mut rng), 0);
        }
        assert_eq!(Difficulty::Easy.pick(0, &mut rng), 0);
    }

    #[test]
    fn difficulty_names() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn unbounded_limits_fall_back_to_movetime() {
        let limits = SearchLimits {
            max_depth: None,
            max_time_ms: None,
        };
        assert_eq!(limits.bounded(), SearchLimits::default());
        assert_eq!(SearchLimits::depth(3).bounded(), SearchLimits::depth(3));
    }
}
