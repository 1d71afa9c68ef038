use crate::ports::outbound::RandomSource;
use std::ops::Range;

/// Star-count band used to guess how many dependencies a repository has
/// when no manifest could be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularityTier {
    /// more than 50,000 stars
    Massive,
    /// more than 10,000 stars
    Popular,
    /// more than 1,000 stars
    Established,
    /// more than 100 stars
    Growing,
    Small,
}

impl PopularityTier {
    pub fn from_stars(stars: u64) -> Self {
        match stars {
            s if s > 50_000 => PopularityTier::Massive,
            s if s > 10_000 => PopularityTier::Popular,
            s if s > 1_000 => PopularityTier::Established,
            s if s > 100 => PopularityTier::Growing,
            _ => PopularityTier::Small,
        }
    }

    /// Half-open range the estimate is drawn from
    pub fn dependency_range(&self) -> Range<u64> {
        match self {
            PopularityTier::Massive => 200..300,
            PopularityTier::Popular => 100..200,
            PopularityTier::Established => 50..100,
            PopularityTier::Growing => 15..50,
            PopularityTier::Small => 5..15,
        }
    }

    /// Draws an estimated dependency count for a repository with `stars` stars
    pub fn estimate_dependencies(stars: u64, random: &impl RandomSource) -> usize {
        let range = Self::from_stars(stars).dependency_range();
        random.gen_range(range.start, range.end) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::random::ThreadRngSource;

    struct Fixed(u64);

    impl RandomSource for Fixed {
        fn gen_range(&self, low: u64, high: u64) -> u64 {
            self.0.clamp(low, high.saturating_sub(1).max(low))
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PopularityTier::from_stars(60_000), PopularityTier::Massive);
        assert_eq!(PopularityTier::from_stars(50_000), PopularityTier::Popular);
        assert_eq!(PopularityTier::from_stars(10_001), PopularityTier::Popular);
        assert_eq!(
            PopularityTier::from_stars(10_000),
            PopularityTier::Established
        );
        assert_eq!(PopularityTier::from_stars(1_000), PopularityTier::Growing);
        assert_eq!(PopularityTier::from_stars(101), PopularityTier::Growing);
        assert_eq!(PopularityTier::from_stars(100), PopularityTier::Small);
        assert_eq!(PopularityTier::from_stars(0), PopularityTier::Small);
    }

    #[test]
    fn test_estimate_massive_band() {
        let random = ThreadRngSource::new();
        for _ in 0..200 {
            let estimate = PopularityTier::estimate_dependencies(60_000, &random);
            assert!((200..300).contains(&estimate), "estimate: {}", estimate);
        }
    }

    #[test]
    fn test_estimate_small_band() {
        let random = ThreadRngSource::new();
        for _ in 0..200 {
            let estimate = PopularityTier::estimate_dependencies(50, &random);
            assert!((5..15).contains(&estimate), "estimate: {}", estimate);
        }
    }

    #[test]
    fn test_estimate_uses_band_edges() {
        assert_eq!(PopularityTier::estimate_dependencies(2_000, &Fixed(0)), 50);
        assert_eq!(
            PopularityTier::estimate_dependencies(2_000, &Fixed(u64::MAX)),
            99
        );
    }
}
