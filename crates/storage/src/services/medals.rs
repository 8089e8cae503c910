/// Medal band assigned to a ranked result. Ordered lowest to highest so
/// tiers compare with the percentage that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MedalTier {
    Bronze,
    Silver,
    SilverPlus,
    Gold,
    Legend,
    Opus,
    Elite,
}

impl MedalTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::SilverPlus => "Silver+",
            Self::Gold => "Gold",
            Self::Legend => "Legend",
            Self::Opus => "Opus",
            Self::Elite => "Elite",
        }
    }
}

/// Upper bound (exclusive) of each band below Elite. A value sitting
/// exactly on a bound belongs to the band above it: 70.0 is Silver,
/// 85.0 is Legend. Everything below 70, including [69, 70), is Bronze.
const TIER_BOUNDS: [(f64, MedalTier); 6] = [
    (70.0, MedalTier::Bronze),
    (75.0, MedalTier::Silver),
    (80.0, MedalTier::SilverPlus),
    (85.0, MedalTier::Gold),
    (90.0, MedalTier::Legend),
    (95.0, MedalTier::Opus),
];

/// Map a percentage to its medal tier. Total over all percentages;
/// anything at or above 95 (including data anomalies above 100) is Elite.
pub fn classify(percentage: f64) -> MedalTier {
    for (upper_bound, tier) in TIER_BOUNDS {
        if percentage < upper_bound {
            return tier;
        }
    }
    MedalTier::Elite
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, MedalTier::Bronze)]
    #[case(68.9, MedalTier::Bronze)]
    #[case(69.0, MedalTier::Bronze)]
    #[case(69.999, MedalTier::Bronze)]
    #[case(70.0, MedalTier::Silver)]
    #[case(74.9, MedalTier::Silver)]
    #[case(75.0, MedalTier::SilverPlus)]
    #[case(79.9, MedalTier::SilverPlus)]
    #[case(80.0, MedalTier::Gold)]
    #[case(84.9, MedalTier::Gold)]
    #[case(85.0, MedalTier::Legend)]
    #[case(89.9, MedalTier::Legend)]
    #[case(90.0, MedalTier::Opus)]
    #[case(94.9, MedalTier::Opus)]
    #[case(95.0, MedalTier::Elite)]
    #[case(100.0, MedalTier::Elite)]
    #[case(120.0, MedalTier::Elite)]
    fn boundary_table(#[case] percentage: f64, #[case] expected: MedalTier) {
        assert_eq!(classify(percentage), expected);
    }

    #[test]
    fn tiers_are_monotonically_non_decreasing() {
        let mut previous = classify(0.0);
        let mut p = 0.0;
        while p <= 110.0 {
            let tier = classify(p);
            assert!(tier >= previous, "tier dropped at {p}");
            previous = tier;
            p += 0.1;
        }
    }
}
