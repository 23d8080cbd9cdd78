//! Emitter-tier classification.
//!
//! Buckets the per-hectare emission rate with the reference tool's
//! thresholds. Comparisons are strict `>`, so a rate sitting exactly on
//! a threshold falls into the lower tier:
//!
//! | Rate (tCO2e/ha/year) | Tier   |
//! |----------------------|--------|
//! | > 4.0                | High   |
//! | > 2.0 and <= 4.0     | Medium |
//! | <= 2.0               | Low    |

use serde::{Deserialize, Serialize};

/// Medium tier starts above this rate.
pub const MEDIUM_THRESHOLD_T_PER_HA: f64 = 2.0;
/// High tier starts above this rate.
pub const HIGH_THRESHOLD_T_PER_HA: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmitterTier {
    Low,
    Medium,
    High,
}

impl EmitterTier {
    pub fn label(&self) -> &'static str {
        match self {
            EmitterTier::Low => "Low",
            EmitterTier::Medium => "Medium",
            EmitterTier::High => "High",
        }
    }

    /// The reference tool's advisory line for the tier.
    pub fn advisory(&self) -> &'static str {
        match self {
            EmitterTier::Low => "Low emitter: Keep up the good practices!",
            EmitterTier::Medium => "Medium emitter: Optimize practices.",
            EmitterTier::High => "High emitter: Immediate action recommended.",
        }
    }
}

pub fn classify_tier(per_hectare: f64) -> EmitterTier {
    if per_hectare > HIGH_THRESHOLD_T_PER_HA {
        EmitterTier::High
    } else if per_hectare > MEDIUM_THRESHOLD_T_PER_HA {
        EmitterTier::Medium
    } else {
        EmitterTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly on a threshold falls into the lower tier
        assert_eq!(classify_tier(2.0), EmitterTier::Low);
        assert_eq!(classify_tier(4.0), EmitterTier::Medium);

        assert_eq!(classify_tier(0.0), EmitterTier::Low);
        assert_eq!(classify_tier(2.7), EmitterTier::Medium);
        assert_eq!(classify_tier(4.01), EmitterTier::High);
        assert_eq!(classify_tier(100.0), EmitterTier::High);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut last = EmitterTier::Low;
        for step in 0..100 {
            let tier = classify_tier(step as f64 * 0.1);
            assert!(tier >= last);
            last = tier;
        }
    }
}
