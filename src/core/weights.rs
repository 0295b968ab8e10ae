//! Weight tables and thresholds for the matching engine
//!
//! Every number the engine scores with is a named constant here. The
//! `Default` impls of the config structs reproduce these constants; tests and
//! the service can override any of them without touching the algorithms.

use crate::error::WeightsError;

// Urgency contribution to ticket priority
pub const URGENCY_CRITICAL: u32 = 40;
pub const URGENCY_HIGH: u32 = 30;
pub const URGENCY_MEDIUM: u32 = 20;
pub const URGENCY_OTHER: u32 = 10;

// Complexity contribution, keyed on estimated duration in minutes
pub const COMPLEXITY_LONG_MINUTES: u32 = 120;
pub const COMPLEXITY_EXTENDED_MINUTES: u32 = 60;
pub const COMPLEXITY_MODERATE_MINUTES: u32 = 30;
pub const COMPLEXITY_LONG: u32 = 25;
pub const COMPLEXITY_EXTENDED: u32 = 20;
pub const COMPLEXITY_MODERATE: u32 = 15;
pub const COMPLEXITY_SHORT: u32 = 10;

// Budget band contribution
pub const BUDGET_OVER_500: u32 = 35;
pub const BUDGET_200_TO_500: u32 = 25;
pub const BUDGET_100_TO_200: u32 = 15;
pub const BUDGET_50_TO_100: u32 = 10;
pub const BUDGET_OTHER: u32 = 5;

// Priority level cut-offs
pub const PRIORITY_CRITICAL_THRESHOLD: u32 = 85;
pub const PRIORITY_HIGH_THRESHOLD: u32 = 65;
pub const PRIORITY_MEDIUM_THRESHOLD: u32 = 45;

// Developer match composition
pub const SKILL_WEIGHT: f64 = 0.5;
pub const AVAILABILITY_WEIGHT: f64 = 0.3;
pub const RATING_WEIGHT: f64 = 0.2;

pub const AVAILABILITY_ONLINE: u32 = 100;
pub const AVAILABILITY_OFFLINE: u32 = 70;
pub const AVAILABILITY_UNAVAILABLE: u32 = 0;

pub const RATING_MULTIPLIER: f64 = 20.0;
pub const RATING_NEUTRAL: u32 = 50;

// Match quality cut-offs; FAIR is the ranker's filter threshold
pub const MATCH_EXCELLENT_THRESHOLD: u32 = 80;
pub const MATCH_GOOD_THRESHOLD: u32 = 60;
pub const MATCH_FAIR_THRESHOLD: u32 = 40;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyWeights {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub other: u32,
}

impl Default for UrgencyWeights {
    fn default() -> Self {
        Self {
            critical: URGENCY_CRITICAL,
            high: URGENCY_HIGH,
            medium: URGENCY_MEDIUM,
            other: URGENCY_OTHER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityWeights {
    pub long_minutes: u32,
    pub extended_minutes: u32,
    pub moderate_minutes: u32,
    pub long: u32,
    pub extended: u32,
    pub moderate: u32,
    pub short: u32,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            long_minutes: COMPLEXITY_LONG_MINUTES,
            extended_minutes: COMPLEXITY_EXTENDED_MINUTES,
            moderate_minutes: COMPLEXITY_MODERATE_MINUTES,
            long: COMPLEXITY_LONG,
            extended: COMPLEXITY_EXTENDED,
            moderate: COMPLEXITY_MODERATE,
            short: COMPLEXITY_SHORT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWeights {
    pub over_500: u32,
    pub from_200_to_500: u32,
    pub from_100_to_200: u32,
    pub from_50_to_100: u32,
    pub other: u32,
}

impl Default for BudgetWeights {
    fn default() -> Self {
        Self {
            over_500: BUDGET_OVER_500,
            from_200_to_500: BUDGET_200_TO_500,
            from_100_to_200: BUDGET_100_TO_200,
            from_50_to_100: BUDGET_50_TO_100,
            other: BUDGET_OTHER,
        }
    }
}

/// Score cut-offs for the priority levels (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityThresholds {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            critical: PRIORITY_CRITICAL_THRESHOLD,
            high: PRIORITY_HIGH_THRESHOLD,
            medium: PRIORITY_MEDIUM_THRESHOLD,
        }
    }
}

/// Everything the ticket prioritizer scores with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityWeights {
    pub urgency: UrgencyWeights,
    pub complexity: ComplexityWeights,
    pub budget: BudgetWeights,
    pub levels: PriorityThresholds,
}

/// Weights of the three sub-scores in a developer match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub availability: f64,
    pub rating: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.availability + self.rating
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: SKILL_WEIGHT,
            availability: AVAILABILITY_WEIGHT,
            rating: RATING_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityScores {
    pub online: u32,
    pub offline: u32,
    pub unavailable: u32,
}

impl Default for AvailabilityScores {
    fn default() -> Self {
        Self {
            online: AVAILABILITY_ONLINE,
            offline: AVAILABILITY_OFFLINE,
            unavailable: AVAILABILITY_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    /// Points per rating star.
    pub multiplier: f64,
    /// Score for a developer with no rating at all.
    pub neutral: u32,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            multiplier: RATING_MULTIPLIER,
            neutral: RATING_NEUTRAL,
        }
    }
}

/// Match score cut-offs (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            excellent: MATCH_EXCELLENT_THRESHOLD,
            good: MATCH_GOOD_THRESHOLD,
            fair: MATCH_FAIR_THRESHOLD,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub priority: PriorityWeights,
    pub matching: MatchWeights,
    pub availability: AvailabilityScores,
    pub rating: RatingScale,
    pub thresholds: MatchThresholds,
}

impl EngineConfig {
    /// Check that an overridden configuration is still coherent
    pub fn validate(&self) -> Result<(), WeightsError> {
        let weights = &self.matching;
        for (name, value) in [
            ("skills", weights.skills),
            ("availability", weights.availability),
            ("rating", weights.rating),
            ("rating multiplier", self.rating.multiplier),
        ] {
            if value < 0.0 {
                return Err(WeightsError::NegativeWeight(name));
            }
        }

        if (weights.sum() - 1.0).abs() > 1e-6 {
            return Err(WeightsError::WeightSum(weights.sum()));
        }

        let levels = &self.priority.levels;
        check_descending("priority level", &[levels.critical, levels.high, levels.medium])?;

        let quality = &self.thresholds;
        check_descending("match quality", &[quality.excellent, quality.good, quality.fair])?;

        for (name, value) in [
            ("excellent", quality.excellent),
            ("online availability", self.availability.online),
            ("offline availability", self.availability.offline),
            ("unavailable availability", self.availability.unavailable),
            ("neutral rating", self.rating.neutral),
        ] {
            if value > MAX_SCORE {
                return Err(WeightsError::ThresholdRange { name, value });
            }
        }

        Ok(())
    }
}

fn check_descending(kind: &'static str, values: &[u32]) -> Result<(), WeightsError> {
    if values.windows(2).all(|pair| pair[0] > pair[1]) {
        Ok(())
    } else {
        Err(WeightsError::ThresholdOrder {
            kind,
            values: values.to_vec(),
        })
    }
}
