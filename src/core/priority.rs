use crate::core::weights::{PriorityThresholds, PriorityWeights};
use crate::models::{BudgetRange, PriorityLevel, Ticket, TicketPriorityScore, Urgency};

/// Scores tickets by urgency, complexity and budget
///
/// The score is the sum of three independent contributions:
///
/// ```text
/// priority = urgency      (critical 40, high 30, medium 20, else 10)
///          + complexity   (>=120 min 25, >=60 min 20, >=30 min 15, else 10)
///          + budget       ($500+ 35, $200-$500 25, $100-$200 15, $50-$100 10, else 5)
/// ```
///
/// With the default weights every ticket lands in 25..=100. Unknown or
/// missing values fall into the lowest bucket of their factor.
#[derive(Debug, Clone, Default)]
pub struct TicketPrioritizer {
    weights: PriorityWeights,
}

impl TicketPrioritizer {
    pub fn new(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    pub fn prioritize<'a>(&self, ticket: &'a Ticket) -> TicketPriorityScore<'a> {
        let priority_score = self.urgency_points(ticket.urgency)
            + self.complexity_points(ticket.estimated_duration_minutes)
            + self.budget_points(ticket.budget_range);

        TicketPriorityScore {
            ticket,
            priority_score,
            priority_level: priority_level(priority_score, &self.weights.levels),
        }
    }

    #[inline]
    pub fn urgency_points(&self, urgency: Urgency) -> u32 {
        let weights = &self.weights.urgency;
        match urgency {
            Urgency::Critical => weights.critical,
            Urgency::High => weights.high,
            Urgency::Medium => weights.medium,
            Urgency::Low | Urgency::Unknown => weights.other,
        }
    }

    #[inline]
    pub fn complexity_points(&self, estimated_minutes: u32) -> u32 {
        let weights = &self.weights.complexity;
        if estimated_minutes >= weights.long_minutes {
            weights.long
        } else if estimated_minutes >= weights.extended_minutes {
            weights.extended
        } else if estimated_minutes >= weights.moderate_minutes {
            weights.moderate
        } else {
            weights.short
        }
    }

    #[inline]
    pub fn budget_points(&self, budget: BudgetRange) -> u32 {
        let weights = &self.weights.budget;
        match budget {
            BudgetRange::Over500 => weights.over_500,
            BudgetRange::From200To500 => weights.from_200_to_500,
            BudgetRange::From100To200 => weights.from_100_to_200,
            BudgetRange::From50To100 => weights.from_50_to_100,
            BudgetRange::Under50 | BudgetRange::Unspecified => weights.other,
        }
    }
}

/// Map a priority score onto its level
pub fn priority_level(score: u32, thresholds: &PriorityThresholds) -> PriorityLevel {
    if score >= thresholds.critical {
        PriorityLevel::Critical
    } else if score >= thresholds.high {
        PriorityLevel::High
    } else if score >= thresholds.medium {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}
