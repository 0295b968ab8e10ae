// Core algorithm exports
pub mod batch;
pub mod matcher;
pub mod priority;
pub mod ranker;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use batch::{BatchMatchingOrchestrator, BatchSummary, LevelCounts};
pub use matcher::{match_quality, DeveloperTicketMatcher};
pub use priority::{priority_level, TicketPrioritizer};
pub use ranker::MatchRanker;
pub use scoring::{score_availability, score_rating};
pub use skills::match_skills;
pub use weights::{
    AvailabilityScores, BudgetWeights, ComplexityWeights, EngineConfig, MatchThresholds,
    MatchWeights, PriorityThresholds, PriorityWeights, RatingScale, UrgencyWeights,
};
