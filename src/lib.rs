//! DevMatch - ticket prioritization and developer matching engine
//!
//! This library scores help-request tickets by urgency, complexity and budget,
//! ranks candidate developers against each ticket, and orchestrates both over
//! a batch. The engine is a pure function of its inputs; the `routes` module
//! wraps it in a small HTTP service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{BatchMatchingOrchestrator, DeveloperTicketMatcher, EngineConfig, MatchRanker, TicketPrioritizer};
pub use error::{ServiceError, WeightsError};
pub use models::{Developer, DeveloperMatch, PriorityLevel, Ticket, TicketPriorityScore, TicketWithMatches};
