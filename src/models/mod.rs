// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Developer, DeveloperMatch, MatchQuality, PriorityLevel, SkillMatch, Ticket,
    TicketPriorityScore, TicketWithMatches, Urgency,
};
pub use requests::{BatchRequest, RankRequest};
pub use responses::{BatchResponse, ErrorResponse, HealthResponse, RankResponse};
