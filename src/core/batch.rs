use serde::{Deserialize, Serialize};

use crate::core::{
    ranker::MatchRanker,
    weights::EngineConfig,
};
use crate::models::{Developer, PriorityLevel, Ticket, TicketWithMatches};

/// Aggregate view of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    #[serde(rename = "ticketCount")]
    pub ticket_count: usize,
    #[serde(rename = "developerCount")]
    pub developer_count: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    /// Tickets whose list was returned unfiltered because nobody cleared the threshold.
    #[serde(rename = "fallbackTickets")]
    pub fallback_tickets: Vec<String>,
    /// Tickets with no candidates at all.
    #[serde(rename = "unmatchedTickets")]
    pub unmatched_tickets: Vec<String>,
    #[serde(rename = "levelCounts")]
    pub level_counts: LevelCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Prioritizes a set of tickets and ranks developers for each
///
/// Per ticket, matches at or above the FAIR threshold are kept. When none
/// qualify the ticket falls back to its full match list, still sorted by
/// score. This fallback is specific to the batch path; [`MatchRanker::rank`]
/// returns an empty list in the same situation.
///
/// Tickets come back ordered by priority score, highest first, with ties in
/// input order.
#[derive(Debug, Clone, Default)]
pub struct BatchMatchingOrchestrator {
    ranker: MatchRanker,
}

impl BatchMatchingOrchestrator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            ranker: MatchRanker::new(config),
        }
    }

    pub fn with_ranker(ranker: MatchRanker) -> Self {
        Self { ranker }
    }

    pub fn ranker(&self) -> &MatchRanker {
        &self.ranker
    }

    pub fn process_batch(&self, tickets: &[Ticket], developers: &[Developer]) -> Vec<TicketWithMatches> {
        let mut results: Vec<TicketWithMatches> = tickets
            .iter()
            .map(|ticket| self.process_ticket(ticket, developers))
            .collect();

        results.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        tracing::debug!(
            "Processed batch of {} tickets against {} developers",
            tickets.len(),
            developers.len()
        );

        results
    }

    /// Ranking of one ticket with the batch fallback policy
    pub fn process_ticket(&self, ticket: &Ticket, developers: &[Developer]) -> TicketWithMatches {
        let priority = self.ranker.prioritizer().prioritize(ticket);
        // already sorted by score
        let all_matches = self.ranker.score_all(ticket, developers);

        let threshold = self.ranker.fair_threshold();
        let qualifying: Vec<_> = all_matches
            .iter()
            .filter(|m| m.match_score >= threshold)
            .cloned()
            .collect();

        let fallback_applied = qualifying.is_empty() && !all_matches.is_empty();
        let matches = if fallback_applied {
            tracing::debug!(
                "Ticket {}: no developer reached {}, returning all {} candidates",
                ticket.id,
                threshold,
                all_matches.len()
            );
            all_matches
        } else {
            qualifying
        };

        TicketWithMatches {
            ticket: ticket.clone(),
            priority_score: priority.priority_score,
            priority_level: priority.priority_level,
            matches,
            fallback_applied,
        }
    }

    /// Summarize a batch result
    pub fn summarize(results: &[TicketWithMatches], developer_count: usize) -> BatchSummary {
        let mut summary = BatchSummary {
            ticket_count: results.len(),
            developer_count,
            ..Default::default()
        };

        for result in results {
            summary.total_matches += result.matches.len();

            if result.fallback_applied {
                summary.fallback_tickets.push(result.ticket.id.clone());
            }
            if result.matches.is_empty() {
                summary.unmatched_tickets.push(result.ticket.id.clone());
            }

            let counts = &mut summary.level_counts;
            match result.priority_level {
                PriorityLevel::Critical => counts.critical += 1,
                PriorityLevel::High => counts.high += 1,
                PriorityLevel::Medium => counts.medium += 1,
                PriorityLevel::Low => counts.low += 1,
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRange, Urgency};

    fn create_ticket(id: &str, urgency: Urgency, areas: &[&str]) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {}", id),
            description: String::new(),
            technical_areas: areas.iter().map(|s| s.to_string()).collect(),
            urgency,
            estimated_duration_minutes: 45,
            budget_range: BudgetRange::From50To100,
            status: Some("open".to_string()),
        }
    }

    fn create_developer(id: &str, skills: &[&str], availability: bool, rating: Option<f64>) -> Developer {
        Developer {
            id: id.to_string(),
            name: format!("Dev {}", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability,
            online: availability,
            rating,
            category: None,
        }
    }

    #[test]
    fn test_batch_sorted_by_priority() {
        let orchestrator = BatchMatchingOrchestrator::default();
        let tickets = vec![
            create_ticket("low", Urgency::Low, &["go"]),
            create_ticket("critical", Urgency::Critical, &["go"]),
            create_ticket("medium", Urgency::Medium, &["go"]),
        ];
        let developers = vec![create_developer("d", &["go"], true, Some(4.0))];

        let results = orchestrator.process_batch(&tickets, &developers);

        let ids: Vec<&str> = results.iter().map(|r| r.ticket.id.as_str()).collect();
        assert_eq!(ids, vec!["critical", "medium", "low"]);
    }

    #[test]
    fn test_fallback_only_when_nobody_qualifies() {
        let orchestrator = BatchMatchingOrchestrator::default();
        let tickets = vec![
            create_ticket("a", Urgency::High, &["cobol"]),
            create_ticket("b", Urgency::High, &["rust"]),
        ];
        let developers = vec![
            create_developer("weak", &[], false, Some(1.0)),         // a: 4, b: 4
            create_developer("rustacean", &["rust"], false, Some(5.0)), // a: 20, b: 70
            create_developer("idle", &["java"], false, Some(2.0)),    // a: 8, b: 8
        ];

        let results = orchestrator.process_batch(&tickets, &developers);

        let a = results.iter().find(|r| r.ticket.id == "a").unwrap();
        assert!(a.fallback_applied);
        let ids: Vec<&str> = a.matches.iter().map(|m| m.developer.id.as_str()).collect();
        assert_eq!(ids, vec!["rustacean", "idle", "weak"]);

        let b = results.iter().find(|r| r.ticket.id == "b").unwrap();
        assert!(!b.fallback_applied);
        let ids: Vec<&str> = b.matches.iter().map(|m| m.developer.id.as_str()).collect();
        assert_eq!(ids, vec!["rustacean"]);
    }

    #[test]
    fn test_empty_inputs() {
        let orchestrator = BatchMatchingOrchestrator::default();

        assert!(orchestrator.process_batch(&[], &[]).is_empty());

        let tickets = vec![create_ticket("t", Urgency::High, &["go"])];
        let results = orchestrator.process_batch(&tickets, &[]);
        assert_eq!(results.len(), 1);
        assert!(results[0].matches.is_empty());
        assert!(!results[0].fallback_applied);
    }

    #[test]
    fn test_summary_counts() {
        let orchestrator = BatchMatchingOrchestrator::default();
        let tickets = vec![
            create_ticket("a", Urgency::Critical, &["go"]),
            create_ticket("b", Urgency::Low, &["go"]),
        ];
        let developers = vec![
            create_developer("gopher", &["go"], true, Some(5.0)),
            create_developer("idle", &[], false, None),
        ];

        let results = orchestrator.process_batch(&tickets, &developers);
        let summary = BatchMatchingOrchestrator::summarize(&results, developers.len());

        assert_eq!(summary.ticket_count, 2);
        assert_eq!(summary.developer_count, 2);
        assert_eq!(summary.total_matches, 2);
        assert!(summary.fallback_tickets.is_empty());
        assert!(summary.unmatched_tickets.is_empty());
        // 40 + 15 + 10 = 65 and 10 + 15 + 10 = 35
        assert_eq!(summary.level_counts.high, 1);
        assert_eq!(summary.level_counts.low, 1);
    }
}
