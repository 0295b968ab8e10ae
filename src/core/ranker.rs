use crate::core::{
    matcher::DeveloperTicketMatcher,
    priority::TicketPrioritizer,
    weights::EngineConfig,
};
use crate::models::{Developer, DeveloperMatch, Ticket, TicketWithMatches};

/// Ranks developers for a single ticket
///
/// # Pipeline Stages
/// 1. Ticket prioritization
/// 2. Per-developer scoring
/// 3. FAIR-threshold filter (skipped in expand-search mode)
/// 4. Stable sort by match score, highest first
///
/// Unlike the batch path, `rank` never falls back to the unfiltered list:
/// a ticket with no qualifying developer gets an empty match list.
#[derive(Debug, Clone)]
pub struct MatchRanker {
    prioritizer: TicketPrioritizer,
    matcher: DeveloperTicketMatcher,
    fair_threshold: u32,
}

impl MatchRanker {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            prioritizer: TicketPrioritizer::new(config.priority),
            matcher: DeveloperTicketMatcher::new(config),
            fair_threshold: config.thresholds.fair,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn prioritizer(&self) -> &TicketPrioritizer {
        &self.prioritizer
    }

    pub fn matcher(&self) -> &DeveloperTicketMatcher {
        &self.matcher
    }

    pub fn fair_threshold(&self) -> u32 {
        self.fair_threshold
    }

    pub fn rank(
        &self,
        ticket: &Ticket,
        developers: &[Developer],
        expand_search: bool,
    ) -> TicketWithMatches {
        let priority = self.prioritizer.prioritize(ticket);
        let mut matches = self.score_all(ticket, developers);

        if !expand_search {
            let before = matches.len();
            matches.retain(|m| m.match_score >= self.fair_threshold);
            tracing::debug!(
                "Ticket {}: {} of {} developers above threshold {}",
                ticket.id,
                matches.len(),
                before,
                self.fair_threshold
            );
        }

        TicketWithMatches {
            ticket: ticket.clone(),
            priority_score: priority.priority_score,
            priority_level: priority.priority_level,
            matches,
            fallback_applied: false,
        }
    }

    /// Rank and keep at most `limit` matches
    pub fn top_matches(
        &self,
        ticket: &Ticket,
        developers: &[Developer],
        expand_search: bool,
        limit: usize,
    ) -> TicketWithMatches {
        let mut result = self.rank(ticket, developers, expand_search);
        result.matches.truncate(limit);
        result
    }

    /// Best qualifying developer for a ticket, if any clears the threshold
    pub fn best_match(&self, ticket: &Ticket, developers: &[Developer]) -> Option<DeveloperMatch> {
        self.rank(ticket, developers, false).matches.into_iter().next()
    }

    /// Score every developer against the ticket, sorted but unfiltered
    pub fn score_all(&self, ticket: &Ticket, developers: &[Developer]) -> Vec<DeveloperMatch> {
        let mut matches: Vec<DeveloperMatch> = developers
            .iter()
            .map(|developer| self.matcher.match_developer(developer, ticket))
            .collect();

        sort_matches(&mut matches);
        matches
    }
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort matches by score (descending); `sort_by` is stable so ties keep input order
pub fn sort_matches(matches: &mut [DeveloperMatch]) {
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}
