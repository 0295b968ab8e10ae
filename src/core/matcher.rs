use crate::core::{
    scoring::{score_availability, score_rating},
    skills::match_skills,
    weights::{EngineConfig, MatchThresholds, MAX_SCORE},
};
use crate::models::{Developer, DeveloperMatch, MatchQuality, SkillMatch, Ticket};

// Reason-line cut-offs; display only, never used for ranking
const STRONG_SKILL_PERCENT: u32 = 75;
const GOOD_SKILL_PERCENT: u32 = 50;
const HIGHLY_RATED: f64 = 4.5;
const WELL_RATED: f64 = 4.0;

/// Scores one developer against one ticket
///
/// Scoring formula (default weights):
/// ```text
/// match_score = round(
///     skill_match_percent * 0.5 +
///     availability_score  * 0.3 +
///     rating_score        * 0.2
/// )
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeveloperTicketMatcher {
    config: EngineConfig,
}

impl DeveloperTicketMatcher {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn match_developer(&self, developer: &Developer, ticket: &Ticket) -> DeveloperMatch {
        let skill_match = match_skills(developer, ticket);
        let availability_score = score_availability(developer, &self.config.availability);
        let rating_score = score_rating(developer, &self.config.rating);

        let weights = &self.config.matching;
        let weighted = skill_match.percentage as f64 * weights.skills
            + availability_score as f64 * weights.availability
            + rating_score as f64 * weights.rating;
        let match_score = weighted.round().clamp(0.0, MAX_SCORE as f64) as u32;

        DeveloperMatch {
            developer: developer.clone(),
            match_score,
            match_reasons: match_reasons(developer, &skill_match),
            skill_match_percent: skill_match.percentage,
            availability_score,
            rating_score,
            quality: match_quality(match_score, &self.config.thresholds),
        }
    }
}

/// Classify a match score against the quality thresholds
pub fn match_quality(score: u32, thresholds: &MatchThresholds) -> MatchQuality {
    if score >= thresholds.excellent {
        MatchQuality::Excellent
    } else if score >= thresholds.good {
        MatchQuality::Good
    } else if score >= thresholds.fair {
        MatchQuality::Fair
    } else {
        MatchQuality::Poor
    }
}

fn match_reasons(developer: &Developer, skill_match: &SkillMatch) -> Vec<String> {
    let mut reasons = Vec::with_capacity(4);

    let percent = skill_match.percentage;
    reasons.push(if percent >= STRONG_SKILL_PERCENT {
        format!("Strong skill match ({}%)", percent)
    } else if percent >= GOOD_SKILL_PERCENT {
        format!("Good skill match ({}%)", percent)
    } else if percent > 0 {
        format!("Partial skill match ({}%)", percent)
    } else {
        "No direct skill match".to_string()
    });

    if !skill_match.matching_skills.is_empty() {
        reasons.push(format!(
            "Matching skills: {}",
            skill_match.matching_skills.join(", ")
        ));
    }

    if developer.online {
        reasons.push("Currently online".to_string());
    } else if developer.availability {
        reasons.push("Generally available".to_string());
    }

    match developer.rating {
        Some(rating) if rating >= HIGHLY_RATED => {
            reasons.push(format!("Highly rated ({:.1})", rating));
        }
        Some(rating) if rating >= WELL_RATED => {
            reasons.push(format!("Well rated ({:.1})", rating));
        }
        _ => {}
    }

    reasons
}
