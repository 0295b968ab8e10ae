use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Help request raised by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ticket {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "technicalAreas", default)]
    pub technical_areas: Vec<String>,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(rename = "estimatedDurationMinutes", default)]
    pub estimated_duration_minutes: u32,
    #[serde(rename = "budgetRange", default)]
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub status: Option<String>,
}

/// Candidate developer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Developer {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub online: bool,
    /// `None` means no rating was supplied, which is not the same as a zero rating.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Ticket urgency as entered by the client
///
/// Strings outside the known set parse to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    Unknown,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
            Urgency::Unknown => "unknown",
        }
    }
}

impl From<&str> for Urgency {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Urgency::Low,
            "medium" => Urgency::Medium,
            "high" => Urgency::High,
            "critical" => Urgency::Critical,
            _ => Urgency::Unknown,
        }
    }
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        Urgency::from(value.as_str())
    }
}

impl From<Option<String>> for Urgency {
    fn from(value: Option<String>) -> Self {
        value.map(Urgency::from).unwrap_or_default()
    }
}

impl From<Urgency> for String {
    fn from(value: Urgency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget band offered by the client
///
/// Bands are matched by exact label. Anything else, including a missing
/// value, is `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BudgetRange {
    Under50,
    From50To100,
    From100To200,
    From200To500,
    Over500,
    #[default]
    Unspecified,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under50 => "<$50",
            BudgetRange::From50To100 => "$50-$100",
            BudgetRange::From100To200 => "$100-$200",
            BudgetRange::From200To500 => "$200-$500",
            BudgetRange::Over500 => "$500+",
            BudgetRange::Unspecified => "",
        }
    }
}

impl From<&str> for BudgetRange {
    fn from(value: &str) -> Self {
        match value {
            "<$50" => BudgetRange::Under50,
            "$50-$100" => BudgetRange::From50To100,
            "$100-$200" => BudgetRange::From100To200,
            "$200-$500" => BudgetRange::From200To500,
            "$500+" => BudgetRange::Over500,
            _ => BudgetRange::Unspecified,
        }
    }
}

impl From<String> for BudgetRange {
    fn from(value: String) -> Self {
        BudgetRange::from(value.as_str())
    }
}

impl From<Option<String>> for BudgetRange {
    fn from(value: Option<String>) -> Self {
        value.map(BudgetRange::from).unwrap_or_default()
    }
}

impl From<BudgetRange> for String {
    fn from(value: BudgetRange) -> Self {
        value.label().to_string()
    }
}

/// Discrete priority bucket derived from a ticket's priority score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Coarse label for a developer match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Priority of a single ticket, borrowing the ticket it was computed for
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TicketPriorityScore<'a> {
    pub ticket: &'a Ticket,
    #[serde(rename = "priorityScore")]
    pub priority_score: u32,
    #[serde(rename = "priorityLevel")]
    pub priority_level: PriorityLevel,
}

/// Coverage of a ticket's technical areas by a developer's skills
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillMatch {
    pub percentage: u32,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
}

/// Scored pairing of one developer with one ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMatch {
    pub developer: Developer,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "skillMatchPercent")]
    pub skill_match_percent: u32,
    #[serde(rename = "availabilityScore")]
    pub availability_score: u32,
    #[serde(rename = "ratingScore")]
    pub rating_score: u32,
    pub quality: MatchQuality,
}

/// Ranked recommendations for one ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketWithMatches {
    pub ticket: Ticket,
    #[serde(rename = "priorityScore")]
    pub priority_score: u32,
    #[serde(rename = "priorityLevel")]
    pub priority_level: PriorityLevel,
    /// Sorted by `match_score`, highest first; ties keep input order.
    pub matches: Vec<DeveloperMatch>,
    /// Set when the batch path had to return the unfiltered list.
    #[serde(rename = "fallbackApplied", default)]
    pub fallback_applied: bool,
}
