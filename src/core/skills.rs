use crate::core::weights::MAX_SCORE;
use crate::models::{Developer, SkillMatch, Ticket};

/// Measure how much of a ticket's requirements a developer covers
///
/// Both lists are lower-cased (and trimmed; blank entries are ignored). A
/// requirement counts as satisfied when a skill contains it or it contains a
/// skill, so `"react"` satisfies `"react native"` and vice versa.
///
/// The percentage is directional: it is the share of the *ticket's*
/// requirements that are covered. Skills the ticket does not ask for neither
/// raise nor lower it.
pub fn match_skills(developer: &Developer, ticket: &Ticket) -> SkillMatch {
    let skills = normalize(&developer.skills);
    let requirements = normalize(&ticket.technical_areas);

    if skills.is_empty() || requirements.is_empty() {
        return SkillMatch::default();
    }

    let satisfied = requirements
        .iter()
        .filter(|requirement| skills.iter().any(|skill| overlaps(skill, requirement)))
        .count();

    let mut matching_skills: Vec<String> = Vec::new();
    for skill in &skills {
        if matching_skills.contains(skill) {
            continue;
        }
        if requirements.iter().any(|requirement| overlaps(skill, requirement)) {
            matching_skills.push(skill.clone());
        }
    }

    let percentage = (satisfied as f64 * 100.0 / requirements.len() as f64).round() as u32;

    SkillMatch {
        percentage: percentage.min(MAX_SCORE),
        matching_skills,
    }
}

#[inline]
fn overlaps(skill: &str, requirement: &str) -> bool {
    requirement.contains(skill) || skill.contains(requirement)
}

fn normalize(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer(skills: &[&str]) -> Developer {
        Developer {
            id: "d1".to_string(),
            name: "Dev".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability: true,
            online: true,
            rating: Some(4.0),
            category: None,
        }
    }

    fn ticket(areas: &[&str]) -> Ticket {
        Ticket {
            id: "t1".to_string(),
            title: String::new(),
            description: String::new(),
            technical_areas: areas.iter().map(|s| s.to_string()).collect(),
            urgency: Default::default(),
            estimated_duration_minutes: 30,
            budget_range: Default::default(),
            status: None,
        }
    }

    #[test]
    fn test_half_coverage() {
        let result = match_skills(&developer(&["React"]), &ticket(&["React", "Node.js"]));

        assert_eq!(result.percentage, 50);
        assert_eq!(result.matching_skills, vec!["react"]);
    }

    #[test]
    fn test_empty_lists_score_zero() {
        let empty_skills = match_skills(&developer(&[]), &ticket(&["React"]));
        let empty_areas = match_skills(&developer(&["React"]), &ticket(&[]));

        assert_eq!(empty_skills, SkillMatch::default());
        assert_eq!(empty_areas, SkillMatch::default());
    }

    #[test]
    fn test_substring_match_both_directions() {
        // "react" is inside "react native"; "postgresql" contains "postgres"
        let result = match_skills(
            &developer(&["React", "PostgreSQL"]),
            &ticket(&["React Native", "Postgres"]),
        );

        assert_eq!(result.percentage, 100);
        assert_eq!(result.matching_skills, vec!["react", "postgresql"]);
    }

    #[test]
    fn test_irrelevant_skills_do_not_lower_score() {
        let focused = match_skills(&developer(&["Rust"]), &ticket(&["Rust"]));
        let broad = match_skills(
            &developer(&["Rust", "Cobol", "Fortran", "Delphi"]),
            &ticket(&["Rust"]),
        );

        assert_eq!(focused.percentage, 100);
        assert_eq!(broad.percentage, 100);
        assert_eq!(broad.matching_skills, vec!["rust"]);
    }

    #[test]
    fn test_rounding() {
        let result = match_skills(&developer(&["go"]), &ticket(&["Go", "Kafka", "Redis"]));
        assert_eq!(result.percentage, 33);

        let result = match_skills(&developer(&["go", "kafka"]), &ticket(&["Go", "Kafka", "Redis"]));
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn test_duplicate_skills_listed_once() {
        let result = match_skills(&developer(&["Python", "python"]), &ticket(&["Python"]));

        assert_eq!(result.matching_skills, vec!["python"]);
    }

    #[test]
    fn test_blank_skills_are_ignored() {
        let result = match_skills(&developer(&["", "  "]), &ticket(&["Java"]));

        assert_eq!(result, SkillMatch::default());
    }
}
