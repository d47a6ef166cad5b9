use std::collections::HashSet;

use serde::Serialize;

use crate::domain::models::calendar_event::CalendarEvent;
use crate::domain::models::import::UploadedEvent;

// Factor weights are tunable policy, not contract. They are chosen so a
// full three-factor match lands exactly on the 100 cap.
const TITLE_EXACT_WEIGHT: u32 = 40;
const TITLE_PARTIAL_WEIGHT: u32 = 20;
const DATE_EXACT_WEIGHT: u32 = 30;
const DATE_ADJACENT_WEIGHT: u32 = 15;
const PARTICIPANT_WEIGHT: u32 = 30;

const MAX_SCORE: u32 = 100;

/// Score plus the human-readable reasons behind it. The resolution UI
/// surfaces the reasons verbatim, so every nonzero factor appends one.
#[derive(Debug, Serialize, Clone)]
pub struct MatchScore {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Deterministic, explainable similarity between an uploaded candidate and
/// an existing event. Reasons are ordered title, date, participants.
pub fn score_similarity(candidate: &UploadedEvent, existing: &CalendarEvent) -> MatchScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    let candidate_title = normalize(&candidate.title);
    let existing_title = normalize(&existing.title);
    if !candidate_title.is_empty() && candidate_title == existing_title {
        score += TITLE_EXACT_WEIGHT;
        reasons.push("Same title".to_string());
    } else if !candidate_title.is_empty()
        && !existing_title.is_empty()
        && (candidate_title.contains(&existing_title) || existing_title.contains(&candidate_title))
    {
        score += TITLE_PARTIAL_WEIGHT;
        reasons.push("Similar title".to_string());
    }

    let day_diff = (candidate.start_date - existing.start_date).num_days().abs();
    if day_diff == 0 {
        score += DATE_EXACT_WEIGHT;
        reasons.push("Same date".to_string());
    } else if day_diff == 1 {
        score += DATE_ADJACENT_WEIGHT;
        reasons.push("Adjacent date".to_string());
    }

    if !candidate.participants.is_empty() {
        let existing_participants = existing.participants();
        let existing_set: HashSet<&str> =
            existing_participants.iter().map(String::as_str).collect();
        let shared: Vec<&str> = candidate
            .participants
            .iter()
            .map(String::as_str)
            .filter(|p| existing_set.contains(p))
            .collect();

        if !shared.is_empty() {
            let fraction = shared.len() as f64 / candidate.participants.len() as f64;
            score += (PARTICIPANT_WEIGHT as f64 * fraction).round() as u32;
            reasons.push(format!("Shared participants: {}", shared.join(", ")));
        }
    }

    MatchScore {
        score: score.min(MAX_SCORE),
        reasons,
    }
}

/// The highest-scoring existing event for a candidate, if anything scored
/// above zero. Whether that constitutes a conflict is the caller's policy.
pub fn best_match<'a>(
    candidate: &UploadedEvent,
    existing: &'a [CalendarEvent],
) -> Option<(&'a CalendarEvent, MatchScore)> {
    existing
        .iter()
        .map(|event| (event, score_similarity(candidate, event)))
        .filter(|(_, m)| m.score > 0)
        .max_by_key(|(_, m)| m.score)
}

fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn upload(title: &str, start_date: &str, participants: &[&str]) -> UploadedEvent {
        UploadedEvent {
            title: title.to_string(),
            category: None,
            start_date: start_date.parse().unwrap(),
            start_time: None,
            end_time: None,
            participants: participants.iter().map(|p| p.to_string()).collect(),
            transportation: None,
        }
    }

    fn existing(title: &str, start_date: &str, participants: &[&str]) -> CalendarEvent {
        CalendarEvent {
            id: "ev-1".to_string(),
            household_id: "hh-1".to_string(),
            title: title.to_string(),
            category: None,
            start_date: start_date.parse().unwrap(),
            start_time: None,
            end_time: None,
            participants_json: serde_json::to_string(participants).unwrap(),
            transportation: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_exact_title_date_and_partial_participants() {
        let candidate = upload("Soccer Practice", "2024-03-01", &["kid1"]);
        let event = existing("soccer practice", "2024-03-01", &["kid1", "kid2"]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 100);
        assert_eq!(
            result.reasons,
            vec!["Same title", "Same date", "Shared participants: kid1"]
        );
    }

    #[test]
    fn test_title_match_ignores_case_and_whitespace() {
        let candidate = upload("  Piano Lesson ", "2024-03-01", &[]);
        let event = existing("piano lesson", "2024-05-01", &[]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 40);
        assert_eq!(result.reasons, vec!["Same title"]);
    }

    #[test]
    fn test_substring_title_scores_less() {
        let candidate = upload("Soccer", "2024-05-01", &[]);
        let event = existing("Soccer Practice", "2024-03-01", &[]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 20);
        assert_eq!(result.reasons, vec!["Similar title"]);
    }

    #[test]
    fn test_adjacent_date_scores_half() {
        let candidate = upload("Dentist", "2024-03-02", &[]);
        let event = existing("Checkup", "2024-03-01", &[]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 15);
        assert_eq!(result.reasons, vec!["Adjacent date"]);
    }

    #[test]
    fn test_distant_date_scores_zero() {
        let candidate = upload("Dentist", "2024-03-05", &[]);
        let event = existing("Checkup", "2024-03-01", &[]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_participant_overlap_is_proportional() {
        let candidate = upload("A", "2024-05-01", &["kid1", "kid2"]);
        let event = existing("B", "2024-03-01", &["kid1"]);

        // Half of the candidate's participants are shared: 30 * 0.5 = 15.
        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 15);
        assert_eq!(result.reasons, vec!["Shared participants: kid1"]);
    }

    #[test]
    fn test_every_nonzero_factor_has_a_reason() {
        let candidate = upload("Soccer Practice", "2024-03-02", &["kid1", "kid2"]);
        let event = existing("Soccer Practice", "2024-03-01", &["kid2"]);

        let result = score_similarity(&candidate, &event);
        assert_eq!(result.score, 40 + 15 + 15);
        assert_eq!(
            result.reasons,
            vec!["Same title", "Adjacent date", "Shared participants: kid2"]
        );
    }

    #[test]
    fn test_empty_titles_never_match() {
        let candidate = upload("", "2024-05-01", &[]);
        let event = existing("", "2024-03-01", &[]);

        assert_eq!(score_similarity(&candidate, &event).score, 0);
    }

    #[test]
    fn test_best_match_picks_highest_score() {
        let candidate = upload("Soccer Practice", "2024-03-01", &[]);
        let events = vec![
            existing("Swim Class", "2024-03-01", &[]),
            existing("Soccer Practice", "2024-03-01", &[]),
        ];

        let (best, result) = best_match(&candidate, &events).unwrap();
        assert_eq!(best.title, "Soccer Practice");
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_best_match_none_when_nothing_scores() {
        let candidate = upload("Soccer Practice", "2024-03-01", &[]);
        let events = vec![existing("Swim Class", "2024-06-01", &[])];
        assert!(best_match(&candidate, &events).is_none());
    }
}
