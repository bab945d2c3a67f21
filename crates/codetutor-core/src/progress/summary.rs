use crate::session::DebuggingSession;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Label used for sessions that carry no programming language.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// Number of sessions created on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`
    pub day: String,
    pub sessions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
}

const MILESTONES: [(usize, Milestone); 3] = [
    (
        1,
        Milestone {
            title: "First Steps",
            description: "Completed your first debugging session",
        },
    ),
    (
        10,
        Milestone {
            title: "Debugger",
            description: "Completed 10 debugging sessions",
        },
    ),
    (
        25,
        Milestone {
            title: "Bug Hunter",
            description: "Completed 25 debugging sessions",
        },
    ),
];

const VOICE_MASTER_THRESHOLD: usize = 5;
const VOICE_MASTER: Milestone = Milestone {
    title: "Voice Master",
    description: "Used voice features 5 times",
};

/// Aggregate view over a set of sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total_sessions: usize,
    pub voice_sessions: usize,
    /// Sum of `session_duration`, in minutes
    pub total_minutes: f64,
    /// Mean rating over sessions that were rated
    pub average_satisfaction: Option<f64>,
    /// Sorted by count descending, then language name
    pub languages: Vec<LanguageCount>,
    /// Sunday..Saturday of the week containing the reference day
    pub weekly_activity: Vec<DayActivity>,
    pub milestones: Vec<Milestone>,
}

impl ProgressSummary {
    pub fn from_sessions(sessions: &[DebuggingSession], today: NaiveDate) -> Self {
        let voice_sessions = sessions.iter().filter(|s| s.used_voice()).count();
        let total_minutes = sessions
            .iter()
            .filter_map(DebuggingSession::duration_minutes)
            .sum::<f64>();

        let ratings: Vec<f64> = sessions
            .iter()
            .filter_map(DebuggingSession::satisfaction)
            .collect();
        let average_satisfaction = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        Self {
            total_sessions: sessions.len(),
            voice_sessions,
            total_minutes,
            average_satisfaction,
            languages: language_breakdown(sessions),
            weekly_activity: weekly_activity(sessions, today),
            milestones: session_milestones(sessions.len(), voice_sessions),
        }
    }
}

fn language_breakdown(sessions: &[DebuggingSession]) -> Vec<LanguageCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for session in sessions {
        let language = session
            .programming_language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE);
        *counts.entry(language.to_string()).or_default() += 1;
    }

    let mut languages: Vec<LanguageCount> = counts
        .into_iter()
        .map(|(language, count)| LanguageCount { language, count })
        .collect();
    languages.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    languages
}

/// Sessions per day for the Sunday-to-Saturday week containing `reference`.
///
/// Days are taken from `created_date` in UTC; sessions without a parsable
/// date are not counted.
pub fn weekly_activity(sessions: &[DebuggingSession], reference: NaiveDate) -> Vec<DayActivity> {
    let offset = i64::from(reference.weekday().num_days_from_sunday());
    let week_start = reference - Duration::days(offset);

    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for day in sessions.iter().filter_map(|s| s.created_at()).map(|t| t.date_naive()) {
        *per_day.entry(day).or_default() += 1;
    }

    (0..7)
        .map(|i| {
            let date = week_start + Duration::days(i);
            DayActivity {
                date,
                day: date.format("%a").to_string(),
                sessions: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Milestones reached for the given session counts, in display order.
pub fn session_milestones(total_sessions: usize, voice_sessions: usize) -> Vec<Milestone> {
    let mut reached: Vec<Milestone> = MILESTONES
        .iter()
        .filter(|(threshold, _)| total_sessions >= *threshold)
        .map(|(_, milestone)| *milestone)
        .collect();
    if voice_sessions >= VOICE_MASTER_THRESHOLD {
        reached.push(VOICE_MASTER);
    }
    reached
}
