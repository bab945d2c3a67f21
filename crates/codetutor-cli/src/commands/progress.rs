use super::connect;
use anyhow::Result;
use codetutor_core::config::AppSettings;
use codetutor_core::progress::ProgressSummary;
use codetutor_core::session::{DebuggingSessionRepository, SessionQuery};
use colored::Colorize;

pub async fn show(settings: &AppSettings, created_by: Option<String>, json: bool) -> Result<()> {
    let repo = connect(settings).await?;
    let sessions = match created_by {
        Some(email) => repo.filter_sessions(&recent_sessions_of(email)).await?,
        None => repo.list_sessions().await?,
    };
    tracing::debug!("Summarising {} sessions", sessions.len());

    let summary = ProgressSummary::from_sessions(&sessions, chrono::Utc::now().date_naive());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Number of most recent sessions a per-user summary covers.
const RECENT_SESSION_LIMIT: u32 = 50;

fn recent_sessions_of(email: String) -> SessionQuery {
    SessionQuery::by_creator(email)
        .newest_first()
        .limit(RECENT_SESSION_LIMIT)
}

fn print_summary(summary: &ProgressSummary) {
    println!("{}", "Learning Progress".bold());
    println!("  Sessions:       {}", summary.total_sessions);
    println!("  Voice sessions: {}", summary.voice_sessions);
    println!("  Time spent:     {:.0} min", summary.total_minutes);
    match summary.average_satisfaction {
        Some(avg) => println!("  Satisfaction:   {:.1}/5", avg),
        None => println!("  Satisfaction:   -"),
    }

    if !summary.languages.is_empty() {
        println!();
        println!("{}", "Languages".bold());
        for entry in &summary.languages {
            println!("  {:<12} {}", entry.language, entry.count);
        }
    }

    println!();
    println!("{}", "This week".bold());
    for day in &summary.weekly_activity {
        let bar = "#".repeat(day.sessions);
        println!("  {} {:>2} {}", day.day, day.sessions, bar.green());
    }

    if !summary.milestones.is_empty() {
        println!();
        println!("{}", "Milestones".bold());
        for milestone in &summary.milestones {
            println!("  {} {} - {}", "✓".green(), milestone.title, milestone.description.dimmed());
        }
    }
}
