use super::connect;
use anyhow::{Context, Result, bail};
use codetutor_core::config::AppSettings;
use codetutor_core::session::{DebuggingSessionRepository, SessionQuery, SessionUpdate};
use serde_json::Value;

pub async fn list(
    settings: &AppSettings,
    filters: &[String],
    sort: Option<String>,
    limit: Option<u32>,
) -> Result<()> {
    let repo = connect(settings).await?;

    let sessions = if filters.is_empty() && sort.is_none() && limit.is_none() {
        repo.list_sessions().await?
    } else {
        let query = build_query(filters, sort, limit)?;
        repo.filter_sessions(&query).await?
    };

    println!("{}", serde_json::to_string_pretty(&sessions)?);
    Ok(())
}

pub async fn get(settings: &AppSettings, id: &str) -> Result<()> {
    let repo = connect(settings).await?;
    let session = repo.get_session(id).await?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

pub async fn update(settings: &AppSettings, id: &str, assignments: &[String]) -> Result<()> {
    let update = SessionUpdate::from_assignments(assignments)?;
    let repo = connect(settings).await?;
    let session = repo
        .update_session(id, &update)
        .await
        .with_context(|| format!("Failed to update session {}", id))?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

pub async fn rate(settings: &AppSettings, created_by: &str, rating: u8) -> Result<()> {
    let repo = connect(settings).await?;
    match repo.rate_latest_session(created_by, rating).await? {
        Some(session) => {
            println!(
                "Rated session {} with {}/5",
                session.id.as_deref().unwrap_or("?"),
                rating
            );
        }
        None => println!("No sessions found for {}", created_by),
    }
    Ok(())
}

/// Builds a query from `field=value` filters. Values are read as JSON when
/// they parse, so `voice_used=true` filters on the boolean.
fn build_query(filters: &[String], sort: Option<String>, limit: Option<u32>) -> Result<SessionQuery> {
    let mut query = SessionQuery::new();
    for filter in filters {
        let Some((field, raw)) = filter.split_once('=') else {
            bail!("Expected field=value, got '{}'", filter);
        };
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        query = query.with_filter(field.trim(), value);
    }
    if let Some(sort) = sort {
        query = query.sorted_by(sort);
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_query() {
        let filters = vec![
            "created_by=learner@example.com".to_string(),
            "voice_used=true".to_string(),
        ];
        let query = build_query(&filters, Some("-created_date".to_string()), Some(5)).unwrap();

        assert_eq!(query.filter.get("created_by"), Some(&json!("learner@example.com")));
        assert_eq!(query.filter.get("voice_used"), Some(&json!(true)));
        assert_eq!(query.sort.as_deref(), Some("-created_date"));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_build_query_rejects_missing_equals() {
        assert!(build_query(&["created_by".to_string()], None, None).is_err());
    }
}
