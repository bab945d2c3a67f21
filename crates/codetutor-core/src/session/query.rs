//! Filter/sort/limit parameters for listing sessions.

use crate::error::Result;
use serde_json::{Map, Value};

/// Sort key for newest-first ordering.
pub const NEWEST_FIRST: &str = "-created_date";

/// Query parameters for a filtered listing.
///
/// Mirrors the platform's `filter(query, sort, limit)` call: an equality
/// filter object, a sort key (prefix `-` for descending) and paging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionQuery {
    pub filter: Map<String, Value>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl SessionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions created by the given user.
    pub fn by_creator(email: impl Into<String>) -> Self {
        Self::new().with_filter("created_by", email.into())
    }

    /// Adds an equality condition.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    pub fn sorted_by(mut self, key: impl Into<String>) -> Self {
        self.sort = Some(key.into());
        self
    }

    pub fn newest_first(self) -> Self {
        self.sorted_by(NEWEST_FIRST)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Encodes the query as URL query pairs, emitting only what is set.
    pub fn to_query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        let mut pairs = Vec::new();
        if !self.filter.is_empty() {
            pairs.push(("q", serde_json::to_string(&self.filter)?));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(SessionQuery::new().to_query_pairs().unwrap().is_empty());
    }

    #[test]
    fn test_latest_by_creator_pairs() {
        let query = SessionQuery::by_creator("learner@example.com")
            .newest_first()
            .limit(1);

        let pairs = query.to_query_pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("q", r#"{"created_by":"learner@example.com"}"#.to_string()),
                ("sort", "-created_date".to_string()),
                ("limit", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_skip_without_filter() {
        let pairs = SessionQuery::new().skip(20).to_query_pairs().unwrap();
        assert_eq!(pairs, vec![("skip", "20".to_string())]);
    }
}
