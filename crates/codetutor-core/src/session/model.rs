//! DebuggingSession domain model.
//!
//! The record is owned by the remote platform and its field types are not
//! guaranteed. Known fields are decoded leniently: a value of an unexpected
//! type leaves the typed field empty and is kept verbatim in `extra`, as is
//! anything the client does not know about, so it survives a decode/encode
//! cycle untouched.

use crate::error::{CodeTutorError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A debugging session record as returned by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebuggingSession {
    /// Platform-assigned identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp as sent by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    /// Email of the user who created the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_provided: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_suggested: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_used: Option<bool>,
    /// Duration in minutes, see [`DebuggingSession::duration_minutes`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<Number>,
    /// Rating, nominally 1 to 5, see [`DebuggingSession::satisfaction`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_satisfaction: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts_learned: Option<Vec<String>>,

    /// Unknown fields and known fields of an unexpected type, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DebuggingSession {
    /// Parses `created_date` into a UTC timestamp.
    ///
    /// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (treated as UTC)
    /// and a bare `YYYY-MM-DD`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date.as_deref().and_then(parse_platform_timestamp)
    }

    /// Whether the voice features were used during this session.
    pub fn used_voice(&self) -> bool {
        self.voice_used.unwrap_or(false)
    }

    pub fn duration_minutes(&self) -> Option<f64> {
        self.session_duration.as_ref().and_then(Number::as_f64)
    }

    pub fn satisfaction(&self) -> Option<f64> {
        self.user_satisfaction.as_ref().and_then(Number::as_f64)
    }

    fn from_fields(fields: Map<String, Value>) -> Self {
        let mut reader = FieldReader {
            fields,
            extra: Map::new(),
        };

        let mut session = Self {
            id: reader.take("id", text),
            created_date: reader.take("created_date", text),
            updated_date: reader.take("updated_date", text),
            created_by: reader.take("created_by", text),
            code_input: reader.take("code_input", text),
            error_message: reader.take("error_message", text),
            programming_language: reader.take("programming_language", text),
            explanation_provided: reader.take("explanation_provided", text),
            solution_suggested: reader.take("solution_suggested", text),
            voice_used: reader.take("voice_used", flag),
            session_duration: reader.take("session_duration", number),
            user_satisfaction: reader.take("user_satisfaction", number),
            concepts_learned: reader.take("concepts_learned", text_list),
            extra: Map::new(),
        };

        reader.extra.extend(reader.fields);
        session.extra = reader.extra;
        session
    }
}

impl<'de> Deserialize<'de> for DebuggingSession {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_fields)
    }
}

/// Moves known fields out of a raw record, setting aside values that don't
/// convert.
struct FieldReader {
    fields: Map<String, Value>,
    extra: Map<String, Value>,
}

impl FieldReader {
    fn take<T>(&mut self, name: &str, convert: fn(&Value) -> Option<T>) -> Option<T> {
        let value = self.fields.remove(name)?;
        if value.is_null() {
            return None;
        }
        let converted = convert(&value);
        if converted.is_none() {
            self.extra.insert(name.to_string(), value);
        }
        converted
    }
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().to_ascii_lowercase().parse().ok(),
        _ => None,
    }
}

/// Numbers as sent, or numeric strings such as `"12"` and `"4.5"`.
fn number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .map(Number::from)
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    }
}

fn text_list(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(text).collect()
}

fn parse_platform_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The writable fields of a [`DebuggingSession`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SessionField {
    CodeInput,
    ErrorMessage,
    ProgrammingLanguage,
    ExplanationProvided,
    SolutionSuggested,
    VoiceUsed,
    SessionDuration,
    UserSatisfaction,
    ConceptsLearned,
}

impl SessionField {
    /// Parses a wire field name, rejecting names outside the known schema.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            CodeTutorError::validation(format!("Unknown DebuggingSession field '{}'", name))
        })
    }

    /// Whether the field holds free text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::CodeInput
                | Self::ErrorMessage
                | Self::ProgrammingLanguage
                | Self::ExplanationProvided
                | Self::SolutionSuggested
        )
    }
}

/// Partial-update payload for a [`DebuggingSession`].
///
/// Serializes as a flat JSON object holding only the fields that were set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    fields: BTreeMap<SessionField, Value>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary JSON value for a field, replacing any earlier value.
    pub fn set(mut self, field: SessionField, value: impl Into<Value>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn code_input(self, value: impl Into<String>) -> Self {
        self.set(SessionField::CodeInput, value.into())
    }

    pub fn error_message(self, value: impl Into<String>) -> Self {
        self.set(SessionField::ErrorMessage, value.into())
    }

    pub fn programming_language(self, value: impl Into<String>) -> Self {
        self.set(SessionField::ProgrammingLanguage, value.into())
    }

    pub fn explanation_provided(self, value: impl Into<String>) -> Self {
        self.set(SessionField::ExplanationProvided, value.into())
    }

    pub fn solution_suggested(self, value: impl Into<String>) -> Self {
        self.set(SessionField::SolutionSuggested, value.into())
    }

    pub fn voice_used(self, value: bool) -> Self {
        self.set(SessionField::VoiceUsed, value)
    }

    pub fn session_duration(self, minutes: f64) -> Self {
        self.set(SessionField::SessionDuration, minutes)
    }

    pub fn user_satisfaction(self, rating: u8) -> Self {
        self.set(SessionField::UserSatisfaction, rating)
    }

    pub fn concepts_learned<I, S>(self, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Value> = concepts
            .into_iter()
            .map(|c| Value::String(c.into()))
            .collect();
        self.set(SessionField::ConceptsLearned, values)
    }

    /// Parses `field=value` assignments.
    ///
    /// Text fields take the value verbatim. Other fields read it as JSON when
    /// it parses (`5`, `true`, `["a"]`) and as a plain string otherwise.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut update = Self::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let (name, raw) = assignment.split_once('=').ok_or_else(|| {
                CodeTutorError::validation(format!(
                    "Expected field=value, got '{}'",
                    assignment
                ))
            })?;
            let field = SessionField::parse(name)?;
            let value = if field.is_text() {
                Value::String(raw.to_string())
            } else {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            };
            update = update.set(field, value);
        }
        Ok(update)
    }

    pub fn get(&self, field: SessionField) -> Option<&Value> {
        self.fields.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = SessionField> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for SessionUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.as_ref(), value)?;
        }
        map.end()
    }
}

/// Payload for creating a new debugging session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewDebuggingSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_provided: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_suggested: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_satisfaction: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts_learned: Option<Vec<String>>,
}
