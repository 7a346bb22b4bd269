use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A date field as submitted by the form.
///
/// Calendar dates (`2021-04-22`) and serialized timestamps (`2021-04-22T00:00:00.000Z`)
/// both resolve to a calendar day. Anything else is kept verbatim: it still counts as
/// filled in for completeness checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormDate {
    Calendar(NaiveDate),
    Unparsed(String),
}

impl FormDate {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match parse_calendar_date(trimmed) {
            Some(date) => FormDate::Calendar(date),
            None => FormDate::Unparsed(trimmed.to_string()),
        }
    }

    pub fn as_calendar(&self) -> Option<NaiveDate> {
        match self {
            FormDate::Calendar(date) => Some(*date),
            FormDate::Unparsed(_) => None,
        }
    }

    /// `YYYYMMDD` segment used in generated names.
    pub fn name_segment(&self) -> String {
        match self {
            FormDate::Calendar(date) => date.format("%Y%m%d").to_string(),
            FormDate::Unparsed(raw) => raw.clone(),
        }
    }
}

impl From<NaiveDate> for FormDate {
    fn from(value: NaiveDate) -> Self {
        FormDate::Calendar(value)
    }
}

impl fmt::Display for FormDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormDate::Calendar(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FormDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for FormDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FormDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FormDate::parse(&raw))
    }
}

/// Optional date field where an empty string means "not filled in".
pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<FormDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .filter(|value| !value.trim().is_empty())
        .map(|value| FormDate::parse(&value)))
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    None
}
