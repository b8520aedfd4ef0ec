//! Search query and the year filter rules applied at input time.

use chrono::Datelike;

use crate::errors::SearchError;
use crate::providers::Provider;

/// Earliest release year accepted by the year filter.
pub const MIN_YEAR: u16 = 1900;

/// Free-text search plus an optional release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub year: Option<u16>,
}

impl Query {
    pub fn new(text: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            text: text.into(),
            year,
        }
    }

    /// Query without a year filter.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// True when the text is empty after trimming; such queries are never sent.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Builds a query from raw form input for the given provider.
    ///
    /// The year field is ignored entirely for providers that do not accept
    /// one, matching a hidden year input. Blank text is passed through
    /// without looking at the year, so the orchestrator can refuse it
    /// silently.
    ///
    /// # Errors
    /// - `SearchError::MalformedYear` - Year input is not a number
    /// - `SearchError::InvalidYear` - Year is outside `MIN_YEAR..=current year`
    pub fn from_input(text: &str, raw_year: Option<&str>, provider: Provider) -> Result<Self, SearchError> {
        let year = match raw_year {
            Some(raw) if provider.accepts_year() && !text.trim().is_empty() => parse_year(raw)?,
            _ => None,
        };
        Ok(Self::new(text, year))
    }
}

/// Current calendar year in UTC.
pub fn current_year() -> u16 {
    u16::try_from(chrono::Utc::now().year()).unwrap_or(u16::MAX)
}

/// Parses a raw year field; empty input means no filter.
///
/// # Errors
/// - `SearchError::MalformedYear` - Input is not an integer
/// - `SearchError::InvalidYear` - Year is outside `MIN_YEAR..=current year`
pub fn parse_year(raw: &str) -> Result<Option<u16>, SearchError> {
    parse_year_until(raw, current_year())
}

/// Same as [`parse_year`] with an explicit upper bound.
///
/// # Errors
/// - `SearchError::MalformedYear` - Input is not an integer
/// - `SearchError::InvalidYear` - Year is outside `MIN_YEAR..=max_year`
pub fn parse_year_until(raw: &str, max_year: u16) -> Result<Option<u16>, SearchError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let year: i64 = raw.parse().map_err(|_| SearchError::MalformedYear {
        input: raw.to_string(),
    })?;

    validate_year(year, max_year).map(Some)
}

/// Checks a numeric year against `MIN_YEAR..=max_year`.
///
/// # Errors
/// - `SearchError::InvalidYear` - Year is outside the range
pub fn validate_year(year: i64, max_year: u16) -> Result<u16, SearchError> {
    if year < i64::from(MIN_YEAR) || year > i64::from(max_year) {
        return Err(SearchError::InvalidYear {
            year,
            min: MIN_YEAR,
            max: max_year,
        });
    }
    // In range of u16 since max_year is a u16.
    Ok(year as u16)
}
