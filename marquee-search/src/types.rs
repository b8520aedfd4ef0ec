//! Response shapes returned by each provider.
//!
//! Each provider answers with its own record layout. They are kept as
//! distinct types and joined in [`SearchPayload`], so rendering code has to
//! handle every shape explicitly.

use serde::Deserialize;

use crate::errors::SearchError;
use crate::providers::Provider;

/// Literal used by the structured-metadata provider for "not available".
pub const ABSENT_MARKER: &str = "N/A";

/// Returns the value when it is present, non-empty and not the absent-marker.
pub fn available(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != ABSENT_MARKER)
}

/// Flat movie record from the structured-metadata provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuredMetadataResult {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    /// Certification such as "PG-13"
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Cast", alias = "Actors", default)]
    pub cast: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
}

/// Ordered result list from the web search provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebSearchResult {
    pub results: Vec<WebSearchItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebSearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Scrape response; the metadata sits one level down under `imdb_data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapedMetadataResult {
    pub imdb_data: ScrapedMovie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapedMovie {
    pub title: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub top_cast: Option<Vec<String>>,
}

/// Successful response, tagged by the provider that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
    StructuredMetadata(StructuredMetadataResult),
    WebSearch(WebSearchResult),
    ScrapedMetadata(ScrapedMetadataResult),
}

impl SearchPayload {
    /// Decodes a response body into the shape `provider` returns.
    ///
    /// # Errors
    /// - `SearchError::Parse` - Body is not valid JSON for that shape
    pub fn decode(provider: Provider, body: &[u8]) -> Result<Self, SearchError> {
        let payload = match provider {
            Provider::StructuredMetadata => {
                SearchPayload::StructuredMetadata(serde_json::from_slice(body)?)
            }
            Provider::WebSearch => SearchPayload::WebSearch(serde_json::from_slice(body)?),
            Provider::ScrapedMetadata => {
                SearchPayload::ScrapedMetadata(serde_json::from_slice(body)?)
            }
        };
        Ok(payload)
    }

    /// Provider whose shape this payload has.
    pub fn provider(&self) -> Provider {
        match self {
            SearchPayload::StructuredMetadata(_) => Provider::StructuredMetadata,
            SearchPayload::WebSearch(_) => Provider::WebSearch,
            SearchPayload::ScrapedMetadata(_) => Provider::ScrapedMetadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_filters_absent_marker() {
        assert_eq!(available(&Some("8.8".to_string())), Some("8.8"));
        assert_eq!(available(&Some("N/A".to_string())), None);
        assert_eq!(available(&Some(String::new())), None);
        assert_eq!(available(&None), None);
    }

    #[test]
    fn test_decode_structured_metadata_with_missing_fields() {
        let body = br#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Poster":"N/A"}"#;
        let payload = SearchPayload::decode(Provider::StructuredMetadata, body).unwrap();

        let SearchPayload::StructuredMetadata(movie) = payload else {
            panic!("wrong shape");
        };
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year.as_deref(), Some("2010"));
        assert_eq!(movie.poster.as_deref(), Some("N/A"));
        assert_eq!(movie.director, None);
    }

    #[test]
    fn test_decode_accepts_actors_alias() {
        let body = br#"{"Title":"Heat","Actors":"Al Pacino, Robert De Niro"}"#;
        let payload = SearchPayload::decode(Provider::StructuredMetadata, body).unwrap();
        match payload {
            SearchPayload::StructuredMetadata(movie) => {
                assert_eq!(movie.cast.as_deref(), Some("Al Pacino, Robert De Niro"));
            }
            other => panic!("wrong shape: {other:?}"),
        }
    }

    #[test]
    fn test_decode_requires_title() {
        let err = SearchPayload::decode(Provider::StructuredMetadata, br#"{"Year":"2010"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Title"));
    }

    #[test]
    fn test_decode_web_search_empty_list() {
        let payload = SearchPayload::decode(Provider::WebSearch, br#"{"results":[]}"#).unwrap();
        assert_eq!(payload, SearchPayload::WebSearch(WebSearchResult { results: vec![] }));
        assert_eq!(payload.provider(), Provider::WebSearch);
    }

    #[test]
    fn test_decode_scrape_requires_wrapper() {
        let flat = br#"{"title":"Dune","rating":"8.0"}"#;
        assert!(SearchPayload::decode(Provider::ScrapedMetadata, flat).is_err());

        let wrapped = br#"{"imdb_data":{"title":"Dune","rating":"8.0","genres":["Sci-Fi"],"summary":null,"top_cast":[]}}"#;
        let payload = SearchPayload::decode(Provider::ScrapedMetadata, wrapped).unwrap();
        match payload {
            SearchPayload::ScrapedMetadata(scrape) => {
                assert_eq!(scrape.imdb_data.title, "Dune");
                assert_eq!(scrape.imdb_data.genres, Some(vec!["Sci-Fi".to_string()]));
                assert_eq!(scrape.imdb_data.summary, None);
            }
            other => panic!("wrong shape: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = SearchPayload::decode(Provider::WebSearch, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, SearchError::Parse { .. }));
    }
}
