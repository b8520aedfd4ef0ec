//! Per-provider request construction.

use url::Url;

use crate::errors::SearchError;
use crate::providers::Provider;
use crate::query::Query;

/// Number of results requested from the web search provider.
pub const WEB_SEARCH_RESULTS: u32 = 10;

/// Endpoint path plus ordered query parameters for one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    /// Descriptor with no query parameters.
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Looks up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Resolves the descriptor against a base URL.
    ///
    /// Any path already on the base URL is kept as a prefix.
    ///
    /// # Errors
    /// - `SearchError::InvalidBaseUrl` - Base URL is not an absolute http(s) URL
    pub fn url(&self, base_url: &str) -> Result<Url, SearchError> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&joined).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SearchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

/// Builds the request for `provider`.
///
/// Callers must have rejected blank text already; nothing is validated here.
pub fn build(provider: Provider, query: &Query) -> RequestDescriptor {
    match provider {
        Provider::StructuredMetadata => titled("/movies/omdb", query),
        Provider::WebSearch => RequestDescriptor {
            path: "/search/serper",
            params: vec![
                ("query", query.text.clone()),
                ("num_results", WEB_SEARCH_RESULTS.to_string()),
            ],
        },
        Provider::ScrapedMetadata => titled("/movies/imdb-scrape", query),
    }
}

fn titled(path: &'static str, query: &Query) -> RequestDescriptor {
    let mut params = vec![("title", query.text.clone())];
    if let Some(year) = query.year {
        params.push(("year", year.to_string()));
    }
    RequestDescriptor { path, params }
}
