//! Static registry of the data providers reachable through the backend.

use crate::errors::SearchError;

/// One of the three data providers behind the movie-finder backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    /// Structured movie metadata (OMDb).
    #[default]
    StructuredMetadata,
    /// General web search (Serper).
    WebSearch,
    /// Metadata scraped from IMDb title pages.
    ScrapedMetadata,
}

/// Registry entry describing how a provider is presented and queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub provider: Provider,
    pub label: &'static str,
    /// Short source tag shown on rendered results
    pub badge: &'static str,
    pub accepts_year: bool,
}

const REGISTRY: [ProviderInfo; 3] = [
    ProviderInfo {
        provider: Provider::StructuredMetadata,
        label: "OMDb",
        badge: "OMDb",
        accepts_year: true,
    },
    ProviderInfo {
        provider: Provider::WebSearch,
        label: "Web Search",
        badge: "Web",
        accepts_year: false,
    },
    ProviderInfo {
        provider: Provider::ScrapedMetadata,
        label: "IMDb",
        badge: "IMDb",
        accepts_year: true,
    },
];

/// Returns every provider in display order.
pub fn providers() -> &'static [ProviderInfo] {
    &REGISTRY
}

impl Provider {
    /// Short stable identifier used on the command line and in URLs.
    pub fn id(self) -> &'static str {
        match self {
            Provider::StructuredMetadata => "omdb",
            Provider::WebSearch => "serper",
            Provider::ScrapedMetadata => "imdb",
        }
    }

    /// Registry entry for this provider.
    pub fn info(self) -> &'static ProviderInfo {
        match self {
            Provider::StructuredMetadata => &REGISTRY[0],
            Provider::WebSearch => &REGISTRY[1],
            Provider::ScrapedMetadata => &REGISTRY[2],
        }
    }

    /// Human-readable tab label.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn badge(self) -> &'static str {
        self.info().badge
    }

    /// Whether a year filter is forwarded for this provider.
    pub fn accepts_year(self) -> bool {
        self.info().accepts_year
    }

    /// Fixed message shown when the request for this provider fails on the wire.
    pub fn failure_message(self) -> &'static str {
        match self {
            Provider::StructuredMetadata => "Movie not found",
            Provider::WebSearch => "Search failed",
            Provider::ScrapedMetadata => "IMDb scrape failed",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Provider {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "omdb" => Ok(Provider::StructuredMetadata),
            "serper" | "web" => Ok(Provider::WebSearch),
            "imdb" | "scrape" => Ok(Provider::ScrapedMetadata),
            _ => Err(SearchError::UnknownProvider {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let ids: Vec<_> = providers().iter().map(|info| info.provider.id()).collect();
        assert_eq!(ids, ["omdb", "serper", "imdb"]);
        assert_eq!(providers(), providers());
    }

    #[test]
    fn test_info_matches_registry_entry() {
        for info in providers() {
            assert_eq!(info.provider.info(), info);
        }
    }

    #[test]
    fn test_only_web_search_ignores_year() {
        assert!(Provider::StructuredMetadata.accepts_year());
        assert!(!Provider::WebSearch.accepts_year());
        assert!(Provider::ScrapedMetadata.accepts_year());
    }

    #[test]
    fn test_labels_and_failure_messages() {
        assert_eq!(Provider::WebSearch.label(), "Web Search");
        assert_eq!(Provider::WebSearch.badge(), "Web");
        assert_eq!(Provider::StructuredMetadata.failure_message(), "Movie not found");
        assert_eq!(Provider::WebSearch.failure_message(), "Search failed");
        assert_eq!(Provider::ScrapedMetadata.failure_message(), "IMDb scrape failed");
    }

    #[test]
    fn test_parse_ids_and_aliases() {
        assert_eq!("OMDb".parse::<Provider>().unwrap(), Provider::StructuredMetadata);
        assert_eq!("web".parse::<Provider>().unwrap(), Provider::WebSearch);
        assert_eq!(" scrape ".parse::<Provider>().unwrap(), Provider::ScrapedMetadata);
        assert!(matches!(
            "tmdb".parse::<Provider>(),
            Err(SearchError::UnknownProvider { .. })
        ));
    }

    #[test]
    fn test_display_and_parse_agree_on_ids() {
        for info in providers() {
            let shown = info.provider.to_string();
            assert_eq!(shown, info.provider.id());
            assert_eq!(shown.parse::<Provider>().unwrap(), info.provider);
        }
    }

    #[test]
    fn test_default_is_structured_metadata() {
        assert_eq!(Provider::default(), Provider::StructuredMetadata);
    }
}
