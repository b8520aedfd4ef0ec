//! Result presenter: turns the request state into a view model.
//!
//! The view model is front-end neutral. HTML components and the terminal
//! renderer both consume it, so the field selection rules live in one place.

use std::fmt;

use marquee_search::{
    Provider, RequestState, ScrapedMetadataResult, SearchPayload, StructuredMetadataResult,
    WebSearchResult, available,
};

/// Visible text of every web result link.
pub const LINK_TEXT: &str = "Visit Website";

/// Shown while a submission is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// What the result region should show.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing submitted yet; carries the active provider for the prompt.
    Idle(Provider),
    Loading,
    Error(String),
    Movie(MovieCard),
    Results(ResultList),
}

/// Single-movie card for either metadata provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub source: &'static str,
    pub poster: Option<String>,
    pub details: Vec<Detail>,
}

impl MovieCard {
    /// Value of the detail row with this label, if rendered.
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// Web search hits in provider order; may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultList {
    pub items: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// Renders `state` for display while `provider` is the active tab.
///
/// A successful payload is always rendered in its own shape, even if the
/// user has switched tabs since it arrived.
pub fn render(state: &RequestState, provider: Provider) -> View {
    match state {
        RequestState::Idle => View::Idle(provider),
        RequestState::Pending => View::Loading,
        RequestState::Failed(message) => View::Error(message.clone()),
        RequestState::Succeeded(payload) => match payload {
            SearchPayload::StructuredMetadata(movie) => View::Movie(structured_card(movie)),
            SearchPayload::WebSearch(results) => View::Results(result_list(results)),
            SearchPayload::ScrapedMetadata(scrape) => View::Movie(scraped_card(scrape)),
        },
    }
}

fn structured_card(movie: &StructuredMetadataResult) -> MovieCard {
    let mut details = Vec::new();

    // Year is shown whenever present, even as the absent-marker.
    if let Some(year) = movie.year.as_deref().filter(|y| !y.is_empty()) {
        details.push(detail("Year", year));
    }

    let optional = [
        ("Rated", &movie.rated),
        ("Runtime", &movie.runtime),
        ("Director", &movie.director),
        ("Cast", &movie.cast),
        ("Genre", &movie.genre),
    ];
    for (label, value) in optional {
        if let Some(value) = available(value) {
            details.push(detail(label, value));
        }
    }

    if let Some(rating) = available(&movie.imdb_rating) {
        details.push(detail("IMDb Rating", &format!("{rating}/10")));
    }
    if let Some(plot) = available(&movie.plot) {
        details.push(detail("Plot", plot));
    }

    MovieCard {
        title: movie.title.clone(),
        source: Provider::StructuredMetadata.badge(),
        poster: available(&movie.poster).map(str::to_string),
        details,
    }
}

fn scraped_card(scrape: &ScrapedMetadataResult) -> MovieCard {
    let movie = &scrape.imdb_data;
    let mut details = vec![
        detail("Rating", non_empty(movie.rating.as_deref()).unwrap_or("N/A")),
        detail("Genres", &joined(movie.genres.as_deref()).unwrap_or_else(|| "N/A".to_string())),
    ];

    if let Some(summary) = non_empty(movie.summary.as_deref()) {
        details.push(detail("Plot", summary));
    }
    if let Some(cast) = joined(movie.top_cast.as_deref()) {
        details.push(detail("Cast", &cast));
    }

    MovieCard {
        title: movie.title.clone(),
        source: Provider::ScrapedMetadata.badge(),
        poster: None,
        details,
    }
}

fn result_list(results: &WebSearchResult) -> ResultList {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    ResultList {
        items: results
            .results
            .iter()
            .map(|item| ResultItem {
                title: text(&item.title),
                snippet: text(&item.snippet),
                link: text(&item.link),
            })
            .collect(),
    }
}

fn detail(label: &'static str, value: &str) -> Detail {
    Detail {
        label,
        value: value.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn joined(values: Option<&[String]>) -> Option<String> {
    values
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
        .filter(|v| !v.is_empty())
}

/// Plain-text rendering for terminals.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Idle(provider) => {
                write!(f, "Enter a search to query {}.", provider.label())
            }
            View::Loading => f.write_str(LOADING_TEXT),
            View::Error(message) => write!(f, "Error: {message}"),
            View::Movie(card) => {
                writeln!(f, "{} [{}]", card.title, card.source)?;
                if let Some(poster) = &card.poster {
                    writeln!(f, "  Poster: {poster}")?;
                }
                for d in &card.details {
                    writeln!(f, "  {}: {}", d.label, d.value)?;
                }
                Ok(())
            }
            View::Results(list) => {
                writeln!(f, "Search Results")?;
                for (index, item) in list.items.iter().enumerate() {
                    writeln!(f, "{}. {}", index + 1, item.title)?;
                    if !item.snippet.is_empty() {
                        writeln!(f, "   {}", item.snippet)?;
                    }
                    writeln!(f, "   {LINK_TEXT}: {}", item.link)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use marquee_search::{ScrapedMovie, WebSearchItem};

    use super::*;

    fn omdb(json: &str) -> RequestState {
        RequestState::Succeeded(
            SearchPayload::decode(Provider::StructuredMetadata, json.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn test_non_success_states() {
        assert_eq!(
            render(&RequestState::Idle, Provider::WebSearch),
            View::Idle(Provider::WebSearch)
        );
        assert_eq!(render(&RequestState::Pending, Provider::WebSearch), View::Loading);
        assert_eq!(
            render(&RequestState::Failed("Search failed".into()), Provider::WebSearch),
            View::Error("Search failed".into())
        );
    }

    #[test]
    fn test_inception_card_without_poster() {
        let state = omdb(r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Poster":"N/A"}"#);

        let View::Movie(card) = render(&state, Provider::StructuredMetadata) else {
            panic!("expected movie card");
        };
        assert_eq!(card.title, "Inception");
        assert_eq!(card.source, "OMDb");
        assert_eq!(card.detail("Year"), Some("2010"));
        assert_eq!(card.detail("IMDb Rating"), Some("8.8/10"));
        assert_eq!(card.poster, None);
        assert_eq!(card.details.len(), 2);
    }

    #[test]
    fn test_poster_and_absent_marker_fields() {
        let state = omdb(
            r#"{"Title":"Heat","Poster":"https://img/heat.jpg","Rated":"R","Runtime":"N/A",
                "Director":"Michael Mann","Genre":"","Plot":"N/A","imdbRating":"N/A"}"#,
        );

        let View::Movie(card) = render(&state, Provider::StructuredMetadata) else {
            panic!("expected movie card");
        };
        assert_eq!(card.poster.as_deref(), Some("https://img/heat.jpg"));
        assert_eq!(card.detail("Rated"), Some("R"));
        assert_eq!(card.detail("Director"), Some("Michael Mann"));
        assert_eq!(card.detail("Runtime"), None);
        assert_eq!(card.detail("Genre"), None);
        assert_eq!(card.detail("Plot"), None);
        assert_eq!(card.detail("IMDb Rating"), None);
    }

    #[test]
    fn test_detail_order_follows_card_layout() {
        let state = omdb(
            r#"{"Title":"T","Year":"1999","Rated":"R","Runtime":"136 min","Director":"D",
                "Cast":"C","Genre":"G","imdbRating":"8.7","Plot":"P"}"#,
        );
        let View::Movie(card) = render(&state, Provider::StructuredMetadata) else {
            panic!("expected movie card");
        };
        let labels: Vec<_> = card.details.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            ["Year", "Rated", "Runtime", "Director", "Cast", "Genre", "IMDb Rating", "Plot"]
        );
    }

    #[test]
    fn test_web_results_keep_order_and_empty_list() {
        let state = RequestState::Succeeded(SearchPayload::WebSearch(WebSearchResult {
            results: vec![
                WebSearchItem {
                    title: Some("T1".into()),
                    snippet: Some("S1".into()),
                    link: Some("L1".into()),
                },
                WebSearchItem {
                    title: Some("T2".into()),
                    snippet: None,
                    link: Some("L2".into()),
                },
            ],
        }));
        let View::Results(list) = render(&state, Provider::WebSearch) else {
            panic!("expected result list");
        };
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].link, "L1");
        assert_eq!(list.items[1].snippet, "");

        let empty = RequestState::Succeeded(SearchPayload::WebSearch(WebSearchResult {
            results: vec![],
        }));
        assert_eq!(
            render(&empty, Provider::WebSearch),
            View::Results(ResultList { items: vec![] })
        );
    }

    #[test]
    fn test_scraped_card_fallbacks() {
        let state = RequestState::Succeeded(SearchPayload::ScrapedMetadata(ScrapedMetadataResult {
            imdb_data: ScrapedMovie {
                title: "Dune".into(),
                rating: None,
                genres: Some(vec![]),
                summary: None,
                top_cast: None,
            },
        }));
        let View::Movie(card) = render(&state, Provider::ScrapedMetadata) else {
            panic!("expected movie card");
        };
        assert_eq!(card.source, "IMDb");
        assert_eq!(card.detail("Rating"), Some("N/A"));
        assert_eq!(card.detail("Genres"), Some("N/A"));
        assert_eq!(card.detail("Plot"), None);
        assert_eq!(card.detail("Cast"), None);
    }

    #[test]
    fn test_scraped_card_joins_lists() {
        let state = RequestState::Succeeded(SearchPayload::ScrapedMetadata(ScrapedMetadataResult {
            imdb_data: ScrapedMovie {
                title: "Dune".into(),
                rating: Some("8.0".into()),
                genres: Some(vec!["Action".into(), "Sci-Fi".into()]),
                summary: Some("Paul Atreides...".into()),
                top_cast: Some(vec!["Timothée Chalamet".into(), "Zendaya".into()]),
            },
        }));
        let View::Movie(card) = render(&state, Provider::ScrapedMetadata) else {
            panic!("expected movie card");
        };
        assert_eq!(card.detail("Rating"), Some("8.0"));
        assert_eq!(card.detail("Genres"), Some("Action, Sci-Fi"));
        assert_eq!(card.detail("Plot"), Some("Paul Atreides..."));
        assert_eq!(card.detail("Cast"), Some("Timothée Chalamet, Zendaya"));
    }

    #[test]
    fn test_payload_shape_wins_over_active_tab() {
        let state = omdb(r#"{"Title":"Inception"}"#);
        assert!(matches!(render(&state, Provider::WebSearch), View::Movie(_)));
    }

    #[test]
    fn test_text_rendering() {
        let state = omdb(r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8"}"#);
        let text = render(&state, Provider::StructuredMetadata).to_string();
        assert!(text.starts_with("Inception [OMDb]"));
        assert!(text.contains("IMDb Rating: 8.8/10"));

        let list = View::Results(ResultList {
            items: vec![ResultItem {
                title: "T1".into(),
                snippet: "S1".into(),
                link: "L1".into(),
            }],
        });
        assert!(list.to_string().contains("Visit Website: L1"));
        assert_eq!(View::Loading.to_string(), "Loading...");
    }
}
