//! Provider tabs and the search bar

use marquee_search::query::{MIN_YEAR, current_year};
use marquee_search::{Provider, providers};

/// Renders the provider tab strip with `active` highlighted.
///
/// Clicking a tab swaps the controls through `/tab` without issuing a search.
pub fn provider_tabs(active: Provider) -> String {
    let tabs: String = providers()
        .iter()
        .map(|info| {
            let style = if info.provider == active {
                "bg-marquee-500 text-gray-900"
            } else {
                "bg-gray-800 text-gray-300 hover:bg-gray-700"
            };
            format!(
                r##"<button type="button" class="px-4 py-2 rounded-lg font-medium transition-colors {style}"
                    hx-get="/tab?provider={id}" hx-target="#search-controls" hx-swap="outerHTML"
                    data-provider="{id}">{label}</button>"##,
                id = info.provider.id(),
                label = html_escape::encode_text(info.label),
            )
        })
        .collect();

    format!(r#"<nav class="flex space-x-2 mb-6" role="tablist">{tabs}</nav>"#)
}

/// Renders the search form for `provider`.
///
/// The year input is left out for providers that ignore it, so it is never
/// submitted for them.
pub fn search_bar(provider: Provider) -> String {
    let placeholder = match provider {
        Provider::WebSearch => "Search the web for movies...",
        _ => "Enter a movie title...",
    };

    let year_input = if provider.accepts_year() {
        format!(
            r#"<input type="number" name="year" placeholder="Year" min="{MIN_YEAR}" max="{}"
                class="w-28 bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 text-white">"#,
            current_year()
        )
    } else {
        String::new()
    };

    format!(
        r##"<form class="flex space-x-4" hx-get="/search" hx-target="#results" hx-indicator="#loading">
            <input type="hidden" name="provider" value="{id}">
            <input type="text" name="query" placeholder="{placeholder}" required
                class="flex-1 bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 text-white">
            {year_input}
            <button type="submit" class="bg-marquee-500 hover:bg-marquee-600 text-gray-900 font-medium px-6 py-2 rounded-lg">Search</button>
        </form>"##,
        id = provider.id(),
    )
}

/// Tabs and search bar together, the unit swapped on a tab change.
pub fn controls(active: Provider) -> String {
    format!(
        r#"<section id="search-controls" class="max-w-4xl mx-auto px-4 py-8">
            {}
            {}
        </section>"#,
        provider_tabs(active),
        search_bar(active)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_registry_order_with_active_marked() {
        let html = provider_tabs(Provider::WebSearch);
        let omdb = html.find(">OMDb<").unwrap();
        let web = html.find(">Web Search<").unwrap();
        let imdb = html.find(">IMDb<").unwrap();
        assert!(omdb < web && web < imdb);
        assert_eq!(html.matches("bg-marquee-500").count(), 1);
    }

    #[test]
    fn test_year_input_hidden_for_web_search() {
        assert!(search_bar(Provider::StructuredMetadata).contains(r#"name="year""#));
        assert!(search_bar(Provider::ScrapedMetadata).contains(r#"min="1900""#));
        assert!(!search_bar(Provider::WebSearch).contains(r#"name="year""#));
    }

    #[test]
    fn test_search_bar_carries_provider_id() {
        let html = search_bar(Provider::ScrapedMetadata);
        assert!(html.contains(r#"name="provider" value="imdb""#));
    }
}
