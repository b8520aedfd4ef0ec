//! Result region: loading, error, movie card and web result list

use marquee_search::Provider;

use crate::presenter::{LINK_TEXT, LOADING_TEXT, MovieCard, ResultList, View};

/// Renders the whole result region for a view.
pub fn result_region(view: &View) -> String {
    let inner = match view {
        View::Idle(provider) => format!(
            r#"<p class="text-gray-500 text-center py-12">Search {} to get started</p>"#,
            html_escape::encode_text(provider.label())
        ),
        View::Loading => loading(),
        View::Error(message) => error(message),
        View::Movie(card) => movie_card(card),
        View::Results(list) => search_results(list),
    };

    format!(r#"<div id="results" class="max-w-4xl mx-auto px-4 pb-12">{inner}</div>"#)
}

pub fn loading() -> String {
    format!(
        r#"<div class="flex justify-center py-12" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-marquee-500"></div>
            <span class="sr-only">{LOADING_TEXT}</span>
        </div>"#
    )
}

pub fn error(message: &str) -> String {
    format!(
        r#"<div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg p-4" role="alert">{}</div>"#,
        html_escape::encode_text(message)
    )
}

/// Renders a single-movie card with its optional poster and detail rows.
pub fn movie_card(card: &MovieCard) -> String {
    let poster = card
        .poster
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" class="w-48 rounded-lg flex-shrink-0">"#,
                html_escape::encode_double_quoted_attribute(url),
                html_escape::encode_double_quoted_attribute(&card.title)
            )
        })
        .unwrap_or_default();

    let details: String = card
        .details
        .iter()
        .map(|d| {
            format!(
                r#"<div><dt class="text-gray-400 text-sm">{}</dt><dd class="text-white">{}</dd></div>"#,
                d.label,
                html_escape::encode_text(&d.value)
            )
        })
        .collect();

    format!(
        r#"<article class="bg-gray-800 border border-gray-700 rounded-lg p-6 flex space-x-6">
            {poster}
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-2xl font-semibold text-white">{}</h2>
                    <span class="text-xs bg-marquee-500 text-gray-900 px-2 py-1 rounded">{}</span>
                </div>
                <dl class="space-y-2">{details}</dl>
            </div>
        </article>"#,
        html_escape::encode_text(&card.title),
        card.source
    )
}

/// Renders the web result list. An empty list still renders its container.
pub fn search_results(list: &ResultList) -> String {
    let items: String = list
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<li class="bg-gray-800 border border-gray-700 rounded-lg p-4">
                    <h3 class="text-white font-medium">{}</h3>
                    <p class="text-gray-400 text-sm mt-1">{}</p>
                    <a href="{}" target="_blank" rel="noopener noreferrer" class="text-marquee-400 text-sm mt-2 inline-block">{LINK_TEXT}</a>
                </li>"#,
                html_escape::encode_text(&item.title),
                html_escape::encode_text(&item.snippet),
                html_escape::encode_double_quoted_attribute(&item.link)
            )
        })
        .collect();

    format!(
        r#"<section>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold text-white">Search Results</h2>
                <span class="text-xs bg-marquee-500 text-gray-900 px-2 py-1 rounded">{}</span>
            </div>
            <ul class="space-y-4">{items}</ul>
        </section>"#,
        Provider::WebSearch.badge()
    )
}
