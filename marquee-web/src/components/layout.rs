//! Page shell and hero banner

use axum::response::Html;

/// Renders the hero banner shown above the search controls.
pub fn hero() -> String {
    r#"<div class="hero-section bg-gray-800 border-b border-gray-700">
            <div class="max-w-4xl mx-auto px-4 py-12">
                <h1 class="text-4xl font-bold text-white">Smart Movie Finder</h1>
                <p class="text-marquee-400 text-lg mt-2">Your personalized movie discovery companion</p>
                <p class="text-gray-400 mt-2">Search movies from multiple sources and get detailed information instantly</p>
            </div>
        </div>"#
        .to_string()
}

/// Wraps page content in the full HTML document.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let title = html_escape::encode_text(title);
    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    400: '#f5c451',
                                    500: '#e5a823',
                                    600: '#c98d12'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ display: none; }}
                .htmx-request .htmx-indicator {{ display: block; }}
                .htmx-request.htmx-indicator {{ display: block; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen">
            {content}
        </body>
        </html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_title_and_embeds_content() {
        let Html(page) = render_page("<Search>", "<main>body</main>");
        assert!(page.contains("<title>&lt;Search&gt; - Marquee</title>"));
        assert!(page.contains("<main>body</main>"));
    }

    #[test]
    fn test_hero_copy() {
        let html = hero();
        assert!(html.contains("Smart Movie Finder"));
        assert!(html.contains("Your personalized movie discovery companion"));
    }
}
