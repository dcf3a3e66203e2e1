use nr_core::Article;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use crate::research::ResearchOutcome;

pub const CREDENTIALS_HINT: &str = "Please check your API keys in the .env file";

/// What the results area of the page shows.
#[derive(Debug)]
pub enum PageContent {
    Form,
    Outcome(ResearchOutcome),
    Failure(String),
}

const HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>News Research Tool</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>📰</text></svg>">
    <style>
        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; color: #262730; display: flex; min-height: 100vh; }
        aside { width: 300px; background: #f0f2f6; padding: 24px; box-sizing: border-box; }
        main { flex: 1; padding: 32px 48px; max-width: 1100px; }
        hr { border: none; border-top: 1px solid #e6e6e6; margin: 24px 0; }
        input[type=text] { width: 100%; padding: 10px; font-size: 16px; box-sizing: border-box; border: 1px solid #ccc; border-radius: 6px; }
        .help { color: #808495; font-size: 13px; margin: 4px 0 12px; }
        button { background: #ff4b4b; color: #fff; border: none; border-radius: 6px; padding: 10px 18px; font-size: 15px; cursor: pointer; }
        .notice { padding: 12px 16px; border-radius: 6px; margin: 16px 0; }
        .warning { background: #fffce7; color: #926c05; }
        .success { background: #e8f9ee; color: #177233; }
        .error { background: #ffecec; color: #7d353b; }
        .info { background: #e6f1fb; color: #0b4f8a; }
        .narrative { line-height: 1.5; }
        details { border: 1px solid #e6e6e6; border-radius: 6px; padding: 10px 14px; margin: 8px 0; }
        summary { cursor: pointer; font-weight: 600; }
        #spinner { margin: 16px 0; color: #555; }
        #spinner::before { content: ""; display: inline-block; width: 14px; height: 14px; margin-right: 8px; border: 2px solid #ccc; border-top-color: #ff4b4b; border-radius: 50%; animation: spin 0.8s linear infinite; vertical-align: middle; }
        @keyframes spin { to { transform: rotate(360deg); } }
        .caption { color: #808495; font-size: 13px; }
    </style>
</head>
<body>
"##;

const SIDEBAR: &str = r##"<aside>
    <h2>ℹ️ About</h2>
    <p>This tool uses:</p>
    <ul>
        <li><strong>NewsAPI</strong> for fetching articles</li>
        <li><strong>OpenAI GPT</strong> for summarization</li>
        <li><strong>axum</strong> for the interface</li>
    </ul>
    <hr>
    <h2>💡 Tips</h2>
    <ul>
        <li>Use specific company names for best results</li>
        <li>Try stock symbols (e.g., AAPL, TSLA)</li>
        <li>Search for industry trends</li>
        <li>Look up recent earnings reports</li>
    </ul>
    <hr>
    <p class="caption">Built with ❤️ using Rust</p>
</aside>
"##;

const INTRO: &str = r##"<h1>📰 Equity Research News Tool</h1>
    <p>This tool helps you research companies and topics by:</p>
    <ul>
        <li>Fetching the latest news articles</li>
        <li>Summarizing key insights using AI</li>
        <li>Providing equity research perspective</li>
    </ul>
    <hr>
"##;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Only web links are rendered as clickable hrefs.
fn safe_href(url: &str) -> String {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        escape_html(url)
    } else {
        "#".to_string()
    }
}

/// Render model output as Markdown. Raw HTML in the source is shown as text
/// and links to anything but web URLs are dropped.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            let dest_url = if safe_href(&dest_url) == "#" {
                CowStr::Borrowed("#")
            } else {
                dest_url
            };
            Event::Start(Tag::Link { link_type, dest_url, title, id })
        }
        other => other,
    });

    let mut rendered = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    rendered
}

fn notice(kind: &str, text: &str) -> String {
    format!("<div class=\"notice {}\">{}</div>\n", kind, escape_html(text))
}

fn render_form(query: &str) -> String {
    format!(
        r#"<h3>Enter Your Research Query</h3>
    <form method="post" action="/research" onsubmit="document.getElementById('spinner').hidden = false;">
        <label for="query">What would you like to research?</label>
        <input type="text" id="query" name="query" value="{}" placeholder="e.g., Tesla earnings, Apple stock, tech industry trends">
        <p class="help">Enter a company name, stock symbol, or topic</p>
        <button type="submit">🔍 Get News Summary</button>
    </form>
    <div id="spinner" hidden>Fetching and analyzing news articles...</div>
"#,
        escape_html(query)
    )
}

fn render_article(index: usize, article: &Article) -> String {
    format!(
        r#"<details>
        <summary>Article {}: {}</summary>
        <p><strong>Source:</strong> {}</p>
        <p><strong>Published:</strong> {}</p>
        <p><strong>Description:</strong> {}</p>
        <p><strong><a href="{}" target="_blank" rel="noopener">Read full article</a></strong></p>
    </details>
"#,
        index,
        escape_html(&article.title),
        escape_html(article.source_name()),
        article.published_date(),
        escape_html(article.description_or_default()),
        safe_href(&article.url)
    )
}

fn render_outcome(outcome: &ResearchOutcome) -> String {
    match outcome {
        ResearchOutcome::EmptyQuery => notice("warning", "⚠️ Please enter a query to search."),
        ResearchOutcome::NoArticles { .. } => notice(
            "warning",
            "⚠️ No articles found for this query. Try a different search term.",
        ),
        ResearchOutcome::Completed { result, articles } => {
            let mut html = notice("success", "✅ Analysis Complete!");
            html.push_str("<h3>📊 AI-Generated Summary</h3>\n");
            html.push_str(&format!(
                "<div class=\"narrative\">{}</div>\n",
                render_markdown(&result.narrative)
            ));
            html.push_str("<hr>\n<h3>📄 Source Articles</h3>\n");
            for (i, article) in articles.iter().take(nr_news::MAX_ARTICLES).enumerate() {
                html.push_str(&render_article(i + 1, article));
            }
            html
        }
    }
}

/// Render the full page, echoing `query` back into the input.
pub fn render_page(query: &str, content: &PageContent) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<main>\n    ");
    html.push_str(INTRO);
    html.push_str(&render_form(query));

    match content {
        PageContent::Form => {}
        PageContent::Outcome(outcome) => html.push_str(&render_outcome(outcome)),
        PageContent::Failure(message) => {
            html.push_str(&notice("error", &format!("❌ An error occurred: {}", message)));
            html.push_str(&notice("info", CREDENTIALS_HINT));
        }
    }

    html.push_str("</main>\n");
    html.push_str(SIDEBAR);
    html.push_str("</body>\n</html>\n");
    html
}
