use nr_web::ResearchOutcome;

/// Text rendering of an outcome: `(stdout, stderr)`.
pub fn render(outcome: &ResearchOutcome) -> (String, String) {
    match outcome {
        ResearchOutcome::EmptyQuery => (
            String::new(),
            "⚠️ Please enter a query to search.\n".to_string(),
        ),
        ResearchOutcome::NoArticles { .. } => (
            String::new(),
            "⚠️ No articles found for this query. Try a different search term.\n".to_string(),
        ),
        ResearchOutcome::Completed { result, articles } => {
            let mut out = String::new();
            out.push_str("📊 AI-Generated Summary\n\n");
            out.push_str(&result.narrative);
            if !result.narrative.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("\n📄 Source Articles\n");
            for (i, article) in articles.iter().take(nr_news::MAX_ARTICLES).enumerate() {
                out.push_str(&format!(
                    "\nArticle {}: {}\n  Source: {}\n  Published: {}\n  Description: {}\n  {}\n",
                    i + 1,
                    article.title,
                    article.source_name(),
                    article.published_date(),
                    article.description_or_default(),
                    article.url
                ));
            }
            (out, String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nr_core::{Article, ArticleSource, QueryResult};

    fn article(title: &str, description: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            source: ArticleSource { id: None, name: "Bloomberg".to_string() },
            author: None,
            description: description.map(str::to_string),
            url: "https://example.com/a".to_string(),
            url_to_image: None,
            published_at: Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap(),
            content: None,
        }
    }

    #[test]
    fn test_completed_report() {
        let outcome = ResearchOutcome::Completed {
            result: QueryResult {
                query: "Apple stock".to_string(),
                assembled_text: "A".to_string(),
                narrative: "Apple shares rallied.\n".to_string(),
            },
            articles: vec![article("One", Some("A")), article("Two", None)],
        };
        let (out, err) = render(&outcome);
        assert!(err.is_empty());
        assert!(out.contains("Apple shares rallied.\n\n📄 Source Articles"));
        assert!(out.contains("Article 1: One\n  Source: Bloomberg\n  Published: 2024-01-31\n  Description: A\n"));
        assert!(out.contains("Article 2: Two"));
        assert!(out.contains("Description: No description available"));
    }

    #[test]
    fn test_narrative_printed_verbatim() {
        let outcome = ResearchOutcome::Completed {
            result: QueryResult {
                query: "Apple stock".to_string(),
                assembled_text: String::new(),
                narrative: "  **Indented** summary  ".to_string(),
            },
            articles: vec![article("One", None)],
        };
        let (out, _) = render(&outcome);
        assert!(out.contains("\n\n  **Indented** summary  \n\n📄 Source Articles"));
    }

    #[test]
    fn test_warnings_go_to_stderr() {
        let (out, err) = render(&ResearchOutcome::NoArticles { fetch_error: Some("boom".to_string()) });
        assert!(out.is_empty());
        assert!(err.contains("No articles found"));

        let (out, err) = render(&ResearchOutcome::EmptyQuery);
        assert!(out.is_empty());
        assert!(err.contains("Please enter a query"));
    }
}
