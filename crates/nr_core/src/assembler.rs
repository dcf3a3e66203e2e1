use crate::types::Article;

/// Join the descriptions of `articles` with single spaces, in order.
///
/// Articles without a description (or with an empty one) contribute nothing,
/// so the result is empty when no article carries a description.
pub fn assemble_text(articles: &[Article]) -> String {
    articles
        .iter()
        .filter_map(|a| a.description.as_deref())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
