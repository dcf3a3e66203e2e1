/// Fill the equity-research prompt with the user's query and the assembled
/// article descriptions.
pub fn render_prompt(query: &str, summaries: &str) -> String {
    format!(
        r#"
You are an AI assistant helping an equity research analyst. 

Query: {query}

News Article Summaries:
{summaries}

Please provide a concise, professional summary of the key insights from these news articles. 
Focus on the most important information relevant to equity research.

Summary:
"#,
        query = query,
        summaries = summaries
    )
}
