//! Markdown report rendering for batches of sentiment results.

use crate::model::ToolSentimentResult;

const REPORT_TITLE: &str = "# Web3 Technology Perception Analysis\n\n";

const DISCLAIMER: &str = "---\nNote: This analysis is based on tweets from the last 7 days \
and may not reflect the actual technical performance of the technologies.";

/// Render a batch of results as a markdown report grouped by category.
///
/// Categories appear in first-seen order; within a category, results keep
/// their input order. A fixed data-freshness disclaimer closes the report.
pub fn format_results(results: &[ToolSentimentResult]) -> String {
    let mut report = String::from(REPORT_TITLE);

    let mut groups: Vec<(&str, Vec<&ToolSentimentResult>)> = Vec::new();
    for result in results {
        match groups.iter_mut().find(|(c, _)| *c == result.category) {
            Some((_, members)) => members.push(result),
            None => groups.push((result.category.as_str(), vec![result])),
        }
    }

    for (category, members) in &groups {
        report.push_str(&format!("## {}\n\n", category));

        for result in members {
            report.push_str(&format!("### {} - {}\n\n", result.tool, result.sentiment));
            report.push_str(&format!(
                "- Total tweets analyzed: {}\n",
                result.tweet_count
            ));
            report.push_str(&format!("- Sentiment: {}\n\n", result.sentiment));

            if let Some(insights) = &result.insights {
                report.push_str(&format!("**MASA API Analysis:**\n{}\n\n", insights));
            }
        }
    }

    report.push_str(DISCLAIMER);
    report
}
