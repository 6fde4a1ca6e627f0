use crate::application::read_models::{ContentView, ReportReadModel, ReportSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for reviewed content
const TABLE_HEADER: &str = "| Content | License | Score | Authority | Status |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|-------|-----------|--------|\n";

/// MarkdownFormatter adapter for a human-readable license report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str("# License Review Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &ReportSummary) {
        output.push_str("## Summary\n\n");
        output.push_str("| Outcome | Count |\n");
        output.push_str("|---------|-------|\n");
        for (label, count) in [
            ("Approved", summary.approved),
            ("Restricted", summary.restricted),
            ("Not reviewed", summary.unreviewed),
            ("Unresolved", summary.unresolved),
            ("Invalid", summary.invalid),
            ("Total", summary.total),
        ] {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }
        output.push('\n');
    }

    fn render_contents(&self, output: &mut String, contents: &[ContentView]) {
        output.push_str("## Reviewed Content\n\n");
        if contents.is_empty() {
            output.push_str("No content was reviewed.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for content in contents {
            let license = content.license.as_deref().unwrap_or("N/A");
            let score = content
                .score
                .map_or_else(|| "N/A".to_string(), |s| s.to_string());
            let status = content.status.map_or("unknown", |s| s.as_str());

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&content.id),
                Self::escape_markdown_table_cell(license),
                score,
                Self::escape_markdown_table_cell(&content.authority),
                status
            ));
        }
        output.push('\n');
    }

    fn render_id_list(&self, output: &mut String, title: &str, intro: &str, ids: &[String]) {
        if ids.is_empty() {
            return;
        }

        output.push_str(&format!("## {}\n\n", title));
        output.push_str(intro);
        output.push_str("\n\n");
        for id in ids {
            output.push_str(&format!("- `{}`\n", id.replace('`', "'")));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);
        self.render_contents(&mut output, &model.contents);
        self.render_id_list(
            &mut output,
            "Unresolved Content",
            "ClearlyDefined has no harvested definition for these ids.",
            &model.unresolved,
        );
        self.render_id_list(
            &mut output,
            "Invalid Content Ids",
            "These input lines could not be parsed as content ids.",
            &model.invalid_ids,
        );

        Ok(output)
    }
}
