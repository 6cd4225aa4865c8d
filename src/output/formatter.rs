//! Output formatters for flag reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::FlagReport;
use colored::Colorize;
use std::path::Path;

/// Trait for formatting flag reports
pub trait OutputFormatter {
    fn format_report(&self, report: &FlagReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and per-candidate detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and review threads
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, warn: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if warn {
            text.yellow().to_string()
        } else {
            text.bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FlagReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.paint("🔍 Candidate Duplicate Flag Report", false));
        out.push('\n');
        out.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("Records scanned: {}\n", report.total_records));
        out.push_str(&format!("Flagged candidates: {}\n", report.flagged_count));

        if report.candidates.is_empty() {
            out.push_str("\n✅ No duplicate candidates detected\n");
            return Ok(out);
        }

        out.push('\n');
        for candidate in &report.candidates {
            let who = match &candidate.name {
                Some(name) => format!("#{} ({})", candidate.id, name),
                None => format!("#{}", candidate.id),
            };
            out.push_str(&self.paint(&format!("⚠️  {}: {}", who, candidate.summary), true));
            out.push('\n');

            if self.detailed {
                let mut reasons: Vec<_> = candidate.reasons.clone();
                reasons.sort();
                for reason in reasons {
                    if let Some(others) = candidate.flagged_with.get(&reason) {
                        let ids: Vec<String> =
                            others.iter().map(|id| format!("#{}", id)).collect();
                        out.push_str(&format!(
                            "    {} shared with: {}\n",
                            reason.label(),
                            ids.join(", ")
                        ));
                    }
                }
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FlagReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FlagReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Candidate Duplicate Flag Report\n\n");
        out.push_str(&format!(
            "- Generated: {}\n- Records scanned: {}\n- Flagged candidates: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.total_records,
            report.flagged_count
        ));

        if report.candidates.is_empty() {
            out.push_str("No duplicate candidates detected.\n");
            return Ok(out);
        }

        out.push_str("| ID | Name | Flag | Shared with |\n");
        out.push_str("|----|------|------|-------------|\n");
        for candidate in &report.candidates {
            let mut shared: Vec<i64> = candidate
                .flagged_with
                .values()
                .flatten()
                .copied()
                .collect();
            shared.sort_unstable();
            shared.dedup();
            let shared: Vec<String> = shared.iter().map(|id| id.to_string()).collect();

            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                candidate.id,
                candidate.name.as_deref().unwrap_or("-"),
                candidate.summary,
                shared.join(", ")
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates formatters and optional file output
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format_as(&self, report: &FlagReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
