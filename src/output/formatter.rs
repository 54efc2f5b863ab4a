//! Output formatters for gap analysis reports

use crate::config::OutputFormat;
use crate::error::{Result, SkillGapError};
use crate::output::record::AnalysisRecord;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis records
pub trait OutputFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Verdict shown next to the match percentage
pub fn match_verdict(match_percent: f64) -> &'static str {
    match match_percent {
        p if p >= 90.0 => "EXCELLENT",
        p if p >= 70.0 => "GOOD",
        p if p >= 50.0 => "FAIR",
        _ => "POOR",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, match_percent: f64) -> String {
        let verdict = match_verdict(match_percent);
        let color = match verdict {
            "EXCELLENT" => Color::Green,
            "GOOD" => Color::BrightGreen,
            "FAIR" => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", verdict.color(color).bold())
        } else {
            format!("[{}]", verdict)
        }
    }

    fn format_skill_list(&self, skills: &[String], color: Color) -> String {
        if skills.is_empty() {
            return "  (none)\n".to_string();
        }

        skills
            .iter()
            .map(|skill| format!("  • {}\n", self.colorize(skill, color)))
            .collect()
    }

    fn yes_no(&self, value: bool) -> String {
        if value {
            self.colorize("yes", Color::Green)
        } else {
            self.colorize("no", Color::Red)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        let result = &record.result;
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Resume: {} | Job: {}\n",
            record.resume_source, record.job_source
        ));
        output.push_str(&format!(
            "Generated: {}\n",
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Match", 2));
        output.push_str(&format!(
            "Match: {:.2}% {} ({} of {} required skills)\n",
            result.match_percent,
            self.format_score_badge(result.match_percent),
            result.matched_count(),
            result.job_skills.len()
        ));

        output.push_str(&self.format_header("Missing Skills", 2));
        output.push_str(&self.format_skill_list(&result.missing_skills, Color::Red));

        if self.detailed {
            output.push_str(&self.format_header("Resume Skills", 3));
            output.push_str(&self.format_skill_list(&result.resume_skills, Color::Cyan));

            output.push_str(&self.format_header("Job Skills", 3));
            output.push_str(&self.format_skill_list(&result.job_skills, Color::Cyan));
        }

        output.push_str(&self.format_header("Resume Overview", 2));
        output.push_str(&format!("  Experience section: {}\n", self.yes_no(result.resume_overview.has_experience)));
        output.push_str(&format!("  Education section:  {}\n", self.yes_no(result.resume_overview.has_education)));
        output.push_str(&format!("  Years of experience: {}\n", result.resume_overview.years_experience));

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, recommendation));
        }

        Ok(output)
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
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };

        json.map_err(|e| SkillGapError::OutputFormatting(format!("Failed to render JSON report: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(items: &[String]) -> String {
        if items.is_empty() {
            return "_None_\n".to_string();
        }
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        let result = &record.result;
        let mut output = String::new();

        output.push_str("# Skill Gap Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                record.resume_source,
                record.job_source
            ));
        }

        output.push_str(&format!(
            "**Match:** {:.2}% ({}) | {} of {} required skills\n\n",
            result.match_percent,
            match_verdict(result.match_percent),
            result.matched_count(),
            result.job_skills.len()
        ));

        output.push_str("## Skills\n\n");
        output.push_str("| Skill | In resume |\n");
        output.push_str("|-------|-----------|\n");
        for skill in &result.job_skills {
            let present = if result.missing_skills.contains(skill) { "❌" } else { "✅" };
            output.push_str(&format!("| {} | {} |\n", skill, present));
        }
        output.push('\n');

        output.push_str("### Missing Skills\n\n");
        output.push_str(&Self::bullet_list(&result.missing_skills));
        output.push('\n');

        output.push_str("### Resume Skills\n\n");
        output.push_str(&Self::bullet_list(&result.resume_skills));
        output.push('\n');

        output.push_str("## Resume Overview\n\n");
        output.push_str(&format!("- Experience section: {}\n", result.resume_overview.has_experience));
        output.push_str(&format!("- Education section: {}\n", result.resume_overview.has_education));
        output.push_str(&format!("- Years of experience: {}\n\n", result.resume_overview.years_experience));

        output.push_str("## Recommendations\n\n");
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, record: &AnalysisRecord, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(record),
            OutputFormat::Json => self.json_formatter.format_report(record),
            OutputFormat::Markdown => self.markdown_formatter.format_report(record),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_gap{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_gap{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_gap{}.md", base_name, timestamp_suffix),
    }
}
