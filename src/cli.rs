//! CLI interface for the skill gap analyzer

use crate::config::OutputFormat;
use crate::input::file_detector::FileType;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skill-gap")]
#[command(about = "Resume and job description skill gap analyzer")]
#[command(long_about = "Compare the skills named in a resume with those a job description asks for, score the match and suggest what to learn next")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the skill gap between a resume and a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the formatted report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Write the analysis record as JSON
        #[arg(long)]
        record: Option<PathBuf>,

        /// Include the full resume and job skill lists
        #[arg(short, long)]
        detailed: bool,
    },

    /// Skill vocabulary commands
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// List the skills in the active vocabulary
    List,

    /// Extract the known skills from a document
    Extract {
        /// Path to a PDF, TXT or MD file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Check that a document is in a format the input layer can read
pub fn validate_document(path: &Path) -> Result<(), String> {
    match FileType::from_path(path) {
        FileType::Unknown => Err(format!(
            "Unsupported document: {}. Supported extensions: pdf, txt, text, md, markdown",
            path.display()
        )),
        _ => Ok(()),
    }
}
