//! Error handling for the skill-gap analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Skill matcher error: {0}")]
    Matcher(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillGapError>;
