//! Resume section heuristics: experience, education and years of experience

use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reported when no "N years" mention is found.
pub const YEARS_NOT_SPECIFIED: &str = "Not specified";

pub const DEFAULT_EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience", "worked", "intern", "project", "developer", "engineer",
];

pub const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "university", "college", "degree", "school",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOverview {
    pub has_experience: bool,
    pub has_education: bool,
    pub years_experience: String,
}

impl Default for SectionOverview {
    fn default() -> Self {
        Self {
            has_experience: false,
            has_education: false,
            years_experience: YEARS_NOT_SPECIFIED.to_string(),
        }
    }
}

pub struct SectionAnalyzer {
    experience_keywords: Vec<String>,
    education_keywords: Vec<String>,
    years_regex: Regex,
}

impl Default for SectionAnalyzer {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXPERIENCE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_EDUCATION_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl SectionAnalyzer {
    pub fn new(experience_keywords: Vec<String>, education_keywords: Vec<String>) -> Self {
        let years_regex = Regex::new(r"\b(\d+)\+?\s*years?")
            .expect("Invalid years of experience regex");

        Self {
            experience_keywords: Self::normalize_keywords(experience_keywords),
            education_keywords: Self::normalize_keywords(education_keywords),
            years_regex,
        }
    }

    /// Derive the section overview of a resume
    pub fn analyze<'a>(&self, resume_text: impl Into<Option<&'a str>>) -> SectionOverview {
        let normalized = match resume_text.into() {
            Some(text) => TextProcessor::shared().normalize(text),
            None => return SectionOverview::default(),
        };

        SectionOverview {
            has_experience: Self::contains_any(&normalized, &self.experience_keywords),
            has_education: Self::contains_any(&normalized, &self.education_keywords),
            years_experience: self.years_of_experience(&normalized),
        }
    }

    /// First "N years" figure in the text; later mentions are ignored
    pub fn years_of_experience(&self, normalized: &str) -> String {
        self.years_regex
            .captures(normalized)
            .and_then(|caps| caps.get(1))
            .map(|years| years.as_str().to_string())
            .unwrap_or_else(|| YEARS_NOT_SPECIFIED.to_string())
    }

    pub fn experience_keywords(&self) -> &[String] {
        &self.experience_keywords
    }

    pub fn education_keywords(&self) -> &[String] {
        &self.education_keywords
    }

    fn contains_any(text: &str, keywords: &[String]) -> bool {
        keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
        let processor = TextProcessor::shared();
        keywords
            .iter()
            .map(|k| processor.normalize(k))
            .filter(|k| !k.is_empty())
            .collect()
    }
}
