//! Skill vocabulary: the fixed table of phrases the extractor recognizes

use crate::error::{Result, SkillGapError};
use crate::processing::text_processor::TextProcessor;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Built-in vocabulary. Entries written with capitals keep that casing as
/// their display label.
pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "python", "JavaScript", "TypeScript", "java", "C++", "C#", "go", "rust",
    "ruby", "PHP", "swift", "kotlin", "scala", "SQL", "HTML", "CSS", "bash",

    // Web frameworks
    "react", "angular", "vue", "Node.js", "express", "django", "flask",
    "FastAPI", "spring boot", "GraphQL", "REST", "tailwind",

    // Data and machine learning
    "machine learning", "deep learning", "data analysis", "data science",
    "NLP", "natural language processing", "computer vision", "TensorFlow",
    "PyTorch", "pandas", "NumPy", "scikit-learn", "spark", "hadoop", "kafka",
    "airflow", "tableau", "Power BI", "excel",

    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "redis", "SQLite", "elasticsearch",

    // Infrastructure
    "docker", "kubernetes", "AWS", "azure", "GCP", "terraform", "ansible",
    "jenkins", "git", "linux", "CI/CD", "microservices", "DevOps",

    // Testing
    "pytest", "selenium", "unit testing",

    // Process
    "agile", "scrum", "jira",

    // Soft skills
    "communication", "leadership", "teamwork", "problem solving",
    "project management", "time management", "critical thinking",
];

/// One recognizable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Lowercase, whitespace-collapsed phrase; the comparison key.
    pub phrase: String,
    /// Display casing used in every result.
    pub label: String,
    /// Word tokens the phrase must appear as, contiguously.
    pub tokens: Vec<String>,
}

/// Ordered set of skill phrases, unique ignoring case and spacing.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
    index: HashMap<String, usize>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for skill in skills {
            vocabulary.insert(skill.as_ref());
        }

        vocabulary
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    /// Add a skill. Returns false when it duplicates an existing entry or has
    /// no word characters at all.
    pub fn insert(&mut self, skill: &str) -> bool {
        let processor = TextProcessor::shared();
        let phrase = processor.normalize(skill);
        let tokens = processor.tokenize(&phrase);

        if tokens.is_empty() {
            warn!("Ignoring vocabulary entry without word characters: {:?}", skill);
            return false;
        }

        if self.index.contains_key(&phrase) {
            debug!("Skipping duplicate vocabulary entry: {}", skill);
            return false;
        }

        let label = display_label(skill);
        self.index.insert(phrase.clone(), self.entries.len());
        self.entries.push(SkillEntry {
            phrase,
            label,
            tokens,
        });

        true
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn entry(&self, id: usize) -> Option<&SkillEntry> {
        self.entries.get(id)
    }

    /// Look a skill up by any casing or spacing of its phrase
    pub fn find(&self, skill: &str) -> Option<&SkillEntry> {
        let phrase = TextProcessor::shared().normalize(skill);
        self.index.get(&phrase).map(|&id| &self.entries[id])
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.find(skill).is_some()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Display casing for a skill name.
///
/// Names that already carry capitals are kept as written ("SQL", "C++");
/// all-lowercase names get each word capitalized ("machine learning" →
/// "Machine Learning").
pub fn display_label(skill: &str) -> String {
    let words: Vec<&str> = skill.split_whitespace().collect();

    if skill.chars().any(char::is_uppercase) {
        return words.join(" ");
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Read a skills file: one skill per line, blank lines and `#` comments
/// ignored.
pub fn read_skills_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SkillGapError::Vocabulary(format!(
            "Failed to read skills file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
