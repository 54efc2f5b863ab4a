//! Configuration management for the skill-gap analyzer

use crate::error::{Result, SkillGapError};
use crate::processing::section_analyzer::{DEFAULT_EDUCATION_KEYWORDS, DEFAULT_EXPERIENCE_KEYWORDS};
use crate::processing::vocabulary::{read_skills_file, SkillVocabulary, DEFAULT_SKILLS};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub sections: SectionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Base skill list
    pub skills: Vec<String>,
    /// Appended after `skills`
    #[serde(default)]
    pub extra_skills: Vec<String>,
    /// One skill per line, appended last
    #[serde(default)]
    pub skills_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub experience_keywords: Vec<String>,
    pub education_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig {
                skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
                extra_skills: Vec::new(),
                skills_file: None,
            },
            sections: SectionConfig {
                experience_keywords: DEFAULT_EXPERIENCE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
                education_keywords: DEFAULT_EDUCATION_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            info!("Created default configuration at {}", config_path.display());
            Ok(config)
        }
    }

    /// Load a config file without falling back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to parse config '{}': {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap")
            .join("config.toml")
    }

    /// Assemble the vocabulary: base skills, then extras, then the skills file.
    /// Duplicates across the three sources are dropped.
    pub fn build_vocabulary(&self) -> Result<SkillVocabulary> {
        let mut vocabulary = SkillVocabulary::new(
            self.vocabulary
                .skills
                .iter()
                .chain(self.vocabulary.extra_skills.iter()),
        );

        if let Some(path) = &self.vocabulary.skills_file {
            for skill in read_skills_file(path)? {
                vocabulary.insert(&skill);
            }
        }

        if vocabulary.is_empty() {
            return Err(SkillGapError::Configuration(
                "Skill vocabulary is empty".to_string(),
            ));
        }

        info!("Loaded skill vocabulary with {} entries", vocabulary.len());
        Ok(vocabulary)
    }
}
