//! Skill extraction: boundary-aware phrase matching against the vocabulary

use crate::error::{Result, SkillGapError};
use crate::processing::text_processor::TextProcessor;
use crate::processing::vocabulary::{SkillEntry, SkillVocabulary};
use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Separator placed between tokens in the search haystack and around every
/// pattern, so a pattern can only line up with whole tokens.
const TOKEN_SEPARATOR: &str = " ";

/// Aho-Corasick automaton over the vocabulary's token sequences
pub struct PhraseMatcher {
    automaton: AhoCorasick,
}

/// Whether phrase matching is available or the extractor is running on the
/// substring fallback.
pub enum MatcherState {
    Ready(PhraseMatcher),
    Unavailable { reason: String },
}

/// Extracts vocabulary skills from free text
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    matcher: MatcherState,
}

/// Skills found in one text, keyed by normalized phrase so iteration is
/// sorted and comparisons ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSkills {
    skills: BTreeMap<String, String>,
}

impl PhraseMatcher {
    pub fn build(vocabulary: &SkillVocabulary) -> Result<Self> {
        let patterns: Vec<String> = vocabulary
            .entries()
            .iter()
            .map(|entry| Self::pad(&entry.tokens))
            .collect();

        // Standard semantics are required for overlapping search: "machine
        // learning" and "learning" must both be reported.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| SkillGapError::Matcher(format!("Failed to build phrase matcher: {}", e)))?;

        Ok(Self { automaton })
    }

    /// Vocabulary ids of every phrase occurring in the token stream
    pub fn find(&self, tokens: &[String]) -> Vec<usize> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let haystack = Self::pad(tokens);
        self.automaton
            .find_overlapping_iter(&haystack)
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    fn pad(tokens: &[String]) -> String {
        let joined = tokens.join(TOKEN_SEPARATOR);
        format!("{sep}{joined}{sep}", sep = TOKEN_SEPARATOR)
    }
}

/// Where the gap analyzer gets the skills of a text from
pub trait SkillSource: Send + Sync {
    fn extract_skills(&self, text: &str) -> Result<ExtractedSkills>;
}

impl SkillSource for SkillExtractor {
    fn extract_skills(&self, text: &str) -> Result<ExtractedSkills> {
        Ok(self.extract(text))
    }
}

impl SkillExtractor {
    /// Build an extractor, falling back to substring scanning if the phrase
    /// matcher cannot be compiled.
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        let matcher = match PhraseMatcher::build(&vocabulary) {
            Ok(matcher) => MatcherState::Ready(matcher),
            Err(e) => {
                warn!("Phrase matcher unavailable, using substring matching: {}", e);
                MatcherState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        debug!("Skill extractor ready with {} vocabulary entries", vocabulary.len());

        Self { vocabulary, matcher }
    }

    /// Build an extractor that only uses substring scanning
    pub fn fallback(vocabulary: SkillVocabulary, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!("Skill extractor in fallback mode: {}", reason);

        Self {
            vocabulary,
            matcher: MatcherState::Unavailable { reason },
        }
    }

    /// Extract the vocabulary skills occurring in `text`.
    ///
    /// Never fails: empty or absent text gives an empty set.
    pub fn extract<'a>(&self, text: impl Into<Option<&'a str>>) -> ExtractedSkills {
        let text = match text.into() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return ExtractedSkills::default(),
        };

        let processed = TextProcessor::shared().process(text);
        let mut found = ExtractedSkills::default();

        match &self.matcher {
            MatcherState::Ready(matcher) => {
                for id in matcher.find(&processed.tokens) {
                    if let Some(entry) = self.vocabulary.entry(id) {
                        found.insert(entry);
                    }
                }
            }
            MatcherState::Unavailable { .. } => {
                for entry in self.vocabulary.entries() {
                    if processed.normalized.contains(entry.phrase.as_str()) {
                        found.insert(entry);
                    }
                }
            }
        }

        debug!("Extracted {} skills from {} words", found.len(), processed.tokens.len());
        found
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.matcher, MatcherState::Unavailable { .. })
    }

    pub fn matcher_state(&self) -> &MatcherState {
        &self.matcher
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(SkillVocabulary::builtin())
    }
}

impl ExtractedSkills {
    pub fn insert(&mut self, entry: &SkillEntry) {
        self.skills
            .entry(entry.phrase.clone())
            .or_insert_with(|| entry.label.clone());
    }

    /// Case-insensitive membership test
    pub fn contains(&self, skill: &str) -> bool {
        let phrase = TextProcessor::shared().normalize(skill);
        self.skills.contains_key(&phrase)
    }

    /// Display labels in sorted order
    pub fn labels(&self) -> Vec<String> {
        self.skills.values().cloned().collect()
    }

    /// Labels of skills in `self` that `other` lacks, in sorted order
    pub fn missing_from(&self, other: &ExtractedSkills) -> Vec<String> {
        self.skills
            .iter()
            .filter(|(phrase, _)| !other.skills.contains_key(*phrase))
            .map(|(_, label)| label.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
