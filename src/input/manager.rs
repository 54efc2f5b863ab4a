//! Input manager for handling different file types

use crate::error::{Result, SkillGapError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    strip_binary_artifacts, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract plain text from a resume or job description file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillGapError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let raw_text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(SkillGapError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        let text = strip_binary_artifacts(&raw_text);
        if text.trim().is_empty() {
            warn!("No extractable text found in file: {}", path.display());
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Like [`InputManager::extract_text`], but any failure is logged and
    /// yields an empty string.
    pub async fn extract_text_or_empty(&mut self, path: &Path) -> String {
        match self.extract_text(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Text extraction failed for {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SkillGapError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
