//! Text extraction from various file formats

use crate::error::{Result, SkillGapError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            SkillGapError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        // Resumes exported from word processors are not always valid UTF-8.
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> Result<String> {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let tag_regex = Regex::new(r"<[^>]*>")
            .map_err(|e| SkillGapError::TextProcessing(format!("Invalid tag regex: {}", e)))?;
        let clean_text = tag_regex.replace_all(&text, "");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Replace control characters left behind by binary formats with spaces,
/// keeping newlines and tabs, so words on either side stay apart.
pub fn strip_binary_artifacts(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\t' => c,
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}
