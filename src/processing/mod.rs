//! Text processing and skill gap analysis module

pub mod text_processor;
pub mod vocabulary;
pub mod skill_extractor;
pub mod section_analyzer;
pub mod recommender;
pub mod gap_analyzer;

pub use gap_analyzer::{analyze_gap, GapAnalyzer, GapResult};
