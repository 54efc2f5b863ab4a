//! Gap analysis: compares resume skills against job skills and scores the match

use crate::config::Config;
use crate::error::{Result, SkillGapError};
use crate::processing::recommender::recommend_learning_path;
use crate::processing::section_analyzer::{SectionAnalyzer, SectionOverview};
use crate::processing::skill_extractor::{SkillExtractor, SkillSource};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::time::Instant;

pub const ANALYSIS_UNAVAILABLE: &str =
    "Sorry, we could not analyze your resume right now. Please try again later.";

/// Outcome of one resume/job comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapResult {
    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Share of job skills found in the resume, 0.0 to 100.0, two decimals
    pub match_percent: f64,
    pub recommendations: Vec<String>,
    pub resume_overview: SectionOverview,
}

impl GapResult {
    /// Well-formed placeholder returned when analysis fails internally
    pub fn degraded() -> Self {
        Self {
            resume_skills: Vec::new(),
            job_skills: Vec::new(),
            missing_skills: Vec::new(),
            match_percent: 0.0,
            recommendations: vec![ANALYSIS_UNAVAILABLE.to_string()],
            resume_overview: SectionOverview::default(),
        }
    }

    pub fn matched_count(&self) -> usize {
        self.job_skills.len().saturating_sub(self.missing_skills.len())
    }
}

/// Runs extraction, scoring, recommendations and section analysis
pub struct GapAnalyzer<S = SkillExtractor> {
    extractor: S,
    sections: SectionAnalyzer,
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new(SkillExtractor::default(), SectionAnalyzer::default())
    }
}

impl GapAnalyzer {
    /// Build an analyzer from the vocabulary and section settings in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = config.build_vocabulary()?;
        let sections = SectionAnalyzer::new(
            config.sections.experience_keywords.clone(),
            config.sections.education_keywords.clone(),
        );

        Ok(Self::new(SkillExtractor::new(vocabulary), sections))
    }

    /// Process-wide analyzer over the built-in vocabulary, built on first use
    pub fn shared() -> &'static GapAnalyzer {
        static ANALYZER: OnceLock<GapAnalyzer> = OnceLock::new();
        ANALYZER.get_or_init(GapAnalyzer::default)
    }
}

impl<S: SkillSource> GapAnalyzer<S> {
    pub fn new(extractor: S, sections: SectionAnalyzer) -> Self {
        Self { extractor, sections }
    }

    /// Compare a resume with a job description.
    ///
    /// Never fails: internal errors and panics are logged and turned into
    /// [`GapResult::degraded`].
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> GapResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_analyze(resume_text, job_text)));

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!("Gap analysis failed, returning degraded result: {}", e);
                GapResult::degraded()
            }
            Err(payload) => {
                error!(
                    "Gap analysis panicked, returning degraded result: {}",
                    panic_message(payload.as_ref())
                );
                GapResult::degraded()
            }
        }
    }

    /// Same pipeline as [`GapAnalyzer::analyze`] with errors surfaced
    pub fn try_analyze(&self, resume_text: &str, job_text: &str) -> Result<GapResult> {
        let start_time = Instant::now();

        let resume_skills = self.extractor.extract_skills(resume_text)?;
        let job_skills = self.extractor.extract_skills(job_text)?;

        let missing_skills = job_skills.missing_from(&resume_skills);
        let match_percent = match_percent(job_skills.len(), missing_skills.len());
        if !match_percent.is_finite() || !(0.0..=100.0).contains(&match_percent) {
            return Err(SkillGapError::AnalysisFailed(format!(
                "match percent out of range: {}",
                match_percent
            )));
        }

        let recommendations = recommend_learning_path(&missing_skills);
        let resume_overview = self.sections.analyze(resume_text);

        debug!(
            "Gap analysis: {}/{} job skills matched ({:.2}%) in {}µs",
            job_skills.len() - missing_skills.len(),
            job_skills.len(),
            match_percent,
            start_time.elapsed().as_micros()
        );

        Ok(GapResult {
            resume_skills: resume_skills.labels(),
            job_skills: job_skills.labels(),
            missing_skills,
            match_percent,
            recommendations,
            resume_overview,
        })
    }

    pub fn extractor(&self) -> &S {
        &self.extractor
    }

    pub fn sections(&self) -> &SectionAnalyzer {
        &self.sections
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Percentage of job skills matched, rounded to two decimals. A job with no
/// skills counts as one so the result is 0.0 instead of a division by zero.
pub fn match_percent(job_skill_count: usize, missing_count: usize) -> f64 {
    let total = job_skill_count.max(1) as f64;
    let matched = job_skill_count.saturating_sub(missing_count) as f64;

    (100.0 * matched / total * 100.0).round() / 100.0
}

/// Compare a resume with a job description using the shared analyzer
pub fn analyze_gap(resume_text: &str, job_text: &str) -> GapResult {
    GapAnalyzer::shared().analyze(resume_text, job_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::recommender::ALL_SKILLS_MATCHED;
    use crate::processing::skill_extractor::ExtractedSkills;
    use crate::processing::vocabulary::SkillVocabulary;

    struct FailingSource;

    impl SkillSource for FailingSource {
        fn extract_skills(&self, _text: &str) -> Result<ExtractedSkills> {
            Err(SkillGapError::Matcher("automaton unavailable".to_string()))
        }
    }

    struct PanickingSource;

    impl SkillSource for PanickingSource {
        fn extract_skills(&self, text: &str) -> Result<ExtractedSkills> {
            panic!("extraction blew up on {} bytes", text.len());
        }
    }

    #[test]
    fn test_python_sql_scenario() {
        let result = analyze_gap(
            "Experienced Python developer, 3+ years, worked on machine learning projects",
            "Looking for Python and SQL developer with machine learning experience",
        );

        assert_eq!(result.job_skills, vec!["Machine Learning", "Python", "SQL"]);
        assert_eq!(result.resume_skills, vec!["Machine Learning", "Python"]);
        assert_eq!(result.missing_skills, vec!["SQL"]);
        assert_eq!(result.match_percent, 66.67);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("SQL"));
        assert!(result.resume_overview.has_experience);
        assert_eq!(result.resume_overview.years_experience, "3");
    }

    #[test]
    fn test_empty_resume() {
        let result = analyze_gap("", "Need React and Django developer");

        assert!(result.resume_skills.is_empty());
        assert_eq!(result.job_skills, vec!["Django", "React"]);
        assert_eq!(result.missing_skills, result.job_skills);
        assert_eq!(result.match_percent, 0.0);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.resume_overview, SectionOverview::default());
    }

    #[test]
    fn test_job_without_skills() {
        let result = analyze_gap("I like gardening", "We are hiring friendly people");

        assert!(result.job_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.match_percent, 0.0);
        assert_eq!(result.recommendations, vec![ALL_SKILLS_MATCHED.to_string()]);
    }

    #[test]
    fn test_all_skills_matched() {
        let result = analyze_gap("Python, SQL and Docker", "python and docker");

        assert!(result.missing_skills.is_empty());
        assert_eq!(result.match_percent, 100.0);
        assert_eq!(
            result.recommendations,
            vec!["Excellent! You match all the required skills for this job.".to_string()]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer: GapAnalyzer = GapAnalyzer::default();
        let resume = "Rust and Go engineer, 7 years, Kubernetes, Docker";
        let job = "Go, Kubernetes, AWS, Terraform";

        assert_eq!(analyzer.analyze(resume, job), analyzer.analyze(resume, job));
    }

    #[test]
    fn test_missing_skills_are_job_skills() {
        let analyzer: GapAnalyzer = GapAnalyzer::default();
        let result = analyzer.analyze("java spring boot", "Java, Kotlin, Spring Boot, AWS, SQL");

        for skill in &result.missing_skills {
            assert!(result.job_skills.contains(skill));
        }
        assert_eq!(result.missing_skills, vec!["AWS", "Kotlin", "SQL"]);
        assert_eq!(result.match_percent, 40.0);
    }

    #[test]
    fn test_injected_vocabulary() {
        let extractor = SkillExtractor::new(SkillVocabulary::new(["haskell", "ocaml"]));
        let analyzer = GapAnalyzer::new(extractor, SectionAnalyzer::default());

        let result = analyzer.analyze("Haskell hobbyist", "Haskell or OCaml, plus python");
        assert_eq!(result.job_skills, vec!["Haskell", "Ocaml"]);
        assert_eq!(result.missing_skills, vec!["Ocaml"]);
        assert_eq!(result.match_percent, 50.0);
    }

    #[test]
    fn test_match_percent_rounding() {
        assert_eq!(match_percent(3, 1), 66.67);
        assert_eq!(match_percent(3, 2), 33.33);
        assert_eq!(match_percent(0, 0), 0.0);
        assert_eq!(match_percent(4, 0), 100.0);
        assert_eq!(match_percent(7, 7), 0.0);
    }

    #[test]
    fn test_extraction_error_degrades_result() {
        let analyzer = GapAnalyzer::new(FailingSource, SectionAnalyzer::default());

        assert!(matches!(
            analyzer.try_analyze("Python developer", "Python and SQL"),
            Err(SkillGapError::Matcher(_))
        ));
        assert_eq!(analyzer.analyze("Python developer", "Python and SQL"), GapResult::degraded());
    }

    #[test]
    fn test_extraction_panic_degrades_result() {
        let analyzer = GapAnalyzer::new(PanickingSource, SectionAnalyzer::default());
        let result = analyzer.analyze("5 years of Python experience", "Python and SQL");

        assert_eq!(result, GapResult::degraded());
        assert_eq!(result.recommendations, vec![ANALYSIS_UNAVAILABLE.to_string()]);
        assert_eq!(result.resume_overview.years_experience, "Not specified");
    }

    #[test]
    fn test_matched_count_saturates_on_inconsistent_result() {
        let mut result = analyze_gap("python", "python and sql");
        assert_eq!(result.matched_count(), 1);

        result.missing_skills.push("Docker".to_string());
        result.missing_skills.push("AWS".to_string());
        assert_eq!(result.matched_count(), 0);
    }

    #[test]
    fn test_degraded_result_shape() {
        let result = GapResult::degraded();

        assert!(result.job_skills.is_empty());
        assert_eq!(result.match_percent, 0.0);
        assert_eq!(result.recommendations, vec![ANALYSIS_UNAVAILABLE.to_string()]);
        assert_eq!(result.resume_overview.years_experience, "Not specified");
    }

    #[test]
    fn test_result_serializes_with_expected_fields() {
        let result = analyze_gap("python", "python and sql");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["missing_skills"][0], "SQL");
        assert_eq!(json["match_percent"], 50.0);
        assert_eq!(json["resume_overview"]["years_experience"], "Not specified");
        assert_eq!(json["resume_overview"]["has_experience"], false);
    }
}
