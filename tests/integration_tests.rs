//! Integration tests for the skill gap analyzer

use skill_gap::config::Config;
use skill_gap::input::InputManager;
use skill_gap::output::AnalysisRecord;
use skill_gap::{analyze_gap, GapAnalyzer, SkillGapError};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Django"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillGapError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillGapError::InvalidInput(_))));
}

#[tokio::test]
async fn test_lenient_extraction_yields_empty_text() {
    let mut manager = InputManager::new();

    let missing = manager.extract_text_or_empty(Path::new("tests/fixtures/nonexistent.pdf")).await;
    assert!(missing.is_empty());

    let unsupported = manager.extract_text_or_empty(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(unsupported.is_empty());
}

#[tokio::test]
async fn test_gap_analysis_from_files() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    let result = analyze_gap(&resume, &job);

    assert_eq!(result.job_skills.len(), 7);
    assert_eq!(result.missing_skills, vec!["AWS", "Communication", "SQL"]);
    assert_eq!(result.match_percent, 57.14);
    assert_eq!(result.recommendations.len(), 3);
    assert!(result.resume_skills.contains(&"Unit Testing".to_string()));
    assert!(result.resume_skills.contains(&"REST".to_string()));

    assert!(result.resume_overview.has_experience);
    assert!(result.resume_overview.has_education);
    assert_eq!(result.resume_overview.years_experience, "6");
}

#[tokio::test]
async fn test_markdown_and_text_resumes_agree() {
    let mut manager = InputManager::new();
    let txt = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let md = manager.extract_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    assert_eq!(analyze_gap(&txt, &job), analyze_gap(&md, &job));
}

#[tokio::test]
async fn test_unreadable_resume_counts_every_job_skill_as_missing() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text_or_empty(Path::new("tests/fixtures/unsupported.xyz")).await;
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    let result = analyze_gap(&resume, &job);

    assert!(result.resume_skills.is_empty());
    assert_eq!(result.missing_skills, result.job_skills);
    assert_eq!(result.match_percent, 0.0);
    assert_eq!(result.resume_overview.years_experience, "Not specified");
}

#[tokio::test]
async fn test_analyzer_from_config_with_extra_skills() {
    let mut config = Config::default();
    config.vocabulary.extra_skills = vec!["Platform Engineering".to_string(), "hiring".to_string()];

    let analyzer = GapAnalyzer::from_config(&config).unwrap();
    let job = tokio::fs::read_to_string("tests/fixtures/sample_job.txt").await.unwrap();

    let result = analyzer.analyze("Python developer", &job);
    assert!(result.job_skills.contains(&"Hiring".to_string()));
    assert!(!result.job_skills.contains(&"Platform Engineering".to_string()));
}

#[tokio::test]
async fn test_analysis_record_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");

    let result = analyze_gap("Python and SQL", "SQL, Python and Docker");
    let record = AnalysisRecord::new("inline", "inline", result.clone());
    record.write_to(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
    assert_eq!(json["analysis_type"], "gap_analysis");
    assert_eq!(json["result"]["missing_skills"][0], "Docker");
    assert_eq!(json["result"]["match_percent"], result.match_percent);
}

#[tokio::test]
async fn test_hyphenated_and_possessive_skills_are_found() {
    let result = analyze_gap("Python-based ETL, React's hooks, SQL-heavy reporting", "Python, React, SQL");

    assert_eq!(result.resume_skills, vec!["Python", "React", "SQL"]);
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.match_percent, 100.0);
}

#[tokio::test]
async fn test_carriage_return_separated_resume() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/cr_resume.txt")).await.unwrap();
    assert!(!resume.contains('\r'));

    let result = analyze_gap(&resume, "Python, SQL, Airflow and Docker");

    assert_eq!(result.resume_skills, vec!["Airflow", "Python", "SQL"]);
    assert_eq!(result.missing_skills, vec!["Docker"]);
    assert_eq!(result.match_percent, 75.0);
    assert_eq!(result.resume_overview.years_experience, "6");
}
