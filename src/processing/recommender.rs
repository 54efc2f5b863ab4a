//! Learning recommendations for missing skills

use crate::processing::vocabulary::display_label;

pub const ALL_SKILLS_MATCHED: &str = "Excellent! You match all the required skills for this job.";

/// One suggestion per missing skill, in input order; a single congratulatory
/// message when nothing is missing.
pub fn recommend_learning_path<S: AsRef<str>>(missing_skills: &[S]) -> Vec<String> {
    if missing_skills.is_empty() {
        return vec![ALL_SKILLS_MATCHED.to_string()];
    }

    missing_skills
        .iter()
        .map(|skill| {
            format!(
                "Consider improving your {} skills. You can take an online course or build a small project using it.",
                display_label(skill.as_ref())
            )
        })
        .collect()
}
