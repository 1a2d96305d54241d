//! Content-suggestion merge: routes suggested skills into the two-bucket
//! tables and appends bullet points to the first experience entry.

use crate::merge::rules::classify_content;
use crate::models::resume::ResumeRecord;
use crate::models::suggestions::ContentSuggestion;

/// Merges a content suggestion into the resume.
///
/// Skills route through the two-bucket content table (technical vs soft) and
/// insert only when absent. Bullet points append to the achievements of the
/// first experience entry; with no experience entries they are dropped.
/// Appending to the first entry only is a product policy carried over from the
/// editor flow, where suggestions are requested while that entry is on screen;
/// there is no "active entry" in the data model to target instead.
pub fn apply_content_suggestion(resume: &mut ResumeRecord, suggestion: &ContentSuggestion) {
    for skill in &suggestion.skills {
        let bucket = classify_content(skill);
        resume.skills.insert_unique(bucket, skill);
    }

    if let Some(first) = resume.experience.first_mut() {
        for bullet in &suggestion.bullet_points {
            if !first.achievements.iter().any(|a| a == bullet) {
                first.achievements.push(bullet.clone());
            }
        }
    }
}
