//! Job-match merge: applies the suggested edits from a `JobMatchResult` to the
//! resume — summary overwrite, positional experience updates, skill additions,
//! and move-to-front skill emphasis.

use crate::merge::rules::classify;
use crate::models::resume::ResumeRecord;
use crate::models::suggestions::SuggestedChanges;

/// Merges job-match suggested changes into the resume.
///
/// - Summary: unconditional overwrite when present.
/// - `experience_updates[i]` merges into `experience[i]`; indices past the end
///   of the experience list are skipped silently. A suggested description
///   replaces the existing one only when strictly longer (char count), since a
///   tailored description that lost detail is worse than what the user wrote.
/// - Added skills route through the three-tier classifier with dedup.
/// - Emphasized skills move to the front of whichever bucket holds them.
///
/// Idempotent: re-applying the same changes leaves the resume unchanged.
pub fn apply_job_match_changes(resume: &mut ResumeRecord, changes: &SuggestedChanges) {
    if let Some(summary) = &changes.summary {
        resume.summary = summary.clone();
    }

    for (i, update) in changes.experience_updates.iter().enumerate() {
        let Some(entry) = resume.experience.get_mut(i) else {
            continue;
        };
        let suggested_len = update.suggested_description.chars().count();
        if suggested_len > entry.description.chars().count() {
            entry.description = update.suggested_description.clone();
        }
        for achievement in &update.suggested_achievements {
            if !entry.achievements.iter().any(|a| a == achievement) {
                entry.achievements.push(achievement.clone());
            }
        }
    }

    for skill in &changes.skills_to_add {
        resume.skills.insert_unique(classify(skill), skill);
    }

    for skill in &changes.skills_to_emphasize {
        resume.skills.emphasize(skill);
    }
}
