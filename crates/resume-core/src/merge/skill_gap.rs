//! Skill-gap merges: adopt missing skills and recommended certifications from
//! a `SkillGapResult`.

use chrono::{Datelike, Utc};

use crate::models::resume::{new_entry_id, Certification, ResumeRecord, SkillBucket};

/// Issuer placeholder for adopted certifications the user has not filled in yet.
const PLACEHOLDER_ISSUER: &str = "To be specified";

/// Inserts each skill into the technical bucket if absent. No categorization
/// on this path; gap-analysis skills are adopted as technical verbatim.
pub fn add_skills(resume: &mut ResumeRecord, skills: &[String]) {
    for skill in skills {
        resume.skills.insert_unique(SkillBucket::Technical, skill);
    }
}

/// Appends a placeholder certification for each recommended name that no
/// existing certification already carries (exact name match).
pub fn add_certifications(resume: &mut ResumeRecord, names: &[String]) {
    let current_year = Utc::now().year().to_string();
    for name in names {
        if resume.certifications.iter().any(|c| &c.name == name) {
            continue;
        }
        resume.certifications.push(Certification {
            id: new_entry_id(),
            name: name.clone(),
            issuer: PLACEHOLDER_ISSUER.to_string(),
            date: current_year.clone(),
        });
    }
}
