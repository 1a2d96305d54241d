//! Progress Calculator — section-completion percentage over the enabled
//! sections.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;
use crate::models::settings::Section;

/// Completion summary for display. `percentage` is rounded to the nearest
/// integer; 0 when no sections are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub percentage: u32,
    pub completed: usize,
    pub total: usize,
}

/// Evaluates the fixed completeness predicate for each enabled section.
pub fn calculate_progress(resume: &ResumeRecord, enabled: &[Section]) -> ProgressReport {
    let total = enabled.len();
    let completed = enabled
        .iter()
        .filter(|section| section_complete(resume, **section))
        .count();
    let percentage = if total == 0 {
        0
    } else {
        (100.0 * completed as f64 / total as f64).round() as u32
    };
    ProgressReport {
        percentage,
        completed,
        total,
    }
}

fn section_complete(resume: &ResumeRecord, section: Section) -> bool {
    match section {
        Section::Personal => {
            !resume.personal_info.name.is_empty() && !resume.personal_info.email.is_empty()
        }
        Section::Summary => resume.summary.chars().count() > 50,
        Section::Experience => !resume.experience.is_empty(),
        Section::Education => !resume.education.is_empty(),
        Section::Skills => !resume.skills.is_empty(),
        Section::Projects => !resume.projects.is_empty(),
        Section::Certifications => !resume.certifications.is_empty(),
        Section::Languages => !resume.languages.is_empty(),
        Section::Volunteer => !resume.volunteer.is_empty(),
        Section::Awards => !resume.awards.is_empty(),
        Section::Assistant => true,
    }
}
