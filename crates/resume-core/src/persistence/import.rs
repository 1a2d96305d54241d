//! One-shot import hand-off.
//!
//! An external parser (out of scope) drops a previously-parsed resume into the
//! store under the import key in its own flat shape. On first load the blob is
//! consumed, converted into a `ResumeRecord`, and deleted.

use serde::{Deserialize, Serialize};

use crate::merge::rules::classify;
use crate::models::resume::{
    new_entry_id, Education, Experience, PersonalInfo, ResumeRecord,
};

/// The parsed-resume hand-off shape. Flat contact fields, positional work and
/// education history, and a single uncategorized skill list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub work_history: Vec<ImportedPosition>,
    pub education: Vec<ImportedEducation>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportedPosition {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportedEducation {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

impl ImportedResume {
    /// Converts the imported shape into a resume record. Every entity gets a
    /// fresh id; the flat skill list routes through the standalone categorizer
    /// with dedup.
    pub fn into_resume(self) -> ResumeRecord {
        let mut record = ResumeRecord {
            personal_info: PersonalInfo {
                name: self.name,
                email: self.email,
                phone: self.phone,
                location: self.location,
                website: self.website,
                linkedin: self.linkedin,
                github: self.github,
            },
            summary: self.summary,
            ..Default::default()
        };

        for position in self.work_history {
            record.experience.push(Experience {
                id: new_entry_id(),
                job_title: position.title,
                company: position.company,
                location: position.location,
                start_date: position.start_date,
                end_date: position.end_date,
                current: position.current,
                description: position.description,
                achievements: position.highlights,
            });
        }

        for entry in self.education {
            record.education.push(Education {
                id: new_entry_id(),
                degree: entry.degree,
                school: entry.school,
                location: entry.location,
                start_date: entry.start_date,
                end_date: entry.end_date,
            });
        }

        for skill in &self.skills {
            record.skills.insert_unique(classify(skill), skill);
        }

        record
    }
}
