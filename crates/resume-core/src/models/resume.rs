//! The resume record — the single mutable root a session edits.
//!
//! Wire format is camelCase JSON, and every field carries `serde(default)` so
//! partial or legacy snapshots hydrate field-by-field instead of failing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh entity id. Ids are stored as strings so snapshots written
/// by older builds (which used raw timestamp ids) still hydrate.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub id: String,
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteer {
    pub id: String,
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// The four named skill buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillBucket {
    Technical,
    Soft,
    Languages,
    Frameworks,
}

/// Bucket scan order for operations that search across buckets.
pub const BUCKET_ORDER: [SkillBucket; 4] = [
    SkillBucket::Technical,
    SkillBucket::Soft,
    SkillBucket::Languages,
    SkillBucket::Frameworks,
];

/// Skill buckets. Each bucket preserves insertion order and is kept
/// duplicate-free (exact string equality) by the mutation helpers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
}

impl Skills {
    pub fn bucket(&self, bucket: SkillBucket) -> &Vec<String> {
        match bucket {
            SkillBucket::Technical => &self.technical,
            SkillBucket::Soft => &self.soft,
            SkillBucket::Languages => &self.languages,
            SkillBucket::Frameworks => &self.frameworks,
        }
    }

    pub fn bucket_mut(&mut self, bucket: SkillBucket) -> &mut Vec<String> {
        match bucket {
            SkillBucket::Technical => &mut self.technical,
            SkillBucket::Soft => &mut self.soft,
            SkillBucket::Languages => &mut self.languages,
            SkillBucket::Frameworks => &mut self.frameworks,
        }
    }

    /// Total skill count across all four buckets.
    pub fn total_count(&self) -> usize {
        self.technical.len() + self.soft.len() + self.languages.len() + self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Inserts `skill` into `bucket` unless an exactly-equal entry already
    /// exists there. Returns whether an insertion happened.
    pub fn insert_unique(&mut self, bucket: SkillBucket, skill: &str) -> bool {
        let list = self.bucket_mut(bucket);
        if list.iter().any(|s| s == skill) {
            return false;
        }
        list.push(skill.to_string());
        true
    }

    /// Moves `skill` to the front of whichever bucket holds it (exact match).
    /// No duplication, no cross-bucket move; no-op if absent or already first.
    /// Returns whether the skill moved.
    pub fn emphasize(&mut self, skill: &str) -> bool {
        for bucket in BUCKET_ORDER {
            let list = self.bucket_mut(bucket);
            if let Some(pos) = list.iter().position(|s| s == skill) {
                if pos == 0 {
                    return false;
                }
                let entry = list.remove(pos);
                list.insert(0, entry);
                return true;
            }
        }
        false
    }
}

/// The resume record root. Created empty at session start, mutated by the
/// section editors and the suggestion merge engine, and persisted as a single
/// camelCase JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<LanguageEntry>,
    pub volunteer: Vec<Volunteer>,
    pub awards: Vec<Award>,
    pub skills: Skills,
}
