//! Skill categorization rule tables.
//!
//! There are deliberately two tables, not one. The content-suggestion path
//! routes skills into just two buckets with its own keyword set, and its
//! results differ from the general classifier (e.g. "React" is technical on
//! the content path, frameworks here). They are kept as separate named tables
//! rather than unified; callers pick the table their merge path prescribes.
//! The job-match path's three-tier table is identical to `classify` and reuses
//! it.

use crate::models::resume::SkillBucket;

/// Frameworks tier, checked first by `classify`.
const FRAMEWORK_KEYWORDS: &[&str] = &[
    "react", "angular", "vue", "node", "express", "django", "spring", "laravel",
];

/// Technical tier, checked second by `classify`.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript", "python", "java", "c++", "sql", "html", "css", "git",
];

/// Soft tier, checked last by `classify`.
const SOFT_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem",
    "management",
    "collaboration",
];

/// Keyword set for the two-bucket content-suggestion router.
const CONTENT_TECHNICAL_KEYWORDS: &[&str] = &[
    "programming",
    "development",
    "javascript",
    "python",
    "react",
    "node",
    "sql",
    "database",
    "api",
    "framework",
];

fn matches_any(skill_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| skill_lower.contains(k))
}

/// The standalone skill categorizer: ordered, case-insensitive substring
/// matching, first tier wins. Total over any input; unmatched strings
/// (including the empty string) default to `Technical`.
pub fn classify(skill: &str) -> SkillBucket {
    let lower = skill.to_lowercase();
    if matches_any(&lower, FRAMEWORK_KEYWORDS) {
        SkillBucket::Frameworks
    } else if matches_any(&lower, TECHNICAL_KEYWORDS) {
        SkillBucket::Technical
    } else if matches_any(&lower, SOFT_KEYWORDS) {
        SkillBucket::Soft
    } else {
        SkillBucket::Technical
    }
}

/// The two-bucket router used when merging content suggestions: technical if
/// the skill mentions any content-technical keyword, soft otherwise. Never
/// returns `Frameworks` or `Languages`.
pub fn classify_content(skill: &str) -> SkillBucket {
    let lower = skill.to_lowercase();
    if matches_any(&lower, CONTENT_TECHNICAL_KEYWORDS) {
        SkillBucket::Technical
    } else {
        SkillBucket::Soft
    }
}
