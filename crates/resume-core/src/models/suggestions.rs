//! Suggestion payloads — the three fixed shapes produced by the external
//! AI-suggestion generator. This crate only consumes already-resolved payloads;
//! it never produces them and never talks to the generator.
//!
//! Input is untrusted but well-typed: every field defaults, so an absent array
//! reads as empty instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Role/industry content suggestions: extra bullet points and skills.
///
/// `achievements` is part of the generator contract but has no merge rule; it
/// is surfaced to the user verbatim by the (out-of-scope) UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSuggestion {
    pub bullet_points: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

/// Skill-gap analysis against a target role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGapResult {
    pub overall_score: u32,
    pub missing_skills: Vec<String>,
    pub strength_areas: Vec<String>,
    pub recommended_certifications: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Job-description match analysis plus concrete suggested edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobMatchResult {
    pub matching_score: u32,
    pub keyword_matches: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_changes: SuggestedChanges,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedChanges {
    pub summary: Option<String>,
    pub experience_updates: Vec<ExperienceUpdate>,
    pub skills_to_add: Vec<String>,
    pub skills_to_emphasize: Vec<String>,
}

/// Positional update for one experience entry. `experience_updates[i]` targets
/// `resume.experience[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceUpdate {
    pub suggested_description: String,
    pub suggested_achievements: Vec<String>,
}
