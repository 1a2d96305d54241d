//! ATS Score Engine — heuristic 0–100 rubric estimating how well the resume
//! parses in automated recruiting software.
//!
//! Additive rubric:
//! - personal info (name + email + phone): +20
//! - summary: +20 over 100 chars, +10 over 50
//! - experience: +15 non-empty, +15 more if any description exceeds 100 chars
//! - education: +15 non-empty
//! - skills: +15 at ≥8 total, +10 at ≥5, +5 at ≥3
//!
//! The sum cannot exceed 100 by construction; the final clamp guards the
//! invariant anyway.

use crate::models::resume::ResumeRecord;

pub fn calculate_ats_score(resume: &ResumeRecord) -> u32 {
    let mut score = 0u32;

    let personal = &resume.personal_info;
    if !personal.name.is_empty() && !personal.email.is_empty() && !personal.phone.is_empty() {
        score += 20;
    }

    let summary_len = resume.summary.chars().count();
    if summary_len > 100 {
        score += 20;
    } else if summary_len > 50 {
        score += 10;
    }

    if !resume.experience.is_empty() {
        score += 15;
        if resume
            .experience
            .iter()
            .any(|e| e.description.chars().count() > 100)
        {
            score += 15;
        }
    }

    if !resume.education.is_empty() {
        score += 15;
    }

    score += match resume.skills.total_count() {
        n if n >= 8 => 15,
        n if n >= 5 => 10,
        n if n >= 3 => 5,
        _ => 0,
    };

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{new_entry_id, Education, Experience, PersonalInfo};

    fn filled_personal() -> PersonalInfo {
        PersonalInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record_scores_zero() {
        assert_eq!(calculate_ats_score(&ResumeRecord::default()), 0);
    }

    #[test]
    fn test_maximally_filled_record_scores_one_hundred() {
        let mut resume = ResumeRecord::default();
        resume.personal_info = filled_personal();
        resume.summary = "s".repeat(120);
        resume.experience.push(Experience {
            id: new_entry_id(),
            description: "d".repeat(150),
            ..Default::default()
        });
        resume.education.push(Education {
            id: new_entry_id(),
            ..Default::default()
        });
        for i in 0..9 {
            resume.skills.technical.push(format!("skill-{i}"));
        }
        // 20 + 20 + 15 + 15 + 15 + 15
        assert_eq!(calculate_ats_score(&resume), 100);
    }

    #[test]
    fn test_partial_personal_info_scores_nothing() {
        let mut resume = ResumeRecord::default();
        resume.personal_info.name = "Ada".to_string();
        resume.personal_info.email = "ada@example.com".to_string();
        // phone missing
        assert_eq!(calculate_ats_score(&resume), 0);
    }

    #[test]
    fn test_summary_thresholds() {
        let mut resume = ResumeRecord::default();
        resume.summary = "x".repeat(50);
        assert_eq!(calculate_ats_score(&resume), 0);
        resume.summary = "x".repeat(51);
        assert_eq!(calculate_ats_score(&resume), 10);
        resume.summary = "x".repeat(101);
        assert_eq!(calculate_ats_score(&resume), 20);
    }

    #[test]
    fn test_experience_detail_bonus() {
        let mut resume = ResumeRecord::default();
        resume.experience.push(Experience {
            id: new_entry_id(),
            description: "brief".to_string(),
            ..Default::default()
        });
        assert_eq!(calculate_ats_score(&resume), 15);
        resume.experience.push(Experience {
            id: new_entry_id(),
            description: "d".repeat(101),
            ..Default::default()
        });
        assert_eq!(calculate_ats_score(&resume), 30);
    }

    #[test]
    fn test_skill_count_tiers() {
        let mut resume = ResumeRecord::default();
        for (count, expected) in [(2, 0), (3, 5), (5, 10), (8, 15)] {
            resume.skills = Default::default();
            for i in 0..count {
                resume.skills.soft.push(format!("skill-{i}"));
            }
            assert_eq!(
                calculate_ats_score(&resume),
                expected,
                "count {count} should score {expected}"
            );
        }
    }

    #[test]
    fn test_skill_count_spans_all_buckets() {
        let mut resume = ResumeRecord::default();
        resume.skills.technical = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        resume.skills.frameworks = vec!["d".to_string(), "e".to_string()];
        // 5 total across buckets → +10
        assert_eq!(calculate_ats_score(&resume), 10);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let mut resume = ResumeRecord::default();
        resume.personal_info = filled_personal();
        resume.summary = "s".repeat(500);
        for i in 0..20 {
            resume.experience.push(Experience {
                id: new_entry_id(),
                description: "d".repeat(400),
                ..Default::default()
            });
            resume.skills.technical.push(format!("skill-{i}"));
        }
        resume.education.push(Education {
            id: new_entry_id(),
            ..Default::default()
        });
        let score = calculate_ats_score(&resume);
        assert!(score <= 100, "score was {score}");
        assert_eq!(score, 100);
    }
}
