// Suggestion merge engine: integrates the three generator payload shapes into
// the resume record. Every insertion is dedup-guarded, so re-applying the same
// payload is a no-op.

pub mod content;
pub mod job_match;
pub mod rules;
pub mod skill_gap;

pub use content::apply_content_suggestion;
pub use job_match::apply_job_match_changes;
pub use skill_gap::{add_certifications, add_skills};
