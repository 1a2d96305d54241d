// Derived, read-only summaries over the resume record. Pure functions, total
// over every input, integer outputs clamped to [0, 100].

pub mod ats;
pub mod progress;

pub use ats::calculate_ats_score;
pub use progress::{calculate_progress, ProgressReport};
