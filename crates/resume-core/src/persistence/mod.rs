// Persistence: the abstract key-value store seam, the debounced autosaver,
// and the hydration-on-load path (including the one-shot import hand-off).

pub mod autosave;
pub mod hydrate;
pub mod import;
pub mod store;

pub use autosave::{Autosaver, Debouncer};
pub use hydrate::{load_resume, load_settings};
pub use import::ImportedResume;
pub use store::{JsonFileStore, KvStore, MemoryStore};
