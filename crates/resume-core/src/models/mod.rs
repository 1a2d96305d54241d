pub mod resume;
pub mod settings;
pub mod suggestions;
