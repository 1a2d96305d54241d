use std::time::Duration;

/// Store key for the autosaved resume content blob.
pub const RESUME_KEY: &str = "resume-builder:content";
/// Store key for the autosaved display settings blob.
pub const SETTINGS_KEY: &str = "resume-builder:settings";
/// Store key for the one-shot imported resume hand-off blob.
pub const IMPORT_KEY: &str = "resume-builder:import";

/// Persistence configuration: the stable, versionless store keys and the
/// autosave quiet period. Snapshot compatibility is handled by field-level
/// defaulting on hydration, not by versioning these keys.
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    pub resume_key: String,
    pub settings_key: String,
    pub import_key: String,
    pub quiet_period: Duration,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            resume_key: RESUME_KEY.to_string(),
            settings_key: SETTINGS_KEY.to_string(),
            import_key: IMPORT_KEY.to_string(),
            quiet_period: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quiet_period_is_two_seconds() {
        let config = PersistenceConfig::default();
        assert_eq!(config.quiet_period, Duration::from_millis(2000));
    }

    #[test]
    fn test_default_keys_are_distinct() {
        let config = PersistenceConfig::default();
        assert_ne!(config.resume_key, config.settings_key);
        assert_ne!(config.resume_key, config.import_key);
        assert_ne!(config.settings_key, config.import_key);
    }
}
