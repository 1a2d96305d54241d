//! Hydration on load.
//!
//! Load order for the resume: the one-shot import blob wins and is consumed
//! immediately; otherwise the last autosaved snapshot. Hydration never fails —
//! malformed JSON is logged and replaced by the empty default, and partial or
//! legacy snapshots fill missing fields through serde defaulting on the model
//! structs.

use tracing::{info, warn};

use crate::config::PersistenceConfig;
use crate::models::resume::ResumeRecord;
use crate::models::settings::DisplaySettings;
use crate::persistence::import::ImportedResume;
use crate::persistence::store::KvStore;

/// Loads the resume record for a new session.
pub async fn load_resume(store: &dyn KvStore, config: &PersistenceConfig) -> ResumeRecord {
    match store.get(&config.import_key).await {
        Ok(Some(raw)) => {
            // Consume the blob before touching its contents: the hand-off is
            // one-shot even when the payload turns out to be garbage.
            if let Err(e) = store.clear(&config.import_key).await {
                warn!("failed to clear consumed import blob: {e:#}");
            }
            match serde_json::from_str::<ImportedResume>(&raw) {
                Ok(imported) => {
                    info!("hydrating resume from one-shot import");
                    return imported.into_resume();
                }
                Err(e) => warn!("discarding malformed import blob: {e}"),
            }
        }
        Ok(None) => {}
        Err(e) => warn!("import blob lookup failed: {e:#}"),
    }

    match store.get(&config.resume_key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(resume) => resume,
            Err(e) => {
                warn!("malformed resume snapshot, starting empty: {e}");
                ResumeRecord::default()
            }
        },
        Ok(None) => ResumeRecord::default(),
        Err(e) => {
            warn!("resume snapshot load failed, starting empty: {e:#}");
            ResumeRecord::default()
        }
    }
}

/// Loads the display settings, falling back to defaults on any failure.
pub async fn load_settings(store: &dyn KvStore, config: &PersistenceConfig) -> DisplaySettings {
    match store.get(&config.settings_key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("malformed settings snapshot, using defaults: {e}");
                DisplaySettings::default()
            }
        },
        Ok(None) => DisplaySettings::default(),
        Err(e) => {
            warn!("settings snapshot load failed, using defaults: {e:#}");
            DisplaySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillBucket;
    use crate::models::settings::Section;
    use crate::persistence::store::MemoryStore;

    fn config() -> PersistenceConfig {
        PersistenceConfig::default()
    }

    #[tokio::test]
    async fn test_empty_store_hydrates_defaults() {
        let store = MemoryStore::new();
        let resume = load_resume(&store, &config()).await;
        assert_eq!(resume, ResumeRecord::default());
        let settings = load_settings(&store, &config()).await;
        assert_eq!(settings, DisplaySettings::default());
    }

    #[tokio::test]
    async fn test_snapshot_round_trips_field_for_field() {
        let store = MemoryStore::new();
        let config = config();

        let mut original = ResumeRecord::default();
        original.personal_info.name = "Ada".to_string();
        original.summary = "Engineer and analyst with a long track record.".to_string();
        original.skills.insert_unique(SkillBucket::Frameworks, "React");
        let payload = serde_json::to_string(&original).unwrap();
        store.set(&config.resume_key, &payload).await.unwrap();

        let hydrated = load_resume(&store, &config).await;
        assert_eq!(hydrated, original);
    }

    #[tokio::test]
    async fn test_malformed_snapshot_falls_back_to_empty() {
        let store = MemoryStore::new();
        let config = config();
        store
            .set(&config.resume_key, "{not valid json")
            .await
            .unwrap();
        let resume = load_resume(&store, &config).await;
        assert_eq!(resume, ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_partial_legacy_snapshot_defaults_missing_fields() {
        let store = MemoryStore::new();
        let config = config();
        store
            .set(&config.resume_key, r#"{"summary": "Just a summary"}"#)
            .await
            .unwrap();
        let resume = load_resume(&store, &config).await;
        assert_eq!(resume.summary, "Just a summary");
        assert!(resume.experience.is_empty());
        assert!(resume.skills.is_empty());
    }

    #[tokio::test]
    async fn test_import_blob_wins_and_is_consumed_exactly_once() {
        let store = MemoryStore::new();
        let config = config();

        // An autosaved snapshot exists, but the import takes precedence.
        store
            .set(&config.resume_key, r#"{"summary": "autosaved"}"#)
            .await
            .unwrap();
        store
            .set(
                &config.import_key,
                r#"{"name": "Ada", "skills": ["React"]}"#,
            )
            .await
            .unwrap();

        let first = load_resume(&store, &config).await;
        assert_eq!(first.personal_info.name, "Ada");
        assert_eq!(first.skills.frameworks, vec!["React"]);
        assert_eq!(store.get(&config.import_key).await.unwrap(), None);

        // Second load falls through to the autosaved snapshot.
        let second = load_resume(&store, &config).await;
        assert_eq!(second.summary, "autosaved");
    }

    #[tokio::test]
    async fn test_malformed_import_blob_is_still_consumed() {
        let store = MemoryStore::new();
        let config = config();
        store.set(&config.import_key, "garbage").await.unwrap();

        let resume = load_resume(&store, &config).await;
        assert_eq!(resume, ResumeRecord::default());
        assert_eq!(store.get(&config.import_key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_settings_round_trip_and_malformed_fallback() {
        let store = MemoryStore::new();
        let config = config();

        let mut settings = DisplaySettings::default();
        settings.enabled_sections.insert(Section::Awards, false);
        let payload = serde_json::to_string(&settings).unwrap();
        store.set(&config.settings_key, &payload).await.unwrap();
        assert_eq!(load_settings(&store, &config).await, settings);

        store.set(&config.settings_key, "[1,2,3").await.unwrap();
        assert_eq!(
            load_settings(&store, &config).await,
            DisplaySettings::default()
        );
    }
}
