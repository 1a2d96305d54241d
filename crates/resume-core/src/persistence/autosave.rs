//! Debounced autosave.
//!
//! Every mutation schedules a commit after a quiet period; a newer mutation
//! before the period elapses replaces the pending commit, so only the latest
//! state is ever written. An explicit save flushes immediately. Pending timers
//! are aborted on teardown so a dead session never writes stale state.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::config::PersistenceConfig;
use crate::errors::CoreError;
use crate::models::resume::ResumeRecord;
use crate::models::settings::DisplaySettings;
use crate::persistence::store::KvStore;

/// Cancellable scheduled-task primitive: at most one pending task per key,
/// replaced on reschedule, aborted on cancel and on drop.
pub struct Debouncer {
    quiet_period: Duration,
    pending: HashMap<String, JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: HashMap::new(),
        }
    }

    /// Schedules `task` to run after the quiet period, replacing any pending
    /// task under the same key.
    pub fn schedule<F>(&mut self, key: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel(key);
        let delay = self.quiet_period;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        self.pending.insert(key.to_string(), handle);
    }

    /// Aborts the pending task under `key`, if any.
    pub fn cancel(&mut self, key: &str) {
        if let Some(handle) = self.pending.remove(key) {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

/// Schedules debounced commits of the resume and settings blobs to the store.
pub struct Autosaver {
    store: Arc<dyn KvStore>,
    config: PersistenceConfig,
    debouncer: Debouncer,
}

impl Autosaver {
    pub fn new(store: Arc<dyn KvStore>, config: PersistenceConfig) -> Self {
        let debouncer = Debouncer::new(config.quiet_period);
        Self {
            store,
            config,
            debouncer,
        }
    }

    /// Schedules a debounced commit of the resume blob.
    pub fn schedule_resume(&mut self, resume: &ResumeRecord) -> Result<(), CoreError> {
        let payload = serde_json::to_string(resume)?;
        self.schedule(self.config.resume_key.clone(), payload);
        Ok(())
    }

    /// Schedules a debounced commit of the settings blob.
    pub fn schedule_settings(&mut self, settings: &DisplaySettings) -> Result<(), CoreError> {
        let payload = serde_json::to_string(settings)?;
        self.schedule(self.config.settings_key.clone(), payload);
        Ok(())
    }

    /// Commits the resume immediately, cancelling any pending debounced write.
    pub async fn flush_resume(&mut self, resume: &ResumeRecord) -> Result<(), CoreError> {
        self.debouncer.cancel(&self.config.resume_key);
        let payload = serde_json::to_string(resume)?;
        self.store.set(&self.config.resume_key, &payload).await?;
        Ok(())
    }

    /// Commits the settings immediately, cancelling any pending debounced write.
    pub async fn flush_settings(&mut self, settings: &DisplaySettings) -> Result<(), CoreError> {
        self.debouncer.cancel(&self.config.settings_key);
        let payload = serde_json::to_string(settings)?;
        self.store.set(&self.config.settings_key, &payload).await?;
        Ok(())
    }

    fn schedule(&mut self, key: String, payload: String) {
        let store = Arc::clone(&self.store);
        let task_key = key.clone();
        self.debouncer.schedule(&key, async move {
            if let Err(e) = store.set(&task_key, &payload).await {
                warn!("autosave commit for '{task_key}' failed: {e:#}");
            }
        });
    }
}
