//! File-backed session store.
//!
//! One JSON document per session under a state directory. Reads are
//! tolerant: missing file, unreadable file, and undecodable content all
//! answer "no state" (the prior document is left untouched either way).
//! Writes go through a temporary file in the target directory, are synced,
//! and then renamed over the target, so a crash mid-write never exposes a
//! torn document: later reads see either the previous state or the fully
//! new one.

use foreman_application::ports::session_store::{SessionStore, SessionStoreError};
use foreman_domain::{DeliveryState, SessionId};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Session store keeping one `<session>.json` per session.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The document path for a session.
    pub fn session_path(&self, session: &SessionId) -> PathBuf {
        self.dir.join(format!("{}.json", session))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, session: &SessionId) -> Option<DeliveryState> {
        let path = self.session_path(session);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "session state unreadable, treating as absent"
                    );
                }
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "session state undecodable, treating as absent"
                );
                None
            }
        }
    }

    fn save(
        &self,
        session: &SessionId,
        state: &DeliveryState,
    ) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(SessionStoreError::Write)?;
        let json = serde_json::to_string_pretty(state)?;

        // Temp file must live in the target directory so the final rename
        // stays on one filesystem.
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(SessionStoreError::Write)?;
        temp.write_all(json.as_bytes())
            .map_err(SessionStoreError::Write)?;
        temp.as_file()
            .sync_all()
            .map_err(SessionStoreError::Write)?;

        let path = self.session_path(session);
        temp.persist(&path)
            .map_err(|e| SessionStoreError::Write(e.error))?;
        debug!(path = %path.display(), "session state written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreman_domain::{Mode, Phase};
    use tempfile::TempDir;

    fn session() -> SessionId {
        SessionId::from_label("demo")
    }

    #[test]
    fn absent_session_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        assert!(store.load(&session()).is_none());
    }

    #[test]
    fn roundtrip_preserves_semantic_content() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let mut state = DeliveryState::new("demo", Mode::Delivery, Some("plans/demo.md".into()));
        state.advance().unwrap();
        store.save(&session(), &state).unwrap();

        // A second store instance models an independent invocation.
        let other = FileSessionStore::new(dir.path());
        let loaded = other.load(&session()).unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.current_phase, Phase::Implement);
    }

    #[test]
    fn corrupt_document_folds_to_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        fs::write(store.session_path(&session()), "{not json at all").unwrap();
        assert!(store.load(&session()).is_none());
    }

    #[test]
    fn truncated_document_folds_to_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let state = DeliveryState::new("demo", Mode::Delivery, None);
        store.save(&session(), &state).unwrap();

        let path = store.session_path(&session());
        let full = fs::read_to_string(&path).unwrap();
        fs::write(&path, &full[..full.len() / 2]).unwrap();
        assert!(store.load(&session()).is_none());
    }

    #[test]
    fn save_replaces_prior_document_atomically() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let mut state = DeliveryState::new("demo", Mode::Quickfix, None);
        store.save(&session(), &state).unwrap();
        state.advance().unwrap();
        store.save(&session(), &state).unwrap();

        assert_eq!(store.load(&session()).unwrap(), state);
        // No stray temp files left behind.
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension() != Some(std::ffi::OsStr::new("json")))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn sessions_use_separate_documents() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let one = SessionId::from_label("one");
        let two = SessionId::from_label("two");
        store
            .save(&one, &DeliveryState::new("one", Mode::Delivery, None))
            .unwrap();
        assert!(store.load(&two).is_none());
        assert_eq!(store.load(&one).unwrap().slug, "one");
    }

    #[test]
    fn state_dir_is_created_on_first_save() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("state").join("sessions");
        let store = FileSessionStore::new(&nested);
        store
            .save(&session(), &DeliveryState::new("demo", Mode::Spike, None))
            .unwrap();
        assert!(store.load(&session()).is_some());
    }
}
