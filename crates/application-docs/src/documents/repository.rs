use std::io::Read;
use std::sync::Mutex;

use super::domain::{Application, ApplicationId, ApplicationState};

/// Lookup abstraction over the store that owns application records.
///
/// Implementations must return at most one record per identifier. Finding
/// more than one is a data-integrity defect and must be reported as
/// [`RepositoryError::Ambiguous`] rather than picking one.
pub trait ApplicationSource: Send + Sync {
    fn find_application(&self, id: &ApplicationId)
        -> Result<Option<Application>, RepositoryError>;
}

/// Error enumeration for data-source failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{count} applications share id '{id}'")]
    Ambiguous { id: ApplicationId, count: usize },
    #[error("application store unavailable: {0}")]
    Unavailable(String),
    #[error("application seed data is invalid: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Maps a lifecycle state to the label printed on documents.
pub trait StateDescriber: Send + Sync {
    fn describe(&self, state: ApplicationState) -> String;
}

/// Describer backed by [`ApplicationState::label`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StateLabels;

impl StateDescriber for StateLabels {
    fn describe(&self, state: ApplicationState) -> String {
        state.label().to_string()
    }
}

/// Process-local store used by the CLI, the demo server and tests.
#[derive(Debug, Default)]
pub struct InMemoryApplicationSource {
    records: Mutex<Vec<Application>>,
}

impl InMemoryApplicationSource {
    pub fn new(records: Vec<Application>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Load a JSON array of applications.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RepositoryError> {
        let records: Vec<Application> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn insert(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record lock poisoned".to_string()))?;
        guard.push(application);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationSource for InMemoryApplicationSource {
    fn find_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record lock poisoned".to_string()))?;

        let mut matches = guard.iter().filter(|record| &record.id == id);
        let first = matches.next().cloned();
        let extra = matches.count();
        if extra > 0 {
            return Err(RepositoryError::Ambiguous {
                id: id.clone(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    #[should_panic(expected = "repository mutex poisoned")]
    fn poisoned_store_does_not_report_empty() {
        let source = Arc::new(InMemoryApplicationSource::default());
        let poisoner = source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.records.lock().expect("first lock");
            panic!("poison the store");
        })
        .join();

        assert!(matches!(
            source.find_application(&ApplicationId::new("A1")),
            Err(RepositoryError::Unavailable(_))
        ));
        source.len();
    }
}
