use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contact::Submission;

pub const SUBMISSIONS_FILE: &str = "contact_submissions.json";
pub const FAVORITES_FILE: &str = "favorites.json";

/// Everything read back at startup. Each collection loads independently;
/// one going missing or sour never takes the other down.
#[derive(Debug, Clone, Default)]
pub struct SavedCollections {
    pub submissions: Vec<Submission>,
    pub favorites: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum SaveError {
    Format,
    Write,
}

/// On-disk home of the two persisted collections, one JSON array per file.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new() -> Self {
        let dir = if let Some(project_dirs) =
            directories::ProjectDirs::from("rs", "Atelier", "Atelier")
        {
            project_dirs.data_dir().into()
        } else {
            std::env::current_dir().unwrap_or_default()
        };

        Self { dir }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads both collections. Absent or malformed data comes back empty;
    /// the visitor never hears about it.
    pub async fn load(self) -> SavedCollections {
        SavedCollections {
            submissions: read_list(self.dir.join(SUBMISSIONS_FILE)).await,
            favorites: read_list(self.dir.join(FAVORITES_FILE)).await,
        }
    }

    pub async fn save_submissions(self, submissions: Vec<Submission>) -> Result<(), SaveError> {
        write_list(self.dir, SUBMISSIONS_FILE, &submissions).await
    }

    pub async fn save_favorites(self, favorites: Vec<String>) -> Result<(), SaveError> {
        write_list(self.dir, FAVORITES_FILE, &favorites).await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_list<T: DeserializeOwned>(path: PathBuf) -> Vec<T> {
    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(_) => return Vec::new(),
    };

    match serde_json::from_str(&contents) {
        Ok(list) => list,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring malformed saved data");
            Vec::new()
        }
    }
}

async fn write_list<T: Serialize>(dir: PathBuf, file: &str, list: &[T]) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(list).map_err(|_| SaveError::Format)?;

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|_| SaveError::Write)?;

    tokio::fs::write(dir.join(file), json.as_bytes())
        .await
        .map_err(|_| SaveError::Write)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormData, Submission};

    #[tokio::test]
    async fn loads_empty_when_nothing_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let saved = Store::at(dir.path()).load().await;

        assert!(saved.submissions.is_empty());
        assert!(saved.favorites.is_empty());
    }

    #[tokio::test]
    async fn malformed_files_load_as_empty_without_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SUBMISSIONS_FILE), "{not json").unwrap();
        std::fs::write(dir.path().join(FAVORITES_FILE), "42").unwrap();

        let saved = Store::at(dir.path()).load().await;

        assert!(saved.submissions.is_empty());
        assert!(saved.favorites.is_empty());
    }

    #[tokio::test]
    async fn favorites_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());

        store
            .clone()
            .save_favorites(vec!["x".to_string(), "y".to_string()])
            .await
            .unwrap();

        let saved = store.load().await;
        assert_eq!(saved.favorites, vec!["x".to_string(), "y".to_string()]);
    }

    #[tokio::test]
    async fn each_saved_submission_grows_the_stored_list_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());
        let mut submissions = Vec::new();

        for n in 1..=3 {
            submissions.push(Submission::new(FormData {
                name: format!("Visitor {n}"),
                email: format!("visitor{n}@example.com"),
                message: "Hello".to_string(),
            }));

            store
                .clone()
                .save_submissions(submissions.clone())
                .await
                .unwrap();

            let saved = store.clone().load().await;
            assert_eq!(saved.submissions.len(), n);
        }

        let saved = store.load().await;
        assert_eq!(saved.submissions[0].name, "Visitor 1");
        assert_eq!(saved.submissions[2].email, "visitor3@example.com");
    }
}
