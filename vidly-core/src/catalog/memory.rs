use super::{CatalogError, CatalogResult, GenreService, MovieService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::debug;
use vidly_model::{Genre, Movie, MovieID};

/// Serialized catalog contents, as stored in fixture files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl CatalogSnapshot {
    /// Check every movie record.
    pub fn validate(&self) -> CatalogResult<()> {
        for movie in &self.movies {
            movie.validate()?;
        }
        Ok(())
    }
}

/// Catalog held entirely in memory.
///
/// Used for offline runs against a fixture file and as a test double. Cloned
/// handles share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<InnerCatalogState>>,
}

#[derive(Debug, Clone, Default)]
struct InnerCatalogState {
    snapshot: CatalogSnapshot,
    fail_deletes: bool,
}

impl InMemoryCatalog {
    pub fn new(genres: Vec<Genre>, movies: Vec<Movie>) -> Self {
        Self::from_snapshot(CatalogSnapshot { genres, movies })
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerCatalogState {
                snapshot,
                fail_deletes: false,
            })),
        }
    }

    /// Parse and validate a JSON fixture
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        debug!(
            genres = snapshot.genres.len(),
            movies = snapshot.movies.len(),
            "loaded catalog fixture"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_json_file(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Make every subsequent delete fail with a storage error
    pub fn set_fail_deletes(&self, value: bool) -> CatalogResult<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| CatalogError::Storage("catalog lock poisoned".into()))?;
        guard.fail_deletes = value;
        Ok(())
    }

    /// Current snapshot contents
    pub fn snapshot(&self) -> CatalogResult<CatalogSnapshot> {
        self.read(|state| state.snapshot.clone())
    }

    fn read<R>(
        &self,
        f: impl FnOnce(&InnerCatalogState) -> R,
    ) -> CatalogResult<R> {
        self.inner
            .read()
            .map(|guard| f(&guard))
            .map_err(|_| CatalogError::Storage("catalog lock poisoned".into()))
    }
}

#[async_trait]
impl MovieService for InMemoryCatalog {
    async fn fetch_movies(&self) -> CatalogResult<Vec<Movie>> {
        self.read(|state| state.snapshot.movies.clone())
    }

    async fn fetch_movie(&self, id: &MovieID) -> CatalogResult<Movie> {
        self.read(|state| {
            state
                .snapshot
                .movies
                .iter()
                .find(|movie| &movie.id == id)
                .cloned()
        })?
        .ok_or_else(|| CatalogError::movie_not_found(id))
    }

    async fn delete_movie(&self, id: &MovieID) -> CatalogResult<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| CatalogError::Storage("catalog lock poisoned".into()))?;

        if guard.fail_deletes {
            return Err(CatalogError::Storage(format!(
                "delete of movie {id} rejected"
            )));
        }

        let movies = &mut guard.snapshot.movies;
        let position = movies
            .iter()
            .position(|movie| &movie.id == id)
            .ok_or_else(|| CatalogError::movie_not_found(id))?;
        movies.remove(position);
        Ok(())
    }
}

#[async_trait]
impl GenreService for InMemoryCatalog {
    async fn fetch_genres(&self) -> CatalogResult<Vec<Genre>> {
        self.read(|state| state.snapshot.genres.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "genres": [{ "_id": "action", "name": "Action" }],
        "movies": [
            {
                "_id": "1",
                "title": "Terminator",
                "genre": { "_id": "action", "name": "Action" },
                "numberInStock": 6,
                "dailyRentalRate": 2.5
            }
        ]
    }"#;

    #[tokio::test]
    async fn fixture_loads_and_serves_records() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();

        let genres = catalog.fetch_genres().await.unwrap();
        assert_eq!(genres.len(), 1);

        let id = MovieID::new("1").unwrap();
        let movie = catalog.fetch_movie(&id).await.unwrap();
        assert_eq!(movie.title, "Terminator");
    }

    #[tokio::test]
    async fn delete_removes_once_then_reports_not_found() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        let id = MovieID::new("1").unwrap();

        catalog.delete_movie(&id).await.unwrap();
        assert!(catalog.fetch_movies().await.unwrap().is_empty());

        let err = catalog.delete_movie(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn injected_delete_failure_keeps_record() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        catalog.set_fail_deletes(true).unwrap();

        let id = MovieID::new("1").unwrap();
        assert!(matches!(
            catalog.delete_movie(&id).await,
            Err(CatalogError::Storage(_))
        ));
        assert_eq!(catalog.fetch_movies().await.unwrap().len(), 1);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        let inner = Arc::clone(&catalog.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(
            catalog.set_fail_deletes(true),
            Err(CatalogError::Storage(_))
        ));
        assert!(matches!(catalog.snapshot(), Err(CatalogError::Storage(_))));
    }

    #[tokio::test]
    async fn fixture_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, FIXTURE).unwrap();

        let catalog = InMemoryCatalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.snapshot().unwrap().movies.len(), 1);

        assert!(matches!(
            InMemoryCatalog::from_json_file(&dir.path().join("missing.json")),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn fixture_with_invalid_record_is_rejected() {
        let raw = r#"{
            "movies": [
                { "_id": "1", "title": " ", "genre": { "_id": "a", "name": "A" } }
            ]
        }"#;
        assert!(matches!(
            InMemoryCatalog::from_json_str(raw),
            Err(CatalogError::Model(_))
        ));
    }
}
