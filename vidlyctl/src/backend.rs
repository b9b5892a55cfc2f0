use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use vidly_config::Config;
use vidly_core::catalog::{
    CatalogSnapshot, GenreService, HttpCatalog, InMemoryCatalog, MovieService,
};

/// Both catalog services behind one object.
pub trait Catalog: MovieService + GenreService {}

impl<T: MovieService + GenreService> Catalog for T {}

#[derive(Debug)]
pub enum Backend {
    Http(HttpCatalog),
    Fixture {
        catalog: InMemoryCatalog,
        path: PathBuf,
    },
}

impl Backend {
    pub fn connect(config: &Config, fixture: Option<&Path>) -> Result<Self> {
        match fixture {
            Some(path) => {
                let catalog = InMemoryCatalog::from_json_file(path)
                    .with_context(|| {
                        format!("failed to load fixture {}", path.display())
                    })?;
                info!(fixture = %path.display(), "using fixture catalog");
                Ok(Backend::Fixture {
                    catalog,
                    path: path.to_path_buf(),
                })
            }
            None => {
                let catalog = HttpCatalog::with_timeout(
                    &config.api.base_url,
                    config.api.timeout(),
                )
                .context("failed to create catalog client")?;
                Ok(Backend::Http(catalog))
            }
        }
    }

    pub fn catalog(&self) -> &dyn Catalog {
        match self {
            Backend::Http(catalog) => catalog,
            Backend::Fixture { catalog, .. } => catalog,
        }
    }

    /// Write fixture changes back to disk. The HTTP backend persists on its
    /// own.
    pub fn persist(&self) -> Result<()> {
        let Backend::Fixture { catalog, path } = self else {
            return Ok(());
        };

        let snapshot: CatalogSnapshot = catalog.snapshot()?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write fixture {}", path.display()))?;
        Ok(())
    }
}
