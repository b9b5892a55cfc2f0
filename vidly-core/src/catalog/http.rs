use super::{CatalogError, CatalogResult, GenreService, MovieService};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;
use vidly_model::{Genre, Movie, MovieID};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// REST catalog client for the `/api/movies` and `/api/genres` endpoints
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Create a client with the default request timeout
    pub fn new(base_url: &str) -> CatalogResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        timeout: Duration,
    ) -> CatalogResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        info!(base_url = %base_url, "created catalog client");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/api/{segments...}`
    pub fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        missing: impl FnOnce() -> CatalogError,
    ) -> CatalogResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "catalog response");

        match status {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(missing()),
            status => {
                warn!(url = %response.url(), status = status.as_u16(), "catalog request failed");
                Err(CatalogError::Status {
                    url: response.url().to_string(),
                    status: status.as_u16(),
                })
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        missing: impl FnOnce() -> CatalogError,
    ) -> CatalogResult<T> {
        let response = self.execute(self.client.get(url), missing).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MovieService for HttpCatalog {
    async fn fetch_movies(&self) -> CatalogResult<Vec<Movie>> {
        let url = self.endpoint(&["movies"])?;
        self.get_json(url.clone(), || CatalogError::Status {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
        })
        .await
    }

    async fn fetch_movie(&self, id: &MovieID) -> CatalogResult<Movie> {
        let url = self.endpoint(&["movies", id.as_str()])?;
        self.get_json(url, || CatalogError::movie_not_found(id)).await
    }

    async fn delete_movie(&self, id: &MovieID) -> CatalogResult<()> {
        let url = self.endpoint(&["movies", id.as_str()])?;
        // The API echoes the deleted record; only the status matters here.
        self.execute(self.client.delete(url), || {
            CatalogError::movie_not_found(id)
        })
        .await?;
        Ok(())
    }
}

#[async_trait]
impl GenreService for HttpCatalog {
    async fn fetch_genres(&self) -> CatalogResult<Vec<Genre>> {
        let url = self.endpoint(&["genres"])?;
        self.get_json(url.clone(), || CatalogError::Status {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
        })
        .await
    }
}

/// Accept `localhost:3900`-style input: add a scheme when missing and drop a
/// trailing slash.
pub fn normalize_base_url(raw: &str) -> CatalogResult<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidBaseUrl(raw.to_string()));
    }

    let with_scheme = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    if with_scheme != raw {
        debug!(from = raw, to = %with_scheme, "normalized catalog base URL");
    }

    let url = Url::parse(&with_scheme)
        .map_err(|_| CatalogError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(CatalogError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_scheme_and_loses_trailing_slash() {
        let url = normalize_base_url("localhost:3900/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3900/");

        let url = normalize_base_url("https://rentals.example.com/vidly/").unwrap();
        assert_eq!(url.path(), "/vidly");
    }

    #[test]
    fn blank_base_url_is_rejected() {
        assert!(matches!(
            normalize_base_url("   "),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn endpoints_are_nested_under_api() {
        let catalog = HttpCatalog::new("http://localhost:3900").unwrap();
        assert_eq!(
            catalog.endpoint(&["movies"]).unwrap().as_str(),
            "http://localhost:3900/api/movies"
        );
        assert_eq!(
            catalog.endpoint(&["movies", "5b21ca3e"]).unwrap().as_str(),
            "http://localhost:3900/api/movies/5b21ca3e"
        );

        let nested = HttpCatalog::new("https://rentals.example.com/vidly/").unwrap();
        assert_eq!(
            nested.endpoint(&["genres"]).unwrap().as_str(),
            "https://rentals.example.com/vidly/api/genres"
        );
    }

    #[test]
    fn ids_are_percent_encoded_as_one_segment() {
        let catalog = HttpCatalog::new("http://localhost:3900").unwrap();
        let url = catalog.endpoint(&["movies", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3900/api/movies/a%2Fb");
    }
}
