use crate::catalog::CatalogError;
use crate::query::ConfigurationError;
use thiserror::Error;
use vidly_model::ModelError;

#[derive(Error, Debug)]
pub enum VidlyError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid record: {0}")]
    Model(#[from] ModelError),
}

impl VidlyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, VidlyError::Catalog(err) if err.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, VidlyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_errors_convert_into_umbrella() {
        let err: VidlyError =
            ConfigurationError::NonPositivePageSize { page_size: 0 }.into();
        assert!(matches!(err, VidlyError::Configuration(_)));

        let id = vidly_model::MovieID::new("7").unwrap();
        let err: VidlyError = CatalogError::movie_not_found(&id).into();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Catalog error: Entity not found: movie with id 7"
        );
    }
}
