use thiserror::Error;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown component: {component}")]
    UnknownComponent { component: String },
    #[error("unknown variant {variant} for component {component}")]
    UnknownVariant { component: String, variant: String },
    #[error("component {component} declares no variants")]
    EmptyComponent { component: String },
}
