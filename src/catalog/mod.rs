pub mod components;
pub mod editable;
pub mod error;

pub use components::{
    ComponentCatalog, ComponentDescriptor, UnresolvedReference, VariantDescriptor,
};
pub use editable::{EditableDescriptor, TokenCatalog, TokenOption};
pub use error::{CatalogError, CatalogResult};
