//! Port traits
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`MetadataCatalog`] | catalog adapters (in-memory catalog in infrastructure) |
//! | [`ConstructionDelegate`] | the owning container |

pub mod catalog;
pub mod construction;

pub use catalog::MetadataCatalog;
pub use construction::ConstructionDelegate;
