//! swipedeck/crates/sd-core/src/lib.rs
//!
//! The domain models, ports and use cases for swipedeck.

pub mod error;
pub mod models;
pub mod repository;
pub mod traits;
pub mod usecases;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use repository::*;
pub use traits::*;
pub use usecases::*;
