//! Domain types shared by the loader, the services and the HTTP layer.

pub mod record;
pub mod selection;
pub mod summary;

pub use record::*;
pub use selection::*;
pub use summary::*;
