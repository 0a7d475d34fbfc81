//! Domain layer of the sections service.
//!
//! Holds the design pattern models, the storage gateway ports the
//! repository is written against, and the domain service the HTTP layer
//! calls. Nothing here depends on a concrete database driver.

pub mod design_pattern;
pub mod error;
pub mod store;
pub mod types;
