//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence coupling.
//! Creation inputs use separate `New*` structs.

pub mod click;
pub mod url;

pub use click::{Click, NewClick};
pub use url::{NewUrl, Url};
