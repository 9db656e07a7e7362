//! FPL API access
//!
//! - `http`: the read-only client for `bootstrap-static` and `element-summary`
//! - `types`: serde models of their responses

pub mod http;
pub mod types;

pub use http::FplClient;
pub use types::{BootstrapStatic, Element, ElementSummary, GameweekHistory};
