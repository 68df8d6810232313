pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::{parse_seo_toml, parse_seo_toml_str};
pub use error::{Error, Result};
pub use registry::Registry;
pub use types::*;
