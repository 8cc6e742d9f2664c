pub mod config;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod paths;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use paths::*;
