// Public modules
pub mod adapter;
pub mod env_map;
pub mod error;
pub mod launcher;

// Re-export common types for convenience
pub use adapter::LaunchConfig;
pub use error::{Error, ErrorCode, Result};
pub use launcher::LaunchPlan;
