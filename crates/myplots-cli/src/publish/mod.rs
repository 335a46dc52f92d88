pub mod config;
pub mod error;
pub mod fs;
pub mod pipeline;
pub mod runner;

pub use config::{discover_root, PublishConfig};
pub use pipeline::{Pipeline, Step};
pub use runner::SystemRunner;
