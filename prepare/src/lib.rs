pub mod config;
pub mod fetch;
pub mod output;
pub mod tables;

mod error;

pub use config::Config;
pub use error::PrepareError;
