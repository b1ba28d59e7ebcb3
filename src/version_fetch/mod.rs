pub mod config;
pub mod error;
pub mod http;
pub mod release;
pub mod service;
pub mod traits;

pub use config::FetchConfig;
pub use error::FetchError;
pub use service::{FetchService, Resolution};
pub use traits::{FetchEnv, SystemFetchEnv};
