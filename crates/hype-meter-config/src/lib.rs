pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, ReviewsConfig, StoreConfig, DEFAULT_ACCESS_KEY_HEADER, DEFAULT_DATE_FORMAT};
pub use credentials::{CredentialStore, ACCESS_KEY_ENV};
pub use paths::{PathManager, container_base_path};
