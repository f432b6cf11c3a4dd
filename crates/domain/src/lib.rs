//! nsgate Domain Layer
pub mod allow_list;
pub mod config;
pub mod errors;
pub mod fqdn;

pub use allow_list::NsAllowList;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use fqdn::Fqdn;
