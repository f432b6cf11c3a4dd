//! nsgate Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::NsResolver;
pub use use_cases::{CheckHostUseCase, HostVerdict};
