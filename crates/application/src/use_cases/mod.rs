mod check_host;

pub use check_host::{CheckHostUseCase, HostVerdict};
