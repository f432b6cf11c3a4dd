mod ns_resolver;

pub use ns_resolver::NsResolver;

// Re-export for convenience
pub use nsgate_domain::Fqdn;
