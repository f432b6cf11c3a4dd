/// Upstream resolver configuration.
#[derive(Debug, Clone)]
pub struct DnsConfig {
    /// Resolvers to query, in order of preference. Addresses without an
    /// explicit port are assumed to speak DNS on port 53.
    pub resolvers: Vec<String>,

    /// Per-query timeout in seconds.
    pub query_timeout: u64,
}

impl DnsConfig {
    /// Split a comma-separated resolver list, dropping empty segments.
    ///
    /// No address-syntax validation happens here; a malformed entry
    /// surfaces on the query path when the client tries to use it.
    pub fn parse_resolvers(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolvers: vec!["1.1.1.1".to_string(), "8.8.8.8".to_string()],
            query_timeout: 3,
        }
    }
}
