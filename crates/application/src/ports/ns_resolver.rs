use async_trait::async_trait;
use nsgate_domain::{DomainError, Fqdn};

/// Outbound port for NS-record lookups.
///
/// One query, no retries. Implementations return the NS target names from
/// the answer section; an empty vector means the response parsed cleanly
/// but carried no NS records (NXDOMAIN and NODATA both land here).
#[async_trait]
pub trait NsResolver: Send + Sync {
    async fn lookup_ns(&self, domain: &Fqdn) -> Result<Vec<String>, DomainError>;
}
