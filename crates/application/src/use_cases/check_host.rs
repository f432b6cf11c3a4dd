use crate::ports::NsResolver;
use nsgate_domain::{DomainError, Fqdn, NsAllowList};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a delegation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostVerdict {
    /// At least one NS record for the domain names an allow-listed server.
    Authorized { nameserver: String },
    /// No NS record matched, or the answer section was empty.
    Denied,
}

impl HostVerdict {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }
}

/// Checks whether a domain is delegated to an allow-listed nameserver.
///
/// One NS lookup per call; resolver failures propagate to the caller
/// unchanged. The allow-list is immutable and shared across requests.
pub struct CheckHostUseCase {
    resolver: Arc<dyn NsResolver>,
    allow_list: Arc<NsAllowList>,
}

impl CheckHostUseCase {
    pub fn new(resolver: Arc<dyn NsResolver>, allow_list: Arc<NsAllowList>) -> Self {
        Self {
            resolver,
            allow_list,
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<HostVerdict, DomainError> {
        let fqdn = Fqdn::parse(domain)?;

        let nameservers = self.resolver.lookup_ns(&fqdn).await?;

        debug!(
            domain = %fqdn,
            answers = nameservers.len(),
            "NS lookup completed"
        );

        for nameserver in nameservers {
            if self.allow_list.contains(&nameserver) {
                debug!(domain = %fqdn, nameserver = %nameserver, "Delegation authorized");
                return Ok(HostVerdict::Authorized { nameserver });
            }
        }

        debug!(domain = %fqdn, "No allow-listed nameserver in answer set");
        Ok(HostVerdict::Denied)
    }
}
