#![allow(dead_code)]

use async_trait::async_trait;
use nsgate_application::ports::NsResolver;
use nsgate_domain::{DomainError, Fqdn};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory `NsResolver` keyed by normalized domain name.
///
/// Unknown domains resolve to an empty answer set, matching an upstream
/// that returns NOERROR with no NS records.
pub struct MockNsResolver {
    responses: RwLock<HashMap<String, Vec<String>>>,
    errors: RwLock<HashMap<String, DomainError>>,
}

impl MockNsResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_response(&self, domain: &str, nameservers: &[&str]) {
        self.responses.write().unwrap().insert(
            domain.to_string(),
            nameservers.iter().map(|ns| ns.to_string()).collect(),
        );
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors.write().unwrap().insert(domain.to_string(), error);
    }
}

impl Default for MockNsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NsResolver for MockNsResolver {
    async fn lookup_ns(&self, domain: &Fqdn) -> Result<Vec<String>, DomainError> {
        if let Some(error) = self.errors.read().unwrap().get(domain.as_str()) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(domain.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
