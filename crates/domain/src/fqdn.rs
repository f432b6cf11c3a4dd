use crate::errors::DomainError;
use std::fmt;

/// A fully-qualified domain name: trimmed, lowercased, trailing-dot-terminated.
///
/// Names in DNS answer sections arrive fully qualified, so normalizing both
/// sides of a comparison to this form reduces matching to string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fqdn(String);

impl Fqdn {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }

        let mut name = trimmed.to_lowercase();
        if !name.ends_with('.') {
            name.push('.');
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
