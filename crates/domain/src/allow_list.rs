use crate::config::ConfigError;
use crate::fqdn::Fqdn;
use std::collections::HashSet;

/// The set of nameserver names authorized to serve delegated zones.
///
/// Built once at startup from the `OUR_NS` environment value and shared
/// read-only for the process lifetime. Membership checks normalize the
/// candidate the same way entries are normalized, so names returned by an
/// upstream resolver match regardless of letter case or a missing
/// trailing dot.
#[derive(Debug, Clone)]
pub struct NsAllowList {
    entries: HashSet<Fqdn>,
}

impl NsAllowList {
    /// Parse a comma-separated list of nameserver names.
    ///
    /// Entries are trimmed and empty segments dropped; an input that yields
    /// no entries is a configuration error.
    pub fn from_csv(raw: &str) -> Result<Self, ConfigError> {
        let mut entries = HashSet::new();

        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let fqdn = Fqdn::parse(part)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            entries.insert(fqdn);
        }

        if entries.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }

        Ok(Self { entries })
    }

    /// Test whether a nameserver name belongs to the allow-list.
    pub fn contains(&self, nameserver: &str) -> bool {
        match Fqdn::parse(nameserver) {
            Ok(fqdn) => self.entries.contains(&fqdn),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fqdn> {
        self.entries.iter()
    }
}
