//! UDP NS lookup client (RFC 1035 §4.2.1)
//!
//! One query per call over a fresh ephemeral socket. Messages are sent
//! as-is (no framing); a truncated response is used as received, not
//! retried over TCP.

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use nsgate_application::ports::NsResolver;
use nsgate_domain::{DomainError, Fqdn};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// NS lookups over plain UDP against a single upstream resolver.
pub struct UdpNsResolver {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpNsResolver {
    pub fn new(resolver: &str, timeout: Duration) -> Result<Self, DomainError> {
        let server_addr = parse_resolver_addr(resolver)?;
        Ok(Self {
            server_addr,
            timeout,
        })
    }

    /// Build a client for the first entry of a configured resolver list.
    ///
    /// One query per check: no failover iteration over the rest of the
    /// list.
    pub fn from_resolvers(resolvers: &[String], timeout: Duration) -> Result<Self, DomainError> {
        let first = resolvers.first().ok_or_else(|| {
            DomainError::InvalidResolverAddress("no resolvers configured".to_string())
        })?;
        Self::new(first, timeout)
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

/// Parse a resolver address, assuming port 53 when none is given.
fn parse_resolver_addr(resolver: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = resolver.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, 53));
    }

    resolver
        .parse::<SocketAddr>()
        .map_err(|e| DomainError::InvalidResolverAddress(format!("'{}': {}", resolver, e)))
}

/// Check that a response carries the ID of the query it answers.
fn validate_response_id(
    expected_id: u16,
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response from {} too short to carry a header",
            server
        )));
    }

    let wire_id = u16::from_be_bytes([response[0], response[1]]);
    if wire_id != expected_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response ID mismatch from {}: expected {:#06x}, got {:#06x}",
            server, expected_id, wire_id
        )));
    }

    Ok(())
}

#[async_trait]
impl NsResolver for UdpNsResolver {
    async fn lookup_ns(&self, domain: &Fqdn) -> Result<Vec<String>, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_ns_query(domain)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Transport {
                server: self.server_addr.to_string(),
                detail: format!("Failed to bind UDP socket: {}", e),
            })?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| DomainError::Transport {
                server: self.server_addr.to_string(),
                detail: format!("Failed to connect: {}", e),
            })?;

        socket
            .send(&request_bytes)
            .await
            .map_err(|e| DomainError::Transport {
                server: self.server_addr.to_string(),
                detail: format!("Failed to send query: {}", e),
            })?;

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let len = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::Transport {
                server: self.server_addr.to_string(),
                detail: format!("Failed to receive response: {}", e),
            })?;

        validate_response_id(id, &recv_buf[..len], self.server_addr)?;

        let response = ResponseParser::parse(&recv_buf[..len])?;

        if response.truncated {
            warn!(
                server = %self.server_addr,
                domain = %domain,
                "Truncated NS response; answer section may be partial"
            );
        }

        debug!(
            server = %self.server_addr,
            domain = %domain,
            rcode = ?response.rcode,
            nameservers = response.nameservers.len(),
            "NS query completed"
        );

        Ok(response.nameservers)
    }
}
