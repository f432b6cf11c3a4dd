use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use nsgate_domain::DomainError;
use tracing::debug;

/// NS answer extracted from an upstream response.
#[derive(Debug, Clone)]
pub struct NsResponse {
    /// NS target names from the answer section, in answer order.
    pub nameservers: Vec<String>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a raw DNS response and collect NS targets from the answer
    /// section. Non-NS answer records are ignored.
    ///
    /// Responses that decode cleanly are returned whatever their response
    /// code; NXDOMAIN and SERVFAIL simply carry an empty answer set. Only
    /// undecodable bytes are an error.
    pub fn parse(response_bytes: &[u8]) -> Result<NsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut nameservers = Vec::new();
        for record in message.answers() {
            if let RData::NS(ns) = record.data() {
                nameservers.push(ns.0.to_utf8());
            }
        }

        debug!(
            rcode = ?rcode,
            nameservers = nameservers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(NsResponse {
            nameservers,
            rcode,
            truncated,
        })
    }
}
