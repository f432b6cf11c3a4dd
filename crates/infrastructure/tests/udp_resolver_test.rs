use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use nsgate_application::ports::NsResolver;
use nsgate_domain::{DomainError, Fqdn};
use nsgate_infrastructure::UdpNsResolver;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Spawn a single-shot resolver on 127.0.0.1 that answers every query with
/// the given rcode and NS targets, echoing the query ID and question.
async fn spawn_mock_resolver(rcode: ResponseCode, targets: Vec<&'static str>) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 512];
        let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
        let request = Message::from_vec(&buf[..len]).unwrap();

        let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
        response.set_response_code(rcode);
        for query in request.queries() {
            response.add_query(query.clone());
            for target in &targets {
                response.add_answer(Record::from_rdata(
                    query.name().clone(),
                    300,
                    RData::NS(NS(Name::from_str(target).unwrap())),
                ));
            }
        }

        let bytes = response.to_vec().unwrap();
        socket.send_to(&bytes, peer).await.unwrap();
    });

    addr
}

fn client(addr: SocketAddr) -> UdpNsResolver {
    UdpNsResolver::new(&addr.to_string(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_lookup_returns_ns_targets() {
    let addr = spawn_mock_resolver(
        ResponseCode::NoError,
        vec!["ns1.example.com.", "ns2.example.com."],
    )
    .await;

    let domain = Fqdn::parse("example.com").unwrap();
    let nameservers = client(addr).lookup_ns(&domain).await.unwrap();

    assert_eq!(nameservers, vec!["ns1.example.com.", "ns2.example.com."]);
}

#[tokio::test]
async fn test_lookup_of_nxdomain_yields_empty_answer_set() {
    let addr = spawn_mock_resolver(ResponseCode::NXDomain, vec![]).await;

    let domain = Fqdn::parse("nonexistent.example").unwrap();
    let nameservers = client(addr).lookup_ns(&domain).await.unwrap();

    assert!(nameservers.is_empty());
}

#[tokio::test]
async fn test_lookup_of_servfail_yields_empty_answer_set() {
    // A SERVFAIL that decodes cleanly is not a transport failure; it simply
    // carries no usable delegation and the check falls through to a denial.
    let addr = spawn_mock_resolver(ResponseCode::ServFail, vec![]).await;

    let domain = Fqdn::parse("example.com").unwrap();
    let nameservers = client(addr).lookup_ns(&domain).await.unwrap();

    assert!(nameservers.is_empty());
}

#[tokio::test]
async fn test_silent_resolver_times_out() {
    // Bind a socket that never answers.
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let resolver = UdpNsResolver::new(&addr.to_string(), Duration::from_millis(100)).unwrap();
    let domain = Fqdn::parse("example.com").unwrap();
    let result = resolver.lookup_ns(&domain).await;

    assert!(matches!(result, Err(DomainError::QueryTimeout)));
}

#[tokio::test]
async fn test_mismatched_response_id_is_rejected() {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 512];
        let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
        let request = Message::from_vec(&buf[..len]).unwrap();

        // Answer with an unrelated ID.
        let mut response = Message::new(
            request.id().wrapping_add(1),
            MessageType::Response,
            OpCode::Query,
        );
        response.set_response_code(ResponseCode::NoError);
        for query in request.queries() {
            response.add_query(query.clone());
        }
        socket
            .send_to(&response.to_vec().unwrap(), peer)
            .await
            .unwrap();
    });

    let resolver = UdpNsResolver::new(&addr.to_string(), Duration::from_secs(2)).unwrap();
    let domain = Fqdn::parse("example.com").unwrap();
    let result = resolver.lookup_ns(&domain).await;

    assert!(matches!(result, Err(DomainError::InvalidDnsResponse(_))));
}
