use std::net::Ipv4Addr;
use zorori_domain::wire::Message;
use zorori_domain::{DomainError, QueryType, RecordData, SvcParam};

mod helpers;
use helpers::{encode_name, svcb_rdata, MessageBuilder};

#[test]
fn test_svcb_with_ipv4_hints() {
    let rdata = svcb_rdata(
        1,
        "dns.example.net",
        &[
            (1, vec![2, b'h', b'2']),
            (4, vec![192, 0, 2, 1, 192, 0, 2, 2]),
        ],
    );
    let bytes = MessageBuilder::response(1)
        .question("_dns.resolver.arpa", QueryType::SVCB)
        .answer("_dns.resolver.arpa", QueryType::SVCB, rdata)
        .build();

    let message = Message::decode(&bytes).unwrap();
    let svcb = message.answers[0].service_binding().unwrap();

    assert_eq!(svcb.priority, 1);
    assert!(!svcb.is_alias());
    assert_eq!(svcb.target, "dns.example.net.");
    assert_eq!(
        svcb.params[&4],
        SvcParam::Ipv4Hint(vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(192, 0, 2, 2)])
    );
    assert_eq!(svcb.params[&4].to_string(), "ipv4hint=192.0.2.1,192.0.2.2");
    assert_eq!(
        svcb.to_string(),
        "1 dns.example.net. alpn=h2 ipv4hint=192.0.2.1,192.0.2.2"
    );
}

#[test]
fn test_https_record_uses_svcb_layout() {
    let rdata = svcb_rdata(0, "svc.example.net", &[]);
    let bytes = MessageBuilder::response(1)
        .answer("example.net", QueryType::HTTPS, rdata)
        .build();

    let message = Message::decode(&bytes).unwrap();
    match message.answers[0].data().unwrap() {
        RecordData::HTTPS(svcb) => {
            assert!(svcb.is_alias());
            assert_eq!(svcb.target, "svc.example.net.");
            assert!(svcb.params.is_empty());
        }
        other => panic!("expected HTTPS data, got {:?}", other),
    }
}

#[test]
fn test_soa_with_and_without_timers() {
    let mut full = encode_name("ns1.example.com");
    full.extend(encode_name("hostmaster.example.com"));
    for value in [2024010101u32, 7200, 3600, 1209600, 300] {
        full.extend_from_slice(&value.to_be_bytes());
    }
    let mut short = encode_name("ns1.example.com");
    short.extend(encode_name("hostmaster.example.com"));
    short.extend_from_slice(&42u32.to_be_bytes());

    let bytes = MessageBuilder::response(1)
        .answer("example.com", QueryType::SOA, full)
        .answer("example.org", QueryType::SOA, short)
        .build();
    let message = Message::decode(&bytes).unwrap();

    let RecordData::SOA(soa) = message.answers[0].data().unwrap() else {
        panic!("expected SOA");
    };
    assert_eq!(soa.mname, "ns1.example.com.");
    assert_eq!(soa.rname, "hostmaster.example.com.");
    assert_eq!(soa.serial, 2024010101);
    assert_eq!(soa.timers.unwrap().minimum, 300);

    let RecordData::SOA(soa) = message.answers[1].data().unwrap() else {
        panic!("expected SOA");
    };
    assert_eq!(soa.serial, 42);
    assert!(soa.timers.is_none());
}

#[test]
fn test_soa_with_partial_field_is_rejected() {
    let mut rdata = encode_name("ns1.example.com");
    rdata.extend(encode_name("hostmaster.example.com"));
    rdata.extend_from_slice(&[0, 0, 0, 42, 0]);

    let bytes = MessageBuilder::response(1)
        .answer("example.com", QueryType::SOA, rdata)
        .build();
    let message = Message::decode(&bytes).unwrap();

    let err = message.answers[0].data().unwrap_err();
    assert!(matches!(err, DomainError::Decode(_)));
}

#[test]
fn test_accessor_type_mismatch() {
    let bytes = MessageBuilder::response(1)
        .answer_a("example.com", Ipv4Addr::new(192, 0, 2, 1))
        .answer_cname("www.example.com", "example.com")
        .build();
    let message = Message::decode(&bytes).unwrap();

    assert_eq!(
        message.answers[0].cname_target().unwrap_err(),
        DomainError::TypeMismatch {
            expected: "CNAME",
            actual: QueryType::A,
        }
    );
    assert!(matches!(
        message.answers[1].ip(),
        Err(DomainError::TypeMismatch { .. })
    ));
    assert!(matches!(
        message.answers[0].service_binding(),
        Err(DomainError::TypeMismatch { .. })
    ));
}

#[test]
fn test_a_record_with_wrong_length() {
    let bytes = MessageBuilder::response(1)
        .answer("example.com", QueryType::A, vec![192, 0, 2])
        .build();
    let message = Message::decode(&bytes).unwrap();

    assert!(matches!(message.answers[0].ip(), Err(DomainError::Decode(_))));
}

#[test]
fn test_unknown_type_keeps_raw_rdata() {
    let bytes = MessageBuilder::response(1)
        .answer("example.com", QueryType::Unknown(16), vec![3, b'a', b'b', b'c'])
        .build();
    let message = Message::decode(&bytes).unwrap();

    assert_eq!(message.answers[0].record_type, QueryType::Unknown(16));
    assert_eq!(
        message.answers[0].data().unwrap(),
        RecordData::Unknown(vec![3, b'a', b'b', b'c'])
    );
}

#[test]
fn test_record_display() {
    let bytes = MessageBuilder::response(1)
        .answer_a("example.com", Ipv4Addr::new(192, 0, 2, 1))
        .build();
    let message = Message::decode(&bytes).unwrap();

    assert_eq!(
        message.answers[0].to_string(),
        "{Name: example.com., Type: A, Class: IN, TTL: 300, RdLength: 4, Rdata: 192.0.2.1}"
    );
}
