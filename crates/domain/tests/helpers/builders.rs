#![allow(dead_code)]
use std::net::Ipv4Addr;
use zorori_domain::wire::write_name;
use zorori_domain::QueryType;

/// Record appended to one of the sections, RDATA already in wire form.
struct RawRecord {
    name: String,
    record_type: QueryType,
    ttl: u32,
    rdata: Vec<u8>,
}

/// Assembles uncompressed DNS responses for decoder tests.
pub struct MessageBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, QueryType)>,
    answers: Vec<RawRecord>,
    authorities: Vec<RawRecord>,
    additionals: Vec<RawRecord>,
}

impl MessageBuilder {
    pub fn response(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & !0x000F) | rcode as u16;
        self
    }

    pub fn question(mut self, name: &str, query_type: QueryType) -> Self {
        self.questions.push((name.to_string(), query_type));
        self
    }

    pub fn answer(mut self, name: &str, record_type: QueryType, rdata: Vec<u8>) -> Self {
        self.answers.push(record(name, record_type, rdata));
        self
    }

    pub fn answer_a(self, name: &str, ip: Ipv4Addr) -> Self {
        self.answer(name, QueryType::A, ip.octets().to_vec())
    }

    pub fn answer_cname(self, name: &str, target: &str) -> Self {
        self.answer(name, QueryType::CNAME, encode_name(target))
    }

    pub fn authority_ns(mut self, zone: &str, server: &str) -> Self {
        self.authorities
            .push(record(zone, QueryType::NS, encode_name(server)));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.additionals
            .push(record(name, QueryType::A, ip.octets().to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for count in [
            self.questions.len(),
            self.answers.len(),
            self.authorities.len(),
            self.additionals.len(),
        ] {
            out.extend_from_slice(&(count as u16).to_be_bytes());
        }

        for (name, query_type) in &self.questions {
            write_name(&mut out, name).unwrap();
            out.extend_from_slice(&query_type.to_u16().to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }
        for rr in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            write_name(&mut out, &rr.name).unwrap();
            out.extend_from_slice(&rr.record_type.to_u16().to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
            out.extend_from_slice(&rr.ttl.to_be_bytes());
            out.extend_from_slice(&(rr.rdata.len() as u16).to_be_bytes());
            out.extend_from_slice(&rr.rdata);
        }
        out
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    write_name(&mut out, name).unwrap();
    out
}

/// SVCB RDATA: priority, uncompressed target, then `(key, value)` params.
pub fn svcb_rdata(priority: u16, target: &str, params: &[(u16, Vec<u8>)]) -> Vec<u8> {
    let mut out = priority.to_be_bytes().to_vec();
    out.extend(encode_name(target));
    for (key, value) in params {
        out.extend_from_slice(&key.to_be_bytes());
        out.extend_from_slice(&(value.len() as u16).to_be_bytes());
        out.extend_from_slice(value);
    }
    out
}

fn record(name: &str, record_type: QueryType, rdata: Vec<u8>) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        record_type,
        ttl: 300,
        rdata,
    }
}
