#![allow(dead_code)]
use std::net::Ipv4Addr;
use zorori_domain::wire::{write_name, Message};
use zorori_domain::QueryType;

/// Builds a response to a raw query: same ID, question echoed, QR set.
pub struct ReplyBuilder {
    id: u16,
    question: Vec<u8>,
    flags: u16,
    answers: Vec<Vec<u8>>,
}

impl ReplyBuilder {
    pub fn to(query: &[u8]) -> Self {
        let message = Message::decode(query).unwrap();
        let mut question = Vec::new();
        for q in &message.questions {
            write_name(&mut question, &q.name).unwrap();
            question.extend_from_slice(&q.query_type.to_u16().to_be_bytes());
            question.extend_from_slice(&1u16.to_be_bytes());
        }
        Self {
            id: message.id(),
            question,
            flags: 0x8000 | (message.header.flags & 0x0100),
            answers: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & !0x000F) | rcode as u16;
        self
    }

    pub fn answer(mut self, name: &str, record_type: QueryType, rdata: &[u8]) -> Self {
        let mut rr = Vec::new();
        write_name(&mut rr, name).unwrap();
        rr.extend_from_slice(&record_type.to_u16().to_be_bytes());
        rr.extend_from_slice(&1u16.to_be_bytes());
        rr.extend_from_slice(&60u32.to_be_bytes());
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    pub fn answer_a(self, name: &str, ip: Ipv4Addr) -> Self {
        self.answer(name, QueryType::A, &ip.octets())
    }

    pub fn answer_cname(self, name: &str, target: &str) -> Self {
        let mut rdata = Vec::new();
        write_name(&mut rdata, target).unwrap();
        self.answer(name, QueryType::CNAME, &rdata)
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&((!self.question.is_empty()) as u16).to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0, 0, 0, 0]);
        out.extend_from_slice(&self.question);
        for rr in &self.answers {
            out.extend_from_slice(rr);
        }
        out
    }
}
