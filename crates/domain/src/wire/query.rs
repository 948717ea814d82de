use super::header::Header;
use super::name::write_name;
use super::reader::WireReader;
use crate::dns_name::normalize;
use crate::{Class, DomainError, QueryIdGenerator, QueryType};
use std::fmt;

/// Question section entry (RFC 1035 §4.1.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub query_type: QueryType,
    pub class: Class,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: QueryType) -> Self {
        Self {
            name: name.into(),
            query_type,
            class: Class::IN,
        }
    }

    fn write_to(&self, out: &mut Vec<u8>) -> Result<(), DomainError> {
        write_name(out, &normalize(&self.name))?;
        out.extend_from_slice(&self.query_type.to_u16().to_be_bytes());
        out.extend_from_slice(&Class::IN.to_u16().to_be_bytes());
        Ok(())
    }

    pub(crate) fn read_from(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = reader.read_name()?;
        let query_type = QueryType::from_u16(reader.read_u16("question type")?);
        let class = Class::from_u16(reader.read_u16("question class")?);
        Ok(Self {
            name,
            query_type,
            class,
        })
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.class, self.query_type)
    }
}

/// An outgoing single-question query.
///
/// Serializing consumes the value, so a query is put on the wire at most once.
#[derive(Debug)]
pub struct Query {
    header: Header,
    question: Question,
}

impl Query {
    /// Builds a recursive (RD=1) query with a fresh transaction ID.
    pub fn new(name: &str, query_type: QueryType, ids: &QueryIdGenerator) -> Self {
        let mut header = Header {
            id: ids.next_id(),
            qd_count: 1,
            ..Header::default()
        };
        header.set_rd(true);

        Self {
            header,
            question: Question::new(name, query_type),
        }
    }

    pub fn with_recursion_desired(mut self, rd: bool) -> Self {
        self.header.set_rd(rd);
        self
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, DomainError> {
        let mut out = Vec::with_capacity(512);
        self.header.write_to(&mut out);
        self.question.write_to(&mut out)?;
        Ok(out)
    }
}
