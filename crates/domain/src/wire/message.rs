use super::header::Header;
use super::query::Question;
use super::reader::WireReader;
use crate::{Class, DomainError, QueryType};

/// A resource record viewed inside the message it was decoded from.
///
/// RDATA is kept raw; [`ResourceRecord::data`] interprets it on demand. Names
/// inside RDATA may point anywhere in the message, so the record keeps a
/// reference to the whole buffer rather than only its own bytes.
#[derive(Debug, Clone)]
pub struct ResourceRecord<'a> {
    pub name: String,
    pub record_type: QueryType,
    pub class: Class,
    pub ttl: u32,
    pub rd_length: u16,
    /// Offset of the first RDATA byte from the start of the message.
    pub rdata_offset: usize,
    pub rdata: &'a [u8],
    message: &'a [u8],
}

impl<'a> ResourceRecord<'a> {
    pub fn message_buffer(&self) -> &'a [u8] {
        self.message
    }

    fn read_from(reader: &mut WireReader<'a>) -> Result<Self, DomainError> {
        let name = reader.read_name()?;
        let record_type = QueryType::from_u16(reader.read_u16("record type")?);
        let class = Class::from_u16(reader.read_u16("record class")?);
        let ttl = reader.read_u32("record ttl")?;
        let rd_length = reader.read_u16("rdlength")?;
        let rdata_offset = reader.position();
        let rdata = reader.read_bytes(rd_length as usize, "rdata")?;

        Ok(Self {
            name,
            record_type,
            class,
            ttl,
            rd_length,
            rdata_offset,
            rdata,
            message: reader.buffer(),
        })
    }
}

/// A decoded DNS response. Sections keep the order they had on the wire.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord<'a>>,
    pub authorities: Vec<ResourceRecord<'a>>,
    pub additionals: Vec<ResourceRecord<'a>>,
    buffer: &'a [u8],
}

impl<'a> Message<'a> {
    /// Decodes a complete message. Any truncation, or bytes left after the
    /// sections the header announces, fails the whole decode.
    pub fn decode(buffer: &'a [u8]) -> Result<Self, DomainError> {
        let mut reader = WireReader::new(buffer);
        let header = Header::read_from(&mut reader)?;

        let mut questions = Vec::with_capacity(bounded_capacity(header.qd_count, &reader, 5));
        for _ in 0..header.qd_count {
            questions.push(Question::read_from(&mut reader)?);
        }
        let answers = read_records(&mut reader, header.an_count)?;
        let authorities = read_records(&mut reader, header.ns_count)?;
        let additionals = read_records(&mut reader, header.ar_count)?;

        if reader.remaining() != 0 {
            return Err(DomainError::decode(format!(
                "{} bytes after the last announced record",
                reader.remaining()
            )));
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
            buffer,
        })
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn is_response(&self) -> bool {
        self.header.qr()
    }

    pub fn response_code(&self) -> u8 {
        self.header.rcode()
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }
}

fn read_records<'a>(
    reader: &mut WireReader<'a>,
    count: u16,
) -> Result<Vec<ResourceRecord<'a>>, DomainError> {
    let mut records = Vec::with_capacity(bounded_capacity(count, reader, 11));
    for _ in 0..count {
        records.push(ResourceRecord::read_from(reader)?);
    }
    Ok(records)
}

// Counts come from the peer; never reserve more entries than the remaining
// bytes could possibly hold.
fn bounded_capacity(count: u16, reader: &WireReader<'_>, min_entry_len: usize) -> usize {
    (count as usize).min(reader.remaining() / min_entry_len)
}
