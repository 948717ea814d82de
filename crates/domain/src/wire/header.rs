use super::reader::WireReader;
use crate::DomainError;
use std::fmt;

const QR: u16 = 0x8000;
const OPCODE: u16 = 0x7800;
const AA: u16 = 0x0400;
const TC: u16 = 0x0200;
const RD: u16 = 0x0100;
const RA: u16 = 0x0080;
const Z: u16 = 0x0040;
const AD: u16 = 0x0020;
const CD: u16 = 0x0010;
const RCODE: u16 = 0x000F;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_NXDOMAIN: u8 = 3;

/// DNS message header (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub const LEN: usize = 12;

    pub fn qr(&self) -> bool {
        self.flags & QR != 0
    }

    pub fn set_qr(&mut self, qr: bool) {
        self.set_flag(QR, qr);
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE) >> 11) as u8
    }

    pub fn aa(&self) -> bool {
        self.flags & AA != 0
    }

    pub fn tc(&self) -> bool {
        self.flags & TC != 0
    }

    pub fn rd(&self) -> bool {
        self.flags & RD != 0
    }

    pub fn set_rd(&mut self, rd: bool) {
        self.set_flag(RD, rd);
    }

    pub fn ra(&self) -> bool {
        self.flags & RA != 0
    }

    pub fn z(&self) -> bool {
        self.flags & Z != 0
    }

    pub fn ad(&self) -> bool {
        self.flags & AD != 0
    }

    pub fn cd(&self) -> bool {
        self.flags & CD != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE) as u8
    }

    fn set_flag(&mut self, mask: u16, on: bool) {
        if on {
            self.flags |= mask;
        } else {
            self.flags &= !mask;
        }
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.qd_count.to_be_bytes());
        out.extend_from_slice(&self.an_count.to_be_bytes());
        out.extend_from_slice(&self.ns_count.to_be_bytes());
        out.extend_from_slice(&self.ar_count.to_be_bytes());
    }

    pub(crate) fn read_from(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        if reader.remaining() < Self::LEN {
            return Err(DomainError::decode(format!(
                "header needs {} bytes, message has {}",
                Self::LEN,
                reader.remaining()
            )));
        }
        Ok(Self {
            id: reader.read_u16("header id")?,
            flags: reader.read_u16("header flags")?,
            qd_count: reader.read_u16("qdcount")?,
            an_count: reader.read_u16("ancount")?,
            ns_count: reader.read_u16("nscount")?,
            ar_count: reader.read_u16("arcount")?,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, qr: {}, opcode: {}, aa: {}, tc: {}, rd: {}, ra: {}, z: {}, ad: {}, cd: {}, rcode: {}, qdcount: {}, ancount: {}, nscount: {}, arcount: {}}}",
            self.id,
            self.qr(),
            self.opcode(),
            self.aa(),
            self.tc(),
            self.rd(),
            self.ra(),
            self.z(),
            self.ad(),
            self.cd(),
            self.rcode(),
            self.qd_count,
            self.an_count,
            self.ns_count,
            self.ar_count,
        )
    }
}
