//! Type-driven interpretation of RDATA.
//!
//! Decoding is lazy: [`Message::decode`](crate::wire::Message::decode) only
//! slices RDATA out, and the accessors here interpret it when a caller asks.

use crate::resolution::{
    SvcParam, SvcbResult, SVC_PARAM_ALPN, SVC_PARAM_DOHPATH, SVC_PARAM_IPV4HINT,
    SVC_PARAM_IPV6HINT, SVC_PARAM_PORT,
};
use crate::wire::{read_name, ResourceRecord};
use crate::{DomainError, QueryType};
use std::collections::BTreeMap;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    SOA(Soa),
    SVCB(SvcbResult),
    HTTPS(SvcbResult),
    Unknown(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    /// REFRESH, RETRY, EXPIRE and MINIMUM, when the record carries them.
    pub timers: Option<SoaTimers>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoaTimers {
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::AAAA(ip) => write!(f, "{}", ip),
            RecordData::CNAME(name) | RecordData::NS(name) => f.write_str(name),
            RecordData::SOA(soa) => write!(
                f,
                "{{mname: {}, rname: {}, serial: {}}}",
                soa.mname, soa.rname, soa.serial
            ),
            RecordData::SVCB(svcb) | RecordData::HTTPS(svcb) => write!(
                f,
                "{{priority: {}, target: {}, params: [{}]}}",
                svcb.priority,
                svcb.target,
                svcb.params
                    .values()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            RecordData::Unknown(_) => f.write_str("unknown"),
        }
    }
}

impl<'a> ResourceRecord<'a> {
    pub fn data(&self) -> Result<RecordData, DomainError> {
        match self.record_type {
            QueryType::A => Ok(RecordData::A(Ipv4Addr::from(self.fixed_rdata::<4>()?))),
            QueryType::AAAA => Ok(RecordData::AAAA(Ipv6Addr::from(self.fixed_rdata::<16>()?))),
            QueryType::CNAME => Ok(RecordData::CNAME(self.rdata_name(0)?.0)),
            QueryType::NS => Ok(RecordData::NS(self.rdata_name(0)?.0)),
            QueryType::SOA => self.soa().map(RecordData::SOA),
            QueryType::SVCB => self.service_binding().map(RecordData::SVCB),
            QueryType::HTTPS => self.service_binding().map(RecordData::HTTPS),
            QueryType::Unknown(_) => Ok(RecordData::Unknown(self.rdata.to_vec())),
        }
    }

    /// Alias target of a CNAME record.
    pub fn cname_target(&self) -> Result<String, DomainError> {
        if self.record_type != QueryType::CNAME {
            return Err(DomainError::TypeMismatch {
                expected: "CNAME",
                actual: self.record_type,
            });
        }
        Ok(self.rdata_name(0)?.0)
    }

    /// Address carried by an A or AAAA record.
    pub fn ip(&self) -> Result<IpAddr, DomainError> {
        match self.record_type {
            QueryType::A => Ok(IpAddr::V4(Ipv4Addr::from(self.fixed_rdata::<4>()?))),
            QueryType::AAAA => Ok(IpAddr::V6(Ipv6Addr::from(self.fixed_rdata::<16>()?))),
            other => Err(DomainError::TypeMismatch {
                expected: "A or AAAA",
                actual: other,
            }),
        }
    }

    /// SVCB or HTTPS payload.
    pub fn service_binding(&self) -> Result<SvcbResult, DomainError> {
        if !self.record_type.is_service_binding() {
            return Err(DomainError::TypeMismatch {
                expected: "SVCB or HTTPS",
                actual: self.record_type,
            });
        }
        let priority = self
            .rdata
            .get(0..2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .ok_or_else(|| self.malformed("missing SvcPriority"))?;
        let (target, target_len) = self.rdata_name(2)?;
        let params = parse_svc_params(&self.rdata[2 + target_len..])?;

        Ok(SvcbResult {
            priority,
            target,
            params,
        })
    }

    fn soa(&self) -> Result<Soa, DomainError> {
        let (mname, mname_len) = self.rdata_name(0)?;
        let (rname, rname_len) = self.rdata_name(mname_len)?;
        let tail = &self.rdata[mname_len + rname_len..];
        if tail.len() % 4 != 0 {
            return Err(self.malformed(&format!(
                "{} bytes after RNAME, expected whole 32-bit fields",
                tail.len()
            )));
        }
        let fields: Vec<u32> = tail
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        let serial = *fields
            .first()
            .ok_or_else(|| self.malformed("missing serial"))?;
        let timers = match fields.as_slice() {
            [_, refresh, retry, expire, minimum, ..] => Some(SoaTimers {
                refresh: *refresh,
                retry: *retry,
                expire: *expire,
                minimum: *minimum,
            }),
            _ => None,
        };

        Ok(Soa {
            mname,
            rname,
            serial,
            timers,
        })
    }

    fn fixed_rdata<const N: usize>(&self) -> Result<[u8; N], DomainError> {
        <[u8; N]>::try_from(self.rdata).map_err(|_| {
            self.malformed(&format!("{} bytes of RDATA, expected {}", self.rdata.len(), N))
        })
    }

    /// Reads a name that starts `start` bytes into RDATA. The name may follow
    /// pointers anywhere in the message, but its in-place bytes must stay
    /// inside RDATA.
    fn rdata_name(&self, start: usize) -> Result<(String, usize), DomainError> {
        if start >= self.rdata.len() {
            return Err(self.malformed("name missing from RDATA"));
        }
        let (name, consumed) = read_name(self.message_buffer(), self.rdata_offset + start)?;
        if start + consumed > self.rdata.len() {
            return Err(self.malformed("name runs past RDLENGTH"));
        }
        Ok((name, consumed))
    }

    fn malformed(&self, reason: &str) -> DomainError {
        DomainError::Decode(format!(
            "{} record for {}: {}",
            self.record_type, self.name, reason
        ))
    }
}

impl fmt::Display for ResourceRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name: {}, Type: {}, Class: {}, TTL: {}, RdLength: {}, Rdata: ",
            self.name, self.record_type, self.class, self.ttl, self.rd_length
        )?;
        match self.data() {
            Ok(data) => write!(f, "{}}}", data),
            Err(e) => write!(f, "<{}>}}", e),
        }
    }
}

/// Decodes the SvcParams that follow the target name in SVCB/HTTPS RDATA.
pub fn parse_svc_params(data: &[u8]) -> Result<BTreeMap<u16, SvcParam>, DomainError> {
    let mut params = BTreeMap::new();
    let mut offset = 0;

    while offset < data.len() {
        let head = data.get(offset..offset + 4).ok_or_else(|| {
            DomainError::Decode(format!("SvcParam header cut short at offset {}", offset))
        })?;
        let key = u16::from_be_bytes([head[0], head[1]]);
        let len = u16::from_be_bytes([head[2], head[3]]) as usize;
        let value = data.get(offset + 4..offset + 4 + len).ok_or_else(|| {
            DomainError::Decode(format!("SvcParam key {} value runs past RDATA", key))
        })?;
        offset += 4 + len;

        let param = match key {
            SVC_PARAM_ALPN => SvcParam::Alpn(parse_alpn(value)?),
            SVC_PARAM_PORT => {
                let port = <[u8; 2]>::try_from(value).map_err(|_| {
                    DomainError::Decode(format!("port SvcParam has {} bytes", value.len()))
                })?;
                SvcParam::Port(u16::from_be_bytes(port))
            }
            SVC_PARAM_IPV4HINT => {
                if value.is_empty() || value.len() % 4 != 0 {
                    return Err(DomainError::Decode(format!(
                        "ipv4hint length {} is not a multiple of 4",
                        value.len()
                    )));
                }
                SvcParam::Ipv4Hint(
                    value
                        .chunks_exact(4)
                        .map(|c| Ipv4Addr::new(c[0], c[1], c[2], c[3]))
                        .collect(),
                )
            }
            SVC_PARAM_IPV6HINT => {
                if value.is_empty() || value.len() % 16 != 0 {
                    return Err(DomainError::Decode(format!(
                        "ipv6hint length {} is not a multiple of 16",
                        value.len()
                    )));
                }
                let addrs = value
                    .chunks_exact(16)
                    .map(|c| <[u8; 16]>::try_from(c).map(Ipv6Addr::from))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| DomainError::Decode(format!("ipv6hint: {}", e)))?;
                SvcParam::Ipv6Hint(addrs)
            }
            SVC_PARAM_DOHPATH => SvcParam::DohPath(String::from_utf8_lossy(value).into_owned()),
            _ => SvcParam::Unknown {
                key,
                value: value.to_vec(),
            },
        };
        params.insert(key, param);
    }

    Ok(params)
}

fn parse_alpn(value: &[u8]) -> Result<Vec<String>, DomainError> {
    let mut ids = Vec::new();
    let mut i = 0;
    while i < value.len() {
        let len = value[i] as usize;
        let id = value
            .get(i + 1..i + 1 + len)
            .ok_or_else(|| DomainError::Decode("alpn id runs past SvcParam value".to_string()))?;
        ids.push(String::from_utf8_lossy(id).into_owned());
        i += 1 + len;
    }
    Ok(ids)
}
