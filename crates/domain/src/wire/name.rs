//! Domain name wire encoding (RFC 1035 §3.1) and label compression
//! (RFC 1035 §4.1.4).

use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;
/// Upper bound on compression pointers followed while reading one name.
pub const MAX_POINTER_HOPS: usize = 128;

/// Appends the wire form of `name` to `out` and returns the number of bytes
/// written.
///
/// The name is written as given; callers normalize first. A single trailing
/// dot is optional and `"."` or `""` encode the root.
pub fn write_name(out: &mut Vec<u8>, name: &str) -> Result<usize, DomainError> {
    let name = name.strip_suffix('.').unwrap_or(name);
    let start = out.len();

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is {} bytes, limit is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    let written = out.len() - start;
    if written > MAX_NAME_LEN {
        out.truncate(start);
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' encodes to {} bytes, limit is {}",
            name, written, MAX_NAME_LEN
        )));
    }
    Ok(written)
}

/// Reads the name starting at `offset` in the complete message `buf`.
///
/// Returns the dot-terminated name and the number of bytes it occupies at
/// `offset`: a compression pointer ends the name in place, so bytes reached
/// through pointers are not counted. The root name reads as `"."`.
pub fn read_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut name = String::new();
    let mut pos = offset;
    let mut consumed = 0;
    let mut jumped = false;
    let mut hops = 0;
    let mut wire_len = 1;

    loop {
        let len = *buf.get(pos).ok_or_else(|| {
            DomainError::decode(format!("name at offset {} runs past end of message", offset))
        })?;

        match len {
            0 => {
                if !jumped {
                    consumed = pos + 1 - offset;
                }
                break;
            }
            1..=0x3F => {
                let len = len as usize;
                let label = buf.get(pos + 1..pos + 1 + len).ok_or_else(|| {
                    DomainError::decode(format!("label at offset {} runs past end of message", pos))
                })?;
                wire_len += len + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::decode(format!(
                        "name at offset {} is longer than {} bytes",
                        offset, MAX_NAME_LEN
                    )));
                }
                name.push_str(&String::from_utf8_lossy(label));
                name.push('.');
                pos += len + 1;
            }
            0xC0..=0xFF => {
                let low = *buf.get(pos + 1).ok_or_else(|| {
                    DomainError::decode(format!("pointer at offset {} is cut short", pos))
                })?;
                if !jumped {
                    consumed = pos + 2 - offset;
                    jumped = true;
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::decode(format!(
                        "compression pointer loop in name at offset {}",
                        offset
                    )));
                }
                let target = (((len & 0x3F) as usize) << 8) | low as usize;
                if target >= buf.len() {
                    return Err(DomainError::decode(format!(
                        "compression pointer at offset {} targets {} outside the message",
                        pos, target
                    )));
                }
                pos = target;
            }
            reserved => {
                return Err(DomainError::decode(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    reserved, pos
                )));
            }
        }
    }

    if name.is_empty() {
        name.push('.');
    }
    Ok((name, consumed))
}
