use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    IN,
    Unknown(u16),
}

impl Class {
    pub fn to_u16(&self) -> u16 {
        match self {
            Class::IN => 1,
            Class::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => Class::IN,
            other => Class::Unknown(other),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::IN => f.write_str("IN"),
            Class::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}
