use std::net::IpAddr;
use zorori_domain::wire::Message;
use zorori_domain::{same, DomainError, QueryType, RecordData};

/// Delegation carried by a response without answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    /// NS targets from the authority section, in wire order.
    pub nameservers: Vec<String>,
    /// Glue addresses for those nameservers, in nameserver order.
    pub glue: Vec<IpAddr>,
}

impl Referral {
    /// Returns `None` when the authority section holds no NS records.
    pub fn from_message(message: &Message<'_>) -> Result<Option<Self>, DomainError> {
        let mut nameservers = Vec::new();
        for record in message
            .authorities
            .iter()
            .filter(|r| r.record_type == QueryType::NS)
        {
            if let RecordData::NS(target) = record.data()? {
                nameservers.push(target);
            }
        }
        if nameservers.is_empty() {
            return Ok(None);
        }

        let mut glue = Vec::new();
        for ns in &nameservers {
            for record in &message.additionals {
                if record.record_type == QueryType::A && same(ns, &record.name) {
                    let ip = record.ip()?;
                    if !glue.contains(&ip) {
                        glue.push(ip);
                    }
                }
            }
        }

        Ok(Some(Self { nameservers, glue }))
    }
}
