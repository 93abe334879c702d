use std::net::Ipv4Addr;

/// A resource record from the answer, authority, or additional section.
///
/// `rdata` is opaque to the codec: interpretation depends on `rtype` and
/// belongs to the response-policy layer. RDLENGTH is never stored, it is
/// derived from `rdata.len()` when the record is written back to the wire,
/// so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub rtype: u16,

    pub class: u16,

    /// Time to live in seconds.
    pub ttl: u32,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// A record (IPv4 host address).
    pub const TYPE_A: u16 = 1;

    /// Internet class.
    pub const CLASS_IN: u16 = 1;

    pub fn new(name: impl Into<String>, rtype: u16, class: u16, ttl: u32, rdata: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            rtype,
            class,
            ttl,
            rdata,
        }
    }

    /// Builds an IN-class A record for `name` pointing at `address`.
    pub fn a_record(name: impl Into<String>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rtype: Self::TYPE_A,
            class: Self::CLASS_IN,
            ttl,
            rdata: address.octets().to_vec(),
        }
    }

    /// The rdata as an IPv4 address, for A records carrying exactly 4 bytes.
    pub fn ipv4_address(&self) -> Option<Ipv4Addr> {
        if self.rtype != Self::TYPE_A {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}
