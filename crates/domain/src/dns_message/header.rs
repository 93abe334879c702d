/// Header flags, kept as the raw 16-bit field so reserved bits round-trip
/// exactly as received.
///
/// Bit layout: QR(15), Opcode(14-11), AA(10), TC(9), RD(8), RA(7), Z(6-4),
/// RCODE(3-0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u16);

impl Flags {
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// QR bit, set on responses and clear on queries.
    pub fn is_response(&self) -> bool {
        self.0 & 0x8000 != 0
    }

    pub fn set_response(&mut self, response: bool) {
        if response {
            self.0 |= 0x8000;
        } else {
            self.0 &= !0x8000;
        }
    }

    pub fn opcode(&self) -> u8 {
        ((self.0 >> 11) & 0x0F) as u8
    }

    pub fn is_authoritative(&self) -> bool {
        self.0 & 0x0400 != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.0 & 0x0200 != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.0 & 0x0100 != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.0 & 0x0080 != 0
    }

    /// Reserved bits 6-4, carried verbatim.
    pub fn z(&self) -> u8 {
        ((self.0 >> 4) & 0x07) as u8
    }

    pub fn rcode(&self) -> u8 {
        (self.0 & 0x000F) as u8
    }
}

/// The fixed 12-byte header of every DNS message.
///
/// The four counts describe the section vectors of the enclosing
/// [`Message`](super::Message). They are filled in by the decoder; the
/// encoder recomputes them from the vectors and never trusts the values
/// stored here, so a message mutated after decoding cannot ship stale
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}
