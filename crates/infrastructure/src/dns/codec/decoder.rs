use super::name::read_name;
use sinkhole_dns_domain::{Flags, Header, Message, ProtocolError, Question, ResourceRecord};

/// Fixed header length per RFC 1035 §4.1.1.
const HEADER_LEN: usize = 12;

/// Decodes raw DNS wire messages into structured form.
///
/// Sections are parsed strictly in wire order (question, answer, authority,
/// additional) because each section's start offset depends on the exact
/// byte length of everything before it. Any truncation or out-of-range
/// length fails the whole message; there is no partial recovery.
pub struct MessageDecoder;

impl MessageDecoder {
    pub fn decode(buf: &[u8]) -> Result<Message, ProtocolError> {
        if buf.len() < HEADER_LEN {
            return Err(ProtocolError::MalformedMessage(format!(
                "Message too short for header: {} bytes",
                buf.len()
            )));
        }

        let header = Header {
            id: u16::from_be_bytes([buf[0], buf[1]]),
            flags: Flags::new(u16::from_be_bytes([buf[2], buf[3]])),
            question_count: u16::from_be_bytes([buf[4], buf[5]]),
            answer_count: u16::from_be_bytes([buf[6], buf[7]]),
            authority_count: u16::from_be_bytes([buf[8], buf[9]]),
            additional_count: u16::from_be_bytes([buf[10], buf[11]]),
        };

        let mut pos = HEADER_LEN;

        let mut questions = Vec::with_capacity(usize::from(header.question_count));
        for _ in 0..header.question_count {
            let (name, consumed) = read_name(buf, pos)?;
            pos += consumed;

            let qtype = read_u16(buf, pos)?;
            let qclass = read_u16(buf, pos + 2)?;
            pos += 4;

            questions.push(Question::new(name, qtype, qclass));
        }

        let answers = Self::decode_records(buf, &mut pos, header.answer_count)?;
        let authority = Self::decode_records(buf, &mut pos, header.authority_count)?;
        let additional = Self::decode_records(buf, &mut pos, header.additional_count)?;

        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Parses `count` resource records starting at `*pos`, advancing the
    /// cursor past each one. All three record sections share this routine.
    fn decode_records(
        buf: &[u8],
        pos: &mut usize,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, ProtocolError> {
        let mut records = Vec::with_capacity(usize::from(count));

        for _ in 0..count {
            let (name, consumed) = read_name(buf, *pos)?;
            *pos += consumed;

            let rtype = read_u16(buf, *pos)?;
            let class = read_u16(buf, *pos + 2)?;
            let ttl = read_u32(buf, *pos + 4)?;
            let rdlength = usize::from(read_u16(buf, *pos + 8)?);
            *pos += 10;

            let rdata = buf.get(*pos..*pos + rdlength).ok_or_else(|| {
                ProtocolError::MalformedMessage(format!(
                    "RDATA of {} bytes at offset {} runs past end of buffer",
                    rdlength, *pos
                ))
            })?;
            *pos += rdlength;

            records.push(ResourceRecord::new(name, rtype, class, ttl, rdata.to_vec()));
        }

        Ok(records)
    }
}

fn read_u16(buf: &[u8], pos: usize) -> Result<u16, ProtocolError> {
    match buf.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(ProtocolError::MalformedMessage(format!(
            "Expected 2 bytes at offset {}, message ends at {}",
            pos,
            buf.len()
        ))),
    }
}

fn read_u32(buf: &[u8], pos: usize) -> Result<u32, ProtocolError> {
    match buf.get(pos..pos + 4) {
        Some(bytes) => Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(ProtocolError::MalformedMessage(format!(
            "Expected 4 bytes at offset {}, message ends at {}",
            pos,
            buf.len()
        ))),
    }
}
