use super::name::write_name;
use sinkhole_dns_domain::{Message, ProtocolError, Question, ResourceRecord};

/// Serializes structured messages back to DNS wire format.
///
/// Section counts and every RDLENGTH are recomputed from the vectors being
/// emitted, never copied from the header, so a message mutated after
/// decoding still goes out with counts that match its contents. Names are
/// always written in the explicit label form; the encoder never emits
/// compression pointers.
pub struct MessageEncoder;

impl MessageEncoder {
    pub fn encode(message: &Message) -> Result<Vec<u8>, ProtocolError> {
        let mut buf = Vec::with_capacity(512);

        buf.extend_from_slice(&message.header.id.to_be_bytes());
        buf.extend_from_slice(&message.header.flags.bits().to_be_bytes());
        buf.extend_from_slice(&section_count(message.questions.len())?.to_be_bytes());
        buf.extend_from_slice(&section_count(message.answers.len())?.to_be_bytes());
        buf.extend_from_slice(&section_count(message.authority.len())?.to_be_bytes());
        buf.extend_from_slice(&section_count(message.additional.len())?.to_be_bytes());

        for question in &message.questions {
            Self::write_question(&mut buf, question)?;
        }
        for record in &message.answers {
            Self::write_record(&mut buf, record)?;
        }
        for record in &message.authority {
            Self::write_record(&mut buf, record)?;
        }
        for record in &message.additional {
            Self::write_record(&mut buf, record)?;
        }

        Ok(buf)
    }

    fn write_question(buf: &mut Vec<u8>, question: &Question) -> Result<(), ProtocolError> {
        write_name(buf, &question.name)?;
        buf.extend_from_slice(&question.qtype.to_be_bytes());
        buf.extend_from_slice(&question.qclass.to_be_bytes());
        Ok(())
    }

    fn write_record(buf: &mut Vec<u8>, record: &ResourceRecord) -> Result<(), ProtocolError> {
        write_name(buf, &record.name)?;
        buf.extend_from_slice(&record.rtype.to_be_bytes());
        buf.extend_from_slice(&record.class.to_be_bytes());
        buf.extend_from_slice(&record.ttl.to_be_bytes());

        let rdlength = u16::try_from(record.rdata.len()).map_err(|_| {
            ProtocolError::MalformedMessage(format!(
                "RDATA of {} bytes does not fit a 16-bit RDLENGTH",
                record.rdata.len()
            ))
        })?;
        buf.extend_from_slice(&rdlength.to_be_bytes());
        buf.extend_from_slice(&record.rdata);

        Ok(())
    }
}

fn section_count(len: usize) -> Result<u16, ProtocolError> {
    u16::try_from(len).map_err(|_| {
        ProtocolError::MalformedMessage(format!(
            "Section of {} entries does not fit a 16-bit count",
            len
        ))
    })
}
