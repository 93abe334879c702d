use sinkhole_dns_domain::ProtocolError;

/// Longest pointer chain a single name may follow before decoding gives up.
/// Legitimate messages need one or two hops; anything deeper is a loop.
const MAX_POINTER_JUMPS: usize = 5;

const POINTER_MASK: u8 = 0xC0;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Decodes the length-prefixed label sequence starting at `offset`.
///
/// Returns the dot-joined name together with the number of bytes the name
/// occupies at `offset` itself. When a compression pointer is hit, the
/// count freezes at the two pointer bytes: labels read at the pointer
/// target belong to an earlier part of the message and must not move the
/// caller's cursor (RFC 1035 §4.1.4).
pub fn read_name(buf: &[u8], offset: usize) -> Result<(String, usize), ProtocolError> {
    let mut labels: Vec<String> = Vec::new();
    let mut pos = offset;
    let mut consumed = 0usize;
    let mut jumped = false;
    let mut jumps = 0usize;

    loop {
        let len_byte = *buf.get(pos).ok_or_else(|| {
            ProtocolError::MalformedMessage(format!(
                "Name at offset {} runs past end of buffer",
                offset
            ))
        })?;

        if len_byte & POINTER_MASK == POINTER_MASK {
            let low_byte = *buf.get(pos + 1).ok_or_else(|| {
                ProtocolError::MalformedMessage(format!(
                    "Truncated compression pointer at offset {}",
                    pos
                ))
            })?;

            if !jumped {
                consumed = (pos + 2) - offset;
                jumped = true;
            }
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS {
                return Err(ProtocolError::CompressionCycle);
            }

            pos = usize::from(u16::from_be_bytes([len_byte & 0x3F, low_byte]));
            continue;
        }

        let label_len = usize::from(len_byte);
        if label_len == 0 {
            if !jumped {
                consumed = (pos + 1) - offset;
            }
            break;
        }

        let start = pos + 1;
        let label = buf.get(start..start + label_len).ok_or_else(|| {
            ProtocolError::MalformedMessage(format!(
                "Label at offset {} runs past end of buffer",
                pos
            ))
        })?;

        // Labels are opaque bytes on the wire; anything non-UTF-8 is kept
        // via lossy conversion rather than rejected.
        labels.push(String::from_utf8_lossy(label).into_owned());
        pos = start + label_len;
    }

    Ok((labels.join("."), consumed))
}

/// Appends `name` in wire form: one length-prefixed label per dot-separated
/// part, then the zero terminator. Empty parts (a trailing dot, or the root
/// name itself) contribute nothing. The whole name is validated before the
/// first byte is written, so a failed encode leaves `out` untouched.
pub fn write_name(out: &mut Vec<u8>, name: &str) -> Result<(), ProtocolError> {
    let labels: Vec<&str> = name.split('.').filter(|label| !label.is_empty()).collect();

    let mut encoded_len = 1usize;
    for label in &labels {
        if label.len() > MAX_LABEL_LEN {
            return Err(ProtocolError::LabelTooLong(label.len()));
        }
        encoded_len += 1 + label.len();
    }
    if encoded_len > MAX_NAME_LEN {
        return Err(ProtocolError::NameTooLong(encoded_len));
    }

    for label in &labels {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_plain_name() {
        let buf = [
            3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm',
            0,
        ];

        let (name, consumed) = read_name(&buf, 0).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(consumed, 17);
    }

    #[test]
    fn test_read_root_name() {
        let buf = [0u8];
        let (name, consumed) = read_name(&buf, 0).unwrap();
        assert_eq!(name, "");
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_read_name_preserves_case() {
        let buf = [4, b'M', b'a', b'I', b'l', 2, b'D', b'E', 0];
        let (name, _) = read_name(&buf, 0).unwrap();
        assert_eq!(name, "MaIl.DE");
    }

    #[test]
    fn test_read_name_follows_pointer() {
        // "example.com" at offset 0, then a pointer to it at offset 13
        let mut buf = vec![7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0];
        buf.extend_from_slice(&[0xC0, 0x00]);

        let (name, consumed) = read_name(&buf, 13).unwrap();
        assert_eq!(name, "example.com");
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_read_name_labels_then_pointer() {
        // "com" at offset 0; "mail" + pointer to offset 0 at offset 5
        let buf = [
            3, b'c', b'o', b'm', 0, // offset 0
            4, b'm', b'a', b'i', b'l', 0xC0, 0x00, // offset 5
        ];

        let (name, consumed) = read_name(&buf, 5).unwrap();
        assert_eq!(name, "mail.com");
        // 1 + 4 label bytes + 2 pointer bytes
        assert_eq!(consumed, 7);
    }

    #[test]
    fn test_read_name_pointer_chain() {
        let buf = [
            3, b'c', b'o', b'm', 0, // offset 0
            3, b'f', b'o', b'o', 0xC0, 0x00, // offset 5: "foo" -> "com"
            3, b'b', b'a', b'r', 0xC0, 0x05, // offset 11: "bar" -> "foo.com"
        ];

        let (name, consumed) = read_name(&buf, 11).unwrap();
        assert_eq!(name, "bar.foo.com");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_read_name_self_pointer_fails() {
        // Pointer at offset 0 pointing at itself
        let buf = [0xC0, 0x00];
        let err = read_name(&buf, 0).unwrap_err();
        assert_eq!(err, ProtocolError::CompressionCycle);
    }

    #[test]
    fn test_read_name_pointer_loop_fails() {
        // Two pointers referring to each other
        let buf = [0xC0, 0x02, 0xC0, 0x00];
        let err = read_name(&buf, 0).unwrap_err();
        assert_eq!(err, ProtocolError::CompressionCycle);
    }

    #[test]
    fn test_read_name_tolerates_length_bytes_above_63() {
        // 0x41 has no pointer bits set, so it is a plain 65-byte label.
        // Only the encoder enforces the 63-byte limit.
        let mut buf = vec![0x41];
        buf.extend_from_slice(&[b'a'; 65]);
        buf.push(0);

        let (name, consumed) = read_name(&buf, 0).unwrap();
        assert_eq!(name.len(), 65);
        assert_eq!(consumed, 67);
    }

    #[test]
    fn test_read_name_truncated_label_fails() {
        let buf = [5, b'a', b'b'];
        assert!(matches!(
            read_name(&buf, 0),
            Err(ProtocolError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_read_name_missing_terminator_fails() {
        let buf = [3, b'w', b'w', b'w'];
        assert!(matches!(
            read_name(&buf, 0),
            Err(ProtocolError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_read_name_truncated_pointer_fails() {
        let buf = [0xC0];
        assert!(matches!(
            read_name(&buf, 0),
            Err(ProtocolError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_write_plain_name() {
        let mut out = Vec::new();
        write_name(&mut out, "www.example.com").unwrap();
        assert_eq!(
            out,
            [
                3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o',
                b'm', 0,
            ]
        );
    }

    #[test]
    fn test_write_root_name() {
        let mut out = Vec::new();
        write_name(&mut out, "").unwrap();
        assert_eq!(out, [0]);
    }

    #[test]
    fn test_write_name_skips_trailing_dot() {
        let mut plain = Vec::new();
        write_name(&mut plain, "example.com").unwrap();

        let mut dotted = Vec::new();
        write_name(&mut dotted, "example.com.").unwrap();

        assert_eq!(plain, dotted);
    }

    #[test]
    fn test_write_name_63_byte_label_ok() {
        let label = "a".repeat(63);
        let mut out = Vec::new();
        write_name(&mut out, &label).unwrap();
        assert_eq!(out.len(), 65);
        assert_eq!(out[0], 63);
    }

    #[test]
    fn test_write_name_64_byte_label_rejected() {
        let label = "a".repeat(64);
        let mut out = Vec::new();
        let err = write_name(&mut out, &label).unwrap_err();
        assert_eq!(err, ProtocolError::LabelTooLong(64));
        assert!(out.is_empty(), "failed encode must not write partial data");
    }

    #[test]
    fn test_write_name_over_255_bytes_rejected() {
        // Four 62-byte labels encode to 4 * 63 + 1 = 253 bytes; five exceed 255.
        let name = vec!["b".repeat(62); 5].join(".");
        let mut out = Vec::new();
        let err = write_name(&mut out, &name).unwrap_err();
        assert!(matches!(err, ProtocolError::NameTooLong(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_name_round_trip() {
        let mut wire = Vec::new();
        write_name(&mut wire, "mail.example.com").unwrap();

        let (name, consumed) = read_name(&wire, 0).unwrap();
        assert_eq!(name, "mail.example.com");
        assert_eq!(consumed, wire.len());
    }
}
