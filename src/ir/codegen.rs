//! Code generation: IR programs to ESC/POS bytes and command strings.

use super::{Op, Program};
use crate::protocol::{barcode, commands, text};

impl Program {
    /// Compile the program to ESC/POS bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                Op::Init => out.extend(commands::init()),
                Op::Cut => out.extend(commands::cut_feed(0)),
                Op::SetAlign(alignment) => out.extend(text::align(*alignment)),
                Op::SetBold(enabled) => out.extend(text::bold(*enabled)),
                Op::SetSize { height, width } => out.extend(text::size(*height, *width)),
                Op::Text(s) => out.extend(s.as_bytes()),
                Op::Newline => out.push(commands::LF),
                Op::QrCode { data } => out.extend(barcode::qr_sequence(data)),
            }
        }

        out
    }

    /// The command stream as a string whose characters map 1:1 to bytes
    /// (each byte 0x00–0xFF becomes the char with that code point).
    ///
    /// This is the downloadable form; [`bytes_from_command_string`]
    /// recovers the byte array for transmission.
    pub fn to_command_string(&self) -> String {
        self.to_bytes().iter().map(|&b| char::from(b)).collect()
    }
}

/// Recover the byte array from a 1:1 command string by per-character code
/// extraction. Characters above 0xFF (which a well-formed command string
/// never contains) are truncated to their low byte.
pub fn bytes_from_command_string(command: &str) -> Vec<u8> {
    command.chars().map(|c| (c as u32 & 0xFF) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::Alignment;

    #[test]
    fn test_empty_program() {
        assert!(Program::new().to_bytes().is_empty());
    }

    #[test]
    fn test_init_only() {
        let program: Program = vec![Op::Init].into_iter().collect();
        assert_eq!(program.to_bytes(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_simple_text() {
        let program: Program = vec![Op::Init, Op::Text("Hello".into()), Op::Newline]
            .into_iter()
            .collect();
        let bytes = program.to_bytes();
        assert!(bytes.starts_with(&[0x1B, 0x40]));
        assert!(bytes.ends_with(&[b'H', b'e', b'l', b'l', b'o', 0x0A]));
    }

    #[test]
    fn test_styled_text() {
        let program: Program = vec![
            Op::SetAlign(Alignment::Center),
            Op::SetBold(true),
            Op::Text("HEADER".into()),
            Op::SetBold(false),
        ]
        .into_iter()
        .collect();
        let bytes = program.to_bytes();
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x61, 0x01]));
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x01]));
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x00]));
    }

    #[test]
    fn test_cut_is_last() {
        let program: Program = vec![Op::Init, Op::Cut].into_iter().collect();
        assert!(program.to_bytes().ends_with(&[0x1D, 0x56, 0x42, 0x00]));
    }

    #[test]
    fn test_qr_code_sequence_present() {
        let program: Program = vec![Op::QrCode {
            data: "https://example.com".into(),
        }]
        .into_iter()
        .collect();
        let bytes = program.to_bytes();
        // Model select and print trigger
        assert!(bytes.windows(4).any(|w| w == [0x31, 0x41, 0x32, 0x00]));
        assert!(bytes.windows(3).any(|w| w == [0x31, 0x51, 0x30]));
    }

    #[test]
    fn test_command_string_round_trip() {
        let program: Program = vec![
            Op::Init,
            Op::SetSize {
                height: 1,
                width: 1,
            },
            Op::Text("Ok".into()),
            Op::Cut,
        ]
        .into_iter()
        .collect();
        let bytes = program.to_bytes();
        let command = program.to_command_string();
        assert_eq!(bytes_from_command_string(&command), bytes);
        // Chars map 1:1 to bytes
        assert_eq!(command.chars().count(), bytes.len());
    }
}
