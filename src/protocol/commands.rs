//! Printer control commands: initialization, line feeds, paper cut.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) — prefix of most ESC/POS commands. Hex 0x1B, decimal 27.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) — prefix of extended commands (character size,
/// cut, 2D barcodes). Hex 0x1D, decimal 29.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) — prints the line buffer and advances one line.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state: formatting off,
/// character size 1x1, alignment left. Emitted first in every command
/// stream so output never depends on what the previous job left behind.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER CONTROL
// ============================================================================

/// # Line Feed
///
/// A single LF byte: print the line buffer and advance one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Feed and Cut (GS V 66 n)
///
/// Feeds `n` lines to carry the last printed line past the cutter, then
/// cuts. Terminates every receipt.
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V B n   |
/// | Hex     | 1D 56 42 n |
#[inline]
pub fn cut_feed(lines: u8) -> Vec<u8> {
    vec![GS, b'V', 0x42, lines]
}
