//! QR code commands (GS ( k, symbology function group 49).
//!
//! A QR print is a fixed five-command sequence: select model, set module
//! size, set error correction, store the payload, trigger the print. The
//! model/size/EC parameters are fixed for this engine — 58mm receipts all
//! use the same physical QR footprint.

use super::commands::GS;

/// Fixed module size in dots.
const MODULE_SIZE: u8 = 8;

/// # Select QR Model (function 165)
///
/// Model 2 — the standard model for ESC/POS QR printing.
///
/// Hex: `1D 28 6B 04 00 31 41 32 00`
#[inline]
pub fn qr_model() -> Vec<u8> {
    vec![GS, b'(', b'k', 0x04, 0x00, 0x31, 0x41, 0x32, 0x00]
}

/// # Set QR Module Size (function 167)
///
/// Hex: `1D 28 6B 03 00 31 43 n` with the fixed module size.
#[inline]
pub fn qr_module_size() -> Vec<u8> {
    vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x43, MODULE_SIZE]
}

/// # Set QR Error Correction (function 169)
///
/// Level L (48) — lowest redundancy, largest capacity.
///
/// Hex: `1D 28 6B 03 00 31 45 30`
#[inline]
pub fn qr_error_correction() -> Vec<u8> {
    vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x45, 0x30]
}

/// # Store QR Data (function 180)
///
/// The payload length plus 3 (for the `31 50 30` function header) is
/// encoded as two length bytes, low then high.
///
/// Hex: `1D 28 6B pL pH 31 50 30 d1...dk`
pub fn qr_store(data: &str) -> Vec<u8> {
    let payload = data.as_bytes();
    let len = payload.len() + 3;
    let mut out = vec![
        GS,
        b'(',
        b'k',
        (len & 0xFF) as u8,
        ((len >> 8) & 0xFF) as u8,
        0x31,
        0x50,
        0x30,
    ];
    out.extend_from_slice(payload);
    out
}

/// # Print Stored QR (function 181)
///
/// Hex: `1D 28 6B 03 00 31 51 30`
#[inline]
pub fn qr_print() -> Vec<u8> {
    vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x51, 0x30]
}

/// The full print sequence for one QR payload.
pub fn qr_sequence(data: &str) -> Vec<u8> {
    let mut out = qr_model();
    out.extend(qr_module_size());
    out.extend(qr_error_correction());
    out.extend(qr_store(data));
    out.extend(qr_print());
    out
}
