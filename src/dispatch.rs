//! # Print Dispatch
//!
//! Thin orchestration over the two render paths. Host singletons
//! (`window.open`, Web Serial) are modeled as injected capabilities so
//! the engine stays testable headlessly and never touches a real device
//! API:
//!
//! - [`PagePrinter`] — receives the full HTML document; opening a
//!   browsing context, invoking print and closing it is the host's
//!   business.
//! - [`CommandSink`] — receives the full ESC/POS byte buffer in one
//!   shot; a serial port, a backend proxy or a file download all fit.
//!
//! These are the only throwing surfaces of the engine: a blocked popup or
//! a failed port open comes back as a [`DispatchError`], never as a
//! crash of the editing session.

use tracing::debug;

use crate::data::ReceiptPreviewData;
use crate::emit;
use crate::error::DispatchError;
use crate::html;
use crate::template::ReceiptTemplate;

/// A host capability that can show and print an HTML document.
pub trait PagePrinter {
    /// Present `html` in a printable context and invoke printing.
    fn print_document(&mut self, html: &str) -> Result<(), DispatchError>;
}

/// A host capability that accepts a raw command buffer in one shot.
pub trait CommandSink {
    /// Write the complete buffer. Partial writes are the sink's problem;
    /// the engine sends everything at once and never retries.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), DispatchError>;
}

/// Any `io::Write` is a command sink (files, serial port handles).
impl<W: std::io::Write> CommandSink for W {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), DispatchError> {
        std::io::Write::write_all(self, bytes)?;
        Ok(())
    }
}

/// Render `(template, data)` to HTML and hand it to the page printer.
pub fn print_receipt(
    template: &ReceiptTemplate,
    data: &ReceiptPreviewData,
    printer: &mut dyn PagePrinter,
) -> Result<(), DispatchError> {
    let document = html::render_document(template, data);
    debug!(template = %template.name, bytes = document.len(), "dispatching browser print");
    printer.print_document(&document)
}

/// Generate the ESC/POS command buffer and write it to `sink` under
/// `filename` (or a timestamped `.prn` default). Returns the filename
/// used.
pub fn download_commands(
    template: &ReceiptTemplate,
    data: &ReceiptPreviewData,
    filename: Option<&str>,
    sink: &mut dyn CommandSink,
) -> Result<String, DispatchError> {
    let bytes = emit::generate_bytes(template, data);
    let filename = filename
        .map(str::to_string)
        .unwrap_or_else(default_download_filename);
    debug!(template = %template.name, bytes = bytes.len(), file = %filename, "writing command buffer");
    sink.write_all(&bytes)?;
    Ok(filename)
}

/// The default download name: `receipt-commands-YYYYMMDD-HHMMSS.prn`.
pub fn default_download_filename() -> String {
    format!(
        "receipt-commands-{}.prn",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}
