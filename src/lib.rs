//! # Recibo - Receipt Template Engine
//!
//! Recibo is a Rust library for composing receipt templates and turning
//! them into output for 58mm ESC/POS thermal printers. It provides:
//!
//! - **Document model**: ordered, typed, styleable receipt components
//! - **Command generation**: byte-exact ESC/POS streams via a small IR
//! - **HTML rendering**: a standalone preview/print document
//! - **Editing**: pure reducers plus an interactive editing surface
//!
//! ## Quick Start
//!
//! ```
//! use recibo::{
//!     data::ReceiptPreviewData,
//!     emit,
//!     html,
//!     template::ReceiptTemplate,
//! };
//!
//! let template = ReceiptTemplate::standard();
//! let data = ReceiptPreviewData::sample();
//!
//! // ESC/POS byte stream, init first, paper cut last
//! let bytes = emit::generate_bytes(&template, &data);
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//!
//! // Standalone HTML document for browser preview/print
//! let page = html::render_document(&template, &data);
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Document model, style resolution, reducers, transport |
//! | [`data`] | Preview data record filling a template at render time |
//! | [`vars`] | `{{token}}` substitution |
//! | [`layout`] | Fixed-width wrap/justify utilities |
//! | [`ir`] | Inspectable command IR |
//! | [`protocol`] | ESC/POS command builders |
//! | [`emit`] | Command generator |
//! | [`html`] | HTML renderer |
//! | [`editor`] | Interactive editing surface |
//! | [`dispatch`] | Print/download orchestration over host capabilities |
//! | [`error`] | Error types |
//!
//! Persistence, data fetching and the application shell around the
//! designer are external collaborators: the engine consumes a template
//! and a data record and produces documents, never talking to a backend
//! itself.

pub mod data;
pub mod dispatch;
pub mod editor;
pub mod emit;
pub mod error;
pub mod html;
pub mod ir;
pub mod layout;
pub mod protocol;
pub mod template;
pub mod vars;

// Re-exports for convenience
pub use data::ReceiptPreviewData;
pub use editor::Editor;
pub use error::{DispatchError, UploadError};
pub use template::{ComponentKind, ReceiptComponent, ReceiptTemplate};
