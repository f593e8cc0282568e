//! # Editing Surface
//!
//! [`Editor`] owns the single mutable template cell of the designer.
//! Every mutation routes through the pure reducers in
//! [`crate::template::edit`]; rendering is delegated to the HTML renderer
//! so the live preview and the printed page can never drift apart.
//!
//! Logo uploads are a guarded single-shot operation: the host begins an
//! upload (rejecting a second begin while one is pending), reads the file
//! however it likes, then completes with the bytes or cancels. Validation
//! (image mimetype, 5 MB cap) happens at completion; the accepted image is
//! stored straight into the component as a base64 data-URL.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::data::ReceiptPreviewData;
use crate::error::{MAX_UPLOAD_BYTES, UploadError};
use crate::html;
use crate::template::styles::parse_px;
use crate::template::{ComponentData, ComponentKind, ReceiptTemplate, StyleRecord, edit};

/// Which resize handle the user is dragging on a logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Corner handle: proportional resize, aspect ratio preserved.
    Corner,
    /// Right-edge handle: width only.
    Width,
    /// Bottom-edge handle: height only.
    Height,
}

/// Smallest logo dimension the resize handles will produce.
const MIN_LOGO_PX: f64 = 20.0;

/// Displayed logo size when the component carries no explicit dimension.
const DEFAULT_LOGO_PX: f64 = 150.0;

/// Interactive editing state: the current template plus the in-flight
/// upload guard.
#[derive(Debug, Clone)]
pub struct Editor {
    template: ReceiptTemplate,
    pending_upload: Option<String>,
}

impl Editor {
    /// Start editing an existing template.
    pub fn new(template: ReceiptTemplate) -> Self {
        Self {
            template,
            pending_upload: None,
        }
    }

    /// Start editing the stock receipt.
    pub fn with_standard_template() -> Self {
        Self::new(ReceiptTemplate::standard())
    }

    /// The current template value.
    pub fn template(&self) -> &ReceiptTemplate {
        &self.template
    }

    /// Give up the editor and keep the template.
    pub fn into_template(self) -> ReceiptTemplate {
        self.template
    }

    // === Structure edits (delegating to the pure reducers) ===

    pub fn add_component(&mut self, kind: ComponentKind) {
        self.template = edit::add_component(&self.template, kind);
    }

    pub fn remove_component(&mut self, id: &str) {
        self.template = edit::remove_component(&self.template, id);
    }

    pub fn toggle_component(&mut self, id: &str) {
        self.template = edit::toggle_component(&self.template, id);
    }

    pub fn update_component(
        &mut self,
        id: &str,
        data: Option<&ComponentData>,
        styles: Option<&StyleRecord>,
    ) {
        self.template = edit::update_component(&self.template, id, data, styles);
    }

    /// Drag-and-drop drop: move `active_id` to `over_id`'s position and
    /// renumber. A drop outside any target (`over_id` absent) is a no-op.
    pub fn reorder(&mut self, active_id: &str, over_id: &str) {
        self.template = edit::reorder(&self.template, active_id, over_id);
    }

    /// Rename the template.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.template.name = name.into();
    }

    // === Preview ===

    /// The live-preview HTML for the current template state.
    pub fn preview_html(&self, data: &ReceiptPreviewData) -> String {
        html::render_document(&self.template, data)
    }

    // === Logo upload (guarded single-shot) ===

    /// Begin a logo upload targeting component `id`.
    ///
    /// Rejects with [`UploadError::UploadInProgress`] while another
    /// upload is pending — the host must complete or cancel first.
    pub fn begin_logo_upload(&mut self, id: &str) -> Result<(), UploadError> {
        if self.pending_upload.is_some() {
            return Err(UploadError::UploadInProgress);
        }
        if self.template.component(id).is_none() {
            return Err(UploadError::UnknownComponent(id.to_string()));
        }
        self.pending_upload = Some(id.to_string());
        Ok(())
    }

    /// Complete the pending upload with the file the host read.
    ///
    /// Validates mimetype and size, then stores the image as a base64
    /// data-URL in the component's `data.url`.
    pub fn complete_logo_upload(&mut self, mime: &str, bytes: &[u8]) -> Result<(), UploadError> {
        let id = self
            .pending_upload
            .take()
            .ok_or(UploadError::NoUploadPending)?;

        if !mime.starts_with("image/") {
            return Err(UploadError::NotAnImage(mime.to_string()));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge { size: bytes.len() });
        }
        if self.template.component(&id).is_none() {
            return Err(UploadError::UnknownComponent(id));
        }

        let url = format!("data:{};base64,{}", mime, BASE64.encode(bytes));
        debug!(component = %id, bytes = bytes.len(), "logo upload accepted");
        let patch = ComponentData {
            url: Some(url),
            ..Default::default()
        };
        self.template = edit::update_component(&self.template, &id, Some(&patch), None);
        Ok(())
    }

    /// Abandon the pending upload (user cancelled or the file read
    /// failed).
    pub fn cancel_logo_upload(&mut self) {
        self.pending_upload = None;
    }

    /// Whether an upload is currently pending.
    pub fn upload_pending(&self) -> bool {
        self.pending_upload.is_some()
    }

    // === Logo resize ===

    /// Apply a drag of `(dx, dy)` pixels on the given resize handle,
    /// writing the resulting dimensions back into the component styles.
    pub fn resize_logo(&mut self, id: &str, handle: ResizeHandle, dx: f64, dy: f64) {
        let Some(component) = self.template.component(id) else {
            return;
        };

        let width = component
            .styles
            .width
            .as_deref()
            .and_then(parse_px)
            .unwrap_or(DEFAULT_LOGO_PX);
        let height = component
            .styles
            .height
            .as_deref()
            .and_then(parse_px)
            .unwrap_or(DEFAULT_LOGO_PX);

        let (new_width, new_height) = match handle {
            ResizeHandle::Corner => {
                let new_width = (width + dx).max(MIN_LOGO_PX);
                let scale = new_width / width;
                (new_width, (height * scale).max(MIN_LOGO_PX))
            }
            ResizeHandle::Width => ((width + dx).max(MIN_LOGO_PX), height),
            ResizeHandle::Height => (width, (height + dy).max(MIN_LOGO_PX)),
        };

        let patch = StyleRecord {
            width: Some(format!("{}px", new_width.round() as i64)),
            height: Some(format!("{}px", new_height.round() as i64)),
            ..Default::default()
        };
        self.template = edit::update_component(&self.template, id, None, Some(&patch));
    }
}
