//! Conversion from the persisted-template transport shape to the
//! internal document model.
//!
//! The backend round-trips templates through a JSON column, and older
//! rows come back with the style object nested one level deeper
//! (`style.style.styles` instead of `style.styles`). The transport type
//! accepts either nesting and normalizes to the single-level shape; when
//! both are absent the template gets a fixed baseline style record and an
//! empty component list, so a broken row still loads as a blank-but-valid
//! template.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{ReceiptComponent, ReceiptTemplate, StyleRecord, TemplateStyle};

/// A template as the external store delivers it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateTransport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: TransportStyle,
    #[serde(default)]
    pub is_used: bool,
}

/// The possibly-nested style envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransportStyle {
    #[serde(default)]
    pub styles: Option<StyleRecord>,
    #[serde(default, deserialize_with = "deserialize_lenient_components")]
    pub components: Option<Vec<ReceiptComponent>>,
    /// Extra nesting introduced by backend round-tripping.
    #[serde(default)]
    pub style: Option<Box<TransportStyle>>,
}

impl TemplateTransport {
    /// Parse a raw JSON value, tolerating shape damage: a non-object
    /// yields the default (empty) transport.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Normalize into the internal model. Either nesting level wins in
    /// order: `style.styles` → `style.style.styles` → baseline; same for
    /// `components`, defaulting to empty.
    pub fn into_template(self) -> ReceiptTemplate {
        let nested = self.style.style;

        let styles = self
            .style
            .styles
            .or_else(|| nested.as_ref().and_then(|s| s.styles.clone()))
            .unwrap_or_else(baseline_styles);

        let components = self
            .style
            .components
            .or_else(|| nested.and_then(|s| s.components))
            .unwrap_or_default();

        ReceiptTemplate {
            id: self.id,
            name: self.name,
            style: TemplateStyle { styles, components },
            is_used: self.is_used,
        }
    }
}

/// The fixed baseline global style record used when a persisted template
/// carries no styles at all.
pub fn baseline_styles() -> StyleRecord {
    StyleRecord {
        font_family: Some("'Courier New', monospace".into()),
        font_size: Some("12px".into()),
        width: Some("80mm".into()),
        background: Some("#ffffff".into()),
        color: Some("#000000".into()),
        margin: Some("0".into()),
        padding: Some("10px".into()),
        ..Default::default()
    }
}

/// Accept a components value of any shape: arrays parse element-wise with
/// malformed entries dropped, anything else counts as absent.
fn deserialize_lenient_components<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ReceiptComponent>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
