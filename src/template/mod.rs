//! # Receipt Document Model
//!
//! A single type hierarchy that is both the Rust API and the wire shape
//! the external template store speaks. `ReceiptTemplate` is constructible
//! in Rust and deserializable from the persisted JSON.
//!
//! ```
//! use recibo::template::{ComponentKind, ReceiptTemplate, edit};
//!
//! let template = ReceiptTemplate::empty("My receipt");
//! let template = edit::add_component(&template, ComponentKind::Header);
//! assert_eq!(template.style.components.len(), 1);
//! ```
//!
//! Components carry an `order` field that defines render sequence; both
//! renderers sort by it and never trust array position. Disabled
//! components stay in the document (the editor still shows them dimmed)
//! but are skipped by every renderer.

pub mod edit;
pub mod styles;
pub mod transport;

pub use styles::{ResolvedStyle, StyleRecord, resolve_style};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of component kinds, camelCase on the wire.
///
/// `Unknown` absorbs any tag a newer producer invented; renderers emit
/// nothing for it instead of failing the whole template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Logo,
    Header,
    Text,
    ItemList,
    Totals,
    Footer,
    Divider,
    Spacer,
    QrCode,
    Unknown,
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ComponentKind::parse(&tag))
    }
}

impl ComponentKind {
    /// Parse a wire tag; anything unrecognized becomes `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "logo" => ComponentKind::Logo,
            "header" => ComponentKind::Header,
            "text" => ComponentKind::Text,
            "itemList" => ComponentKind::ItemList,
            "totals" => ComponentKind::Totals,
            "footer" => ComponentKind::Footer,
            "divider" => ComponentKind::Divider,
            "spacer" => ComponentKind::Spacer,
            "qrCode" => ComponentKind::QrCode,
            _ => ComponentKind::Unknown,
        }
    }

    /// Every kind an editor can add, in palette order.
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Logo,
        ComponentKind::Header,
        ComponentKind::Text,
        ComponentKind::ItemList,
        ComponentKind::Totals,
        ComponentKind::Footer,
        ComponentKind::Divider,
        ComponentKind::Spacer,
        ComponentKind::QrCode,
    ];

    /// Wire name of the kind (the `type` tag value).
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Logo => "logo",
            ComponentKind::Header => "header",
            ComponentKind::Text => "text",
            ComponentKind::ItemList => "itemList",
            ComponentKind::Totals => "totals",
            ComponentKind::Footer => "footer",
            ComponentKind::Divider => "divider",
            ComponentKind::Spacer => "spacer",
            ComponentKind::QrCode => "qrCode",
            ComponentKind::Unknown => "unknown",
        }
    }

    /// Human-readable display label for the editor palette.
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Logo => "Logo",
            ComponentKind::Header => "Header",
            ComponentKind::Text => "Text",
            ComponentKind::ItemList => "Item List",
            ComponentKind::Totals => "Totals",
            ComponentKind::Footer => "Footer",
            ComponentKind::Divider => "Divider",
            ComponentKind::Spacer => "Spacer",
            ComponentKind::QrCode => "QR Code",
            ComponentKind::Unknown => "Unknown",
        }
    }

    /// Starter payload for a freshly added component. Placeholder text is
    /// example content so a new component is immediately visible, not
    /// empty.
    pub fn default_data(self) -> ComponentData {
        match self {
            ComponentKind::Logo => ComponentData {
                url: Some(String::new()),
                text: Some(String::new()),
                ..Default::default()
            },
            ComponentKind::Header => ComponentData {
                text: Some("{{storeName}}".into()),
                ..Default::default()
            },
            ComponentKind::Text => ComponentData {
                text: Some("Your text here".into()),
                ..Default::default()
            },
            ComponentKind::Footer => ComponentData {
                text: Some("{{footerText}}".into()),
                ..Default::default()
            },
            ComponentKind::QrCode => ComponentData {
                qr_data: Some(String::new()),
                ..Default::default()
            },
            ComponentKind::ItemList
            | ComponentKind::Totals
            | ComponentKind::Divider
            | ComponentKind::Spacer
            | ComponentKind::Unknown => ComponentData::default(),
        }
    }

    /// Starter styles for a freshly added component; also the last
    /// fallback of the effective-style chain (see
    /// [`styles::resolve_style`]).
    pub fn default_styles(self) -> StyleRecord {
        match self {
            ComponentKind::Logo => StyleRecord {
                text_align: Some("center".into()),
                width: Some("250px".into()),
                ..Default::default()
            },
            ComponentKind::Header => StyleRecord {
                font_weight: Some("bold".into()),
                text_align: Some("center".into()),
                font_size: Some("16px".into()),
                ..Default::default()
            },
            ComponentKind::Text => StyleRecord {
                font_weight: Some("bold".into()),
                font_size: Some("11px".into()),
                ..Default::default()
            },
            ComponentKind::ItemList => StyleRecord {
                font_weight: Some("bold".into()),
                font_size: Some("10px".into()),
                ..Default::default()
            },
            ComponentKind::Totals => StyleRecord {
                font_weight: Some("bold".into()),
                font_size: Some("11px".into()),
                ..Default::default()
            },
            ComponentKind::QrCode => StyleRecord {
                text_align: Some("center".into()),
                ..Default::default()
            },
            ComponentKind::Footer => StyleRecord {
                font_weight: Some("bold".into()),
                text_align: Some("center".into()),
                font_size: Some("10px".into()),
                ..Default::default()
            },
            ComponentKind::Divider => StyleRecord {
                margin: Some("8px 0".into()),
                ..Default::default()
            },
            ComponentKind::Spacer => StyleRecord {
                height: Some("20px".into()),
                ..Default::default()
            },
            ComponentKind::Unknown => StyleRecord::default(),
        }
    }
}

/// Variant-specific payload. Fields irrelevant to a component's kind are
/// carried but ignored by the renderers, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentData {
    /// Free text (`header`, `text`, `footer`, logo fallback text).
    pub text: Option<String>,
    /// Image reference for `logo`: a data-URL or remote URL.
    pub url: Option<String>,
    /// QR payload for `qrCode`.
    pub qr_data: Option<String>,
}

impl ComponentData {
    /// Shallow-merge `patch` into `self`.
    pub fn merge(&mut self, patch: &ComponentData) {
        if patch.text.is_some() {
            self.text = patch.text.clone();
        }
        if patch.url.is_some() {
            self.url = patch.url.clone();
        }
        if patch.qr_data.is_some() {
            self.qr_data = patch.qr_data.clone();
        }
    }
}

fn default_true() -> bool {
    true
}

/// One visual/logical unit of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptComponent {
    /// Unique within a template, stable across reorders.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub data: ComponentData,
    #[serde(default)]
    pub styles: StyleRecord,
    /// Disabled components are skipped by every renderer but stay in the
    /// document.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Render sequence. Not necessarily contiguous mid-edit; renderers
    /// sort by it.
    #[serde(default)]
    pub order: i32,
}

/// Template-wide styles plus the ordered component list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateStyle {
    #[serde(default)]
    pub styles: StyleRecord,
    #[serde(default)]
    pub components: Vec<ReceiptComponent>,
}

/// The aggregate receipt document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTemplate {
    /// Present only for a persisted template; assigned externally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub style: TemplateStyle,
    /// Whether this template is the active one for printing. Uniqueness
    /// per store is enforced externally, not here.
    #[serde(default)]
    pub is_used: bool,
}

impl ReceiptTemplate {
    /// A named template with no components and baseline global styles.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            style: TemplateStyle {
                styles: transport::baseline_styles(),
                components: Vec::new(),
            },
            is_used: false,
        }
    }

    /// The stock receipt used when no persisted template exists: logo,
    /// header, sale metadata, item list, totals, payment/footer lines and
    /// a QR code, wired with `{{tokens}}`.
    pub fn standard() -> Self {
        let kinds_and_text: [(ComponentKind, Option<&str>); 9] = [
            (ComponentKind::Logo, None),
            (ComponentKind::Header, Some("{{storeName}}")),
            (
                ComponentKind::Text,
                Some("{{storeAddress}}\nTel: {{storePhone}}"),
            ),
            (
                ComponentKind::Text,
                Some("Receipt #{{receiptNumber}}\n{{date}} {{time}}\nCashier: {{cashierName}}"),
            ),
            (ComponentKind::ItemList, None),
            (ComponentKind::Totals, None),
            (
                ComponentKind::Text,
                Some("{{payments}}\nChange: {{change}} UZS"),
            ),
            (ComponentKind::Footer, Some("{{footerText}}")),
            (ComponentKind::QrCode, None),
        ];

        let components = kinds_and_text
            .iter()
            .enumerate()
            .map(|(i, (kind, text))| {
                let mut data = kind.default_data();
                if let Some(text) = text {
                    data.text = Some((*text).to_string());
                }
                ReceiptComponent {
                    id: format!("{}-{}", kind.as_str(), i),
                    kind: *kind,
                    data,
                    styles: kind.default_styles(),
                    enabled: true,
                    order: i as i32,
                }
            })
            .collect();

        Self {
            id: None,
            name: "Standard receipt".into(),
            style: TemplateStyle {
                styles: transport::baseline_styles(),
                components,
            },
            is_used: false,
        }
    }

    /// Look up a component by id.
    pub fn component(&self, id: &str) -> Option<&ReceiptComponent> {
        self.style.components.iter().find(|c| c.id == id)
    }

    /// The components a renderer must process: enabled only, sorted by
    /// `order` ascending. Original array order is irrelevant.
    pub fn render_sequence(&self) -> Vec<&ReceiptComponent> {
        let mut sequence: Vec<&ReceiptComponent> = self
            .style
            .components
            .iter()
            .filter(|c| c.enabled)
            .collect();
        sequence.sort_by_key(|c| c.order);
        sequence
    }
}

/// Component kind metadata for an embedding editor UI.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentKindMeta {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
}

/// The palette an editor offers: every addable kind with its label.
pub fn component_catalog() -> Vec<ComponentKindMeta> {
    ComponentKind::ALL
        .iter()
        .map(|kind| ComponentKindMeta {
            type_name: kind.as_str(),
            label: kind.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ComponentKind::ItemList).unwrap(),
            "\"itemList\""
        );
        assert_eq!(
            serde_json::to_string(&ComponentKind::QrCode).unwrap(),
            "\"qrCode\""
        );
    }

    #[test]
    fn test_unknown_kind_deserializes() {
        let kind: ComponentKind = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(kind, ComponentKind::Unknown);
    }

    #[test]
    fn test_component_defaults_on_deserialize() {
        let json = r#"{"id": "a", "type": "text"}"#;
        let component: ReceiptComponent = serde_json::from_str(json).unwrap();
        assert!(component.enabled);
        assert_eq!(component.order, 0);
        assert_eq!(component.data, ComponentData::default());
    }

    #[test]
    fn test_render_sequence_sorts_and_filters() {
        let mut template = ReceiptTemplate::empty("t");
        for (id, order, enabled) in [("c", 2, true), ("a", 0, true), ("b", 1, false)] {
            template.style.components.push(ReceiptComponent {
                id: id.into(),
                kind: ComponentKind::Text,
                data: ComponentData::default(),
                styles: StyleRecord::default(),
                enabled,
                order,
            });
        }
        let ids: Vec<&str> = template
            .render_sequence()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_standard_template_orders_dense() {
        let template = ReceiptTemplate::standard();
        let orders: Vec<i32> = template.style.components.iter().map(|c| c.order).collect();
        assert_eq!(orders, (0..9).collect::<Vec<i32>>());
    }

    #[test]
    fn test_catalog_covers_all_kinds() {
        let catalog = component_catalog();
        assert_eq!(catalog.len(), ComponentKind::ALL.len());
        assert!(catalog.iter().any(|m| m.type_name == "itemList"));
        // Unknown is not addable
        assert!(!catalog.iter().any(|m| m.type_name == "unknown"));
    }

    #[test]
    fn test_template_serialize_roundtrip() {
        let template = ReceiptTemplate::standard();
        let json = serde_json::to_string(&template).unwrap();
        let back: ReceiptTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }

    #[test]
    fn test_data_merge() {
        let mut data = ComponentData {
            text: Some("old".into()),
            url: Some("u".into()),
            ..Default::default()
        };
        data.merge(&ComponentData {
            text: Some("new".into()),
            ..Default::default()
        });
        assert_eq!(data.text.as_deref(), Some("new"));
        assert_eq!(data.url.as_deref(), Some("u"));
    }
}
