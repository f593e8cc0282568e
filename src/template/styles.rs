//! Style records and effective-style resolution.
//!
//! Every style field is optional on the wire. At render time the two
//! renderers never look at raw records directly — they go through
//! [`resolve_style`], which defines the fallback chain exactly once:
//!
//! ```text
//! component.styles[field]
//!   → template.style.styles[field]   (font size/family only)
//!   → per-kind hardcoded default
//! ```

use serde::{Deserialize, Serialize};

use super::ComponentKind;
use crate::protocol::text::Alignment;

/// An all-optional CSS-ish style record, camelCase on the wire.
///
/// Absent fields fall back per the chain documented on [`resolve_style`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleRecord {
    pub text_align: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Legacy spacer height field; `height` wins when both are set.
    pub spacing: Option<String>,
    pub border_top: Option<bool>,
    pub border_bottom: Option<bool>,
}

impl StyleRecord {
    /// Shallow-merge `patch` into `self`: every field present in the
    /// patch overwrites, absent fields are untouched.
    pub fn merge(&mut self, patch: &StyleRecord) {
        macro_rules! take {
            ($($field:ident),+) => {
                $(if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                })+
            };
        }
        take!(
            text_align,
            font_size,
            font_family,
            font_weight,
            font_style,
            margin,
            padding,
            color,
            background,
            width,
            height,
            spacing,
            border_top,
            border_bottom
        );
    }
}

/// The fully-resolved style a renderer works with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub align: Alignment,
    pub bold: bool,
    pub italic: bool,
    pub font_size: String,
    pub font_family: String,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub spacing: Option<String>,
    pub border_top: bool,
    pub border_bottom: bool,
}

/// Ultimate font fallbacks when neither component, template nor kind
/// carries a value.
const FALLBACK_FONT_SIZE: &str = "12px";
const FALLBACK_FONT_FAMILY: &str = "'Courier New', monospace";

/// Resolve the effective style for one component.
///
/// `global` is the template-level style record; it participates only for
/// font size and family. Everything else falls back straight from the
/// component to the kind's hardcoded defaults.
pub fn resolve_style(
    kind: ComponentKind,
    styles: &StyleRecord,
    global: &StyleRecord,
) -> ResolvedStyle {
    let defaults = kind.default_styles();

    let align = styles
        .text_align
        .as_deref()
        .or(defaults.text_align.as_deref())
        .and_then(parse_alignment)
        .unwrap_or(Alignment::Left);

    let weight = styles
        .font_weight
        .as_deref()
        .or(defaults.font_weight.as_deref());
    let bold = weight == Some("bold");

    let italic = styles
        .font_style
        .as_deref()
        .or(defaults.font_style.as_deref())
        == Some("italic");

    let font_size = styles
        .font_size
        .clone()
        .or_else(|| global.font_size.clone())
        .or_else(|| defaults.font_size.clone())
        .unwrap_or_else(|| FALLBACK_FONT_SIZE.to_string());

    let font_family = styles
        .font_family
        .clone()
        .or_else(|| global.font_family.clone())
        .or_else(|| defaults.font_family.clone())
        .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string());

    ResolvedStyle {
        align,
        bold,
        italic,
        font_size,
        font_family,
        margin: styles.margin.clone().or(defaults.margin.clone()),
        padding: styles.padding.clone().or(defaults.padding.clone()),
        color: styles.color.clone().or(defaults.color.clone()),
        background: styles.background.clone().or(defaults.background.clone()),
        width: styles.width.clone().or(defaults.width.clone()),
        height: styles.height.clone().or(defaults.height.clone()),
        spacing: styles.spacing.clone().or(defaults.spacing.clone()),
        border_top: styles
            .border_top
            .or(defaults.border_top)
            .unwrap_or(false),
        border_bottom: styles
            .border_bottom
            .or(defaults.border_bottom)
            .unwrap_or(false),
    }
}

/// Parse a CSS text-align value. Unknown values resolve to `None` so the
/// caller's default applies.
pub fn parse_alignment(value: &str) -> Option<Alignment> {
    match value {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        _ => None,
    }
}

/// Parse the numeric prefix of a CSS pixel value: `"20px"` → `20.0`.
///
/// Bare numbers parse too. Anything non-numeric yields `None` and the
/// caller degrades to its default.
pub fn parse_px(value: &str) -> Option<f64> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits.parse().ok()
}
