//! # Command Generator
//!
//! Walks the enabled components of a template in `order` sequence and
//! compiles them to the command IR, which codegen then turns into the
//! ESC/POS byte stream.
//!
//! Formatting never leaks between components: after every component the
//! generator unconditionally resets bold, alignment and character size,
//! whatever the emitter did.

use crate::data::ReceiptPreviewData;
use crate::ir::{Op, Program};
use crate::layout::{PRINT_WIDTH, format_currency, justify, line_wrap, separator_line};
use crate::protocol::text::Alignment;
use crate::template::{ComponentKind, ReceiptComponent, ReceiptTemplate, resolve_style};
use crate::vars::expand;

/// Compile `(template, data)` to an IR program: init first, every enabled
/// component in `order` sequence, paper cut last.
pub fn compile(template: &ReceiptTemplate, data: &ReceiptPreviewData) -> Program {
    let mut program = Program::new();
    program.push(Op::Init);

    for component in template.render_sequence() {
        let style = resolve_style(component.kind, &component.styles, &template.style.styles);

        program.push(Op::SetAlign(style.align));
        if style.bold {
            program.push(Op::SetBold(true));
        }

        emit_component(component, data, &mut program);

        program.push(Op::SetBold(false));
        program.push(Op::SetAlign(Alignment::Left));
        program.push(Op::SetSize {
            height: 0,
            width: 0,
        });
    }

    program.push(Op::Cut);
    program
}

/// The full ESC/POS byte stream for a receipt.
pub fn generate_bytes(template: &ReceiptTemplate, data: &ReceiptPreviewData) -> Vec<u8> {
    compile(template, data).to_bytes()
}

/// The command stream as a 1:1 char-per-byte string (the downloadable
/// form).
pub fn generate_commands(template: &ReceiptTemplate, data: &ReceiptPreviewData) -> String {
    compile(template, data).to_command_string()
}

fn emit_component(component: &ReceiptComponent, data: &ReceiptPreviewData, program: &mut Program) {
    match component.kind {
        ComponentKind::Logo => emit_logo(component, data, program),
        ComponentKind::Header => emit_header(component, data, program),
        ComponentKind::Text | ComponentKind::Footer => emit_text(component, data, program),
        ComponentKind::ItemList => emit_item_list(data, program),
        ComponentKind::Totals => emit_totals(data, program),
        ComponentKind::QrCode => emit_qr_code(component, data, program),
        ComponentKind::Divider => emit_divider(program),
        ComponentKind::Spacer => emit_spacer(component, program),
        // Forward compatibility: templates from a newer engine version may
        // carry kinds we don't know; they print nothing.
        ComponentKind::Unknown => {}
    }
}

/// Thermal printing is text-only for logos: the image URL is not
/// rasterized, the logo text (or store name) prints double-size instead.
fn emit_logo(component: &ReceiptComponent, data: &ReceiptPreviewData, program: &mut Program) {
    let source = component
        .data
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&data.store_name);
    program.push(Op::SetSize {
        height: 1,
        width: 1,
    });
    program.push(Op::SetBold(true));
    program.push(Op::Text(expand(source, data)));
    program.push(Op::Newline);
    program.push(Op::Newline);
}

fn emit_header(component: &ReceiptComponent, data: &ReceiptPreviewData, program: &mut Program) {
    let text = component.data.text.as_deref().unwrap_or_default();
    program.push(Op::SetSize {
        height: 0,
        width: 1,
    });
    program.push(Op::SetBold(true));
    program.push(Op::Text(expand(text, data)));
    program.push(Op::Newline);
}

fn emit_text(component: &ReceiptComponent, data: &ReceiptPreviewData, program: &mut Program) {
    let text = component.data.text.as_deref().unwrap_or_default();
    program.push(Op::SetBold(true));
    for line in expand(text, data).split('\n') {
        program.push(Op::Text(line.to_string()));
        program.push(Op::Newline);
    }
}

/// One justified `name ... $total` line per item, the name wrapped into
/// the columns left of the price; wrap overflow continues on its own
/// left-aligned lines.
fn emit_item_list(data: &ReceiptPreviewData, program: &mut Program) {
    if data.items.is_empty() {
        return;
    }

    program.push(Op::Text(separator_line(PRINT_WIDTH, '-')));
    program.push(Op::Newline);

    for item in &data.items {
        let total = format_currency(item.total);
        let name_width = PRINT_WIDTH.saturating_sub(total.chars().count() + 1);
        let mut lines = line_wrap(&item.name, name_width).into_iter();

        let first = lines.next().unwrap_or_default();
        program.push(Op::Text(justify(&first, &total, PRINT_WIDTH)));
        program.push(Op::Newline);

        for rest in lines {
            program.push(Op::Text(rest));
            program.push(Op::Newline);
        }
    }

    program.push(Op::Text(separator_line(PRINT_WIDTH, '-')));
    program.push(Op::Newline);
}

fn emit_totals(data: &ReceiptPreviewData, program: &mut Program) {
    program.push(Op::SetBold(true));

    let mut line = |text: String| {
        program.push(Op::Text(text));
        program.push(Op::Newline);
    };

    line(justify(
        "Subtotal:",
        &format_currency(data.subtotal),
        PRINT_WIDTH,
    ));
    if data.discount > 0.0 {
        line(justify(
            "Discount:",
            &format!("-{}", format_currency(data.discount)),
            PRINT_WIDTH,
        ));
    }
    line(justify("Tax:", &format_currency(data.tax), PRINT_WIDTH));
    line(separator_line(PRINT_WIDTH, '='));
    line(justify(
        "TOTAL:",
        &format_currency(data.total),
        PRINT_WIDTH,
    ));
    line(separator_line(PRINT_WIDTH, '='));
}

fn emit_qr_code(component: &ReceiptComponent, data: &ReceiptPreviewData, program: &mut Program) {
    let payload = component
        .data
        .qr_data
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(&data.qr_code_data);
    program.push(Op::SetAlign(Alignment::Center));
    program.push(Op::QrCode {
        data: expand(payload, data),
    });
    program.push(Op::Newline);
    program.push(Op::Newline);
}

fn emit_divider(program: &mut Program) {
    program.push(Op::Text(separator_line(PRINT_WIDTH, '-')));
    program.push(Op::Newline);
}

/// One line feed per 10px of height, at least one. Height falls back
/// `styles.height` → `styles.spacing` → 20px.
fn emit_spacer(component: &ReceiptComponent, program: &mut Program) {
    let px = component
        .styles
        .height
        .as_deref()
        .or(component.styles.spacing.as_deref())
        .and_then(crate::template::styles::parse_px)
        .unwrap_or(20.0);
    let feeds = ((px / 10.0).floor() as usize).max(1);
    for _ in 0..feeds {
        program.push(Op::Newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReceiptItem;
    use crate::template::{ComponentData, StyleRecord, edit};
    use pretty_assertions::assert_eq;

    fn component(kind: ComponentKind, order: i32) -> ReceiptComponent {
        ReceiptComponent {
            id: format!("{}-{}", kind.as_str(), order),
            kind,
            data: kind.default_data(),
            styles: kind.default_styles(),
            enabled: true,
            order,
        }
    }

    fn template_of(components: Vec<ReceiptComponent>) -> ReceiptTemplate {
        let mut template = ReceiptTemplate::empty("t");
        template.style.components = components;
        template
    }

    fn texts(program: &Program) -> Vec<&str> {
        program
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_first_cut_last() {
        let program = compile(&template_of(vec![]), &ReceiptPreviewData::default());
        assert_eq!(program.ops.first(), Some(&Op::Init));
        assert_eq!(program.ops.last(), Some(&Op::Cut));
    }

    #[test]
    fn test_formatting_reset_after_each_component() {
        let program = compile(
            &template_of(vec![component(ComponentKind::Header, 0)]),
            &ReceiptPreviewData::default(),
        );
        let ops = &program.ops;
        // The three resets come right before the trailing Cut
        let n = ops.len();
        assert_eq!(ops[n - 4], Op::SetBold(false));
        assert_eq!(ops[n - 3], Op::SetAlign(Alignment::Left));
        assert_eq!(
            ops[n - 2],
            Op::SetSize {
                height: 0,
                width: 0
            }
        );
    }

    #[test]
    fn test_header_expands_variables() {
        let data = ReceiptPreviewData {
            store_name: "Test Store".into(),
            ..Default::default()
        };
        let program = compile(&template_of(vec![component(ComponentKind::Header, 0)]), &data);
        assert!(texts(&program).contains(&"Test Store"));
        // Double width for headers
        assert!(program.iter().any(|op| matches!(
            op,
            Op::SetSize {
                height: 0,
                width: 1
            }
        )));
    }

    #[test]
    fn test_logo_falls_back_to_store_name_double_size() {
        let data = ReceiptPreviewData {
            store_name: "ACME".into(),
            ..Default::default()
        };
        let program = compile(&template_of(vec![component(ComponentKind::Logo, 0)]), &data);
        assert!(texts(&program).contains(&"ACME"));
        assert!(program.iter().any(|op| matches!(
            op,
            Op::SetSize {
                height: 1,
                width: 1
            }
        )));
    }

    #[test]
    fn test_text_splits_lines() {
        let mut c = component(ComponentKind::Text, 0);
        c.data.text = Some("line one\nline two".into());
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        let t = texts(&program);
        assert!(t.contains(&"line one"));
        assert!(t.contains(&"line two"));
    }

    #[test]
    fn test_disabled_component_skipped() {
        let mut c = component(ComponentKind::Header, 0);
        c.data.text = Some("SHOULD NOT PRINT".into());
        c.enabled = false;
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        assert!(texts(&program).is_empty());
    }

    #[test]
    fn test_components_render_in_order_not_position() {
        let mut first = component(ComponentKind::Text, 1);
        first.data.text = Some("second".into());
        let mut second = component(ComponentKind::Text, 0);
        second.id = "other".into();
        second.data.text = Some("first".into());
        // Array order is reversed relative to `order`
        let program = compile(
            &template_of(vec![first, second]),
            &ReceiptPreviewData::default(),
        );
        assert_eq!(texts(&program), vec!["first", "second"]);
    }

    #[test]
    fn test_item_list_layout() {
        let data = ReceiptPreviewData {
            items: vec![
                ReceiptItem::new("Water", 2.0, 2.0),
                ReceiptItem::new("a very long product name that wraps", 1.0, 10.0),
            ],
            ..Default::default()
        };
        let c = component(ComponentKind::ItemList, 0);
        let program = compile(&template_of(vec![c]), &data);
        let t = texts(&program);

        // Opening and closing separators
        let dash_sep = "-".repeat(32);
        assert_eq!(t.first().copied(), Some(dash_sep.as_str()));
        assert_eq!(t.last().copied(), Some(dash_sep.as_str()));
        // First item: name justified against its total on one 32-char line
        assert!(t.iter().any(|s| s.starts_with("Water") && s.ends_with("$4.00")));
        let water = t.iter().find(|s| s.starts_with("Water")).unwrap();
        assert_eq!(water.chars().count(), 32);
        // Long name wraps onto continuation lines
        assert!(t.iter().any(|s| s.ends_with("$10.00")));
        assert!(t.iter().any(|s| !s.contains('$') && s.contains("wraps")));
    }

    #[test]
    fn test_item_list_without_items_renders_nothing() {
        let c = component(ComponentKind::ItemList, 0);
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        assert!(texts(&program).is_empty());
    }

    #[test]
    fn test_totals_block() {
        let data = ReceiptPreviewData {
            subtotal: 1050.0,
            discount: 50.0,
            tax: 0.0,
            total: 1000.0,
            ..Default::default()
        };
        let c = component(ComponentKind::Totals, 0);
        let program = compile(&template_of(vec![c]), &data);
        let t = texts(&program);

        assert!(t.iter().any(|s| s.starts_with("Subtotal:") && s.ends_with("$1050.00")));
        assert!(t.iter().any(|s| s.starts_with("Discount:") && s.ends_with("-$50.00")));
        assert!(t.iter().any(|s| s.starts_with("Tax:") && s.ends_with("$0.00")));
        // Plain fixed-2-decimal formatting on the command path, no grouping
        assert!(t.iter().any(|s| s.starts_with("TOTAL:") && s.ends_with("$1000.00")));
        let eq_sep = "=".repeat(32);
        assert_eq!(t.iter().filter(|s| **s == eq_sep).count(), 2);
    }

    #[test]
    fn test_totals_omits_zero_discount() {
        let data = ReceiptPreviewData {
            subtotal: 10.0,
            total: 10.0,
            ..Default::default()
        };
        let c = component(ComponentKind::Totals, 0);
        let program = compile(&template_of(vec![c]), &data);
        assert!(!texts(&program).iter().any(|s| s.contains("Discount")));
    }

    #[test]
    fn test_qr_uses_component_data_then_preview() {
        let data = ReceiptPreviewData {
            qr_code_data: "from-preview".into(),
            ..Default::default()
        };
        let c = component(ComponentKind::QrCode, 0);
        let program = compile(&template_of(vec![c.clone()]), &data);
        assert!(program.iter().any(|op| matches!(
            op,
            Op::QrCode { data } if data == "from-preview"
        )));

        let mut with_own = c;
        with_own.data.qr_data = Some("own-{{receiptNumber}}".into());
        let data = ReceiptPreviewData {
            receipt_number: "9".into(),
            ..Default::default()
        };
        let program = compile(&template_of(vec![with_own]), &data);
        assert!(program.iter().any(|op| matches!(
            op,
            Op::QrCode { data } if data == "own-9"
        )));
    }

    #[test]
    fn test_spacer_feeds() {
        let mut c = component(ComponentKind::Spacer, 0);
        c.styles.height = Some("45px".into());
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        let feeds = program
            .iter()
            .filter(|op| matches!(op, Op::Newline))
            .count();
        assert_eq!(feeds, 4);
    }

    #[test]
    fn test_spacer_minimum_one_feed() {
        let mut c = component(ComponentKind::Spacer, 0);
        c.styles.height = Some("3px".into());
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        let feeds = program
            .iter()
            .filter(|op| matches!(op, Op::Newline))
            .count();
        assert_eq!(feeds, 1);
    }

    #[test]
    fn test_spacer_spacing_fallback() {
        let mut c = component(ComponentKind::Spacer, 0);
        c.styles.height = None;
        c.styles.spacing = Some("30px".into());
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        let feeds = program
            .iter()
            .filter(|op| matches!(op, Op::Newline))
            .count();
        assert_eq!(feeds, 3);
    }

    #[test]
    fn test_unknown_kind_emits_nothing() {
        let c = ReceiptComponent {
            id: "u".into(),
            kind: ComponentKind::Unknown,
            data: ComponentData::default(),
            styles: StyleRecord::default(),
            enabled: true,
            order: 0,
        };
        let program = compile(&template_of(vec![c]), &ReceiptPreviewData::default());
        assert!(texts(&program).is_empty());
        assert!(!program.iter().any(|op| matches!(op, Op::QrCode { .. })));
    }

    #[test]
    fn test_standard_template_compiles() {
        let template = edit::add_component(&ReceiptTemplate::standard(), ComponentKind::Divider);
        let bytes = generate_bytes(&template, &ReceiptPreviewData::sample());
        assert!(bytes.starts_with(&[0x1B, 0x40]));
        assert!(bytes.ends_with(&[0x1D, 0x56, 0x42, 0x00]));
    }
}
