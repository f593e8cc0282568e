//! # HTML Renderer
//!
//! Produces a self-contained HTML document for browser preview and
//! printing: inline `<style>` only, print media pinned to 80mm paper with
//! zero margin, CSS in place of ESC/POS codes.
//!
//! The walk is the same as the command generator's — enabled components
//! sorted by `order`, same variable substitution — so toggling or
//! reordering a component affects both outputs identically. Two
//! deliberate divergences from the thermal path are preserved: item rows
//! show `quantity x unit price` without the per-item total, and monetary
//! text outside the totals block uses grouped formatting.

use crate::data::ReceiptPreviewData;
use crate::layout::{PRINT_WIDTH, format_currency, justify, separator_line};
use crate::protocol::text::Alignment;
use crate::template::{
    ComponentKind, ReceiptComponent, ReceiptTemplate, ResolvedStyle, resolve_style,
};
use crate::vars::{expand, format_grouped};

/// Render the full standalone HTML document for `(template, data)`.
pub fn render_document(template: &ReceiptTemplate, data: &ReceiptPreviewData) -> String {
    let global = &template.style.styles;
    let font_family = global
        .font_family
        .as_deref()
        .unwrap_or("'Courier New', monospace");
    let font_size = global.font_size.as_deref().unwrap_or("12px");
    let color = global.color.as_deref().unwrap_or("#000000");
    let background = global.background.as_deref().unwrap_or("#ffffff");
    let padding = global.padding.as_deref().unwrap_or("10px");

    let mut body = String::new();
    for component in template.render_sequence() {
        body.push_str(&render_component(component, data, template));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         @page {{ size: 80mm auto; margin: 0; }}\n\
         @media print {{ body {{ width: 80mm; margin: 0; }} }}\n\
         body {{ width: 80mm; margin: 0 auto; padding: {padding}; \
         font-family: {font_family}; font-size: {font_size}; \
         color: {color}; background: {background}; }}\n\
         </style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(&template.name),
        padding = padding,
        font_family = font_family,
        font_size = font_size,
        color = color,
        background = background,
        body = body,
    )
}

fn render_component(
    component: &ReceiptComponent,
    data: &ReceiptPreviewData,
    template: &ReceiptTemplate,
) -> String {
    let style = resolve_style(component.kind, &component.styles, &template.style.styles);

    match component.kind {
        ComponentKind::Logo => render_logo(component, data, &style),
        ComponentKind::Header | ComponentKind::Text | ComponentKind::Footer => {
            render_text_block(component, data, &style)
        }
        ComponentKind::ItemList => render_item_list(data, &style),
        ComponentKind::Totals => render_totals(data, &style),
        ComponentKind::QrCode => render_qr_placeholder(&style),
        ComponentKind::Divider => render_divider(&style),
        ComponentKind::Spacer => render_spacer(component),
        ComponentKind::Unknown => String::new(),
    }
}

/// An `<img>` when the logo has a URL, otherwise the logo text (or store
/// name) as bold centered text. The image default width is 150px — only
/// an explicit `styles.width` overrides it.
fn render_logo(
    component: &ReceiptComponent,
    data: &ReceiptPreviewData,
    style: &ResolvedStyle,
) -> String {
    if let Some(url) = component.data.url.as_deref().filter(|u| !u.is_empty()) {
        let width = component.styles.width.as_deref().unwrap_or("150px");
        let height = component
            .styles
            .height
            .as_deref()
            .map(|h| format!(" height: {};", escape_html(h)))
            .unwrap_or_default();
        return format!(
            "<div style=\"text-align: center;\">\
             <img src=\"{}\" alt=\"logo\" style=\"width: {};{} display: inline-block;\">\
             </div>\n",
            escape_html(url),
            escape_html(width),
            height,
        );
    }

    let source = component
        .data
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&data.store_name);
    format!(
        "<div style=\"text-align: center; font-weight: bold; font-size: {};\">{}</div>\n",
        escape_html(&style.font_size),
        text_to_html(&expand(source, data)),
    )
}

fn render_text_block(
    component: &ReceiptComponent,
    data: &ReceiptPreviewData,
    style: &ResolvedStyle,
) -> String {
    let text = component.data.text.as_deref().unwrap_or_default();
    format!(
        "<div style=\"{}\">{}</div>\n",
        inline_style(style),
        text_to_html(&expand(text, data)),
    )
}

/// One bold full-width name row per item plus a `qty x unit price` row.
/// The per-item extended total is deliberately absent here — only the
/// thermal path prints it.
fn render_item_list(data: &ReceiptPreviewData, style: &ResolvedStyle) -> String {
    if data.items.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for item in &data.items {
        rows.push_str(&format!(
            "<tr><td style=\"font-weight: bold;\">{}</td></tr>\n\
             <tr><td style=\"padding-left: 8px;\">{} x {}</td></tr>\n",
            escape_html(&item.name),
            format_grouped(item.quantity),
            format_grouped(item.price),
        ));
    }

    format!(
        "<table style=\"width: 100%; border-collapse: collapse; font-size: {};\">\n{}</table>\n",
        escape_html(&style.font_size),
        rows,
    )
}

/// Preformatted text using the same 32-column `justify` as the thermal
/// path, for visual fidelity to the physical output.
fn render_totals(data: &ReceiptPreviewData, style: &ResolvedStyle) -> String {
    let mut lines = Vec::new();
    lines.push(justify(
        "Subtotal:",
        &format_currency(data.subtotal),
        PRINT_WIDTH,
    ));
    if data.discount > 0.0 {
        lines.push(justify(
            "Discount:",
            &format!("-{}", format_currency(data.discount)),
            PRINT_WIDTH,
        ));
    }
    lines.push(justify("Tax:", &format_currency(data.tax), PRINT_WIDTH));
    lines.push(separator_line(PRINT_WIDTH, '='));
    lines.push(justify(
        "TOTAL:",
        &format_currency(data.total),
        PRINT_WIDTH,
    ));
    lines.push(separator_line(PRINT_WIDTH, '='));

    format!(
        "<pre style=\"font-family: monospace; font-size: {}; font-weight: {}; margin: 4px 0;\">{}</pre>\n",
        escape_html(&style.font_size),
        if style.bold { "bold" } else { "normal" },
        escape_html(&lines.join("\n")),
    )
}

/// The HTML path does not rasterize a real QR code; it shows a fixed-size
/// bordered placeholder where the code prints.
fn render_qr_placeholder(_style: &ResolvedStyle) -> String {
    "<div style=\"width: 100px; height: 100px; border: 1px solid #000; \
     margin: 8px auto; display: flex; align-items: center; \
     justify-content: center; font-size: 10px;\">QR CODE</div>\n"
        .to_string()
}

fn render_divider(style: &ResolvedStyle) -> String {
    let margin = style.margin.as_deref().unwrap_or("8px 0");
    format!(
        "<hr style=\"border: none; border-top: 1px dashed #000; margin: {};\">\n",
        escape_html(margin),
    )
}

fn render_spacer(component: &ReceiptComponent) -> String {
    let height = component
        .styles
        .height
        .as_deref()
        .or(component.styles.spacing.as_deref())
        .unwrap_or("20px");
    format!("<div style=\"height: {};\"></div>\n", escape_html(height))
}

/// Inline CSS for a text-bearing component from its resolved style.
fn inline_style(style: &ResolvedStyle) -> String {
    let mut css = format!(
        "text-align: {}; font-weight: {}; font-size: {};",
        match style.align {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        },
        if style.bold { "bold" } else { "normal" },
        style.font_size,
    );
    if style.italic {
        css.push_str(" font-style: italic;");
    }
    for (property, value) in [
        ("margin", &style.margin),
        ("padding", &style.padding),
        ("color", &style.color),
        ("background", &style.background),
    ] {
        if let Some(value) = value {
            css.push_str(&format!(" {}: {};", property, escape_html(value)));
        }
    }
    if style.border_top {
        css.push_str(" border-top: 1px solid #000;");
    }
    if style.border_bottom {
        css.push_str(" border-bottom: 1px solid #000;");
    }
    css
}

/// Expanded text to HTML: escaped, newlines become `<br>`.
fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Minimal HTML escaping for interpolated content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
