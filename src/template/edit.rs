//! Pure editing reducers over the document model.
//!
//! Each operation takes the current template by reference and returns a
//! new value; the editing surface holds the single mutable cell. Nothing
//! here touches rendering.

use chrono::Utc;

use super::{ComponentData, ComponentKind, ReceiptComponent, ReceiptTemplate, StyleRecord};

/// Append a new component of `kind` with a fresh unique id, its kind
/// defaults, `enabled = true` and `order = len(components)`.
pub fn add_component(template: &ReceiptTemplate, kind: ComponentKind) -> ReceiptTemplate {
    let mut next = template.clone();
    let component = ReceiptComponent {
        id: fresh_id(template, kind),
        kind,
        data: kind.default_data(),
        styles: kind.default_styles(),
        enabled: true,
        order: next.style.components.len() as i32,
    };
    next.style.components.push(component);
    next
}

/// Delete the component with `id`. Remaining `order` values are left
/// untouched — renumbering only happens on reorder.
pub fn remove_component(template: &ReceiptTemplate, id: &str) -> ReceiptTemplate {
    let mut next = template.clone();
    next.style.components.retain(|c| c.id != id);
    next
}

/// Flip the `enabled` flag of the component with `id`.
pub fn toggle_component(template: &ReceiptTemplate, id: &str) -> ReceiptTemplate {
    let mut next = template.clone();
    if let Some(component) = next.style.components.iter_mut().find(|c| c.id == id) {
        component.enabled = !component.enabled;
    }
    next
}

/// Shallow-merge `data` and/or `styles` patches into the one matching
/// component.
pub fn update_component(
    template: &ReceiptTemplate,
    id: &str,
    data: Option<&ComponentData>,
    styles: Option<&StyleRecord>,
) -> ReceiptTemplate {
    let mut next = template.clone();
    if let Some(component) = next.style.components.iter_mut().find(|c| c.id == id) {
        if let Some(patch) = data {
            component.data.merge(patch);
        }
        if let Some(patch) = styles {
            component.styles.merge(patch);
        }
    }
    next
}

/// Move `active_id`'s component to `over_id`'s position (drag-and-drop
/// drop target), then renumber every component's `order` to its dense
/// 0-based index.
///
/// No-op when the ids are equal or either is absent — a drop outside any
/// valid target leaves the document untouched.
pub fn reorder(template: &ReceiptTemplate, active_id: &str, over_id: &str) -> ReceiptTemplate {
    if active_id == over_id {
        return template.clone();
    }

    let mut components = template.style.components.clone();
    components.sort_by_key(|c| c.order);

    let Some(from) = components.iter().position(|c| c.id == active_id) else {
        return template.clone();
    };
    let Some(to) = components.iter().position(|c| c.id == over_id) else {
        return template.clone();
    };

    let moved = components.remove(from);
    components.insert(to, moved);
    for (index, component) in components.iter_mut().enumerate() {
        component.order = index as i32;
    }

    let mut next = template.clone();
    next.style.components = components;
    next
}

/// Build a `{kind}-{millis}` id, bumping a suffix on the (rare) collision
/// of two adds within the same millisecond.
fn fresh_id(template: &ReceiptTemplate, kind: ComponentKind) -> String {
    let base = format!("{}-{}", kind.as_str(), Utc::now().timestamp_millis());
    if template.component(&base).is_none() {
        return base;
    }
    let mut suffix = 1;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if template.component(&candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}
