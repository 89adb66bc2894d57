//! SVG icons.
//!
//! Icons are rendered inline as SVG elements so they pick up the current
//! text color and can be sized with classes.

use crate::ui::html::cn;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Callers that size the icon themselves replace [`ICON_SIZE`].
fn svg(class: &str, body: &str) -> String {
    let classes = if class.is_empty() { ICON_SIZE } else { class };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{classes}" aria-hidden="true">{body}</svg>"#,
        classes = cn(&[classes]),
    )
}

/// Chevron pointing right.
#[must_use]
pub fn chevron_right(class: &str) -> String {
    svg(class, r#"<path d="m9 18 6-6-6-6"/>"#)
}

/// Chevron pointing down.
#[must_use]
pub fn chevron_down(class: &str) -> String {
    svg(class, r#"<path d="m6 9 6 6 6-6"/>"#)
}

/// Arrow pointing left.
#[must_use]
pub fn arrow_left(class: &str) -> String {
    svg(class, r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#)
}

/// Upload tray icon.
#[must_use]
pub fn upload(class: &str) -> String {
    svg(
        class,
        r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" y1="3" x2="12" y2="15"/>"#,
    )
}
