//! Scrollable area component.

use crate::ui::html::cn;

/// Scrollable container.
///
/// Fills the remaining space of a flex column and scrolls on its own, so
/// content taller than the area never scrolls the page around it.
///
/// # Example
///
/// ```rust
/// use slides_shell::ui::components::scroll_area;
///
/// let html = scroll_area("workflow", "", "<p>Long content</p>");
/// assert!(html.contains("overflow-y-auto"));
/// ```
#[must_use]
pub fn scroll_area(id: &str, class: &str, content: &str) -> String {
    let classes = cn(&[
        "relative flex-1 min-h-0 overflow-y-auto overflow-x-hidden overscroll-contain \
         scrollbar-thin scrollbar-thumb-zinc-700 scrollbar-track-transparent",
        class,
    ]);

    format!(r#"<div id="{id}" class="{classes}">{content}</div>"#)
}
