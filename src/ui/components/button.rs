//! Button component with variants and sizes.

use crate::ui::html::cn;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary call to action.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Subtle ghost button.
    Ghost,
    /// Link-style button.
    Link,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-gray-300 text-gray-900 hover:bg-gray-200",
            Self::Secondary => "bg-zinc-800 text-zinc-100 border border-zinc-700 hover:bg-zinc-700",
            Self::Ghost => "bg-transparent text-zinc-300 hover:bg-zinc-800 hover:text-zinc-100",
            Self::Link => "bg-transparent text-zinc-300 underline-offset-4 hover:underline",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large pill, for hero calls to action.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs rounded-lg",
            Self::Md => "h-10 px-4 text-sm rounded-lg",
            Self::Lg => "px-6 py-3 text-base md:text-lg rounded-full",
            Self::Icon => "h-10 w-10 rounded-full",
        }
    }
}

/// Button element.
///
/// `content` and `attrs` are inserted verbatim, so callers escape any text
/// they put there.
///
/// # Example
///
/// ```rust
/// use slides_shell::ui::components::{Button, ButtonSize};
///
/// let html = Button::new("Go").size(ButtonSize::Sm).render();
/// assert!(html.starts_with(r#"<button type="button""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    class: String,
    attrs: String,
    content: String,
    anchor: bool,
}

impl Button {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Additional CSS classes.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = cn(&[&self.class, class]);
        self
    }

    /// Render as an `<a>` styled like a button. Pair with an `href` in
    /// [`Button::attrs`] so the control also works without JavaScript.
    #[must_use]
    pub fn anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Extra attributes, e.g. HTMX or Alpine bindings.
    #[must_use]
    pub fn attrs(mut self, attrs: &str) -> Self {
        if !self.attrs.is_empty() {
            self.attrs.push(' ');
        }
        self.attrs.push_str(attrs);
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        let base_classes = "inline-flex items-center justify-center gap-2 font-medium \
                            cursor-pointer transition-colors focus-visible:outline-none \
                            focus-visible:ring-2 focus-visible:ring-zinc-400 \
                            disabled:pointer-events-none disabled:opacity-50";
        let classes = cn(&[
            base_classes,
            self.variant.classes(),
            self.size.classes(),
            &self.class,
        ]);
        let attrs = if self.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", self.attrs)
        };

        if self.anchor {
            format!(
                r#"<a class="{classes}"{attrs}>{content}</a>"#,
                content = self.content,
            )
        } else {
            format!(
                r#"<button type="button" class="{classes}"{attrs}>{content}</button>"#,
                content = self.content,
            )
        }
    }
}
