//! Wordmark heading with size presets and an optional home link.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ShellError;
use crate::navigation::NavCallback;
use crate::ui::html::{cn, escape};

/// Wordmark size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum BrandSize {
    /// Compact mark.
    Sm,
    /// Medium mark (default).
    #[default]
    Md,
    /// Large mark, used above page content.
    Lg,
    /// Hero-sized mark.
    Xl,
}

impl BrandSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Get the responsive type-scale classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "text-2xl md:text-3xl",
            Self::Md => "text-3xl md:text-4xl",
            Self::Lg => "text-4xl md:text-5xl lg:text-6xl",
            Self::Xl => "text-4xl sm:text-5xl md:text-7xl lg:text-8xl",
        }
    }

    /// Short name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl fmt::Display for BrandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandSize {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" | "small" => Ok(Self::Sm),
            "md" | "medium" => Ok(Self::Md),
            "lg" | "large" => Ok(Self::Lg),
            "xl" | "extra-large" => Ok(Self::Xl),
            other => Err(ShellError::UnknownBrandSize(other.to_string())),
        }
    }
}

impl TryFrom<String> for BrandSize {
    type Error = ShellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Presentation parameters for a [`BrandMark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandConfig {
    /// Type-scale preset.
    pub size: BrandSize,
    /// Whether the mark links back to the landing page.
    pub link_enabled: bool,
    /// Wordmark text.
    pub display_text: String,
    /// Extra classes appended after the preset ones.
    pub style_override: Option<String>,
}

impl BrandConfig {
    /// Medium, linked mark showing `display_text`.
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            size: BrandSize::default(),
            link_enabled: true,
            display_text: display_text.into(),
            style_override: None,
        }
    }

    #[must_use]
    pub fn size(mut self, size: BrandSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn link_enabled(mut self, enabled: bool) -> Self {
        self.link_enabled = enabled;
        self
    }

    /// Append `classes` to any override already set.
    #[must_use]
    pub fn style_override(mut self, classes: &str) -> Self {
        let merged = match self.style_override.take() {
            Some(existing) => cn(&[&existing, classes]),
            None => cn(&[classes]),
        };
        self.style_override = (!merged.is_empty()).then_some(merged);
        self
    }
}

/// The application wordmark.
///
/// Renders exactly one `<h2>`. With linking enabled the heading is wrapped
/// in an anchor bound to the home callback.
#[derive(Debug, Clone)]
pub struct BrandMark {
    config: BrandConfig,
    home: Option<NavCallback>,
}

impl BrandMark {
    /// Build a mark from `config`.
    ///
    /// A linked mark needs `home`; omitting it is reported as
    /// [`ShellError::MissingCallback`]. An inert mark ignores `home`.
    pub fn new(config: BrandConfig, home: Option<NavCallback>) -> Result<Self, ShellError> {
        if !config.link_enabled {
            return Ok(Self::inert(config));
        }
        let home = home.ok_or(ShellError::MissingCallback {
            component: "BrandMark",
            callback: "home",
        })?;
        Ok(Self::linked(config, home))
    }

    /// Linked mark; activation invokes `home`.
    #[must_use]
    pub fn linked(mut config: BrandConfig, home: NavCallback) -> Self {
        config.link_enabled = true;
        Self {
            config,
            home: Some(home),
        }
    }

    /// Mark without a link, for pages where linking home would point at
    /// the page itself.
    #[must_use]
    pub fn inert(mut config: BrandConfig) -> Self {
        config.link_enabled = false;
        Self { config, home: None }
    }

    #[must_use]
    pub fn config(&self) -> &BrandConfig {
        &self.config
    }

    /// Callback invoked on activation, if linked.
    #[must_use]
    pub fn home(&self) -> Option<&NavCallback> {
        self.home.as_ref()
    }

    /// Activate the mark. Returns whether a navigation was requested.
    pub fn activate(&self) -> bool {
        match &self.home {
            Some(home) => {
                home.invoke();
                true
            }
            None => false,
        }
    }

    /// Render to HTML.
    #[must_use]
    pub fn render(&self) -> String {
        let classes = cn(&[
            self.config.size.classes(),
            "font-bold font-brand",
            self.config.style_override.as_deref().unwrap_or_default(),
        ]);
        let heading = format!(
            r#"<h2 class="{classes}" data-brand-size="{size}">{text}</h2>"#,
            classes = escape(&classes),
            size = self.config.size,
            text = escape(&self.config.display_text),
        );

        match &self.home {
            Some(home) => format!(
                r#"<a {attrs} class="brand-link hover:opacity-80 transition-opacity">{heading}</a>"#,
                attrs = home.link_attrs(),
            ),
            None => heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ViewRoute;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn spy() -> (NavCallback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let cb = NavCallback::new(ViewRoute::Landing, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (cb, count)
    }

    #[test]
    fn test_every_size_renders_one_heading_at_its_scale() {
        for size in BrandSize::ALL {
            let html = BrandMark::inert(BrandConfig::new("AI Slides").size(size)).render();

            assert_eq!(html.matches("<h2").count(), 1, "{size}");
            assert_eq!(html.matches("</h2>").count(), 1, "{size}");
            assert!(html.contains(size.classes()), "{size}: {html}");
            assert!(html.contains(&format!(r#"data-brand-size="{size}""#)));
        }
    }

    #[test]
    fn test_scales_are_distinct() {
        let scales: std::collections::HashSet<_> =
            BrandSize::ALL.iter().map(|s| s.classes()).collect();
        assert_eq!(scales.len(), BrandSize::ALL.len());
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!("sm".parse::<BrandSize>().unwrap(), BrandSize::Sm);
        assert_eq!("medium".parse::<BrandSize>().unwrap(), BrandSize::Md);
        assert_eq!("lg".parse::<BrandSize>().unwrap(), BrandSize::Lg);
        assert_eq!("extra-large".parse::<BrandSize>().unwrap(), BrandSize::Xl);
        assert_eq!(BrandSize::default(), BrandSize::Md);
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        let err = "xxl".parse::<BrandSize>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownBrandSize(s) if s == "xxl"));

        let err = "XL".parse::<BrandSize>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownBrandSize(_)));
    }

    #[test]
    fn test_deserialize_rejects_unknown_size() {
        let size: BrandSize = serde_json::from_str(r#""large""#).unwrap();
        assert_eq!(size, BrandSize::Lg);

        let err = serde_json::from_str::<BrandSize>(r#""huge""#).unwrap_err();
        assert!(err.to_string().contains("Unknown brand size"));
    }

    #[test]
    fn test_linked_mark_requests_landing() {
        let (home, count) = spy();
        let mark = BrandMark::new(BrandConfig::new("AI Slides"), Some(home)).unwrap();

        assert!(mark.activate());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(mark.home().unwrap().target(), ViewRoute::Landing);

        let html = mark.render();
        assert!(html.starts_with(r#"<a href="/""#));
        assert!(html.contains(r#"hx-get="/""#));
    }

    #[test]
    fn test_inert_mark_never_navigates() {
        let (home, count) = spy();
        let mark =
            BrandMark::new(BrandConfig::new("AI Slides").link_enabled(false), Some(home)).unwrap();

        assert!(!mark.activate());
        assert!(!mark.activate());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!mark.render().contains("<a "));
    }

    #[test]
    fn test_linked_mark_without_callback_is_an_error() {
        let err = BrandMark::new(BrandConfig::new("AI Slides"), None).unwrap_err();
        assert!(matches!(
            err,
            ShellError::MissingCallback {
                component: "BrandMark",
                ..
            }
        ));
    }

    #[test]
    fn test_style_override_and_escaping() {
        let html = BrandMark::inert(
            BrandConfig::new("<AI> Slides")
                .size(BrandSize::Xl)
                .style_override("inline-block text-zinc-300"),
        )
        .render();

        assert!(html.contains("font-bold font-brand inline-block text-zinc-300"));
        assert!(!html.contains("tracking-tight"));
        assert!(html.contains("&lt;AI&gt; Slides"));
    }
}
