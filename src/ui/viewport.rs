//! Viewport model for scroll affordances.

/// Visible window of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible height in CSS pixels.
    pub height: u32,
    /// Current vertical scroll offset.
    pub scroll_top: u32,
}

impl Viewport {
    /// Viewport of `height` scrolled to the top.
    #[must_use]
    pub fn new(height: u32) -> Self {
        Self {
            height,
            scroll_top: 0,
        }
    }

    #[must_use]
    pub fn scrolled_to(mut self, scroll_top: u32) -> Self {
        self.scroll_top = scroll_top;
        self
    }
}

/// Scroll behavior, mirroring `ScrollToOptions.behavior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
        }
    }
}

/// Where a scroll request lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// An absolute offset in pixels.
    Offset(u32),
    /// Whole viewport heights from the top of the page.
    Viewports(u32),
}

/// A request to scroll the window.
///
/// The same value drives the in-process [`Viewport`] model and the
/// client-side handler, so both agree on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Smooth scroll to the section below the first screen.
    #[must_use]
    pub fn next_section() -> Self {
        Self {
            target: ScrollTarget::Viewports(1),
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Offset this request lands on within `viewport`.
    #[must_use]
    pub fn resolve(&self, viewport: &Viewport) -> u32 {
        match self.target {
            ScrollTarget::Offset(px) => px,
            ScrollTarget::Viewports(n) => viewport.height.saturating_mul(n),
        }
    }

    /// Apply the request to `viewport`. The result does not depend on the
    /// current offset.
    pub fn apply(&self, viewport: &mut Viewport) {
        viewport.scroll_top = self.resolve(viewport);
    }

    /// JavaScript statement performing the request in the browser.
    #[must_use]
    pub fn to_script(&self) -> String {
        let top = match self.target {
            ScrollTarget::Offset(px) => px.to_string(),
            ScrollTarget::Viewports(1) => "window.innerHeight".to_string(),
            ScrollTarget::Viewports(n) => format!("window.innerHeight * {n}"),
        };
        format!(
            "window.scrollTo({{ top: {top}, behavior: '{}' }})",
            self.behavior.as_str()
        )
    }
}
