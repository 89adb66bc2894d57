//! Landing page.

mod scroll_hint;

pub use scroll_hint::{BOB_PERIOD, FADE_IN_DELAY, ScrollHint};

use crate::navigation::NavCallback;
use crate::ui::components::{BrandConfig, BrandMark, BrandSize, Button, ButtonSize, icons};
use crate::ui::viewport::Viewport;

/// Classes the landing page adds to its wordmark.
const LANDING_BRAND_STYLE: &str = "inline-block text-zinc-300 tracking-tight";

/// Label of the primary call to action.
pub const PRIMARY_ACTION_LABEL: &str = "Quick Start";

/// Interactive controls on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingControl {
    /// "Quick Start" button.
    PrimaryAction,
    /// Chevron that scrolls to the next section.
    ScrollHint,
    /// The (inert) wordmark.
    BrandMark,
}

/// The root view: hero wordmark, a call to action and a scroll hint.
#[derive(Debug, Clone)]
pub struct LandingView {
    brand: BrandMark,
    on_upload_requested: NavCallback,
    scroll_hint: ScrollHint,
}

impl LandingView {
    /// Build the view from the shared `brand` settings.
    ///
    /// The wordmark is forced to extra-large and never links, since it
    /// would only point back at this page.
    #[must_use]
    pub fn new(brand: BrandConfig, on_upload_requested: NavCallback) -> Self {
        let brand = brand
            .size(BrandSize::Xl)
            .link_enabled(false)
            .style_override(LANDING_BRAND_STYLE);
        Self {
            brand: BrandMark::inert(brand),
            on_upload_requested,
            scroll_hint: ScrollHint::new(),
        }
    }

    #[must_use]
    pub fn brand(&self) -> &BrandMark {
        &self.brand
    }

    #[must_use]
    pub fn on_upload_requested(&self) -> &NavCallback {
        &self.on_upload_requested
    }

    #[must_use]
    pub fn scroll_hint(&self) -> &ScrollHint {
        &self.scroll_hint
    }

    /// Activate `control` once.
    ///
    /// Every primary activation invokes the upload callback; there is no
    /// debouncing. Only the scroll hint touches `viewport`.
    pub fn activate(&self, control: LandingControl, viewport: &mut Viewport) {
        match control {
            LandingControl::PrimaryAction => self.on_upload_requested.invoke(),
            LandingControl::ScrollHint => self.scroll_hint.activate(viewport),
            LandingControl::BrandMark => {
                self.brand.activate();
            }
        }
    }

    /// `@keyframes` used by the view.
    #[must_use]
    pub fn styles(&self) -> String {
        self.scroll_hint.motion().keyframes_css()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let cta = Button::new(format!(
            "{PRIMARY_ACTION_LABEL} {}",
            icons::chevron_right("")
        ))
        .size(ButtonSize::Lg)
        .class("mt-10 mx-auto flex w-fit")
        .anchor()
        .attrs(&self.on_upload_requested.link_attrs())
        .attrs(r#"data-control="primary""#)
        .render();

        format!(
            r#"<div class="min-h-screen w-full bg-black flex flex-col overflow-x-hidden" data-view="landing">
    <section class="h-screen w-full relative flex items-center justify-center">
        <div class="relative z-10 container mx-auto px-4 md:px-6">
            <div class="max-w-4xl mx-auto text-center">{brand}</div>
            {cta}
        </div>
        {hint}
    </section>
    <section id="use-cases" class="w-full min-h-screen"></section>
</div>"#,
            brand = self.brand.render(),
            hint = self.scroll_hint.render(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ViewRoute;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn view_with_spy() -> (LandingView, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let cb = NavCallback::new(ViewRoute::Upload, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (LandingView::new(BrandConfig::new("AI Slides"), cb), count)
    }

    #[test]
    fn test_brand_is_extra_large_and_inert() {
        let (view, _) = view_with_spy();

        assert_eq!(view.brand().config().size, BrandSize::Xl);
        assert!(!view.brand().config().link_enabled);
        assert!(view.brand().home().is_none());
        assert!(view.brand().render().contains("text-zinc-300 tracking-tight"));
    }

    #[test]
    fn test_primary_action_fires_once_per_activation() {
        let (view, count) = view_with_spy();
        let mut viewport = Viewport::new(900);

        view.activate(LandingControl::PrimaryAction, &mut viewport);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        for _ in 0..9 {
            view.activate(LandingControl::PrimaryAction, &mut viewport);
        }
        assert_eq!(count.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_primary_action_does_not_scroll() {
        let (view, count) = view_with_spy();
        let mut viewport = Viewport::new(900).scrolled_to(42);

        view.activate(LandingControl::PrimaryAction, &mut viewport);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(viewport, Viewport::new(900).scrolled_to(42));
    }

    #[test]
    fn test_scroll_hint_scrolls_one_viewport() {
        let (view, count) = view_with_spy();
        let mut viewport = Viewport::new(900);

        view.activate(LandingControl::ScrollHint, &mut viewport);
        assert_eq!(viewport.scroll_top, 900);

        let mut again = Viewport::new(900);
        view.activate(LandingControl::ScrollHint, &mut again);
        view.activate(LandingControl::ScrollHint, &mut again);
        assert_eq!(again.scroll_top, 900);

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_brand_activation_is_silent() {
        let (view, count) = view_with_spy();
        let mut viewport = Viewport::new(900);

        view.activate(LandingControl::BrandMark, &mut viewport);

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(viewport.scroll_top, 0);
    }

    #[test]
    fn test_primary_action_is_a_real_link() {
        let (view, _) = view_with_spy();
        let html = view.render();

        let start = html.find(r#"data-control="primary""#).unwrap();
        let open = html[..start].rfind('<').unwrap();
        let tag = &html[open..start];
        assert!(tag.starts_with("<a "), "{tag}");
        assert!(tag.contains(r#"href="/upload""#));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_render_wires_controls() {
        let (view, _) = view_with_spy();
        let html = view.render();

        assert!(html.contains(r#"data-view="landing""#));
        assert!(html.contains(PRIMARY_ACTION_LABEL));
        assert!(html.contains(r#"hx-get="/upload""#));
        assert!(html.contains(r#"data-control="scroll-hint""#));
        assert!(html.contains(r#"id="use-cases""#));
        assert_eq!(html.matches("<h2").count(), 1);
        assert!(!html.contains(r#"href="/""#));
    }
}
