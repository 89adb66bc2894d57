//! Bouncing "scroll down" affordance at the bottom of the hero.

use std::time::Duration;

use crate::ui::components::icons;
use crate::ui::motion::{Animation, Easing, Motion, Property, Timing};
use crate::ui::viewport::{ScrollRequest, Viewport};

/// Delay before the hint fades in.
pub const FADE_IN_DELAY: Duration = Duration::from_secs(2);

/// Length of the fade itself.
pub const FADE_IN_DURATION: Duration = Duration::from_millis(300);

/// Period of one up-and-down cycle.
pub const BOB_PERIOD: Duration = Duration::from_secs(2);

/// Peak vertical travel in pixels.
pub const BOB_TRAVEL_PX: f32 = 10.0;

/// Scroll affordance: a chevron disc that scrolls to the next section.
///
/// The fade-in and the oscillation are separate tracks; neither affects
/// whether the hint can be activated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollHint {
    request: ScrollRequest,
    motion: Motion,
}

impl Default for ScrollHint {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHint {
    #[must_use]
    pub fn new() -> Self {
        let fade_in = Animation {
            name: "scroll-hint-fade-in",
            property: Property::Opacity,
            values: vec![0.0, 1.0],
            timing: Timing::once(FADE_IN_DURATION, FADE_IN_DELAY, Easing::EaseOut),
        };
        let bob = Animation {
            name: "scroll-hint-bob",
            property: Property::TranslateY,
            values: vec![0.0, BOB_TRAVEL_PX, 0.0],
            timing: Timing::forever(BOB_PERIOD, Easing::EaseInOut),
        };

        Self {
            request: ScrollRequest::next_section(),
            motion: Motion::new().with(fade_in).with(bob),
        }
    }

    #[must_use]
    pub fn request(&self) -> ScrollRequest {
        self.request
    }

    #[must_use]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Scroll `viewport` to the next section.
    pub fn activate(&self, viewport: &mut Viewport) {
        self.request.apply(viewport);
    }

    #[must_use]
    pub fn render(&self) -> String {
        let script = self.request.to_script();
        format!(
            r#"<div class="scroll-hint absolute bottom-8 left-0 right-0 mx-auto w-10 flex justify-center cursor-pointer" role="button" tabindex="0" aria-label="Scroll to next section" data-control="scroll-hint" x-data x-on:click="{script}" x-on:keydown.enter="{script}" style="{style}"><div class="w-10 h-10 rounded-full bg-zinc-100 shadow-md flex items-center justify-center transition-transform hover:scale-110">{icon}</div></div>"#,
            style = self.motion.style(),
            icon = icons::chevron_down("w-6 h-6 text-black"),
        )
    }
}
