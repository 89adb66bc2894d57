//! Declarative animation descriptors.
//!
//! An [`Animation`] pairs a keyframe track with a [`Timing`] and renders to
//! a CSS `@keyframes` rule plus an `animation` shorthand entry. The browser
//! owns the timeline: nothing is scheduled from Rust, and an animation ends
//! when its element leaves the document.

use std::fmt;
use std::time::Duration;

/// Timing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// How often a cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Run `n` cycles.
    Times(u32),
    /// Cycle until the element is removed.
    Infinite,
}

/// When and how a keyframe track plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Timing {
    /// A single cycle starting after `delay`.
    #[must_use]
    pub fn once(duration: Duration, delay: Duration, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
            repeat: Repeat::Times(1),
        }
    }

    /// Endless cycles of `period`, starting immediately.
    #[must_use]
    pub fn forever(period: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration: period,
            easing,
            repeat: Repeat::Infinite,
        }
    }
}

/// The visual property a track drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    Opacity,
    /// Vertical offset in pixels.
    TranslateY,
}

impl Property {
    fn declaration(self, value: f32) -> String {
        match self {
            Self::Opacity => format!("opacity: {value}"),
            Self::TranslateY => format!("transform: translateY({value}px)"),
        }
    }
}

/// One animated property with its values at evenly spaced offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: &'static str,
    pub property: Property,
    pub values: Vec<f32>,
    pub timing: Timing,
}

impl Animation {
    /// `@keyframes` rule for this track.
    #[must_use]
    pub fn keyframes_css(&self) -> String {
        let steps = self.values.len().saturating_sub(1).max(1);
        let frames: Vec<String> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let offset = i * 100 / steps;
                format!("{offset}% {{ {}; }}", self.property.declaration(*value))
            })
            .collect();
        format!("@keyframes {} {{ {} }}", self.name, frames.join(" "))
    }

    /// Entry for the `animation` shorthand.
    ///
    /// One-shot tracks keep their end state and show their start state
    /// while delayed.
    #[must_use]
    pub fn shorthand(&self) -> String {
        let (count, fill) = match self.timing.repeat {
            Repeat::Times(n) => (n.to_string(), "both"),
            Repeat::Infinite => ("infinite".to_string(), "none"),
        };
        format!(
            "{name} {duration} {easing} {delay} {count} {fill}",
            name = self.name,
            duration = Seconds(self.timing.duration),
            easing = self.timing.easing.css(),
            delay = Seconds(self.timing.delay),
        )
    }
}

/// Several independent tracks applied to one element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Motion {
    tracks: Vec<Animation>,
}

impl Motion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, animation: Animation) -> Self {
        self.tracks.push(animation);
        self
    }

    #[must_use]
    pub fn tracks(&self) -> &[Animation] {
        &self.tracks
    }

    /// All `@keyframes` rules, for a `<style>` block.
    #[must_use]
    pub fn keyframes_css(&self) -> String {
        self.tracks
            .iter()
            .map(Animation::keyframes_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Value for an inline `style` attribute.
    #[must_use]
    pub fn style(&self) -> String {
        let shorthands: Vec<String> = self.tracks.iter().map(Animation::shorthand).collect();
        format!("animation: {};", shorthands.join(", "))
    }
}

struct Seconds(Duration);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.as_secs_f32())
    }
}
