//! Reusable UI components.
//!
//! Components render to HTML strings in the style of shadcn/ui: variant
//! enums map to class fragments and callers compose the results.
//!
//! # Components
//!
//! - [`BrandMark`]: Application wordmark with size presets and a home link
//! - [`Button`]: Clickable button with variants
//! - [`scroll_area`]: Independently scrolling container
//! - [`icons`]: SVG icons

mod brand_mark;
mod button;
pub mod icons;
mod scroll_area;

pub use brand_mark::{BrandConfig, BrandMark, BrandSize};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use scroll_area::scroll_area;
