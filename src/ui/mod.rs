//! Views, components and layout.
//!
//! Markup is rendered to HTML strings on the server. Client behavior is
//! declared in attributes: HTMX performs route transitions, Alpine.js runs
//! the scroll affordance, CSS runs the animations.
//!
//! # Structure
//!
//! - [`app`]: Document shell and view selection
//! - [`components`]: Reusable components (wordmark, buttons, icons)
//! - [`landing`]: Landing page
//! - [`upload`]: Upload page and its embedded workflow
//! - [`motion`]: Declarative animation descriptors
//! - [`viewport`]: Viewport and scroll requests

pub mod app;
pub mod components;
pub mod html;
pub mod landing;
pub mod motion;
pub mod upload;
pub mod viewport;
