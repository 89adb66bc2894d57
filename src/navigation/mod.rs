//! Navigation state and transition plumbing.
//!
//! Views never touch routing directly. Each one receives the
//! [`NavCallback`]s it needs from its caller, typically bound by a
//! [`Navigator`], and activating a control only invokes that callback.
//!
//! # Example
//!
//! ```rust
//! use slides_shell::navigation::{Navigator, Transition, ViewRoute};
//!
//! let nav = Navigator::new();
//! let forward = nav.callback(Transition::Forward);
//!
//! forward.invoke();
//! assert_eq!(nav.active(), ViewRoute::Upload);
//! ```

mod callback;
mod navigator;
mod route;

pub use callback::NavCallback;
pub use navigator::Navigator;
pub use route::{Transition, ViewRoute};
