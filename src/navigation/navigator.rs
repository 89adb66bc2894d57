//! In-process navigator holding the single active route.

use std::sync::{Arc, RwLock};

use super::{NavCallback, Transition, ViewRoute};
use crate::ui::app::{ActiveView, ShellContext};

/// Owns the active [`ViewRoute`] and turns transition requests into route
/// changes.
///
/// Cloning yields another handle to the same navigator. Every change swaps
/// the route under one write lock, so readers see either the previous or
/// the next route.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Arc<RwLock<ViewRoute>>,
}

impl Navigator {
    /// Navigator starting on the landing route.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator starting on `route`.
    #[must_use]
    pub fn at(route: ViewRoute) -> Self {
        Self {
            active: Arc::new(RwLock::new(route)),
        }
    }

    /// Currently active route.
    #[must_use]
    pub fn active(&self) -> ViewRoute {
        *self.active.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Apply `transition` to the active route and return the new route.
    pub fn request(&self, transition: Transition) -> ViewRoute {
        let mut active = self
            .active
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let from = *active;
        let to = from.apply(transition);
        *active = to;
        tracing::info!(
            name: "nav.transition",
            from = %from,
            to = %to,
            transition = ?transition,
            "Route transition"
        );
        to
    }

    /// Make `target` the active route. Requesting the current route again
    /// is a no-op.
    pub fn go(&self, target: ViewRoute) -> ViewRoute {
        let mut active = self
            .active
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let from = *active;
        if from == target {
            return target;
        }
        *active = target;
        tracing::info!(name: "nav.transition", from = %from, to = %target, "Route transition");
        target
    }

    /// Bind a callback for `transition` from the currently active route.
    ///
    /// Activating the callback makes its target the active route.
    #[must_use]
    pub fn callback(&self, transition: Transition) -> NavCallback {
        let target = self.active().apply(transition);
        let navigator = self.clone();
        NavCallback::new(target, move |target| {
            navigator.go(target);
        })
    }

    /// Build the view for the active route, with callbacks bound to this
    /// navigator.
    #[must_use]
    pub fn render(&self, ctx: &ShellContext) -> ActiveView {
        match self.active() {
            ViewRoute::Landing => ActiveView::landing(ctx, self.callback(Transition::Forward)),
            ViewRoute::Upload => ActiveView::upload(ctx, self.callback(Transition::Back)),
        }
    }
}
