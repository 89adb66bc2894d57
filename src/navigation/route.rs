//! Routes and the transitions between them.

use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

/// A navigable top-level view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewRoute {
    /// Landing page at `/`.
    #[default]
    Landing,
    /// Upload page at `/upload`.
    Upload,
}

impl ViewRoute {
    /// Every route, in declaration order.
    pub const ALL: [Self; 2] = [Self::Landing, Self::Upload];

    /// URL path this route is served at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Upload => "/upload",
        }
    }

    /// Document title for the route.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Upload => "Upload",
        }
    }

    /// Resolve a URL path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Result<Self, ShellError> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| ShellError::UnknownRoute(path.to_string()))
    }

    /// Route reached by applying `transition` from `self`.
    ///
    /// Pairs with no meaning on a route (e.g. `Back` on the landing page)
    /// resolve to the route itself.
    #[must_use]
    pub fn apply(self, transition: Transition) -> Self {
        match (self, transition) {
            (Self::Landing, Transition::Forward) => Self::Upload,
            (Self::Upload, Transition::Back) | (_, Transition::Home) => Self::Landing,
            (route, _) => route,
        }
    }
}

impl fmt::Display for ViewRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ViewRoute {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}

/// A logical transition request raised by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Move on to the next step of the flow.
    Forward,
    /// Return to the previous step.
    Back,
    /// Jump to the root view.
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in ViewRoute::ALL {
            assert_eq!(ViewRoute::from_path(route.path()).unwrap(), route);
        }
        assert_eq!(ViewRoute::from_path("/upload/").unwrap(), ViewRoute::Upload);
    }

    #[test]
    fn test_unknown_path() {
        let err = ViewRoute::from_path("/settings").unwrap_err();
        assert!(matches!(err, ShellError::UnknownRoute(p) if p == "/settings"));
    }

    #[test]
    fn test_transitions_are_total() {
        use Transition::{Back, Forward, Home};

        assert_eq!(ViewRoute::Landing.apply(Forward), ViewRoute::Upload);
        assert_eq!(ViewRoute::Upload.apply(Back), ViewRoute::Landing);
        assert_eq!(ViewRoute::Upload.apply(Home), ViewRoute::Landing);
        assert_eq!(ViewRoute::Landing.apply(Home), ViewRoute::Landing);

        // Meaningless pairs stay put.
        assert_eq!(ViewRoute::Landing.apply(Back), ViewRoute::Landing);
        assert_eq!(ViewRoute::Upload.apply(Forward), ViewRoute::Upload);
    }
}
