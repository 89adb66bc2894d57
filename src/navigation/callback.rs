//! Injected transition callbacks.

use std::fmt;
use std::sync::Arc;

use super::ViewRoute;

type Observer = dyn Fn(ViewRoute) + Send + Sync;

/// A transition action handed to a view by its caller.
///
/// The callback knows the route it requests, which is how the rendered
/// control is wired on the client, and an observer that runs synchronously
/// on every in-process activation. Views never construct these themselves.
///
/// Clones share the same observer; [`NavCallback::ptr_eq`] tells whether
/// two handles are the same callback.
#[derive(Clone)]
pub struct NavCallback {
    inner: Arc<CallbackInner>,
}

struct CallbackInner {
    target: ViewRoute,
    observer: Box<Observer>,
}

impl NavCallback {
    /// Create a callback requesting `target`, reporting each activation to
    /// `observer`.
    pub fn new<F>(target: ViewRoute, observer: F) -> Self
    where
        F: Fn(ViewRoute) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(CallbackInner {
                target,
                observer: Box::new(observer),
            }),
        }
    }

    /// Callback for server-rendered pages, where activation happens in the
    /// browser and only gets traced in process.
    #[must_use]
    pub fn client(target: ViewRoute) -> Self {
        Self::new(target, |target| {
            tracing::debug!(name: "nav.requested", target = %target, "Navigation requested");
        })
    }

    /// Route this callback requests.
    #[must_use]
    pub fn target(&self) -> ViewRoute {
        self.inner.target
    }

    /// Activate the callback once.
    pub fn invoke(&self) {
        (self.inner.observer)(self.inner.target);
    }

    /// Whether both handles refer to the same callback.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// HTMX attributes that perform this transition in the browser: fetch
    /// the target view and swap it into `#app` in a single step, pushing
    /// the new URL onto history.
    #[must_use]
    pub fn hx_attrs(&self) -> String {
        format!(
            r##"hx-get="{path}" hx-target="#app" hx-swap="innerHTML" hx-push-url="true""##,
            path = self.target().path()
        )
    }

    /// `href` plus HTMX attributes, for anchors that must also work without
    /// JavaScript.
    #[must_use]
    pub fn link_attrs(&self) -> String {
        format!(r#"href="{}" {}"#, self.target().path(), self.hx_attrs())
    }
}

impl fmt::Debug for NavCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavCallback")
            .field("target", &self.inner.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_invoke_reports_target() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb = NavCallback::new(ViewRoute::Upload, move |route| {
            sink.lock().unwrap().push(route);
        });

        cb.invoke();
        cb.invoke();

        assert_eq!(*seen.lock().unwrap(), vec![ViewRoute::Upload, ViewRoute::Upload]);
    }

    #[test]
    fn test_clones_share_identity() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let cb = NavCallback::new(ViewRoute::Landing, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let other = NavCallback::new(ViewRoute::Landing, |_| {});

        let clone = cb.clone();
        clone.invoke();

        assert!(cb.ptr_eq(&clone));
        assert!(!cb.ptr_eq(&other));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_hx_attrs_target_app_container() {
        let cb = NavCallback::client(ViewRoute::Upload);
        let attrs = cb.link_attrs();

        assert!(attrs.starts_with(r#"href="/upload""#));
        assert!(attrs.contains(r#"hx-get="/upload""#));
        assert!(attrs.contains(r##"hx-target="#app""##));
        assert!(attrs.contains(r#"hx-push-url="true""#));
    }
}
