//! Application shell: document layout and view selection.

use std::sync::Arc;

use crate::navigation::{NavCallback, ViewRoute};
use crate::ui::components::{BrandConfig, Button, ButtonVariant};
use crate::ui::html::escape;
use crate::ui::landing::LandingView;
use crate::ui::upload::{UploadShell, UploadStep};

/// Everything views need besides their callbacks.
#[derive(Debug, Clone)]
pub struct ShellContext {
    /// Wordmark settings shared by every page; each view picks its own
    /// size and link behavior.
    pub brand: BrandConfig,
    /// Workflow embedded in the upload page.
    pub upload_step: Arc<dyn UploadStep>,
}

/// The view rendered for the active route.
#[derive(Debug, Clone)]
pub enum ActiveView {
    Landing(LandingView),
    Upload(UploadShell),
}

impl ActiveView {
    /// Landing page whose call to action invokes `on_upload_requested`.
    #[must_use]
    pub fn landing(ctx: &ShellContext, on_upload_requested: NavCallback) -> Self {
        Self::Landing(LandingView::new(ctx.brand.clone(), on_upload_requested))
    }

    /// Upload page whose back controls invoke `on_back_requested`.
    #[must_use]
    pub fn upload(ctx: &ShellContext, on_back_requested: NavCallback) -> Self {
        Self::Upload(UploadShell::new(
            ctx.brand.clone(),
            on_back_requested,
            Arc::clone(&ctx.upload_step),
        ))
    }

    /// Server-side rendering of `route`. Callbacks only describe the
    /// browser-side transition.
    #[must_use]
    pub fn for_route(ctx: &ShellContext, route: ViewRoute) -> Self {
        match route {
            ViewRoute::Landing => Self::landing(ctx, NavCallback::client(ViewRoute::Upload)),
            ViewRoute::Upload => Self::upload(ctx, NavCallback::client(ViewRoute::Landing)),
        }
    }

    #[must_use]
    pub fn route(&self) -> ViewRoute {
        match self {
            Self::Landing(_) => ViewRoute::Landing,
            Self::Upload(_) => ViewRoute::Upload,
        }
    }

    /// Wordmark settings the view rendered with.
    #[must_use]
    pub fn brand(&self) -> &BrandConfig {
        match self {
            Self::Landing(view) => view.brand().config(),
            Self::Upload(view) => view.brand().config(),
        }
    }

    /// Document title, e.g. `Upload - AI Slides`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - {}", self.route().title(), self.brand().display_text)
    }

    /// View markup, including any styles it needs.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Landing(view) => format!("<style>{}</style>\n{}", view.styles(), view.render()),
            Self::Upload(view) => view.render(),
        }
    }

    /// Markup swapped into `#app` on client-side navigation. Carries a
    /// `<title>` so the document title follows the view.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("<title>{}</title>\n{}", escape(&self.title()), self.body())
    }

    /// Complete HTML document for a direct page load.
    #[must_use]
    pub fn document(&self) -> String {
        html_shell(&self.title(), &self.body())
    }
}

/// Wrap `content` in the HTML document shell.
///
/// Scripts and styles are served locally from `/static`.
#[must_use]
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Turn documents into slide decks">
    <title>{title}</title>

    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="h-full bg-black text-zinc-100 antialiased">
    <main id="app" class="h-full">
{content}
    </main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// 404 page body.
#[must_use]
pub fn not_found_page(path: &str) -> String {
    let home = NavCallback::client(ViewRoute::Landing);
    let button = Button::new("Go Home")
        .variant(ButtonVariant::Primary)
        .anchor()
        .attrs(&home.link_attrs())
        .render();
    let content = format!(
        r#"<div class="flex flex-col items-center justify-center h-screen gap-4" data-view="not-found">
    <h1 class="text-4xl font-bold">404</h1>
    <p class="text-zinc-400">Nothing lives at <code>{path}</code></p>
    {button}
</div>"#,
        path = escape(path),
    );
    html_shell("Not Found", &content)
}
