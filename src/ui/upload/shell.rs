//! Upload page layout.

use std::sync::Arc;

use super::UploadStep;
use crate::navigation::NavCallback;
use crate::ui::components::{
    BrandConfig, BrandMark, BrandSize, Button, ButtonSize, ButtonVariant, icons, scroll_area,
};

/// Interactive controls owned by the upload page itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadControl {
    /// Explicit "Back" button in the header.
    Back,
    /// The linked wordmark.
    BrandMark,
}

/// The upload page: wordmark header above the embedded workflow.
///
/// The page is exactly one viewport tall. The header never scrolls; the
/// workflow region scrolls on its own.
#[derive(Debug, Clone)]
pub struct UploadShell {
    brand: BrandMark,
    on_back_requested: NavCallback,
    step: Arc<dyn UploadStep>,
}

impl UploadShell {
    /// Build the page from the shared `brand` settings. The wordmark is
    /// large and links back through `on_back_requested`, same as the back
    /// button.
    #[must_use]
    pub fn new(
        brand: BrandConfig,
        on_back_requested: NavCallback,
        step: Arc<dyn UploadStep>,
    ) -> Self {
        let brand = BrandMark::linked(brand.size(BrandSize::Lg), on_back_requested.clone());
        Self {
            brand,
            on_back_requested,
            step,
        }
    }

    #[must_use]
    pub fn brand(&self) -> &BrandMark {
        &self.brand
    }

    #[must_use]
    pub fn on_back_requested(&self) -> &NavCallback {
        &self.on_back_requested
    }

    /// Activate `control` once. Both controls invoke the back callback.
    pub fn activate(&self, control: UploadControl) {
        match control {
            UploadControl::Back => self.on_back_requested.invoke(),
            UploadControl::BrandMark => {
                self.brand.activate();
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let back = Button::new(format!("{} Back", icons::arrow_left("")))
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .anchor()
            .attrs(&self.on_back_requested.link_attrs())
            .attrs(r#"data-control="back""#)
            .render();
        let workflow = scroll_area(
            "upload-workflow",
            "",
            &self.step.render(&self.on_back_requested),
        );

        format!(
            r#"<div class="h-screen w-full bg-black flex flex-col overflow-hidden" data-view="upload">
    <header class="shrink-0 relative flex justify-center pt-10 pb-4">
        <div class="absolute left-4 top-4">{back}</div>
        {brand}
    </header>
    {workflow}
</div>"#,
            brand = self.brand.render(),
        )
    }
}
