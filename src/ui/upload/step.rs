//! The upload workflow embedded in the upload page.

use std::fmt;

use crate::navigation::NavCallback;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, icons};
use crate::ui::html::escape;

/// Workflow rendered below the upload page header.
///
/// Implementations must bind `on_back` to their own "return" control so the
/// workflow can leave the page by itself.
pub trait UploadStep: Send + Sync + fmt::Debug {
    /// Render the workflow region.
    fn render(&self, on_back: &NavCallback) -> String;
}

/// Default workflow: a file picker drop zone and a back button.
///
/// Picking a file only shows its name; submitting it is the job of whatever
/// upload backend the page is deployed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropzoneStep {
    /// Heading above the drop zone.
    pub heading: String,
    /// Secondary line under the heading.
    pub hint: String,
    /// Value of the file input's `accept` attribute.
    pub accept: String,
}

impl Default for DropzoneStep {
    fn default() -> Self {
        Self {
            heading: "Upload a document to turn it into slides".to_string(),
            hint: "PDF, PowerPoint, Word, plain text or Markdown".to_string(),
            accept: ".pdf,.pptx,.docx,.txt,.md".to_string(),
        }
    }
}

impl UploadStep for DropzoneStep {
    fn render(&self, on_back: &NavCallback) -> String {
        let back = Button::new(format!("{} Back", icons::arrow_left("")))
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Md)
            .anchor()
            .attrs(&on_back.link_attrs())
            .attrs(r#"data-control="step-back""#)
            .render();

        format!(
            r#"<section class="max-w-3xl mx-auto px-4 md:px-6 py-8 flex flex-col gap-6" data-step="dropzone">
    <div class="text-center space-y-2">
        <p class="text-lg text-zinc-200">{heading}</p>
        <p class="text-sm text-zinc-400">{hint}</p>
    </div>
    <label for="upload-input" class="flex flex-col items-center justify-center gap-3 h-64 rounded-3xl border-2 border-dashed border-zinc-700 bg-zinc-900/50 text-zinc-300 hover:border-zinc-500 cursor-pointer transition-colors" x-data="{{ name: '' }}">
        {icon}
        <span x-text="name || 'Choose a file or drag it here'">Choose a file or drag it here</span>
        <input id="upload-input" type="file" name="file" accept="{accept}" class="sr-only" x-on:change="name = $event.target.files[0]?.name || ''">
    </label>
    <div class="flex justify-center">{back}</div>
</section>"#,
            heading = escape(&self.heading),
            hint = escape(&self.hint),
            accept = escape(&self.accept),
            icon = icons::upload("h-10 w-10 text-zinc-400"),
        )
    }
}
