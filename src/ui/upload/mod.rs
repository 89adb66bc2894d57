//! Upload page and the workflow it embeds.

mod shell;
mod step;

pub use shell::{UploadControl, UploadShell};
pub use step::{DropzoneStep, UploadStep};
