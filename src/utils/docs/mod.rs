// documentation maintenance: glossary, license headers, version placeholders,
// generated command manuals

pub mod glossary;
pub mod license;
pub mod mansync;
pub mod placeholder;

pub use glossary::{sort_glossary, sort_glossary_file};
pub use license::{HeaderStatus, LicenseReport, LicenseUpdater, apply_header};
pub use mansync::{
    CommandBook, CommandDoc, ManualWriter, MansyncReport, render_command_help, render_manual,
    render_markdown, render_program_help,
};
pub use placeholder::{replace_placeholder, sync_file_version};
