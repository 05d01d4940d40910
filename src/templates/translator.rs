//! Starter file translator for `.tpl` files.

use crate::entity::{FileAccessMode, FileObject, Translator, TranslatorInfo};
use crate::status::{DiagResult, Diagnostic, StatusCode};
use std::fs;
use std::io;

/// Template translator. Writes the options string as a header line and
/// reads back any file with that extension.
pub struct TemplateTranslator {
    info: TranslatorInfo,
}

impl TemplateTranslator {
    pub const NAME: &'static str = "templateTranslator";
    pub const EXTENSION: &'static str = "tpl";

    /// Creator handed to the host.
    pub fn create() -> Box<dyn Translator> {
        Box::new(Self {
            info: TranslatorInfo::new(Self::NAME, Self::EXTENSION, true, true)
                .with_options("templateTranslatorOptions", "verbose=0"),
        })
    }
}

fn io_diag(err: io::Error, file: &FileObject) -> Diagnostic {
    let status = match err.kind() {
        io::ErrorKind::NotFound => StatusCode::NotFound,
        io::ErrorKind::UnexpectedEof => StatusCode::EndOfFile,
        _ => StatusCode::Failure,
    };
    Diagnostic::new(status, format!("{}: {}", file.path().display(), err))
}

impl Translator for TemplateTranslator {
    fn info(&self) -> &TranslatorInfo {
        &self.info
    }

    fn reader(&mut self, file: &FileObject, options: &str, mode: FileAccessMode) -> DiagResult<()> {
        let text = fs::read_to_string(file.path()).map_err(|e| io_diag(e, file))?;
        tracing::debug!(
            file = file.name().unwrap_or_default(),
            ?mode,
            options,
            lines = text.lines().count(),
            "read"
        );
        Ok(())
    }

    fn writer(&mut self, file: &FileObject, options: &str, mode: FileAccessMode) -> DiagResult<()> {
        fs::write(file.path(), format!("# {}\n", options)).map_err(|e| io_diag(e, file))?;
        tracing::debug!(file = file.name().unwrap_or_default(), ?mode, "written");
        Ok(())
    }
}
