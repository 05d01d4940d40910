//! File-format translators.

use crate::core::Identity;
use crate::entity::{Capabilities, Entity, EntityClass};
use crate::host::Creator;
use crate::status::{boundary, DiagResult, Diagnostic, StatusCode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the host is accessing a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileAccessMode {
    Unknown,
    Open,
    Reference,
    Import,
    Save,
    Export,
    ExportActive,
}

/// File handed to a translator by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileObject {
    path: PathBuf,
}

impl FileObject {
    /// Wrap a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// File format a translator handles, as reported to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFormat {
    /// Default extension, without the dot
    pub extension: String,
    /// Supports reading
    pub can_import: bool,
    /// Supports writing
    pub can_export: bool,
    /// Script that builds the options UI
    pub options_script: Option<String>,
    /// Default options string
    pub default_options: String,
    /// Icon shown in file dialogs
    pub pixmap: Option<String>,
}

/// Static description of a translator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatorInfo {
    /// Translator name
    pub identity: Identity,
    /// Handled format
    pub format: FileFormat,
}

impl TranslatorInfo {
    /// Create translator info.
    pub fn new(name: &str, extension: &str, can_import: bool, can_export: bool) -> Self {
        Self {
            identity: Identity::named(name),
            format: FileFormat {
                extension: extension.to_string(),
                can_import,
                can_export,
                ..Default::default()
            },
        }
    }

    /// Set options script and its default options string.
    pub fn with_options(mut self, script: &str, defaults: &str) -> Self {
        self.format.options_script = Some(script.to_string());
        self.format.default_options = defaults.to_string();
        self
    }

    /// Set pixmap.
    pub fn with_pixmap(mut self, pixmap: &str) -> Self {
        self.format.pixmap = Some(pixmap.to_string());
        self
    }
}

/// Translator trait that all file translators must implement.
pub trait Translator {
    /// Static description.
    fn info(&self) -> &TranslatorInfo;

    /// Read `file` into the host scene.
    fn reader(&mut self, _file: &FileObject, _options: &str, _mode: FileAccessMode) -> DiagResult<()> {
        Err(Diagnostic::new(StatusCode::NotImplemented, "reader not implemented"))
    }

    /// Write the host scene to `file`.
    fn writer(&mut self, _file: &FileObject, _options: &str, _mode: FileAccessMode) -> DiagResult<()> {
        Err(Diagnostic::new(StatusCode::NotImplemented, "writer not implemented"))
    }

    /// Whether the translator can import.
    fn have_read_method(&self) -> bool {
        self.info().format.can_import
    }

    /// Whether the translator can export.
    fn have_write_method(&self) -> bool {
        self.info().format.can_export
    }

    /// Extension handled by this translator.
    fn default_extension(&self) -> &str {
        &self.info().format.extension
    }
}

impl<'a> Entity for dyn Translator + 'a {
    fn identity(&self) -> &Identity {
        &self.info().identity
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::Translator(self.info().format.clone())
    }
}

impl EntityClass for dyn Translator {
    fn bind(create: fn() -> Box<Self>) -> Creator {
        Creator::Translator(create)
    }
}

/// Host-facing read call; refuses when the translator cannot import.
pub fn read_file(
    translator: &mut dyn Translator,
    file: &FileObject,
    options: &str,
    mode: FileAccessMode,
) -> StatusCode {
    let origin = translator.info().identity.name.clone();
    boundary(&origin, || {
        if !translator.have_read_method() {
            return Err(Diagnostic::new(
                StatusCode::NotImplemented,
                format!("cannot import {}", file.path().display()),
            ));
        }
        translator.reader(file, options, mode)
    })
}

/// Host-facing write call; refuses when the translator cannot export.
pub fn write_file(
    translator: &mut dyn Translator,
    file: &FileObject,
    options: &str,
    mode: FileAccessMode,
) -> StatusCode {
    let origin = translator.info().identity.name.clone();
    boundary(&origin, || {
        if !translator.have_write_method() {
            return Err(Diagnostic::new(
                StatusCode::NotImplemented,
                format!("cannot export {}", file.path().display()),
            ));
        }
        translator.writer(file, options, mode)
    })
}
