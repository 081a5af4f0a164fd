//! Document loading utilities
//!
//! `DocumentLoader` loads source text from a file or a string and runs transforms on it. It is
//! used by the CLI and by tests. The free functions below cover whole directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use onf_parser::onf::loader::{parse_files, DocumentLoader};
//! use onf_parser::onf::transforms::standard::SECTION_SPLITTING;
//!
//! // From file
//! let sections = DocumentLoader::from_path("nw/wsj/00/wsj_0001.onf")?.parse()?;
//!
//! // From string
//! let loader = DocumentLoader::from_string(source);
//! let sections = loader.parse()?;
//!
//! // Custom transform
//! let raw = loader.with(&SECTION_SPLITTING)?;
//!
//! // Every .onf file under a directory, in path order
//! for file in parse_files("annotations/")? {
//!     println!("{}: {} sections", file.path.display(), file.sections.len());
//! }
//! ```

use crate::onf::ast::Section;
use crate::onf::parsing::ParseError;
use crate::onf::transforms::standard::STRING_TO_SECTIONS;
use crate::onf::transforms::{Transform, TransformError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TransformError,
    },
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl LoaderError {
    /// The file the error is about, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoaderError::Io { path, .. } | LoaderError::Parse { path, .. } => Some(path),
            LoaderError::Walk { root, .. } => Some(root),
            LoaderError::Transform(_) => None,
        }
    }

    /// The typed parse failure, for callers that need to tell the kinds apart.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoaderError::Parse { source, .. } | LoaderError::Transform(source) => {
                source.parse_error()
            }
            LoaderError::Io { .. } | LoaderError::Walk { .. } => None,
        }
    }
}

pub struct DocumentLoader {
    source: String,
    path: Option<PathBuf>,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            path: None,
        }
    }

    /// Run any transform over the loaded source. Failures name the file, if there is one.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        transform
            .run(self.source.clone())
            .map_err(|source| match &self.path {
                Some(path) => LoaderError::Parse {
                    path: path.clone(),
                    source,
                },
                None => LoaderError::Transform(source),
            })
    }

    pub fn parse(&self) -> Result<Vec<Section>, LoaderError> {
        self.with(&STRING_TO_SECTIONS)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn source(&self) -> String {
        self.source.clone()
    }

    pub fn source_ref(&self) -> &str {
        &self.source
    }
}

/// Which files count as ONF documents when walking a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Extension without the leading dot
    pub extension: String,
    pub follow_links: bool,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            extension: "onf".to_string(),
            follow_links: false,
        }
    }
}

impl Discovery {
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext == self.extension.as_str())
            .unwrap_or(false)
    }
}

/// One parsed file of a directory walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub sections: Vec<Section>,
}

/// Every matching file under `dir`, recursively, sorted by path.
pub fn discover<P: AsRef<Path>>(
    dir: P,
    discovery: &Discovery,
) -> Result<Vec<PathBuf>, LoaderError> {
    let root = dir.as_ref();
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(discovery.follow_links) {
        let entry = entry.map_err(|source| LoaderError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && discovery.matches(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    debug!(root = %root.display(), files = paths.len(), "discovered documents");
    Ok(paths)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Section>, LoaderError> {
    DocumentLoader::from_path(path)?.parse()
}

/// Parse every `.onf` file under `dir`. Stops at the first file that fails.
pub fn parse_files<P: AsRef<Path>>(dir: P) -> Result<Vec<ParsedFile>, LoaderError> {
    parse_files_with(dir, &Discovery::default())
}

pub fn parse_files_with<P: AsRef<Path>>(
    dir: P,
    discovery: &Discovery,
) -> Result<Vec<ParsedFile>, LoaderError> {
    let mut files = Vec::new();
    for path in discover(dir, discovery)? {
        let sections = parse_file(&path)?;
        files.push(ParsedFile { path, sections });
    }
    Ok(files)
}
