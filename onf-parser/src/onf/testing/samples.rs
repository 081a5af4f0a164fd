//! Sample file finder
//!
//!     Verified ONF samples live under `onf-parser/specs/v1/<category>/`. Each file name starts
//!     with a number (`01-plain-sentence.onf`), and tests refer to samples by category and
//!     number instead of by path:
//!
//!         Samples::sentences(1).parse()
//!         Samples::invalid(2).try_parse().unwrap_err()
//!
//!     Numbers must be unique within a category; a duplicate is a broken corpus and panics.

use crate::onf::ast::Section;
use crate::onf::loader::{DocumentLoader, LoaderError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SPEC_VERSION: &str = "v1";
const SPECS_ROOT: &str = "specs";
const SAMPLE_EXTENSION: &str = "onf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCategory {
    /// Body-level fields: plain, treebanked, speaker, tree
    Sentences,
    /// Leaves blocks with attributes
    Leaves,
    /// Sections with a chain index
    Chains,
    /// Multi-section documents
    Documents,
    /// Documents that must fail to parse
    Invalid,
}

impl SampleCategory {
    pub const ALL: [SampleCategory; 5] = [
        SampleCategory::Sentences,
        SampleCategory::Leaves,
        SampleCategory::Chains,
        SampleCategory::Documents,
        SampleCategory::Invalid,
    ];

    pub fn dir_name(&self) -> &'static str {
        match self {
            SampleCategory::Sentences => "sentences",
            SampleCategory::Leaves => "leaves",
            SampleCategory::Chains => "chains",
            SampleCategory::Documents => "documents",
            SampleCategory::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("No sample number {number} in {category}")]
    NotFound { category: &'static str, number: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// `specs/v1/<category>` under this crate.
pub fn sample_root(category: SampleCategory) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(SPECS_ROOT)
        .join(SPEC_VERSION)
        .join(category.dir_name())
}

/// Map every numbered sample of a directory to its path.
///
/// # Panics
/// Panics if two files share a number.
pub fn list_files_by_number(dir: &Path) -> Result<HashMap<usize, PathBuf>, SampleError> {
    let mut number_map: HashMap<usize, PathBuf> = HashMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map(|e| e != SAMPLE_EXTENSION).unwrap_or(true) {
            continue;
        }
        let number = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('-').next())
            .and_then(|prefix| prefix.parse::<usize>().ok());

        if let Some(number) = number {
            if let Some(existing) = number_map.get(&number) {
                panic!(
                    "Duplicate sample number {} in {}:\n - {}\n - {}",
                    number,
                    dir.display(),
                    existing.display(),
                    path.display()
                );
            }
            number_map.insert(number, path);
        }
    }

    Ok(number_map)
}

pub fn find_sample(category: SampleCategory, number: usize) -> Result<PathBuf, SampleError> {
    list_files_by_number(&sample_root(category))?
        .remove(&number)
        .ok_or(SampleError::NotFound {
            category: category.dir_name(),
            number,
        })
}

/// Every sample number of a category, ascending.
pub fn list_sample_numbers(category: SampleCategory) -> Result<Vec<usize>, SampleError> {
    let mut numbers: Vec<usize> = list_files_by_number(&sample_root(category))?
        .into_keys()
        .collect();
    numbers.sort_unstable();
    Ok(numbers)
}

/// Fluent handle on one sample file.
#[derive(Debug, Clone)]
pub struct SampleLoader {
    path: PathBuf,
}

impl SampleLoader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.path.display(), e))
    }

    pub fn try_parse(&self) -> Result<Vec<Section>, LoaderError> {
        DocumentLoader::from_path(&self.path)?.parse()
    }

    pub fn parse(&self) -> Vec<Section> {
        self.try_parse()
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.path.display(), e))
    }
}

/// Entry point for loading verified samples
pub struct Samples;

macro_rules! category_shortcuts {
    ($($name:ident => $variant:ident);* $(;)?) => {
        $(
            #[doc = concat!("Load sample `number` of the `", stringify!($name), "` category")]
            pub fn $name(number: usize) -> SampleLoader {
                Self::load(SampleCategory::$variant, number)
            }
        )*
    };
}

impl Samples {
    pub fn load(category: SampleCategory, number: usize) -> SampleLoader {
        let path = find_sample(category, number)
            .unwrap_or_else(|e| panic!("Failed to find {:?} #{}: {}", category, number, e));
        SampleLoader { path }
    }

    pub fn from_path<P: Into<PathBuf>>(path: P) -> SampleLoader {
        SampleLoader { path: path.into() }
    }

    /// Every sample of a category, in number order.
    pub fn all(category: SampleCategory) -> Vec<SampleLoader> {
        list_sample_numbers(category)
            .unwrap_or_else(|e| panic!("Failed to list {:?}: {}", category, e))
            .into_iter()
            .map(|number| Self::load(category, number))
            .collect()
    }

    category_shortcuts! {
        sentences => Sentences;
        leaves => Leaves;
        chains => Chains;
        documents => Documents;
        invalid => Invalid;
    }
}
