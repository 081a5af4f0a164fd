//! Transform pipeline infrastructure
//!
//! A small, type-safe composition system for the parsing stages. Any transform can be chained
//! with another when the output type of the first is the input type of the second.
//!
//! # The `Runnable` Trait
//!
//! The interface of every stage:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//! ```
//!
//! # The `Transform<I, O>` Type
//!
//! A boxed function from `I` to `O` with a `.then()` method for chaining stages:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(SectionSplitting::new())  // String → Vec<RawSection>
//!     .then(SectionParsing::new());   // Vec<RawSection> → Vec<Section>
//! ```
//!
//! # Standard Transforms
//!
//! The common pipelines are built once as `once_cell::sync::Lazy` statics. See [`standard`].
//!
//! ```rust,ignore
//! use onf_parser::onf::transforms::standard::STRING_TO_SECTIONS;
//!
//! let sections = STRING_TO_SECTIONS.run(source)?;
//! ```
//!
//! Most callers go through [`DocumentLoader`](crate::onf::loader::DocumentLoader) instead.

pub mod stages;
pub mod standard;

use crate::onf::parsing::ParseError;
use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// A parsing stage failed; the parse error is kept as the source
    #[error("Stage '{stage}' failed: {source}")]
    StageFailed {
        stage: String,
        #[source]
        source: ParseError,
    },
}

impl TransformError {
    pub fn stage_failed(stage: &str, source: ParseError) -> Self {
        TransformError::StageFailed {
            stage: stage.to_string(),
            source,
        }
    }

    /// The parse error behind a failed stage, if that is what went wrong.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            TransformError::StageFailed { source, .. } => Some(source),
            TransformError::Error(_) => None,
        }
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform.
    ///
    /// The compiler checks that the stage's input type is this transform's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform after this one.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
