//! Error types for compilation and execution.

use std::io;
use std::path::PathBuf;

use crate::span::Span;
use thiserror::Error;

/// Compilation errors.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Unmatched '[' at {0}")]
    UnmatchedOpenBracket(Span),

    #[error("Unmatched ']' at {0}")]
    UnmatchedCloseBracket(Span),
}

impl CompileError {
    pub fn unmatched_open(span: Span) -> Self {
        Self::UnmatchedOpenBracket(span)
    }

    pub fn unmatched_close(span: Span) -> Self {
        Self::UnmatchedCloseBracket(span)
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnmatchedOpenBracket(span) => *span,
            Self::UnmatchedCloseBracket(span) => *span,
        }
    }
}

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Data pointer out of bounds: {position} (tape size {size}) at {span}")]
    TapeBounds {
        position: i64,
        size: usize,
        span: Span,
    },

    #[error("Step limit of {limit} exceeded at {span}")]
    StepLimitExceeded { limit: u64, span: Span },

    #[error("I/O failure at {span}: {source}")]
    Io {
        #[source]
        source: io::Error,
        span: Span,
    },
}

impl RuntimeError {
    pub fn tape_bounds(position: i64, size: usize, span: Span) -> Self {
        Self::TapeBounds {
            position,
            size,
            span,
        }
    }

    pub fn step_limit(limit: u64, span: Span) -> Self {
        Self::StepLimitExceeded { limit, span }
    }

    pub fn io(source: io::Error, span: Span) -> Self {
        Self::Io { source, span }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::TapeBounds { span, .. } => *span,
            Self::StepLimitExceeded { span, .. } => *span,
            Self::Io { span, .. } => *span,
        }
    }
}

/// A unified error type for the whole pipeline.
#[derive(Debug, Error)]
pub enum BfError {
    #[error("Failed to read file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_messages() {
        let err = CompileError::unmatched_open(Span::new(3, 4, 1, 4));
        assert_eq!(err.to_string(), "Unmatched '[' at 1:4");
        let err = CompileError::unmatched_close(Span::new(0, 1, 2, 1));
        assert_eq!(err.to_string(), "Unmatched ']' at 2:1");
        assert_eq!(err.span(), Span::new(0, 1, 2, 1));
    }

    #[test]
    fn test_runtime_error_messages() {
        let err = RuntimeError::tape_bounds(-1, 30000, Span::new(0, 1, 1, 1));
        assert_eq!(
            err.to_string(),
            "Data pointer out of bounds: -1 (tape size 30000) at 1:1"
        );
    }

    #[test]
    fn test_unified_error_wraps_phase() {
        let err: BfError = CompileError::unmatched_close(Span::new(0, 1, 1, 1)).into();
        assert_eq!(err.to_string(), "Compile error: Unmatched ']' at 1:1");
    }
}
