//! Error types for template substitution and rendering

use std::fmt;

/// Errors raised while substituting placeholders in a single piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a variable the namespace does not define
    MissingVariable(String),
    /// A `$` that does not start a valid placeholder (1-based position)
    InvalidPlaceholder { line: usize, column: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingVariable(name) => {
                write!(f, "Missing template variable '{name}'")
            }
            TemplateError::InvalidPlaceholder { line, column } => {
                write!(f, "Invalid placeholder at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Errors that abort a render call
///
/// The first failing text node or attribute value stops the whole render;
/// no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder could not be resolved against the namespace
    MissingVariable(String),
    /// Malformed placeholder syntax
    TemplateSyntax { line: usize, column: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingVariable(name) => {
                write!(f, "Render failed: variable '{name}' is not defined")
            }
            RenderError::TemplateSyntax { line, column } => write!(
                f,
                "Render failed: invalid placeholder at line {line}, column {column}"
            ),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<TemplateError> for RenderError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::MissingVariable(name) => RenderError::MissingVariable(name),
            TemplateError::InvalidPlaceholder { line, column } => {
                RenderError::TemplateSyntax { line, column }
            }
        }
    }
}
