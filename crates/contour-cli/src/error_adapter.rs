//! Error adapter for converting ContourError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. TOML syntax and
//! schema errors carry a byte span into the diagram source and are rendered
//! with a snippet; everything else is reported as a plain coded error.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use contour::ContourError;

/// Adapter for a TOML error in a diagram file.
pub struct ParseAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("contour::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a diagram needs `width`, `height` and `margin`, plus optional [[edges]] and [[arcs]] tables",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`ContourError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ContourError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ContourError::Io(_) => "contour::io",
            ContourError::Parse { .. } => "contour::parse",
            ContourError::Input(_) => "contour::input",
            ContourError::Config(_) => "contour::config",
            ContourError::Geometry(_) => "contour::geometry",
            ContourError::Export(_) => "contour::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ContourError::Input(_) => "width and height must be positive, margin must not be negative",
            ContourError::Config(_) => "colors accept CSS syntax such as `red` or `#ff0000`",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A TOML error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`ContourError`] into a list of reportable errors.
///
/// TOML errors keep their source so miette can draw a snippet; every other
/// variant becomes a single plain [`Reportable::Error`].
pub fn to_reportables(err: &ContourError) -> Vec<Reportable<'_>> {
    match err {
        ContourError::Parse { err: toml_err, src } => {
            vec![Reportable::Parse(ParseAdapter::new(toml_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use contour::DiagramBuilder;

    use super::*;

    fn parse_error(src: &str) -> ContourError {
        DiagramBuilder::default()
            .parse(src)
            .expect_err("source should not parse")
    }

    #[test]
    fn test_parse_error_has_snippet() {
        let err = parse_error("width = 10\nheight = = 3\n");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Parse(p) => {
                assert!(p.source_code().is_some());
                let labels: Vec<_> = p.labels().expect("span expected").collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert!(labels[0].offset() >= "width = 10\n".len());
            }
            Reportable::Error(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let err = parse_error("width = 10\nheight = 10\n");

        let reportables = to_reportables(&err);
        assert!(matches!(reportables[0], Reportable::Parse(_)));
        assert!(reportables[0].to_string().contains("margin"));
    }

    #[test]
    fn test_input_error_is_coded() {
        let err = parse_error("width = -1\nheight = 10\nmargin = 0\n");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "contour::input");
                assert!(e.help().is_some());
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_message() {
        let err = ContourError::Config("bad color".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].to_string(),
            "Configuration error: bad color"
        );
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "contour::config"
        );
    }
}
