//! Miette diagnostics for configuration errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error pointing at the offending span of the file.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(butcher::config))]
pub struct ConfigError {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build from a TOML parse error, labelling its span when it has one.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: &str) -> Self {
        let (offset, len) = err
            .span()
            .map_or((0, 0), |span| (span.start, span.end.saturating_sub(span.start)));
        Self::new(err.message().trim(), src, offset, len)
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
