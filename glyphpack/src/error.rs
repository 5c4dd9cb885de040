// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error type for pack rendering operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus a human readable message
/// describing the offending input. Missing glyphs are never errors; they
/// are reported as `None` by the operations that look them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Details about the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn font(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Font,
            message: message.into(),
        }
    }

    pub(crate) fn color(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Color,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            message: message.into(),
        }
    }

    pub(crate) fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    pub(crate) fn image(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Image,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Font => "font",
            ErrorKind::Color => "color",
            ErrorKind::Config => "configuration",
            ErrorKind::Io => "I/O",
            ErrorKind::Image => "image",
        };
        write!(f, "{kind} error: {}", self.message)
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font binary could not be read or parsed.
    ///
    /// This is fatal for a whole batch: font assets are static, so retrying
    /// cannot change the outcome.
    Font,

    /// A color string could not be parsed.
    Color,

    /// Device, variant or glyph set configuration is unusable.
    Config,

    /// A pack file could not be written.
    Io,

    /// An image could not be encoded.
    Image,
}
