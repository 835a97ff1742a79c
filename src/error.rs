// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only settings persistence can fail. Form and sequencing problems are not
//! errors: an invalid form yields a [`Validity`](crate::form::Validity) and an
//! incomplete page makes the sequencer decline to attach.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Reading or writing the settings file failed.
    Io(String),
    /// The settings file is not valid TOML or has wrong field types.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(reason) => write!(f, "settings I/O failed: {reason}"),
            Error::Config(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_settings() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(err.to_string(), "settings I/O failed: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(ref message) if message.contains("boom")));
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid settings: "));
    }
}
