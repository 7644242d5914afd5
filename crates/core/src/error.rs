use thiserror::Error;

use crate::ini::IniError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse {} file at `{}`: {}", .file_description, .path, .original)]
    Parse {
        file_description: String,
        path: String,
        original: IniError,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Could not locate the user configuration directory")]
    NoConfigDirectory,

    #[error("Menu `{}` has no entries", .0)]
    EmptyMenu(String),

    #[error("Cannot quote command for display: {}", .0)]
    Quote(#[from] shlex::QuoteError),

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn parse_error(file_description: String, path: String, original: IniError) -> Self {
        Self::Parse {
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
