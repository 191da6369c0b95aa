use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum KinesisError {
    /// The native call ran and returned a nonzero status code.
    #[error("{symbol} failed with status code {code}")]
    Native { symbol: &'static str, code: i16 },

    #[error("Unable to load {path}: {source}")]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("{0} is not exported by the installed Kinesis release")]
    MissingSymbol(&'static str),

    #[error("Invalid serial number {0:?}")]
    InvalidSerialNumber(String),

    #[error("{symbol} returned an undocumented value: {value}")]
    UnexpectedValue { symbol: &'static str, value: i64 },
}

impl KinesisError {
    /// The native status code, if this error came from a native call.
    pub fn code(&self) -> Option<i16> {
        match self {
            KinesisError::Native { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KinesisError>;
