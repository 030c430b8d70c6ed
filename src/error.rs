use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Format errors
    #[error("Unsupported format: expected magic 0x{expected:08x}, got 0x{found:08x}")]
    UnsupportedFormat { expected: u32, found: u32 },

    #[error("Malformed tree header: stream ended or structure is invalid")]
    MalformedHeader,

    #[error("Unexpected end of stream: payload ended before the end-of-block marker")]
    UnexpectedEndOfStream,

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
