use std::fmt::{Debug, Display};

/// Which stage of a run failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command-line input, detected before any file is touched.
    Validation,
    Io,
    Decode,
    Resize,
    Encode,
}

pub struct ResizeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ResizeError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Process exit code for this error: 2 for validation errors like clap uses, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Validation => 2,
            _ => 1,
        }
    }
}

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! rs_err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::ResizeError {
            kind: $crate::error::ErrorKind::$kind,
            message: format!(
                "batch-resize: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

#[macro_export]
macro_rules! rs_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::rs_err!($kind, "{}", err));
            }
        }
    };
}
