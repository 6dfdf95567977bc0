use std::fmt::{Debug, Display, Formatter};
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

/// `Result` alias which automatically uses `ShellError` as the error type.
pub type Result<T> = std::result::Result<T, ShellError>;

pub trait Handle<T> {
    /// Replaces any error kind with a new one.
    /// Useful in situations where the original error provides no additional clarity.
    fn replace_err(self, new_error: impl FnOnce() -> ShellError) -> Result<T>;
}

impl<T, E> Handle<T> for std::result::Result<T, E> {
    fn replace_err(self, new_error: impl FnOnce() -> ShellError) -> Result<T> {
        self.map_err(|_| new_error())
    }
}

/// Error type for the shell.
/// Wraps an error kind, whose message is what gets shown to the user.
pub struct ShellError {
    kind: ErrorKind,
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Debug for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for ShellError {}

impl ShellError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Whether the interpreter itself has to stop after reporting this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Read(ReadError::FailedToRead(_))
                | ErrorKind::Dispatch(DispatchError::FailedToWriteOutput)
                | ErrorKind::Executable(ExecutableError::FailedToSpawn(_))
                | ErrorKind::Executable(ExecutableError::FailedToWait(_))
        )
    }
}

/// Enum representing every type of error which can occur in the shell.
/// Downstream error variants will typically include data providing basic information
/// about how the error occurred, such as the name of a command which was not found.
pub enum ErrorKind {
    Read(ReadError),
    Dispatch(DispatchError),
    Executable(ExecutableError),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Read(error) => write!(f, "{}", error),
            ErrorKind::Dispatch(error) => write!(f, "{}", error),
            ErrorKind::Executable(error) => write!(f, "{}", error),
        }
    }
}

/// Error type for errors which occur while reading a line of input.
pub enum ReadError {
    /// The input stream itself failed; carries the OS description
    FailedToRead(String),
    InvalidEncoding,
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::FailedToRead(description) => {
                write!(f, "Failed to read input: {}", description)
            }
            ReadError::InvalidEncoding => write!(f, "Input line is not valid UTF-8"),
        }
    }
}

/// Error type for errors which occur during command dispatch.
pub enum DispatchError {
    UnknownCommand(String),
    FailedToWriteOutput,
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownCommand(command_name) => {
                write!(f, "{}: command not found", command_name)
            }
            DispatchError::FailedToWriteOutput => write!(f, "Failed to write to standard output"),
        }
    }
}

/// Error type for errors which occur while launching executable files.
pub enum ExecutableError {
    /// The OS could not create a new process at all
    FailedToSpawn(String),
    /// A process could not be started from the resolved file
    FailedToExecute(PathBuf, String),
    FailedToWait(String),
}

impl ExecutableError {
    /// Sorts a launch failure into "the OS cannot create processes" and
    /// "this particular file cannot be run"
    pub fn from_launch_failure(path: PathBuf, error: &std::io::Error) -> Self {
        match error.kind() {
            IoErrorKind::WouldBlock | IoErrorKind::OutOfMemory => {
                ExecutableError::FailedToSpawn(error.to_string())
            }
            _ => ExecutableError::FailedToExecute(path, error.to_string()),
        }
    }
}

impl Display for ExecutableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutableError::FailedToSpawn(description) => {
                write!(f, "Failed to create process: {}", description)
            }
            ExecutableError::FailedToExecute(path, description) => {
                write!(f, "{}: {}", path.display(), description)
            }
            ExecutableError::FailedToWait(description) => {
                write!(f, "Failed to wait for process: {}", description)
            }
        }
    }
}

/// Shortcut for creating a `ShellError::Read` without explicit imports
macro_rules! read_err {
    ($content:expr) => {{
        use crate::errors::ErrorKind;
        #[allow(unused_imports)]
        use crate::errors::ReadError::*;
        use crate::errors::ShellError;
        ShellError::new(ErrorKind::Read($content))
    }};
}

/// Shortcut for creating a `ShellError::Dispatch` without explicit imports
macro_rules! dispatch_err {
    ($content:expr) => {{
        #[allow(unused_imports)]
        use crate::errors::DispatchError::*;
        use crate::errors::ErrorKind;
        use crate::errors::ShellError;
        ShellError::new(ErrorKind::Dispatch($content))
    }};
}

/// Shortcut for creating a `ShellError::Executable` without explicit imports
macro_rules! executable_err {
    ($content:expr) => {{
        use crate::errors::ErrorKind;
        #[allow(unused_imports)]
        use crate::errors::ExecutableError::*;
        use crate::errors::ShellError;
        ShellError::new(ErrorKind::Executable($content))
    }};
}

pub(crate) use {dispatch_err, executable_err, read_err};
