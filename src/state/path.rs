use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use is_executable::IsExecutable;
use tracing::trace;

use crate::errors::{dispatch_err, Result};

const PATH_SEPARATOR: u8 = b'/';
const SEARCH_PATH_DELIMITER: u8 = b':';

/// Ordered list of directories which are searched for executables.
/// Entries are kept exactly as they appear in `PATH`, including empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    directories: Vec<OsString>,
}

impl SearchPath {
    /// Splits a raw `PATH` value on `:`
    /// An unset `PATH` produces an empty search path; an empty but set `PATH` is a single empty entry
    pub fn from_env_value(value: Option<&OsStr>) -> Self {
        let directories = match value {
            Some(value) => value
                .as_bytes()
                .split(|byte| *byte == SEARCH_PATH_DELIMITER)
                .map(|directory| OsString::from_vec(directory.to_vec()))
                .collect(),
            None => Vec::new(),
        };

        Self { directories }
    }

    /// Attempts to locate an executable file for a command name
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        self.resolve_with(name, |candidate| candidate.is_executable())
    }

    /// Same as `resolve`, but with the executability check supplied by the caller.
    /// Names containing a `/` are checked in place and never searched for.
    /// Otherwise, the first directory whose candidate passes the check wins.
    pub fn resolve_with<F: Fn(&Path) -> bool>(
        &self,
        name: &str,
        is_executable: F,
    ) -> Result<PathBuf> {
        if name.contains(char::from(PATH_SEPARATOR)) {
            let direct = Path::new(name);
            trace!(candidate = %direct.display(), "checking direct path");
            return if is_executable(direct) {
                Ok(direct.to_path_buf())
            } else {
                Err(dispatch_err!(UnknownCommand(name.to_owned())))
            };
        }

        for directory in &self.directories {
            let candidate = candidate_path(directory, name);
            trace!(candidate = %candidate.display(), "checking search path candidate");
            if is_executable(&candidate) {
                return Ok(candidate);
            }
        }

        Err(dispatch_err!(UnknownCommand(name.to_owned())))
    }
}

/// Builds `<directory>/<name>` by plain concatenation
// * An empty directory has to produce `/<name>`, which `Path::join` would not
fn candidate_path(directory: &OsStr, name: &str) -> PathBuf {
    let mut candidate = Vec::with_capacity(directory.len() + name.len() + 1);
    candidate.extend_from_slice(directory.as_bytes());
    candidate.push(PATH_SEPARATOR);
    candidate.extend_from_slice(name.as_bytes());

    PathBuf::from(OsString::from_vec(candidate))
}
