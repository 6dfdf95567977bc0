use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

/// Name of the variable holding the executable search path
pub const PATH_VARIABLE: &str = "PATH";

/// Snapshot of the environment the shell was started with.
/// Entries keep the order in which the operating system exposed them, and are never modified,
/// so builtins and the process launcher see exactly what the shell inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: Vec<(OsString, OsString)>,
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment {
    /// Captures the environment of the current process
    pub fn inherit() -> Self {
        std::env::vars_os().collect()
    }

    /// Looks up a variable by name, returning the first matching entry
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.variables
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_os_str())
    }

    /// Raw value of `PATH`, if it was set
    pub fn path(&self) -> Option<&OsStr> {
        self.get(PATH_VARIABLE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.variables
            .iter()
            .map(|(key, value)| (key.as_os_str(), value.as_os_str()))
    }

    /// Writes every entry as `KEY=VALUE`, one per line
    // * Values are written as raw bytes, so entries that are not valid UTF-8 come out untouched
    pub fn write_entries(&self, out: &mut dyn Write) -> io::Result<()> {
        for (key, value) in self.iter() {
            out.write_all(key.as_bytes())?;
            out.write_all(b"=")?;
            out.write_all(value.as_bytes())?;
            out.write_all(b"\n")?;
        }

        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_path() {
        let environment: Environment = [("HOME", "/root"), ("PATH", "/bin:/usr/bin")]
            .into_iter()
            .collect();

        assert_eq!(environment.path(), Some(OsStr::new("/bin:/usr/bin")));
        assert_eq!(environment.get("HOME"), Some(OsStr::new("/root")));
        assert_eq!(environment.get("USER"), None);
    }

    #[test]
    fn missing_path() {
        let environment: Environment = [("HOME", "/root")].into_iter().collect();
        assert_eq!(environment.path(), None);
    }

    #[test]
    fn entries_keep_their_order() {
        let environment: Environment = [("ZED", "1"), ("ALPHA", "two=2"), ("EMPTY", "")]
            .into_iter()
            .collect();

        let mut output: Vec<u8> = Vec::new();
        environment.write_entries(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ZED=1\nALPHA=two=2\nEMPTY=\n"
        );
    }

    #[test]
    fn empty_environment_writes_nothing() {
        let environment = Environment::default();
        let mut output: Vec<u8> = Vec::new();
        environment.write_entries(&mut output).unwrap();

        assert_eq!(environment.iter().count(), 0);
        assert!(output.is_empty());
    }
}
