use std::io::Write;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command as Process, ExitStatus};

use tracing::debug;

use super::Runnable;
use crate::errors::{dispatch_err, executable_err, ExecutableError, Handle, Result};
use crate::state::{Environment, ShellState};

/// Represents an executable (external command)
pub struct Executable {
    path: PathBuf,
}

impl Executable {
    // * The path must already have been resolved, but it is only checked again by the OS at launch,
    // * so the file may have changed in between
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Starts the executable as a child process and blocks until it terminates.
    /// `arguments[0]` is passed as the child's argv[0] exactly as typed, even when it differs
    /// from the resolved path. The child sees only the supplied environment.
    pub fn launch(&self, arguments: &[&str], environment: &Environment) -> Result<ExitStatus> {
        let mut process = Process::new(&self.path);
        if let Some(name) = arguments.first() {
            process.arg0(name);
        }

        process
            .args(arguments.iter().skip(1))
            .env_clear()
            .envs(environment.iter());

        debug!(path = %self.path.display(), ?arguments, "launching executable");
        let mut child = process.spawn().map_err(|e| {
            executable_err!(ExecutableError::from_launch_failure(self.path.clone(), &e))
        })?;

        child
            .wait()
            .map_err(|e| executable_err!(FailedToWait(e.to_string())))
    }
}

impl Runnable for Executable {
    // * The exit status is only logged; a failing command does not change anything in the shell
    fn run(&self, shell: &mut ShellState, out: &mut dyn Write, arguments: &[&str]) -> Result<()> {
        // Anything the shell printed must appear before the child's own output
        out.flush().replace_err(|| dispatch_err!(FailedToWriteOutput))?;

        let status = self.launch(arguments, &shell.child_environment())?;
        debug!(path = %self.path.display(), %status, "executable finished");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use tempfile::TempDir;

    use super::*;
    use crate::errors::{DispatchError, ErrorKind};
    use crate::state::Configuration;

    /// Output that has been closed on the other end
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    fn sh(script: &str, environment: &Environment) -> ExitStatus {
        Executable::new(PathBuf::from("/bin/sh"))
            .launch(&["sh", "-c", script], environment)
            .unwrap()
    }

    #[test]
    fn returns_exit_status() {
        let environment = Environment::default();
        assert!(sh("exit 0", &environment).success());
        assert_eq!(sh("exit 3", &environment).code(), Some(3));
    }

    #[test]
    fn child_only_sees_supplied_environment() {
        let marked: Environment = [("HSH_TEST_MARKER", "1")].into_iter().collect();
        let script = r#"test "$HSH_TEST_MARKER" = 1"#;

        assert!(sh(script, &marked).success());
        assert!(!sh(script, &Environment::default()).success());
    }

    #[test]
    fn non_executable_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script");
        fs_err::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs_err::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let error = Executable::new(path.clone())
            .launch(&["script"], &Environment::default())
            .unwrap_err();

        assert!(!error.is_fatal());
        assert!(matches!(
            error.kind(),
            ErrorKind::Executable(ExecutableError::FailedToExecute(failed, _)) if *failed == path
        ));
    }

    #[test]
    fn vanished_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let error = Executable::new(dir.path().join("gone"))
            .launch(&["gone"], &Environment::default())
            .unwrap_err();

        assert!(!error.is_fatal());
    }

    #[test]
    fn closed_output_stops_before_launch() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("ran");
        let script = format!(": > {}", marker.display());
        let mut shell = ShellState::new(Environment::default(), Configuration::default());

        let error = Executable::new(PathBuf::from("/bin/sh"))
            .run(&mut shell, &mut ClosedOutput, &["sh", "-c", &script])
            .unwrap_err();

        assert!(error.is_fatal());
        assert!(matches!(
            error.kind(),
            ErrorKind::Dispatch(DispatchError::FailedToWriteOutput)
        ));
        assert!(!marker.exists());
    }
}
