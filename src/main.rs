mod errors;
mod eval;
mod exec;
mod state;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use errors::{dispatch_err, DispatchError, ErrorKind, Handle, Result, ShellError};
use eval::{Dispatcher, LineEditor, LineSource, PlainReader};
use state::{Configuration, ShellArgs, ShellState};

fn main() -> ExitCode {
    // Logging is silent unless RUST_LOG asks for it, and never touches stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Configuration::from(ShellArgs::parse());

    // The ShellState type stores all of the state for the shell, including its configuration,
    // the environment it was started with, and the search path derived from it
    let mut shell = ShellState::inherit(config);
    // The LineSource is responsible for printing the prompt and reading lines of input,
    // through the line editor at a terminal or a plain reader otherwise
    let mut line_source = match open_line_source(&shell.config) {
        Ok(line_source) => line_source,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };
    // The Dispatcher type is responsible for resolving command names to builtins,
    // or executables if needed, and then invoking them with the given arguments
    let dispatcher = Dispatcher::default();
    let mut stdout = io::stdout();

    match run(&mut shell, line_source.as_mut(), &dispatcher, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "stopping after fatal error");
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Reads and evaluates lines until the input ends or `exit` is run
/// Errors the loop can continue after are reported here; any other error is handed back
fn run(
    shell: &mut ShellState,
    line_source: &mut dyn LineSource,
    dispatcher: &Dispatcher,
    out: &mut dyn Write,
) -> Result<()> {
    loop {
        let line = match line_source.prompt_and_read_line(&shell.config.prompt) {
            Ok(Some(line)) => line,
            Ok(None) => {
                // Keeps the terminal tidy after the final prompt
                writeln!(out)
                    .and_then(|_| out.flush())
                    .replace_err(|| dispatch_err!(FailedToWriteOutput))?;
                debug!("end of input");
                return Ok(());
            }
            Err(e) => {
                recover(e, out)?;
                continue;
            }
        };

        if let Err(e) = dispatcher.eval(shell, out, &line) {
            recover(e, out)?;
        }

        if shell.should_exit {
            return out
                .flush()
                .replace_err(|| dispatch_err!(FailedToWriteOutput));
        }
    }
}

fn open_line_source(config: &Configuration) -> Result<Box<dyn LineSource>> {
    if config.use_line_editor(io::stdin().is_tty()) {
        Ok(Box::new(LineEditor::new()?))
    } else {
        Ok(Box::new(PlainReader::new(io::stdin().lock(), io::stdout())))
    }
}

// Prints an appropriate message for an error the loop can continue after
// Fatal errors, including a failure to print the message, are returned instead
fn recover(error: ShellError, out: &mut dyn Write) -> Result<()> {
    if error.is_fatal() {
        return Err(error);
    }

    if let ErrorKind::Dispatch(DispatchError::UnknownCommand(_)) = error.kind() {
        return writeln!(out, "{}", error).replace_err(|| dispatch_err!(FailedToWriteOutput));
    }

    // Whatever the shell printed so far has to come before the message
    out.flush().replace_err(|| dispatch_err!(FailedToWriteOutput))?;
    report_error(&error);
    Ok(())
}

// * Standard error is the last place a message can go, so a failure to write there is only logged
fn report_error(error: &ShellError) {
    let mut stderr = io::stderr().lock();
    let label = match stderr.is_tty() {
        true => "Error:".red().bold().to_string(),
        false => "Error:".to_owned(),
    };

    if writeln!(stderr, "{} {}", label, error).is_err() {
        debug!(%error, "could not report error");
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::state::Environment;

    /// Output that has been closed on the other end
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn shell() -> ShellState {
        let environment: Environment = [("HSH_TEST", "yes")].into_iter().collect();
        ShellState::new(environment, Configuration::default())
    }

    fn run_with(input: &str, out: &mut dyn Write) -> (ShellState, Result<()>) {
        let mut shell = shell();
        let mut line_source = PlainReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut shell, &mut line_source, &Dispatcher::default(), out);
        (shell, result)
    }

    #[test]
    fn unknown_command_then_end_of_input() {
        let mut out: Vec<u8> = Vec::new();
        let (shell, result) = run_with("doesnotexist123\n\n", &mut out);

        assert!(result.is_ok());
        assert!(!shell.should_exit);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "doesnotexist123: command not found\n\n"
        );
    }

    #[test]
    fn exit_stops_reading() {
        let mut out: Vec<u8> = Vec::new();
        let (shell, result) = run_with("exit\ndoesnotexist123\n", &mut out);

        assert!(result.is_ok());
        assert!(shell.should_exit);
        assert!(out.is_empty());
    }

    #[test]
    fn closed_output_on_unknown_command_is_fatal() {
        let (_, result) = run_with("doesnotexist123\n", &mut ClosedOutput);
        let error = result.unwrap_err();

        assert!(error.is_fatal());
        assert!(matches!(
            error.kind(),
            ErrorKind::Dispatch(DispatchError::FailedToWriteOutput)
        ));
    }

    #[test]
    fn closed_output_at_end_of_input_is_fatal() {
        let (_, result) = run_with("", &mut ClosedOutput);
        assert!(result.unwrap_err().is_fatal());
    }

    #[test]
    fn closed_output_on_env_is_fatal() {
        let (_, result) = run_with("env\nexit\n", &mut ClosedOutput);
        assert!(result.unwrap_err().is_fatal());
    }
}
