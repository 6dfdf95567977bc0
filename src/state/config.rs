use clap::{Parser, ValueEnum};

pub const DEFAULT_PROMPT: &str = "($) ";

/// Command line flags accepted by the shell binary
#[derive(Parser, Debug)]
#[command(name = "hsh", version, about = "A minimal interactive command interpreter")]
pub struct ShellArgs {
    #[arg(long, default_value = DEFAULT_PROMPT, help = "The prompt printed before each line is read")]
    pub prompt: String,
    #[arg(
        long = "inherit-env",
        help = "Pass the shell's environment to launched commands instead of an empty one"
    )]
    pub inherit_environment: bool,
    #[arg(
        long = "line-editor",
        value_enum,
        default_value_t = LineEditorMode::Auto,
        help = "Whether to read input through the interactive line editor"
    )]
    pub line_editor: LineEditorMode,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEditorMode {
    /// Use the line editor only when standard input is a terminal
    Auto,
    Always,
    Never,
}

// Represents any settings for the shell, all of which come from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    // The text printed before every read
    pub prompt: String,
    // Whether launched commands receive the shell's environment
    pub inherit_environment: bool,
    pub line_editor: LineEditorMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            inherit_environment: false,
            line_editor: LineEditorMode::Auto,
        }
    }
}

impl From<ShellArgs> for Configuration {
    fn from(args: ShellArgs) -> Self {
        Self {
            prompt: args.prompt,
            inherit_environment: args.inherit_environment,
            line_editor: args.line_editor,
        }
    }
}

impl Configuration {
    /// Decides whether to use the line editor, given whether stdin is a terminal
    pub fn use_line_editor(&self, stdin_is_terminal: bool) -> bool {
        match self.line_editor {
            LineEditorMode::Auto => stdin_is_terminal,
            LineEditorMode::Always => true,
            LineEditorMode::Never => false,
        }
    }
}
