use super::config::Configuration;
use super::environment::Environment;
use super::path::SearchPath;

/// Represents the shell state and provides methods for interacting with it
pub struct ShellState {
    pub environment: Environment,
    pub search_path: SearchPath,
    pub config: Configuration,
    pub should_exit: bool,
}

impl ShellState {
    /// Builds the state from an explicit environment
    /// The search path is derived once from that environment's `PATH`
    pub fn new(environment: Environment, config: Configuration) -> Self {
        let search_path = SearchPath::from_env_value(environment.path());

        Self {
            environment,
            search_path,
            config,
            should_exit: false,
        }
    }

    /// Builds the state from the environment the process was started with
    pub fn inherit(config: Configuration) -> Self {
        Self::new(Environment::inherit(), config)
    }

    /// Environment handed to launched commands
    // * Launched commands get an empty environment unless configured otherwise;
    // * builtins always read the captured one
    pub fn child_environment(&self) -> Environment {
        match self.config.inherit_environment {
            true => self.environment.clone(),
            false => Environment::default(),
        }
    }
}
