mod builtins;
mod executable;
mod runnable;

pub use builtins::{functions as builtin_funcs, Builtin};
pub use executable::Executable;
pub use runnable::Runnable;
