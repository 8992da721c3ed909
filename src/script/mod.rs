mod command;
mod runner;

pub(crate) use self::command::Command;

pub use self::runner::Session;
