pub mod ext;
pub mod hello;

use crate::cli::{Args, Command};
use crate::config::Config;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args, config: &Config) -> String {
    match &args.command {
        None => hello::message(config),
        Some(Command::Ext(ext_args)) => ext::message(ext_args, config),
    }
}
