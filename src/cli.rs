use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the hello CLI.
#[derive(Debug, Parser)]
#[command(
    name = "hello",
    version,
    about = "Says hello to the world.",
    long_about = "Says hello to the world.\n\n\
                  Run `hello ext --help` for the extended greeting, which accepts \
                  names, a --who option and a --reverse switch."
)]
pub struct Args {
    /// JSON file providing the default name to greet.
    #[arg(short, long, value_name = "PATH", env = "HELLO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands of `hello`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extended greeting: greets the given names, optionally reversed.
    Ext(ExtArgs),
}

/// Arguments of the `ext` subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExtArgs {
    /// Name to greet. May be repeated; joined with the positional names by "and".
    #[arg(short, long, value_name = "NAME")]
    pub who: Vec<String>,

    /// Reverse the whole greeting character by character.
    #[arg(short, long)]
    pub reverse: bool,

    /// Names to greet.
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments parse")
    }

    fn ext(argv: &[&str]) -> ExtArgs {
        match parse(argv).command {
            Some(Command::Ext(args)) => args,
            other => panic!("expected ext subcommand, got {other:?}"),
        }
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let args = parse(&["hello"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn who_takes_one_value_per_occurrence() {
        let args = ext(&["hello", "ext", "-w", "foo", "bar", "buz"]);
        assert_eq!(args.who, ["foo"]);
        assert_eq!(args.names, ["bar", "buz"]);
        assert!(!args.reverse);
    }

    #[test]
    fn who_collects_repeated_occurrences_in_order() {
        let args = ext(&["hello", "ext", "--who", "b", "-w", "a"]);
        assert_eq!(args.who, ["b", "a"]);
        assert!(args.names.is_empty());
    }

    #[test]
    fn reverse_may_be_interleaved_with_names() {
        let args = ext(&["hello", "ext", "foo", "-r", "bar"]);
        assert!(args.reverse);
        assert_eq!(args.names, ["foo", "bar"]);
    }

    #[test]
    fn config_is_accepted_after_subcommand() {
        let args = parse(&["hello", "ext", "--config", "conf.json"]);
        assert_eq!(args.config, Some(PathBuf::from("conf.json")));
    }
}
