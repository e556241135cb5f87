use crate::cli::ExtArgs;
use crate::config::Config;

/// Returns the extended greeting for the `ext` subcommand.
pub fn message(args: &ExtArgs, config: &Config) -> String {
    tracing::debug!(
        who = ?args.who,
        names = ?args.names,
        reverse = args.reverse,
        "building extended greeting"
    );
    greeting(&args.who, &args.names, args.reverse, &config.name)
}

/// Builds `Hello, <who>!`, reversed character by character when `reverse` is set,
/// followed by a single newline.
pub fn greeting(who: &[String], names: &[String], reverse: bool, default_name: &str) -> String {
    let mut text = format!("Hello, {}!", who_phrase(who, names, default_name));
    if reverse {
        text = text.chars().rev().collect();
    }
    text.push('\n');
    text
}

/// Joins the `--who` values and the positional names into the addressee phrase.
///
/// Each source is space-joined on its own; when both are present they are
/// joined with `" and "`, flag values first. With neither, `default_name` is used.
pub fn who_phrase(who: &[String], names: &[String], default_name: &str) -> String {
    let flag_phrase = who.join(" ");
    let arg_phrase = names.join(" ");

    match (flag_phrase.is_empty(), arg_phrase.is_empty()) {
        (false, false) => format!("{flag_phrase} and {arg_phrase}"),
        (false, true) => flag_phrase,
        (true, false) => arg_phrase,
        (true, true) => default_name.to_string(),
    }
}
