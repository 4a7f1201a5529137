// SPDX-License-Identifier: MPL-2.0
//! Command-line flags and subcommands.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: learnboard [OPTIONS] <COMMAND>

Commands:
  show                 Print the current language and recently-used history
  list                 List supported languages (* current, + recently used)
  set <CODE>           Switch to the language with the given code
  tr <KEY>...          Translate keys in the current language

Options:
  --lang <TAG>         Preferred language when none has been selected yet
  --data-dir <DIR>     Directory holding the persisted language state
  --config-dir <DIR>   Directory holding settings.toml
  --arg <NAME=VALUE>   Variable passed to `tr` (repeatable)
  -h, --help           Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    List,
    Set(String),
    Translate {
        keys: Vec<String>,
        args: Vec<(String, String)>,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub lang: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub command: Command,
}

#[derive(Debug)]
pub enum FlagsError {
    Args(pico_args::Error),
    MissingCommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    MalformedVariable(String),
}

impl fmt::Display for FlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagsError::Args(e) => write!(f, "{}", e),
            FlagsError::MissingCommand => write!(f, "missing command"),
            FlagsError::UnknownCommand(c) => write!(f, "unknown command '{}'", c),
            FlagsError::MissingArgument(a) => write!(f, "missing argument <{}>", a),
            FlagsError::UnexpectedArgument(a) => write!(f, "unexpected argument '{}'", a),
            FlagsError::MalformedVariable(v) => {
                write!(f, "expected NAME=VALUE for --arg, got '{}'", v)
            }
        }
    }
}

impl std::error::Error for FlagsError {}

impl From<pico_args::Error> for FlagsError {
    fn from(err: pico_args::Error) -> Self {
        FlagsError::Args(err)
    }
}

impl Flags {
    pub fn from_env() -> Result<Self, FlagsError> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self, FlagsError> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self, FlagsError> {
        let help = args.contains(["-h", "--help"]);
        let lang = args.opt_value_from_str("--lang")?;
        let data_dir = args.opt_value_from_str("--data-dir")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let variables: Vec<String> = args.values_from_str("--arg")?;

        let positional: Vec<String> = args
            .finish()
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        if let Some(flag) = positional.iter().find(|arg| arg.starts_with('-')) {
            return Err(FlagsError::UnexpectedArgument(flag.clone()));
        }

        let mut rest = positional.into_iter();

        let command = if help {
            Command::Help
        } else {
            match rest.next().as_deref() {
                None => return Err(FlagsError::MissingCommand),
                Some("show") => Command::Show,
                Some("list") => Command::List,
                Some("set") => {
                    let code = rest.next().ok_or(FlagsError::MissingArgument("CODE"))?;
                    Command::Set(code)
                }
                Some("tr") => {
                    let keys: Vec<String> = rest.by_ref().collect();
                    if keys.is_empty() {
                        return Err(FlagsError::MissingArgument("KEY"));
                    }
                    let args = variables
                        .into_iter()
                        .map(|variable| match variable.split_once('=') {
                            Some((name, value)) if !name.is_empty() => {
                                Ok((name.to_string(), value.to_string()))
                            }
                            _ => Err(FlagsError::MalformedVariable(variable.clone())),
                        })
                        .collect::<Result<Vec<_>, FlagsError>>()?;
                    Command::Translate { keys, args }
                }
                Some(other) => return Err(FlagsError::UnknownCommand(other.to_string())),
            }
        };

        if let Some(extra) = rest.next() {
            return Err(FlagsError::UnexpectedArgument(extra));
        }

        Ok(Self {
            lang,
            data_dir,
            config_dir,
            command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, FlagsError> {
        Flags::from_vec(args.iter().map(OsString::from).collect())
    }

    #[test]
    fn options_may_precede_command() {
        let flags = parse(&["--lang", "ta-IN", "--data-dir", "/tmp/lb", "show"]).unwrap();
        assert_eq!(flags.lang.as_deref(), Some("ta-IN"));
        assert_eq!(flags.data_dir, Some(PathBuf::from("/tmp/lb")));
        assert_eq!(flags.command, Command::Show);
    }

    #[test]
    fn set_requires_code() {
        assert!(matches!(parse(&["set"]), Err(FlagsError::MissingArgument("CODE"))));
        assert_eq!(parse(&["set", "fr"]).unwrap().command, Command::Set("fr".into()));
    }

    #[test]
    fn tr_collects_keys_and_variables() {
        let flags = parse(&[
            "tr",
            "nav.dashboard",
            "dashboard.welcome",
            "--arg",
            "name=Ada",
        ])
        .unwrap();
        assert_eq!(
            flags.command,
            Command::Translate {
                keys: vec!["nav.dashboard".into(), "dashboard.welcome".into()],
                args: vec![("name".into(), "Ada".into())],
            }
        );
    }

    #[test]
    fn tr_rejects_malformed_variable() {
        assert!(matches!(
            parse(&["tr", "k", "--arg", "novalue"]),
            Err(FlagsError::MalformedVariable(_))
        ));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(matches!(parse(&["frobnicate"]), Err(FlagsError::UnknownCommand(_))));
        assert!(matches!(parse(&[]), Err(FlagsError::MissingCommand)));
    }

    #[test]
    fn unknown_flag_is_reported() {
        assert!(matches!(
            parse(&["show", "--verbose"]),
            Err(FlagsError::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn help_wins_over_everything() {
        assert_eq!(parse(&["-h"]).unwrap().command, Command::Help);
    }
}
