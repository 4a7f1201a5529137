// SPDX-License-Identifier: MPL-2.0
//! Command-line front end over the language context.
//!
//! `run` wires the pieces together (settings, file-backed storage, the
//! runtime preference chain) and renders each command's result as plain
//! text. Policy for the command line lives here: unlike the context itself,
//! `set` with an unknown code is reported to the user.

mod flags;
pub mod paths;

pub use flags::{Command, Flags, FlagsError, USAGE};

use crate::config::Config;
use crate::error::Result;
use crate::i18n::{
    Catalog, FixedLocale, LanguageChange, LanguageContext, LanguageRegistry, PreferenceChain,
    SystemLocale,
};
use crate::storage::{FileStore, KeyValueStore};
use fluent_bundle::FluentArgs;
use std::io::Write;
use std::rc::Rc;

/// Exit status for a successful command.
pub const EXIT_OK: u8 = 0;

/// Exit status when `set` names a language that is not supported.
pub const EXIT_UNKNOWN_LANGUAGE: u8 = 2;

/// Opens the context backed by the state file in the data directory.
///
/// The `--lang` flag and the configured language take precedence over the
/// operating-system preference, but never over a persisted selection.
pub fn open_context(flags: &Flags, config: &Config) -> Result<LanguageContext<FileStore>> {
    let data_dir = flags.data_dir.clone().or_else(|| config.data_dir.clone());
    let store = FileStore::in_data_dir(data_dir)?;
    tracing::debug!(path = %store.path().display(), "using locale state file");

    let preference = PreferenceChain::new()
        .with(FixedLocale(flags.lang.clone()))
        .with(FixedLocale(config.language.clone()))
        .with(SystemLocale);

    let registry = LanguageRegistry::builtin();
    let catalog = Rc::new(Catalog::embedded(&registry));
    Ok(LanguageContext::initialize(registry, catalog, store, &preference))
}

/// Runs `flags.command`, writing its output to `out`. Returns the exit status.
pub fn run(flags: &Flags, config: &Config, out: &mut impl Write) -> Result<u8> {
    if flags.command == Command::Help {
        write!(out, "{}", USAGE)?;
        return Ok(EXIT_OK);
    }

    let mut context = open_context(flags, config)?;
    execute(&flags.command, &mut context, out)
}

/// Executes one command against an already initialized context.
pub fn execute<S: KeyValueStore>(
    command: &Command,
    context: &mut LanguageContext<S>,
    out: &mut impl Write,
) -> Result<u8> {
    match command {
        Command::Help => write!(out, "{}", USAGE)?,
        Command::Show => {
            let current = context.current_language();
            writeln!(
                out,
                "{}: {} {} [{}]",
                context.translate("settings.language"),
                current.flag,
                current.native_name,
                current.code
            )?;
            let recent = if context.recently_used().is_empty() {
                "-".to_string()
            } else {
                context.recently_used().join(", ")
            };
            writeln!(out, "{}: {}", context.translate("settings.recent-languages"), recent)?;
        }
        Command::List => {
            for entry in context.picker_entries() {
                let marker = match (entry.is_current, entry.is_recent) {
                    (true, _) => '*',
                    (false, true) => '+',
                    (false, false) => ' ',
                };
                writeln!(out, "{} {:<3} {}", marker, entry.locale.code, entry.label())?;
            }
        }
        Command::Set(code) => match context.set_language(code) {
            LanguageChange::Applied => {
                let current = context.current_language();
                writeln!(out, "{} {}", current.flag, current.native_name)?;
            }
            LanguageChange::UnknownCode => {
                writeln!(out, "unsupported language code '{}'", code)?;
                return Ok(EXIT_UNKNOWN_LANGUAGE);
            }
        },
        Command::Translate { keys, args } => {
            let fluent_args = fluent_args(args);
            for key in keys {
                writeln!(out, "{}", context.translate_with_args(key, &fluent_args))?;
            }
        }
    }
    Ok(EXIT_OK)
}

/// Numeric values become Fluent numbers so plural selectors apply.
fn fluent_args(variables: &[(String, String)]) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    for (name, value) in variables {
        match value.parse::<f64>() {
            Ok(number) => args.set(name.clone(), number),
            Err(_) => args.set(name.clone(), value.clone()),
        }
    }
    args
}
