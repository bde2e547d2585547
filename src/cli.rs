//! Clap adapter.
//!
//! [`Cli`] is the clap derive surface; [`Cli::into_options`] is the only
//! bridge into the framework-agnostic [`Options`] consumed by
//! [`run`](crate::ops::run).
//!
//! The launcher community knows this tool by its multi-letter single-dash
//! spellings (`-bke`, `-bki`). Clap shorts are single characters, so
//! [`normalize_args`] rewrites those spellings to their long forms before
//! clap sees them.

use std::ffi::OsString;

use clap::Parser;

use crate::types::{DEFAULT_BETA_KIND, Options};

/// Small CLI tool to update your Dalamud config with beta key information.
#[derive(Debug, Parser)]
#[command(name = "dalamud-beta", version)]
pub struct Cli {
    /// The beta key to use. Defaults to resetting to an empty value. [alias: -bke]
    #[arg(
        long = "beta-key",
        value_name = "KEY",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub beta_key: String,

    /// The beta kind to opt into. Defaults to the stable release track. [alias: -bki]
    #[arg(
        long = "beta-kind",
        value_name = "KIND",
        default_value = DEFAULT_BETA_KIND,
        allow_hyphen_values = true
    )]
    pub beta_kind: String,

    /// Print the updated config instead of writing it (no backup is taken).
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Do not back up the config file before editing.
    #[arg(short = 'n', long = "no-backup")]
    pub no_backup: bool,

    /// Log each step to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Single-dash spellings and the long flag each one stands for.
const ALIASES: &[(&str, &str)] = &[
    ("-bke", "--beta-key"),
    ("-bkey", "--beta-key"),
    ("-bki", "--beta-kind"),
    ("-bkind", "--beta-kind"),
    ("-nb", "--no-backup"),
];

/// Long flags whose value may follow as the next argument.
const TAKES_VALUE: &[&str] = &["--beta-key", "--beta-kind"];

impl Cli {
    /// Parse the process arguments, exiting with clap's usage error on failure.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Like [`parse_normalized`](Self::parse_normalized) over explicit arguments.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Convert clap-parsed args into a framework-agnostic `Options`.
    pub fn into_options(self) -> Options {
        Options {
            beta_key: self.beta_key,
            beta_kind: self.beta_kind,
            dry_run: self.dry_run,
            no_backup: self.no_backup,
        }
    }
}

/// Rewrite multi-letter single-dash aliases to their long forms.
///
/// Both `-bke VALUE` and `-bke=VALUE` are handled. Values following a flag
/// that takes one are passed through untouched, as is everything after `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out: Vec<OsString> = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || expect_value || out.is_empty() {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, inline_value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };
        let long = ALIASES
            .iter()
            .find(|(alias, _)| *alias == flag)
            .map(|(_, long)| *long)
            .unwrap_or(flag);

        expect_value = inline_value.is_none() && TAKES_VALUE.contains(&long);
        match inline_value {
            Some(value) => out.push(format!("{long}={value}").into()),
            None => out.push(long.into()),
        }
    }
    out
}
