//! Replay configuration from environment variables and command-line flags

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chess_core::ReplayOptions;

use crate::error::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::Config("PGN_REPLAY_FORMAT must be 'text' or 'json'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// PGN files to replay, in order
    pub paths: Vec<PathBuf>,

    /// Fail on malformed or unresolvable moves instead of skipping them
    pub strict: bool,

    /// Report format written to stdout
    pub format: OutputFormat,
}

impl ReplayConfig {
    /// Load configuration from the environment, then apply command-line
    /// arguments (program name already removed).
    pub fn load<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::load_with(args, |key| env::var(key).ok())
    }

    /// Same as [`ReplayConfig::load`] with an explicit variable lookup.
    pub fn load_with<I, F>(args: I, lookup: F) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut strict = lookup("PGN_REPLAY_STRICT")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        let mut format = match lookup("PGN_REPLAY_FORMAT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        let mut paths = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--strict" => strict = true,
                "--json" => format = OutputFormat::Json,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                _ => paths.push(PathBuf::from(arg)),
            }
        }

        if paths.is_empty() {
            return Err(CliError::Usage("no PGN file given".to_string()));
        }

        Ok(Self {
            paths,
            strict,
            format,
        })
    }

    pub fn replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            strict: self.strict,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
