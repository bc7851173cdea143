use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::types::Mode;

/// FOSSify Android - bootloop-protected bloatware removal over adb
#[derive(Parser, Debug)]
#[command(name = "fossify")]
#[command(about = "Bootloop-protected Android bloatware removal over adb")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["dryrun", "debloat", "fulldebloatdegoogle", "restore"])
))]
pub struct Cli {
    /// Check package status (no changes)
    #[arg(long)]
    pub dryrun: bool,

    /// Remove bloat (keeps Play Store & GMS)
    #[arg(long)]
    pub debloat: bool,

    /// Remove EVERYTHING including Google Services
    #[arg(long)]
    pub fulldebloatdegoogle: bool,

    /// Restore all removed packages
    #[arg(long)]
    pub restore: bool,

    /// Load settings from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// adb executable to use
    #[arg(long, value_name = "PATH")]
    pub adb: Option<String>,

    /// Per-command timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Android user to act on
    #[arg(long, value_name = "ID")]
    pub user: Option<u32>,

    /// Target a specific device
    #[arg(short, long)]
    pub serial: Option<String>,

    /// Write a JSON report of the run
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Lower-case any argument that is a mode flag in another case
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str().map(Mode::from_flag) {
            Some(Ok(mode)) => OsString::from(mode.flag()),
            _ => arg,
        })
        .collect()
}

impl Cli {
    /// Parse `args` (program name first) with case-insensitive mode flags
    pub fn try_parse_normalized<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Selected mode. The argument group guarantees exactly one flag is set.
    pub fn mode(&self) -> Mode {
        if self.fulldebloatdegoogle {
            Mode::DebloatDegoogle
        } else if self.debloat {
            Mode::Debloat
        } else if self.restore {
            Mode::Restore
        } else {
            Mode::DryRun
        }
    }

    /// Effective settings: defaults, then `--config`, then individual flags
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };

        if let Some(adb) = &self.adb {
            settings.adb_path = adb.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(user) = self.user {
            settings.user = user;
        }
        if let Some(serial) = &self.serial {
            settings.serial = Some(serial.clone());
        }

        settings.validate()?;
        Ok(settings)
    }
}
