//! Type-safe enums shared across the crate
//!
//! Run modes and package classifications are closed sets, so they are modelled
//! as enums with `strum` string conversions instead of loose strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{FossifyError, Result};

/// What a single invocation does to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Inspect installation state only
    DryRun,
    /// Remove catalog packages, keep Google core services
    Debloat,
    /// Remove catalog packages and the Google core services
    #[serde(rename = "debloat+degoogle")]
    #[strum(serialize = "debloat+degoogle")]
    DebloatDegoogle,
    /// Reinstall every known package for the current user
    Restore,
}

impl Mode {
    /// Command-line flag selecting this mode
    pub fn flag(&self) -> &'static str {
        match self {
            Self::DryRun => "--dryrun",
            Self::Debloat => "--debloat",
            Self::DebloatDegoogle => "--fulldebloatdegoogle",
            Self::Restore => "--restore",
        }
    }

    /// Resolve a command-line flag, ignoring ASCII case
    pub fn from_flag(flag: &str) -> Result<Self> {
        Self::iter()
            .find(|mode| mode.flag().eq_ignore_ascii_case(flag))
            .ok_or_else(|| FossifyError::UnknownMode(flag.to_lowercase()))
    }

    /// Whether the mode changes on-device state and needs confirmation
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::DryRun)
    }

    /// Whether the Google core list takes part in the run
    pub fn includes_google(&self) -> bool {
        !matches!(self, Self::Debloat)
    }

    /// Whether installed packages are removed
    pub fn removes(&self) -> bool {
        matches!(self, Self::Debloat | Self::DebloatDegoogle)
    }

    /// Prompt shown before the first mutation
    pub fn confirmation_prompt(&self) -> &'static str {
        "Press Enter to continue or Ctrl+C to cancel..."
    }
}

/// Descriptive grouping of a known package.
///
/// Classification drives display only. Whether a package may be removed is
/// decided by the record's `dangerous` flag, never by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Classification {
    Trash,
    VendorBloat,
    UselessFeature,
    VendorSecurityAdware,
    GoogleBloat,
    PlatformVendorBloat,
    CarrierBloat,
    SystemUtility,
    VendorSystem,
    AdRiddenStockApp,
    NecessaryEvil,
    OtherCruft,
    Dangerous,
}
