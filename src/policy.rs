//! Removal/restoration policy
//!
//! Pure functions that turn a run mode and the catalog into an ordered plan.
//! The one safety-critical rule lives in [`decide`]: a record with the danger
//! flag set never maps to [`Action::Uninstall`], whatever the mode or list.

use serde::Serialize;

use crate::catalog::{Catalog, PackageRecord};
use crate::types::Mode;

/// Which part of the catalog a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageList {
    /// One of the named level groups
    Group,
    /// The Google core services
    Google,
    /// The deny-list
    Dangerous,
}

/// What the executor does with one planned package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Report installation state, never mutate
    Inspect,
    /// Remove for the current user if installed
    Uninstall,
    /// Install-existing if missing
    Reinstall,
    /// Report as skipped for safety if installed
    SkipForSafety,
}

/// Decide the action for one record, or `None` to leave it out of the run.
pub fn decide(mode: Mode, list: PackageList, record: &PackageRecord) -> Option<Action> {
    match mode {
        Mode::DryRun => Some(Action::Inspect),
        Mode::Restore => Some(Action::Reinstall),
        Mode::Debloat | Mode::DebloatDegoogle => {
            if record.dangerous {
                return Some(Action::SkipForSafety);
            }
            match list {
                PackageList::Group => Some(Action::Uninstall),
                PackageList::Google if mode.includes_google() => Some(Action::Uninstall),
                PackageList::Google => None,
                // Unflagged deny-list entries are neither removed nor reported
                PackageList::Dangerous => None,
            }
        }
    }
}

/// Section heading key for a plan section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// A level group, by name
    Group(&'static str),
    Google,
    Dangerous,
}

impl SectionKind {
    /// Catalog list the section draws from
    pub fn list(&self) -> PackageList {
        match self {
            Self::Group(_) => PackageList::Group,
            Self::Google => PackageList::Google,
            Self::Dangerous => PackageList::Dangerous,
        }
    }
}

/// One record with the action decided for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedPackage {
    pub record: PackageRecord,
    pub action: Action,
}

/// Planned packages under one heading, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSection {
    pub kind: SectionKind,
    pub packages: Vec<PlannedPackage>,
}

/// Ordered work list for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub mode: Mode,
    pub sections: Vec<PlanSection>,
}

impl Plan {
    /// Every planned package across sections
    pub fn packages(&self) -> impl Iterator<Item = &PlannedPackage> {
        self.sections.iter().flat_map(|section| section.packages.iter())
    }

    /// Records the plan would pass to uninstall if installed
    pub fn removal_candidates(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages()
            .filter(|planned| planned.action == Action::Uninstall)
            .map(|planned| &planned.record)
    }
}

/// Build the ordered plan for `mode`: groups, then the Google list (when the
/// mode includes it), then the deny-list.
pub fn plan(mode: Mode, catalog: &Catalog) -> Plan {
    let mut sections: Vec<PlanSection> = catalog
        .groups()
        .iter()
        .map(|group| section(mode, SectionKind::Group(group.name), &group.packages))
        .collect();

    if mode.includes_google() {
        sections.push(section(mode, SectionKind::Google, catalog.google()));
    }
    sections.push(section(mode, SectionKind::Dangerous, catalog.dangerous()));

    Plan { mode, sections }
}

fn section(mode: Mode, kind: SectionKind, records: &[PackageRecord]) -> PlanSection {
    let packages = records
        .iter()
        .filter_map(|record| {
            decide(mode, kind.list(), record).map(|action| PlannedPackage {
                record: *record,
                action,
            })
        })
        .collect();
    PlanSection { kind, packages }
}
