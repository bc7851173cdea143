//! Run executor
//!
//! Drives one invocation through its phases:
//!
//! `CheckConnection -> ConfirmIntent (mutating modes) -> IterateGroups ->
//! IterateAuxLists -> Dangerous -> Summarize`
//!
//! Strictly sequential. Each package's query-then-mutate pair finishes before
//! the next package starts. Per-package failures are tallied and the run goes
//! on; completed mutations are never rolled back.

use serde::Serialize;
use std::fs;
use std::path::Path;
use strum::Display;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, PackageRecord};
use crate::confirm::{Confirm, ConfirmOutcome};
use crate::device::DeviceChannel;
use crate::error::{FossifyError, Result};
use crate::policy::{self, Action, PackageList, PlanSection, PlannedPackage};
use crate::types::Mode;

/// Phase of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RunPhase {
    CheckConnection,
    ConfirmIntent,
    IterateGroups,
    IterateAuxLists,
    Dangerous,
    Summarize,
}

impl RunPhase {
    fn for_list(list: PackageList) -> Self {
        match list {
            PackageList::Group => Self::IterateGroups,
            PackageList::Google => Self::IterateAuxLists,
            PackageList::Dangerous => Self::Dangerous,
        }
    }
}

/// Result of handling one package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PackageStatus {
    /// Dry-run: present on the device
    Installed,
    NotInstalled,
    Removed,
    Restored,
    /// Restore: present already, nothing to do
    AlreadyInstalled,
    Failed,
    /// Dangerous and present, left alone
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOutcome {
    pub record: PackageRecord,
    pub list: PackageList,
    pub status: PackageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Counters for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTally {
    pub removed: usize,
    pub restored: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Dry-run "installed" and restore "already installed"
    pub installed: usize,
    pub not_installed: usize,
}

impl RunTally {
    pub fn record(&mut self, status: PackageStatus) {
        match status {
            PackageStatus::Installed | PackageStatus::AlreadyInstalled => self.installed += 1,
            PackageStatus::NotInstalled => self.not_installed += 1,
            PackageStatus::Removed => self.removed += 1,
            PackageStatus::Restored => self.restored += 1,
            PackageStatus::Failed => self.failed += 1,
            PackageStatus::Skipped => self.skipped += 1,
        }
    }

    /// Number of packages checked
    pub fn total(&self) -> usize {
        self.removed + self.restored + self.failed + self.skipped + self.installed + self.not_installed
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub tally: RunTally,
    pub outcomes: Vec<PackageOutcome>,
}

impl RunReport {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            tally: RunTally::default(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: PackageOutcome) {
        self.tally.record(outcome.status);
        self.outcomes.push(outcome);
    }

    /// Outcome recorded for `id`, if the run touched it
    pub fn outcome(&self, id: &str) -> Option<&PackageOutcome> {
        self.outcomes.iter().find(|outcome| outcome.record.id == id)
    }

    /// Write the report as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        info!("Run report written to {:?}", path.as_ref());
        Ok(())
    }
}

/// Receives progress while a run executes. Every hook defaults to a no-op.
pub trait RunObserver {
    fn run_started(&mut self, _mode: Mode) {}
    fn connection_missing(&mut self) {}
    /// Called once a device is known to be present, right before the prompt
    fn confirmation_requested(&mut self, _mode: Mode) {}
    fn section_started(&mut self, _mode: Mode, _section: &PlanSection) {}
    fn package_finished(&mut self, _mode: Mode, _outcome: &PackageOutcome) {}
    fn run_finished(&mut self, _report: &RunReport) {}
}

impl RunObserver for () {}

/// Sequential executor over a catalog and a device channel
pub struct Executor<'a, C: DeviceChannel> {
    catalog: &'a Catalog,
    channel: &'a C,
}

impl<'a, C: DeviceChannel> Executor<'a, C> {
    pub fn new(catalog: &'a Catalog, channel: &'a C) -> Self {
        Self { catalog, channel }
    }

    /// Execute one run of `mode`.
    ///
    /// Fails with [`FossifyError::ConnectionAbsent`] before touching any
    /// package when no device is ready, and with [`FossifyError::Interrupted`]
    /// when the confirmation is cancelled.
    pub fn run<K, O>(&self, mode: Mode, confirm: &mut K, observer: &mut O) -> Result<RunReport>
    where
        K: Confirm + ?Sized,
        O: RunObserver + ?Sized,
    {
        info!("Starting {} run", mode);
        observer.run_started(mode);

        let mut phase = RunPhase::CheckConnection;
        debug!(%phase, "entering phase");
        if !self.channel.is_connected() {
            warn!("No device connected, aborting {} run", mode);
            observer.connection_missing();
            return Err(FossifyError::ConnectionAbsent);
        }

        if mode.is_mutating() {
            phase = RunPhase::ConfirmIntent;
            debug!(%phase, "entering phase");
            observer.confirmation_requested(mode);
            if confirm.confirm(mode.confirmation_prompt()) == ConfirmOutcome::Cancelled {
                info!("{} run cancelled at confirmation", mode);
                return Err(FossifyError::Interrupted);
            }
        }

        let plan = policy::plan(mode, self.catalog);
        let mut report = RunReport::new(mode);

        for section in &plan.sections {
            let next = RunPhase::for_list(section.kind.list());
            if next != phase {
                phase = next;
                debug!(%phase, "entering phase");
            }

            observer.section_started(mode, section);
            for planned in &section.packages {
                let outcome = self.apply(planned, section.kind.list());
                debug!(package = planned.record.id, status = %outcome.status, "package handled");
                observer.package_finished(mode, &outcome);
                report.push(outcome);
            }
        }

        phase = RunPhase::Summarize;
        debug!(%phase, "entering phase");
        info!("{} run finished: {:?}", mode, report.tally);
        observer.run_finished(&report);
        Ok(report)
    }

    fn apply(&self, planned: &PlannedPackage, list: PackageList) -> PackageOutcome {
        let record = planned.record;
        let installed = self.channel.is_installed(record.id);

        let (status, reason) = match (planned.action, installed) {
            (_, false) if planned.action != Action::Reinstall => (PackageStatus::NotInstalled, None),
            (Action::Inspect, _) => (PackageStatus::Installed, None),
            (Action::SkipForSafety, _) => {
                info!("Skipping {}: {}", record.id, record.description);
                (PackageStatus::Skipped, Some(record.description.to_string()))
            }
            // Last line of defence: the policy never plans this
            (Action::Uninstall, _) if record.dangerous => {
                warn!("Refusing to uninstall dangerous package {}", record.id);
                (PackageStatus::Skipped, Some(record.description.to_string()))
            }
            (Action::Uninstall, _) => {
                if self.channel.uninstall(record.id) {
                    info!("Removed {}", record.id);
                    (PackageStatus::Removed, None)
                } else {
                    warn!("Failed to remove {}", record.id);
                    (PackageStatus::Failed, None)
                }
            }
            (Action::Reinstall, true) => (PackageStatus::AlreadyInstalled, None),
            (Action::Reinstall, false) => {
                if self.channel.reinstall(record.id) {
                    info!("Restored {}", record.id);
                    (PackageStatus::Restored, None)
                } else {
                    warn!("Failed to restore {}", record.id);
                    (PackageStatus::Failed, None)
                }
            }
        };

        PackageOutcome {
            record,
            list,
            status,
            reason,
        }
    }
}
