//! Terminal rendering of runs, summaries and usage.

use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::executor::{PackageOutcome, PackageStatus, RunObserver, RunReport};
use crate::policy::{self, PackageList, PlanSection, SectionKind};
use crate::types::Mode;

const WIDTH: usize = 70;

/// Symbol shown in front of a package line
pub fn status_symbol(status: PackageStatus) -> &'static str {
    match status {
        PackageStatus::Removed | PackageStatus::Restored => "✓",
        PackageStatus::Installed | PackageStatus::AlreadyInstalled => "📦",
        PackageStatus::NotInstalled => "○",
        PackageStatus::Failed => "✗",
        PackageStatus::Skipped => "⊗",
    }
}

/// Heading for a plan section, which depends on what the mode does with it
pub fn section_title(mode: Mode, kind: SectionKind) -> String {
    match (kind, mode) {
        (SectionKind::Group(name), _) => name.to_string(),
        (SectionKind::Google, Mode::DryRun) => "🔍 GOOGLE SERVICES (For --fulldebloatdegoogle)".into(),
        (SectionKind::Google, Mode::DebloatDegoogle) => "🔍 REMOVING GOOGLE SERVICES (Degoogle)".into(),
        (SectionKind::Google, _) => "🔍 GOOGLE SERVICES".into(),
        (SectionKind::Dangerous, Mode::DryRun) => "☠️  DANGEROUS PACKAGES (Never removed)".into(),
        (SectionKind::Dangerous, Mode::Restore) => "☠️  DANGEROUS PACKAGES".into(),
        (SectionKind::Dangerous, _) => "☠️  DANGEROUS PACKAGES - SKIPPED FOR SAFETY".into(),
    }
}

/// [`RunObserver`] that prints progress the way a person reads it
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Console output is best effort; a closed stdout must not abort a run
    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }

    fn header(&mut self, text: &str) {
        let rule = "=".repeat(WIDTH);
        self.line(format!("\n{rule}"));
        self.line(format!("  {text}"));
        self.line(rule);
    }

    fn level(&mut self, text: &str) {
        let rule = "─".repeat(WIDTH);
        self.line(format!("\n{rule}"));
        self.line(format!("  {text}"));
        self.line(rule);
    }

    fn banner(&mut self, mode: Mode) {
        match mode {
            Mode::DryRun => self.header("🔍 DRY RUN MODE - Package Status Check"),
            Mode::Debloat | Mode::DebloatDegoogle => {
                let name = if mode == Mode::DebloatDegoogle {
                    "FULL DEBLOAT + DEGOOGLE"
                } else {
                    "DEBLOAT MODE"
                };
                self.header(&format!("🗑️  {name} - Removing Bloatware"));
                if mode == Mode::DebloatDegoogle {
                    self.line("⚠️  DEGOOGLE MODE: Will remove Play Store and Google Services!");
                    self.line("    Banking apps, Google Maps, and many games will NOT work!");
                } else {
                    self.line("⚠️  Play Store and Google Services will be KEPT");
                }
                self.line("    Dangerous packages will be SKIPPED to prevent bootloop");
            }
            Mode::Restore => self.header("♻️  RESTORE MODE - Reinstalling Packages"),
        }
        let _ = self.out.flush();
    }

    fn summary(&mut self, report: &RunReport) {
        let tally = report.tally;
        match report.mode {
            Mode::DryRun => {
                self.header("📊 Summary");
                self.line(format!("  Total packages checked: {}", tally.total()));
                self.line(format!("  Installed: {}", tally.installed));
                self.line(format!("  Not installed: {}", tally.not_installed));
            }
            Mode::Debloat | Mode::DebloatDegoogle => {
                self.header("✅ Debloat Complete!");
                self.line(format!("  Removed: {}", tally.removed));
                self.line(format!("  Failed: {}", tally.failed));
                self.line(format!("  Skipped (dangerous): {}", tally.skipped));
            }
            Mode::Restore => {
                self.header("✅ Restore Complete!");
                self.line(format!("  Restored: {}", tally.restored));
                self.line(format!("  Failed: {}", tally.failed));
                self.line(format!("  Already installed: {}", tally.installed));
            }
        }
    }

    fn next_steps(&mut self, mode: Mode) {
        match mode {
            Mode::DryRun => {}
            Mode::Debloat => {
                self.line("\n  🎯 Next Steps:");
                self.line("     1. Reboot: adb reboot");
                self.line("     2. Install FOSS apps: ./install-foss.sh");
                self.line("     3. Test everything works");
            }
            Mode::DebloatDegoogle => {
                self.line("\n  🎯 Next Steps (DEGOOGLE MODE):");
                self.line("     1. Reboot: adb reboot");
                self.line("     2. Install F-Droid manually from https://f-droid.org");
                self.line("     3. Install apps from F-Droid only");
                self.line("     4. Use Aurora Store for Play Store apps (optional)");
            }
            Mode::Restore => self.line("\n  💡 Reboot recommended: adb reboot"),
        }
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn run_started(&mut self, mode: Mode) {
        self.banner(mode);
    }

    fn connection_missing(&mut self) {
        self.line("\n❌ Error: No ADB device connected!");
        self.line("   Connect your device and enable USB debugging");
    }

    fn confirmation_requested(&mut self, mode: Mode) {
        if mode == Mode::Restore {
            self.line("\n⚠️  This will restore ALL packages (including Google Services)");
            let _ = self.out.flush();
        }
    }

    fn section_started(&mut self, mode: Mode, section: &PlanSection) {
        self.level(&section_title(mode, section.kind));
    }

    fn package_finished(&mut self, mode: Mode, outcome: &PackageOutcome) {
        // Absent deny-list packages are not worth a line when nothing is removed from it
        if mode.removes()
            && outcome.list == PackageList::Dangerous
            && outcome.status == PackageStatus::NotInstalled
        {
            return;
        }

        let prefix = if mode.is_mutating() { "  " } else { "" };
        let danger_mark = if outcome.record.dangerous { " ⚠️ " } else { "" };
        self.line(format!(
            "  {prefix}{} {:<30} {danger_mark}",
            status_symbol(outcome.status),
            outcome.record.name
        ));

        match outcome.status {
            PackageStatus::Removed | PackageStatus::Restored | PackageStatus::Failed => {
                self.line(format!("     └─ {}", outcome.record.id));
            }
            PackageStatus::Skipped => {
                let reason = outcome.reason.as_deref().unwrap_or(outcome.record.description);
                self.line(format!("     └─ Reason: {reason}"));
            }
            _ => {}
        }
        let _ = self.out.flush();
    }

    fn run_finished(&mut self, report: &RunReport) {
        self.summary(report);
        self.next_steps(report.mode);
    }
}

/// Usage banner. The auto-skipped list is taken from `catalog`.
pub fn usage(catalog: &Catalog) -> String {
    let removable = policy::plan(Mode::Debloat, catalog).removal_candidates().count();
    let degoogle = policy::plan(Mode::DebloatDegoogle, catalog).removal_candidates().count();
    let skipped: String = catalog
        .dangerous()
        .iter()
        .filter(|record| record.dangerous)
        .map(|record| format!("  • {:<28} - {}\n", record.id, record.description))
        .collect();

    format!(
        r#"
╔══════════════════════════════════════════════════════════════════╗
║              FOSSify Android - Debloat Tool                      ║
║              Bootloop-protected bloatware removal                ║
║              Especially optimized for Xiaomi/MIUI devices        ║
╚══════════════════════════════════════════════════════════════════╝

Usage:
  fossify [OPTIONS] <MODE>

Modes:
  --dryrun              Check package status (no changes)
  --debloat             Remove bloat (keeps Play Store & GMS)
  --fulldebloatdegoogle Remove EVERYTHING including Google Services
  --restore             Restore all removed packages

Options:
  --config <FILE>       Load settings from a JSON file
  --adb <PATH>          adb executable to use
  --timeout <SECS>      Per-command timeout (default 10)
  --user <ID>           Android user to act on (default 0)
  -s, --serial <SERIAL> Target a specific device
  --report <FILE>       Write a JSON report of the run
  -v, --verbose         Debug logging on stderr

Examples:
  fossify --dryrun              # Safe check
  fossify --debloat             # Remove bloat
  fossify --fulldebloatdegoogle # Full FOSS mode
  fossify --restore             # Undo everything

What Gets Removed:
  • --debloat: {removable} packages (keeps Play Store, Google Services)
  • --fulldebloatdegoogle: {degoogle} packages (removes Google Services too)

Stock Apps REMOVED in both modes:
  • Gallery (has ads) - install Fossify Gallery first!
  • File Manager (has ads) - install Material Files first!
  • Browser - install Fennec/Mull first!

Dangerous Packages (Auto-Skipped on Xiaomi/MIUI):
{skipped}
Requirements:
  • ADB installed and in PATH
  • USB debugging enabled
  • Device connected via USB
"#
    )
}
