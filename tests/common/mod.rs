//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use fossify::catalog::{Catalog, PackageGroup, PackageRecord};
use fossify::confirm::ConfirmOutcome;
use fossify::types::Classification;
use fossify::DeviceChannel;

/// One call made against a [`FakeChannel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsConnected,
    IsInstalled(String),
    Uninstall(String),
    Reinstall(String),
}

/// In-memory device. Uninstall removes from the installed set, reinstall adds.
#[derive(Debug, Default)]
pub struct FakeChannel {
    pub connected: bool,
    installed: RefCell<BTreeSet<String>>,
    failing: BTreeSet<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeChannel {
    pub fn connected<'a>(installed: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            connected: true,
            installed: RefCell::new(installed.into_iter().map(String::from).collect()),
            ..Self::default()
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Make every mutation of `package` fail
    pub fn failing(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn uninstalled(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Uninstall(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn reinstalled(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reinstall(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn has(&self, package: &str) -> bool {
        self.installed.borrow().contains(package)
    }
}

impl DeviceChannel for FakeChannel {
    fn is_connected(&self) -> bool {
        self.calls.borrow_mut().push(Call::IsConnected);
        self.connected
    }

    fn is_installed(&self, package: &str) -> bool {
        self.calls.borrow_mut().push(Call::IsInstalled(package.to_string()));
        self.has(package)
    }

    fn uninstall(&self, package: &str) -> bool {
        self.calls.borrow_mut().push(Call::Uninstall(package.to_string()));
        if self.failing.contains(package) {
            return false;
        }
        self.installed.borrow_mut().remove(package)
    }

    fn reinstall(&self, package: &str) -> bool {
        self.calls.borrow_mut().push(Call::Reinstall(package.to_string()));
        if self.failing.contains(package) {
            return false;
        }
        self.installed.borrow_mut().insert(package.to_string());
        true
    }
}

pub const BLOAT: PackageRecord =
    PackageRecord::new("com.test.bloat", "Test Bloat", Classification::Trash, "Junk app");
pub const GOOGLE: PackageRecord = PackageRecord::new(
    "com.test.gms",
    "Test Services",
    Classification::NecessaryEvil,
    "Google core",
);
pub const DANGER: PackageRecord = PackageRecord::new(
    "com.test.danger",
    "Test Danger",
    Classification::Dangerous,
    "Removing this bootloops the device",
)
.flagged();
pub const IMS: PackageRecord = PackageRecord::new(
    "com.test.ims",
    "Test IMS",
    Classification::Dangerous,
    "Calling stack",
);

/// Small catalog: one group, one Google package, one flagged and one unflagged deny-list entry
pub fn test_catalog() -> Catalog {
    Catalog::new(
        vec![PackageGroup::new("LEVEL 1: TEST", vec![BLOAT])],
        vec![GOOGLE],
        vec![DANGER, IMS],
    )
}

pub fn proceed(_prompt: &str) -> ConfirmOutcome {
    ConfirmOutcome::Proceed
}

pub fn cancel(_prompt: &str) -> ConfirmOutcome {
    ConfirmOutcome::Cancelled
}

/// Write an executable shell script standing in for `adb`
pub fn write_fake_adb(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("adb");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake adb");
    let mut perms = fs::metadata(&path).expect("stat fake adb").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake adb");
    path
}

/// Stateful stand-in for `adb`. It reads attached devices from `devices` and
/// installed packages from `installed`, both next to the script, and logs
/// every invocation to `calls.log`. Querying a package listed in `hang`
/// never returns.
const STATEFUL_ADB: &str = r#"dir=$(dirname "$0")
echo "$*" >> "$dir/calls.log"
if [ "$1" = "-s" ]; then shift 2; fi
case "$1" in
  devices)
    printf 'List of devices attached\n'
    cat "$dir/devices"
    exit 0 ;;
  shell)
    case "$2 $3" in
      "pm list")
        if [ -f "$dir/hang" ] && grep -qx "$5" "$dir/hang"; then
          sleep 30
        fi
        grep -F "$5" "$dir/installed" | sed 's/^/package:/'
        exit 0 ;;
      "pm uninstall")
        if grep -qx "$7" "$dir/installed"; then
          grep -vx "$7" "$dir/installed" > "$dir/installed.tmp"
          mv "$dir/installed.tmp" "$dir/installed"
          echo Success
          exit 0
        fi
        echo "Failure [not installed for $6]"
        exit 1 ;;
      "cmd package")
        echo "$7" >> "$dir/installed"
        echo "Package $7 installed for user: $6"
        exit 0 ;;
    esac ;;
esac
exit 1"#;

/// A fake `adb` executable in its own temp directory
pub struct FakeAdb {
    dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl FakeAdb {
    /// `devices` is the body of `adb devices` after the header line
    pub fn new(devices: &str, installed: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("devices"), devices).expect("write devices");
        let mut listing = installed.join("\n");
        if !listing.is_empty() {
            listing.push('\n');
        }
        fs::write(dir.path().join("installed"), listing).expect("write installed");
        fs::write(dir.path().join("calls.log"), "").expect("write call log");
        let path = write_fake_adb(dir.path(), STATEFUL_ADB);
        Self { dir, path }
    }

    /// Fake with one ready device `SERIAL1`
    pub fn attached(installed: &[&str]) -> Self {
        Self::new("SERIAL1\tdevice\n", installed)
    }

    /// Make `pm list packages <package>` hang
    pub fn hang_on(&self, package: &str) {
        fs::write(self.dir.path().join("hang"), format!("{package}\n")).expect("write hang list");
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn installed(&self) -> Vec<String> {
        read_lines(&self.dir.path().join("installed"))
    }

    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.dir.path().join("calls.log"))
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read fake adb state")
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
