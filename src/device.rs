//! Device channel: the only place the tool talks to a phone.
//!
//! [`DeviceChannel`] is the capability the executor depends on. [`AdbChannel`]
//! implements it over the `adb` command-line tool. Every operation is a single
//! bounded command; timeouts and failures come back as `false`, never as an
//! error, so one stubborn package cannot abort a run.

use crate::command_runner::{run_with_timeout, CommandOutput};
use crate::config::Settings;
use crate::error::Result;

/// Query/mutate capability over a connected device
pub trait DeviceChannel {
    /// At least one device is attached and ready
    fn is_connected(&self) -> bool;

    /// `package` is installed for the target user
    fn is_installed(&self, package: &str) -> bool;

    /// Soft-uninstall `package` for the target user, keeping its data
    fn uninstall(&self, package: &str) -> bool;

    /// Re-enable a previously removed system package for the target user
    fn reinstall(&self, package: &str) -> bool;
}

/// One line of `adb devices` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedDevice {
    pub serial: String,
    /// `device`, `offline`, `unauthorized`, ...
    pub state: String,
}

impl AttachedDevice {
    pub fn is_ready(&self) -> bool {
        self.state == "device"
    }
}

/// Parse `adb devices` output, skipping the header and daemon chatter
pub fn parse_device_list(output: &str) -> Vec<AttachedDevice> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of devices") && !line.starts_with('*'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let serial = fields.next()?;
            let state = fields.next()?;
            Some(AttachedDevice {
                serial: serial.to_string(),
                state: state.to_string(),
            })
        })
        .collect()
}

/// Whether `pm list packages` output lists exactly `package`.
///
/// `pm list packages <filter>` matches by substring, so querying
/// `com.miui.hybrid` also lists `com.miui.hybrid.accessory`.
pub fn package_listed(output: &str, package: &str) -> bool {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("package:"))
        .any(|listed| listed == package)
}

/// [`DeviceChannel`] backed by the `adb` executable
#[derive(Debug, Clone)]
pub struct AdbChannel {
    settings: Settings,
}

impl AdbChannel {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Full argument list for an adb invocation, with `-s <serial>` when set
    pub fn command_args(&self, args: &[&str]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(serial) = &self.settings.serial {
            full.push("-s".to_string());
            full.push(serial.clone());
        }
        full.extend(args.iter().map(|arg| arg.to_string()));
        full
    }

    fn adb(&self, args: &[&str]) -> Result<CommandOutput> {
        run_with_timeout(
            &self.settings.adb_path,
            &self.command_args(args),
            self.settings.timeout(),
        )
    }

    /// Run a command and report whether it exited successfully
    fn succeeds(&self, args: &[&str]) -> bool {
        match self.adb(args).and_then(CommandOutput::ensure_success) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    fn run_unscoped(&self, args: &[&str]) -> Result<CommandOutput> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        run_with_timeout(&self.settings.adb_path, &args, self.settings.timeout())?.ensure_success()
    }

    fn user(&self) -> String {
        self.settings.user.to_string()
    }
}

impl DeviceChannel for AdbChannel {
    fn is_connected(&self) -> bool {
        // `-s` does not filter `adb devices`, so match the serial ourselves
        let output = match self.run_unscoped(&["devices"]) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Device listing failed: {}", e);
                return false;
            }
        };

        let devices = parse_device_list(&output.stdout);
        tracing::debug!(?devices, "attached devices");
        devices.iter().any(|device| {
            device.is_ready()
                && self
                    .settings
                    .serial
                    .as_ref()
                    .is_none_or(|serial| &device.serial == serial)
        })
    }

    fn is_installed(&self, package: &str) -> bool {
        match self
            .adb(&["shell", "pm", "list", "packages", package])
            .and_then(CommandOutput::ensure_success)
        {
            Ok(output) => package_listed(&output.stdout, package),
            Err(e) => {
                tracing::warn!("Package query for {} failed: {}", package, e);
                false
            }
        }
    }

    fn uninstall(&self, package: &str) -> bool {
        let user = self.user();
        self.succeeds(&["shell", "pm", "uninstall", "-k", "--user", &user, package])
    }

    fn reinstall(&self, package: &str) -> bool {
        let user = self.user();
        self.succeeds(&["shell", "cmd", "package", "install-existing", "--user", &user, package])
    }
}
