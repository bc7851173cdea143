//! Interrupt handling for in-flight adb commands
//!
//! Each adb invocation leads its own process group and is listed in
//! [`InFlight::global`] until it exits. On SIGINT, SIGTERM or SIGHUP the
//! signal thread kills every listed group and exits with `128 + signal`.
//! Mutations that already completed stay in place.

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

static IN_FLIGHT: OnceLock<Mutex<InFlight>> = OnceLock::new();

/// Process groups of adb commands that have not exited yet
#[derive(Debug, Default)]
pub struct InFlight {
    groups: HashSet<u32>,
}

impl InFlight {
    pub fn global() -> &'static Mutex<InFlight> {
        IN_FLIGHT.get_or_init(|| Mutex::new(InFlight::default()))
    }

    pub fn insert(&mut self, pgid: u32) {
        self.groups.insert(pgid);
    }

    pub fn remove(&mut self, pgid: u32) {
        self.groups.remove(&pgid);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// SIGKILL every listed group and forget it. Returns how many were killed.
    pub fn kill_all(&mut self) -> usize {
        let killed = self.groups.len();
        for pgid in self.groups.drain() {
            kill_group(pgid);
        }
        killed
    }
}

/// SIGKILL a process group, falling back to the leader alone
pub fn kill_group(pgid: u32) {
    let pid = Pid::from_raw(pgid as i32);
    if let Err(e) = signal::killpg(pid, Signal::SIGKILL) {
        tracing::debug!("killpg({}) failed: {}, killing leader only", pgid, e);
        let _ = signal::kill(pid, Signal::SIGKILL);
    }
}

/// Install the SIGINT/SIGTERM/SIGHUP handler. Call once at program start.
pub fn init_signal_handlers() -> std::io::Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;

    std::thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            let killed = InFlight::global()
                .lock()
                .map(|mut in_flight| in_flight.kill_all())
                .unwrap_or(0);
            tracing::info!(signal = sig, killed, "interrupted, stopping run");

            println!("\n\n⚠️  Operation cancelled by user");
            std::process::exit(128 + sig);
        }
    });

    Ok(())
}

/// Spawn a [`std::process::Command`] as the leader of a fresh process group
pub trait CommandProcessGroup {
    fn in_new_process_group(&mut self) -> &mut Self;
}

impl CommandProcessGroup for std::process::Command {
    fn in_new_process_group(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        // SAFETY: only async-signal-safe calls run between fork and exec
        unsafe {
            self.pre_exec(|| {
                nix::unistd::setpgid(Pid::from_raw(0), Pid::from_raw(0))
                    .map_err(std::io::Error::from)?;

                // adb must not outlive a crashed fossify
                #[cfg(target_os = "linux")]
                if nix::libc::prctl(nix::libc::PR_SET_PDEATHSIG, nix::libc::SIGTERM) == -1 {
                    return Err(std::io::Error::last_os_error());
                }

                Ok(())
            });
        }
        self
    }
}
