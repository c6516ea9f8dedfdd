// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # System Toolkit
//!
//! Implements [`SystemTools`] over the host's diagnostic utilities.
//! Platform differences in utility syntax live in a capability table
//! selected once at construction. The subject address is always appended
//! as the final element of a non-shell argument list, so hostile input
//! cannot smuggle shell syntax into a subprocess.

use std::net::IpAddr;
use std::process::{Command, Output};

use sonda_common::debug;
use sonda_common::models::report::{Finding, LookupError, Reachability};
use sonda_common::system::SystemTools;

/// One row of the capability table: a utility plus its fixed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl CommandSpec {
    fn build(&self, addr: IpAddr) -> Command {
        let mut command = Command::new(self.program);
        command.args(self.args).arg(addr.to_string());
        command
    }
}

/// The diagnostic utilities available on the current platform.
#[derive(Debug, Clone, Copy)]
pub struct Toolkit {
    pub ping: CommandSpec,
    pub arp: CommandSpec,
    pub netbios: Option<CommandSpec>,
    pub whois: CommandSpec,
}

impl Toolkit {
    /// Picks the argument templates for the host platform.
    ///
    /// Timeouts stay at whatever the utilities default to; the probe
    /// sends exactly one echo request on every platform.
    pub fn for_host() -> Self {
        if cfg!(target_os = "windows") {
            Self {
                ping: CommandSpec {
                    program: "ping",
                    args: &["-n", "1"],
                },
                arp: CommandSpec {
                    program: "arp",
                    args: &["-a"],
                },
                netbios: Some(CommandSpec {
                    program: "nbtstat",
                    args: &["-A"],
                }),
                whois: CommandSpec {
                    program: "whois",
                    args: &[],
                },
            }
        } else {
            Self {
                ping: CommandSpec {
                    program: "ping",
                    args: &["-c", "1"],
                },
                arp: CommandSpec {
                    program: "arp",
                    args: &[],
                },
                netbios: None,
                whois: CommandSpec {
                    program: "whois",
                    args: &[],
                },
            }
        }
    }
}

/// Host-backed implementation of [`SystemTools`].
pub struct SystemToolkit {
    toolkit: Toolkit,
}

impl SystemToolkit {
    pub fn new() -> Self {
        Self {
            toolkit: Toolkit::for_host(),
        }
    }
}

impl Default for SystemToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTools for SystemToolkit {
    fn ping(&self, addr: IpAddr) -> Finding<Reachability> {
        debug!("Spawning '{}' against {addr}", self.toolkit.ping.program);
        match self.toolkit.ping.build(addr).output() {
            Ok(output) if output.status.success() => Ok(Reachability::Reachable),
            Ok(_) => Ok(Reachability::Unreachable),
            Err(e) => Err(LookupError::ProbeFailed(e.to_string())),
        }
    }

    fn reverse_dns(&self, addr: IpAddr) -> Finding<String> {
        debug!("Querying system resolver for the PTR record of {addr}");
        match dns_lookup::lookup_addr(&addr) {
            // Some resolvers echo the address back instead of failing
            Ok(name) if name != addr.to_string() => Ok(name),
            _ => Err(LookupError::NoRecord),
        }
    }

    fn arp_entry(&self, addr: IpAddr) -> Finding<String> {
        run_for_text(&self.toolkit.arp, addr)
    }

    fn netbios_status(&self, addr: IpAddr) -> Finding<String> {
        let Some(spec) = &self.toolkit.netbios else {
            return Err(LookupError::UnsupportedPlatform);
        };
        run_for_text(spec, addr)
    }

    fn whois(&self, addr: IpAddr) -> Finding<String> {
        run_for_text(&self.toolkit.whois, addr)
    }
}

/// Runs a text-producing utility and captures its output.
fn run_for_text(spec: &CommandSpec, addr: IpAddr) -> Finding<String> {
    debug!("Spawning '{}' against {addr}", spec.program);
    let output = spec
        .build(addr)
        .output()
        .map_err(|e| LookupError::CommandFailed(format!("{}: {e}", spec.program)))?;
    finding_from_output(spec.program, output)
}

/// Whatever landed on stdout is the finding, even on an error exit —
/// several of these utilities report "no entry" through stdout while
/// exiting nonzero. Only an error exit with nothing on stdout becomes
/// a failure, surfacing stderr as the reason.
fn finding_from_output(program: &str, output: Output) -> Finding<String> {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if output.status.success() || !stdout.trim().is_empty() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = stderr.trim();
    if reason.is_empty() {
        Err(LookupError::CommandFailed(format!(
            "{program} exited with {}",
            output.status
        )))
    } else {
        Err(LookupError::CommandFailed(format!("{program}: {reason}")))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    const ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_unix_capability_table() {
        let toolkit = Toolkit::for_host();
        assert_eq!(toolkit.ping.program, "ping");
        assert_eq!(toolkit.ping.args, &["-c", "1"]);
        assert_eq!(toolkit.arp.args, &[] as &[&str]);
        assert!(toolkit.netbios.is_none());
        assert_eq!(toolkit.whois.program, "whois");
    }

    #[test]
    #[cfg(target_os = "windows")]
    fn test_windows_capability_table() {
        let toolkit = Toolkit::for_host();
        assert_eq!(toolkit.ping.args, &["-n", "1"]);
        assert_eq!(toolkit.arp.args, &["-a"]);
        assert!(toolkit.netbios.is_some());
    }

    #[test]
    fn test_address_is_appended_as_final_argument() {
        let spec = CommandSpec {
            program: "ping",
            args: &["-c", "1"],
        };
        let command = spec.build(ADDR);
        let args: Vec<String> = command
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(command.get_program(), "ping");
        assert_eq!(args, vec!["-c", "1", "192.0.2.1"]);
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_netbios_is_unsupported_without_a_utility() {
        let finding = SystemToolkit::new().netbios_status(ADDR);
        assert_eq!(finding, Err(LookupError::UnsupportedPlatform));
    }

    #[test]
    fn test_missing_utility_reports_command_failed() {
        let spec = CommandSpec {
            program: "sonda-no-such-utility",
            args: &[],
        };
        let finding = run_for_text(&spec, ADDR);
        match finding {
            Err(LookupError::CommandFailed(reason)) => {
                assert!(reason.contains("sonda-no-such-utility"));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_ping_utility_reports_probe_failed() {
        let toolkit = SystemToolkit {
            toolkit: Toolkit {
                ping: CommandSpec {
                    program: "sonda-no-such-ping",
                    args: &[],
                },
                ..Toolkit::for_host()
            },
        };
        assert!(matches!(
            toolkit.ping(ADDR),
            Err(LookupError::ProbeFailed(_))
        ));
    }

    #[cfg(unix)]
    mod output_rules {
        use super::*;
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        fn output(code: i32, stdout: &str, stderr: &str) -> Output {
            Output {
                status: ExitStatus::from_raw(code << 8),
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
            }
        }

        #[test]
        fn success_passes_stdout_through() {
            let finding = finding_from_output("arp", output(0, "? (192.168.1.1) at aa:bb\n", ""));
            assert_eq!(finding, Ok("? (192.168.1.1) at aa:bb\n".to_string()));
        }

        #[test]
        fn error_exit_with_stdout_is_still_a_finding() {
            let finding = finding_from_output("arp", output(1, "192.0.2.1 -- no entry\n", ""));
            assert_eq!(finding, Ok("192.0.2.1 -- no entry\n".to_string()));
        }

        #[test]
        fn error_exit_without_stdout_surfaces_stderr() {
            let finding = finding_from_output("whois", output(2, "", "connect: network unreachable\n"));
            assert_eq!(
                finding,
                Err(LookupError::CommandFailed(
                    "whois: connect: network unreachable".to_string()
                ))
            );
        }

        #[test]
        fn silent_error_exit_reports_the_status() {
            let finding = finding_from_output("whois", output(2, "", ""));
            match finding {
                Err(LookupError::CommandFailed(reason)) => {
                    assert!(reason.starts_with("whois exited with"));
                }
                other => panic!("expected CommandFailed, got {other:?}"),
            }
        }
    }
}
