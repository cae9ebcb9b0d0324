// Command lines for the wireless network helper script

pub mod script;
pub mod types;

pub use script::NetworkScript;
pub use types::{InterfaceName, WifiNetworkConfig};

use std::fmt;

use crate::error::{Error, Result};
use crate::quote::quote;

pub const ADD_WIRELESS_NETWORK: &str = "add_wireless_network";
pub const CLEAR_WIRELESS_NETWORKS: &str = "clear_wireless_networks";

/// A fully assembled command line, ready to hand to an executor.
///
/// Every value that came from untrusted input is single-quote escaped.
#[derive(Clone, PartialEq, Eq)]
pub struct ShellCommand(String);

impl ShellCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn clear_wireless_networks() -> Self {
        Self(CLEAR_WIRELESS_NETWORKS.to_string())
    }

    /// Chain commands with `&&` so a failing step stops the rest
    pub fn and_then(self, next: &ShellCommand) -> Self {
        Self(format!("{} && {}", self.0, next.0))
    }

    pub(crate) fn from_trusted(line: String) -> Self {
        Self(line)
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Commands carry passphrases, only show them through Display
impl fmt::Debug for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShellCommand")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

/// Build `add_wireless_network <iface> '<ssid>' '<passphrase>' '<priority>'`.
///
/// Absent fields are rejected instead of being replaced by empty strings, an
/// empty SSID accepted silently would misconfigure the network.
pub fn build_add_wireless_network_command(
    interface: &InterfaceName,
    ssid: Option<&str>,
    passphrase: Option<&str>,
    priority: Option<&str>,
) -> Result<ShellCommand> {
    let ssid = ssid.ok_or_else(|| Error::missing("ssid"))?;
    let passphrase = passphrase.ok_or_else(|| Error::missing("passphrase"))?;
    let priority = priority.ok_or_else(|| Error::missing("priority"))?;

    Ok(add_wireless_network(interface, ssid, passphrase, priority))
}

fn add_wireless_network(
    interface: &InterfaceName,
    ssid: &str,
    passphrase: &str,
    priority: &str,
) -> ShellCommand {
    ShellCommand(format!(
        "{} {} {} {} {}",
        ADD_WIRELESS_NETWORK,
        interface,
        quote(ssid),
        quote(passphrase),
        quote(priority)
    ))
}

impl WifiNetworkConfig {
    pub fn command(&self) -> ShellCommand {
        add_wireless_network(&self.interface, &self.ssid, &self.passphrase, &self.priority)
    }

    /// The same invocation as a plain argument list, for executors that
    /// never go through a shell.
    pub fn argv(&self) -> Vec<String> {
        vec![
            ADD_WIRELESS_NETWORK.to_string(),
            self.interface.to_string(),
            self.ssid.clone(),
            self.passphrase.clone(),
            self.priority.clone(),
        ]
    }
}
