// Typed inputs for the wireless helper commands

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Longest interface name the kernel accepts (IFNAMSIZ minus the NUL)
pub const MAX_INTERFACE_LEN: usize = 15;

/// A network interface name such as `wlan0`.
///
/// Only names made of ASCII alphanumerics, `-`, `_` and `.` are accepted, so
/// the value can be placed on a command line without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for InterfaceName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() || value.len() > MAX_INTERFACE_LEN {
            return Err(Error::InvalidInput(format!(
                "interface name must be 1 to {MAX_INTERFACE_LEN} characters: {value:?}"
            )));
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(Error::InvalidInput(format!(
                "invalid interface name: {value:?}"
            )));
        }

        Ok(Self(value.to_string()))
    }
}

impl FromStr for InterfaceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One wireless network as submitted by the form.
///
/// Everything except the interface is untrusted text. The priority is kept as
/// the submitted string and quoted like the other fields.
#[derive(Clone, PartialEq, Eq)]
pub struct WifiNetworkConfig {
    pub interface: InterfaceName,
    pub ssid: String,
    pub passphrase: String,
    pub priority: String,
}

// Keep the passphrase out of logs and panic messages
impl fmt::Debug for WifiNetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiNetworkConfig")
            .field("interface", &self.interface)
            .field("ssid", &self.ssid)
            .field("passphrase", &"<redacted>")
            .field("priority", &self.priority)
            .finish()
    }
}
