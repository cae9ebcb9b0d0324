use std::path::{Path, PathBuf};

use crate::command::{ShellCommand, WifiNetworkConfig};
use crate::quote::quote;

/// Location of the helper library inside the scripts directory
pub const NETWORK_HELPER: &str = "helperscripts/inc.networkHelper.sh";

/// The script run for one form submission: load the helper functions, drop
/// every configured network, then add the submitted ones in order.
#[derive(Debug, Clone)]
pub struct NetworkScript {
    helper: PathBuf,
    networks: Vec<ShellCommand>,
}

impl NetworkScript {
    pub fn new(helper: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
            networks: Vec::new(),
        }
    }

    pub fn from_scripts_dir(scripts_dir: &Path) -> Self {
        Self::new(scripts_dir.join(NETWORK_HELPER))
    }

    pub fn push(&mut self, network: &WifiNetworkConfig) -> &mut Self {
        self.networks.push(network.command());
        self
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn to_command(&self) -> ShellCommand {
        let source = ShellCommand::from_trusted(format!(
            "source {}",
            quote(&self.helper.to_string_lossy())
        ));

        self.networks.iter().fold(
            source.and_then(&ShellCommand::clear_wireless_networks()),
            |script, network| script.and_then(network),
        )
    }
}
