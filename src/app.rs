use anyhow::{Context, Result};
use log::{info, warn};

use crate::{
    command::{InterfaceName, NetworkScript, ShellCommand},
    config::Config,
    executor::Executor,
    form::WifiForm,
};

pub struct App {
    pub config: Config,
    pub interface: InterfaceName,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let interface = config.interface()?;
        Ok(Self { config, interface })
    }

    /// Compose the script for a submitted form without running it
    pub fn script(&self, form: &WifiForm) -> Result<ShellCommand> {
        let networks = form
            .networks(&self.interface)
            .context("Can not read the submitted networks")?;

        let mut script = NetworkScript::from_scripts_dir(&self.config.scripts_dir);
        for network in &networks {
            info!(
                "Adding network {:?} on {} with priority {:?}",
                network.ssid, network.interface, network.priority
            );
            script.push(network);
        }

        if script.is_empty() {
            warn!("No networks submitted, all configured networks will be removed");
        }

        Ok(script.to_command())
    }

    /// Apply a form submission. Returns the script that ran, or `None` when
    /// the form was not submitted.
    pub async fn apply(
        &self,
        form: &WifiForm,
        executor: &dyn Executor,
    ) -> Result<Option<ShellCommand>> {
        if !form.is_submitted() {
            info!("Form not submitted, nothing to do");
            return Ok(None);
        }

        let script = self.script(form)?;
        let output = executor
            .run(&script)
            .await
            .context("Applying the wireless networks failed")?;

        if !output.stderr.is_empty() {
            warn!("{}", output.stderr.trim_end());
        }

        Ok(Some(script))
    }
}
