use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use strum_macros::{Display, EnumString, VariantNames};
use tokio::process::Command;

use crate::command::ShellCommand;
use crate::error::{Error, Result};
use crate::quote::join;

/// How the privileged script is handed to the operating system
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantNames, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    /// `sudo bash -c <script>` with the script as a single argument
    #[default]
    Argv,
    /// `sh -c "sudo bash -c '<script>'"`, for runners that only take one string
    Shell,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait Executor: Send + Sync {
    async fn run(&self, script: &ShellCommand) -> Result<ExecOutput>;
}

/// Runs scripts through `bash` with elevated rights
#[derive(Debug, Clone)]
pub struct SudoExecutor {
    pub mode: ExecMode,
    pub sudo: Option<String>,
}

impl SudoExecutor {
    pub fn new(mode: ExecMode, sudo: impl Into<String>) -> Self {
        // Already root, sudo would only add a dependency
        let sudo = if is_root() { None } else { Some(sudo.into()) };
        Self { mode, sudo }
    }

    /// The program and arguments that will be spawned for `script`
    pub fn invocation(&self, script: &ShellCommand) -> Vec<String> {
        let mut privileged: Vec<String> = self.sudo.iter().cloned().collect();
        privileged.extend(["bash".to_string(), "-c".to_string()]);

        privileged.push(script.to_string());

        match self.mode {
            ExecMode::Argv => privileged,
            ExecMode::Shell => vec!["sh".to_string(), "-c".to_string(), join(&privileged)],
        }
    }
}

#[async_trait]
impl Executor for SudoExecutor {
    async fn run(&self, script: &ShellCommand) -> Result<ExecOutput> {
        let invocation = self.invocation(script);
        let (program, args) = invocation
            .split_first()
            .ok_or_else(|| Error::InvalidInput("empty invocation".to_string()))?;

        debug!("Spawning {} in {} mode", program, self.mode);

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::ExitStatus {
                program: program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ExecOutput { stdout, stderr })
    }
}

/// Logs the script instead of running it
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

#[async_trait]
impl Executor for DryRun {
    async fn run(&self, script: &ShellCommand) -> Result<ExecOutput> {
        info!("Dry run, not executing {} byte script", script.as_str().len());
        Ok(ExecOutput::default())
    }
}

fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}
