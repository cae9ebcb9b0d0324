use thiserror::Error;

/// Errors raised while turning form input into a command or running it.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or a trusted token failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The executor could not start the process.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("`{program}` exited with {}: {stderr}", exit_description(.code))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl Error {
    pub fn missing(field: &str) -> Self {
        Error::InvalidInput(format!("missing field {field}"))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
