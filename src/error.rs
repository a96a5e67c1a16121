use thiserror::Error;

/// Failures surfaced by the rewards core. Transport failures carry the
/// endpoint that failed; validation failures carry the offending value.
#[derive(Debug, Error)]
pub enum RewardsError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("invalid {field}: {value}")]
    Validation { field: &'static str, value: String },
}

impl RewardsError {
    pub fn transport(endpoint: &str, message: impl ToString) -> Self {
        RewardsError::Transport {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validation(field: &'static str, value: impl ToString) -> Self {
        RewardsError::Validation {
            field,
            value: value.to_string(),
        }
    }
}
