use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not resolve an action: {0}")]
    Resolve(String),

    #[error("unexpected gateway reply: {0}")]
    BadReply(String),
}
