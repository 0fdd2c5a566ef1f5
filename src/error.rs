use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to build thread pool: {0}")]
    Executor(#[from] rayon::ThreadPoolBuildError),
}

impl RenderError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RenderError::InvalidConfig(reason.into())
    }
}
