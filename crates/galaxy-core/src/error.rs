/// Result alias carrying [`GalaxyError`].
pub type Result<T> = std::result::Result<T, GalaxyError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GalaxyError {
    #[error("unknown layout mode `{0}`")]
    UnknownLayout(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidParam { key: String, value: String },
    /// Audio could not be started (permission, codec or gesture policy).
    #[error("audio start failed: {0}")]
    AudioStart(String),
    #[error("audio already started")]
    AudioAlreadyStarted,
    #[error("audio start already in progress")]
    AudioBusy,
}

impl GalaxyError {
    pub fn invalid_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParam {
            key: key.into(),
            value: value.into(),
        }
    }
}
