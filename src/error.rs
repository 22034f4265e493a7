use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid {kind} payload: {message}")]
    InvalidPayload { kind: &'static str, message: String },

    #[error("malformed json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command: {0}")]
    UnknownChartKind(String),

    #[error("unsupported output format for `{0}` (expected .png or .svg)")]
    UnsupportedOutputFormat(String),

    #[error("{0} output requires building with the `cairo-backend` feature")]
    BackendUnavailable(&'static str),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn payload(kind: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            kind,
            message: message.into(),
        }
    }
}
