use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("renderer failure: {0}")]
    Renderer(String),
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}
