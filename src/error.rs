use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no dataset was supplied")]
    MissingDataset,

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render failure: {0}")]
    Render(String),
}
