use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas geometry: width={width}, height={height}, margin={margin}")]
    InvalidGeometry { width: f64, height: f64, margin: f64 },

    #[error("invalid year axis: {0}")]
    InvalidYearAxis(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("name `{0}` is not present in the lookup")]
    UnknownName(String),

    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
