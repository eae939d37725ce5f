use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Failure reported by the external data source, surfaced verbatim.
    #[error("{0}")]
    Fetch(String),

    #[error("malformed timestamp `{timestamp}`: {source}")]
    MalformedTimestamp {
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("no series matches legend label `{label}`")]
    MissingSeries { label: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
