use thiserror::Error;

/// Error when reading a road map or looking up cities in it.
#[derive(Debug, Error)]
pub enum RoadMapError {
    #[error("Invalid road map entry on line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("Invalid distance or coordinate: {0}")]
    InvalidNumber(String),

    #[error("Unknown city: {0}")]
    UnknownCity(String),
}
