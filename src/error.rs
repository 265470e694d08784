use thiserror::Error;

/// Errors that can occur when loading or persisting a graph's JSON shape.
#[derive(Error, Debug)]
pub enum FlowJsonError {
    #[error("Failed to read flow file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse flow JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when converting an external format into a Keiro
/// `FlowGraph`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid source data: {0}")]
    ValidationError(String),

    #[error("Source node '{missing_node_id}' is referenced by '{referencing_id}' but does not exist in the source data")]
    MissingNode {
        missing_node_id: String,
        referencing_id: String,
    },
}
