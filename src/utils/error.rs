use thiserror::Error;

/// Failures that can escape the library.
///
/// Bad user input never lands here: validators report problems as values.
#[derive(Debug, Error)]
pub enum MrzError {
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
