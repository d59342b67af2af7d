use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The language model replied with something that is not a usable analysis.
    #[error("Malformed analysis response: {0}")]
    MalformedAnalysis(String),
}
