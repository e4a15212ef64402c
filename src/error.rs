use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Message is empty. Describe the task you want to create (e.g., 'remind me to call the client tomorrow').")]
    EmptyInput,
}
