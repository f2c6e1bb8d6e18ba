use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("hire date '{input}' is not a YYYY-MM-DD date: {source}")]
    InvalidHireDate {
        input: String,
        source: chrono::ParseError,
    },
}
