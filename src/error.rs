pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Form/field parsing errors
    #[error("{0}")]
    ParsingError(String),
}
