use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The value is not one of the supported locale codes.
    #[error("unsupported locale `{0}`")]
    UnsupportedLocale(String),

    #[error("fluent error: {0}")]
    Fluent(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
