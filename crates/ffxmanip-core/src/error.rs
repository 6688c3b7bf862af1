use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManipError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManipError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("catalogue error: {0}")]
    Catalogue(String),

    /// The observed damage values match no catalogued seed. Not fatal:
    /// the caller should re-collect the observation.
    #[error("observed damage values match no catalogued seed")]
    SeedNotInCatalogue,

    /// All 256 mystery-byte candidates were checked without a hit. Not
    /// fatal: restart the game session to reroll the byte.
    #[error("no mystery byte reproduces the observed seed")]
    NoByteMatches,
}
