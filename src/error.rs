/// Errors that can occur when distributing or inspecting keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The container count is invalid (must be greater than 0).
    InvalidContainerCount,
    /// The key has no canonical textual representation.
    UnsupportedKey,
    /// Two distributions with different container counts cannot be merged.
    ContainerCountMismatch,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidContainerCount => {
                write!(f, "container count must be greater than 0")
            }
            Error::UnsupportedKey => write!(f, "key has no canonical representation"),
            Error::ContainerCountMismatch => {
                write!(f, "distributions have different container counts")
            }
        }
    }
}

impl std::error::Error for Error {}
