#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The selector has no language.
    InvalidSelection,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidSelection => "Choose a language to practice.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

