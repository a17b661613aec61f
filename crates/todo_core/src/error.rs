use thiserror::Error;

/// Which kind of name a validation ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Todo,
}

/// Reasons a list or todo name is rejected.
///
/// Both are recoverable by the user: the caller surfaces the message and
/// re-presents the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The list name must be unique")]
    DuplicateName,

    #[error("{}", length_message(.0))]
    InvalidLength(NameKind),
}

impl ValidationError {
    /// Short machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName => "duplicate_name",
            Self::InvalidLength(_) => "invalid_length",
        }
    }
}

fn length_message(kind: &NameKind) -> &'static str {
    match kind {
        NameKind::List => "The list name must have between 1 and 50 characters",
        NameKind::Todo => "The todo must have between 1 and 50 characters",
    }
}
