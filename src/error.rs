use thiserror::Error;

/// Failures of the draw itself.
///
/// The only way a draw can fail is being asked for with fewer than two
/// participants; it is reported to the caller and never recovered
/// internally. The display text doubles as the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerangeError {
    /// With zero or one participants nobody can give without drawing
    /// themselves.
    #[error("add at least 2 participants to draw (got {0})")]
    TooFewParticipants(usize),
}

/// Rejections raised while admitting names into a
/// [`Roster`](crate::roster::Roster).
///
/// These are recoverable: the caller reports the message and keeps
/// collecting names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The input was empty, or nothing but whitespace, after trimming.
    #[error("type a valid, non-empty name")]
    EmptyName,

    /// The name is already on the list; comparison ignores case.
    #[error("\"{0}\" is already on the list")]
    DuplicateName(String),
}
