//! Error types for the session layer.

/// Errors that can occur while coordinating sessions.
///
/// The coordinator itself is infallible once it holds a valid
/// [`SessionKey`](crate::SessionKey); the only failure is being handed
/// no usable session identity in the first place.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session identity was empty or blank. Accepting it would
    /// attach a game to a session no client can ever reach again.
    #[error("session key must not be empty")]
    MissingKey,
}
