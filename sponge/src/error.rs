use thiserror::Error;

/// Misuse of the sponge lifecycle `inject* -> flip -> extract*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpongeError {
    #[error("cannot inject into a sponge which has already been flipped")]
    InjectAfterFlip,
    #[error("cannot extract from a sponge which has not been flipped")]
    ExtractBeforeFlip,
    #[error("the sponge has already been flipped")]
    AlreadyFlipped,
    #[error("no randomness available from the operating system")]
    EntropyUnavailable,
}
