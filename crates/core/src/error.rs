/// Domain-level errors returned by the service layer.
///
/// Storage and repository failures never cross this boundary in detail:
/// anything that is not an absent record is logged where it happens and
/// collapsed into [`CoreError::Internal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Something went wrong")]
    Internal,
}
