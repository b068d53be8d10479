use thiserror::Error;

/// Contract violations raised by [`Optional`](crate::option::Optional) operations. These are
/// programming errors, not transient failures; there is nothing to retry.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionalError {
  /// A value was extracted from an empty `Optional` without a fallback.
  #[error("No value present.")]
  NoValuePresent,
  /// A present `Optional` was requested for an absent value.
  #[error("The value is absent.")]
  AbsentValue,
}
