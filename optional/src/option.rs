use std::fmt;

use crate::error::OptionalError;

/// Zero-or-one value of type `T`, distinguishing absence from a legitimately sparse value such as
/// an empty string, `0`, or `false`.
///
/// Absence is carried by the discriminant, never by inspecting the stored value: a present
/// `Optional` holds a `T` and structurally cannot wrap absence. `Optional` is immutable after
/// construction; extracting and transforming combinators consume `self`, observing ones borrow it,
/// and [`as_ref`](Self::as_ref) bridges the two.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  /// No value is present.
  Empty,
  /// A value is present.
  Present(T),
}

impl<T> Optional<T> {
  /// Returns the canonical empty `Optional`: no value is present.
  #[inline]
  pub const fn empty() -> Self {
    Self::Empty
  }

  /// Returns an `Optional` describing `value`. The value is present by construction; `T` cannot
  /// express absence.
  #[inline]
  pub const fn of(value: T) -> Self {
    Self::Present(value)
  }

  /// Returns an `Optional` describing the value of `value` if it is `Some`, otherwise the empty
  /// `Optional`.
  #[inline]
  pub fn of_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::of(value),
      None => Self::empty(),
    }
  }

  /// Returns an `Optional` describing the value of `value`, or fails with
  /// [`OptionalError::AbsentValue`] if `value` is `None`.
  ///
  /// This is the fallible construction boundary for inputs whose presence is only known at run
  /// time; prefer [`of`](Self::of) when presence is known statically.
  #[inline]
  pub fn try_of(value: Option<T>) -> Result<Self, OptionalError> {
    match value {
      Some(value) => Ok(Self::of(value)),
      None => Err(OptionalError::AbsentValue),
    }
  }


  /// Returns `true` if a value is present.
  #[inline]
  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present(_))
  }

  /// Returns `true` if no value is present.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    !self.is_present()
  }


  /// If a value is present, performs `action` with the value, otherwise does nothing.
  #[inline]
  pub fn if_present(&self, action: impl FnOnce(&T)) {
    if let Self::Present(value) = self {
      action(value);
    }
  }

  /// If a value is present, performs `action` with the value, otherwise performs `empty_action`.
  #[inline]
  pub fn if_present_or_else(&self, action: impl FnOnce(&T), empty_action: impl FnOnce()) {
    match self {
      Self::Present(value) => action(value),
      Self::Empty => empty_action(),
    }
  }


  /// If a value is present and it matches `predicate`, returns this `Optional` unchanged,
  /// otherwise returns the empty `Optional`. The predicate is never invoked on an empty
  /// `Optional`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) if predicate(&value) => Self::Present(value),
      _ => Self::empty(),
    }
  }

  /// If a value is present, returns an `Optional` describing the result of applying `mapper` to
  /// the value, otherwise returns the empty `Optional` without invoking `mapper`.
  #[inline]
  pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::of(mapper(value)),
      Self::Empty => Optional::empty(),
    }
  }

  /// Like [`map`](Self::map) for mappers that may not produce a value: the result is wrapped as
  /// if by [`of_nullable`](Self::of_nullable), so a `None` result collapses to the empty
  /// `Optional` instead of being an error.
  #[inline]
  pub fn map_nullable<U>(self, mapper: impl FnOnce(T) -> Option<U>) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::of_nullable(mapper(value)),
      Self::Empty => Optional::empty(),
    }
  }

  /// If a value is present, returns the result of applying the `Optional`-bearing `mapper` to the
  /// value, otherwise returns the empty `Optional` without invoking `mapper`.
  ///
  /// Unlike [`map`](Self::map), the mapper's result is returned directly, never wrapped in an
  /// additional `Optional`.
  #[inline]
  pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => mapper(value),
      Self::Empty => Optional::empty(),
    }
  }


  /// If a value is present, returns this `Optional` without invoking `supplier`, otherwise
  /// returns the `Optional` produced by `supplier`.
  #[inline]
  pub fn or(self, supplier: impl FnOnce() -> Self) -> Self {
    if self.is_present() { self } else { supplier() }
  }

  /// Returns the value if present, otherwise returns `other`.
  #[inline]
  pub fn or_else(self, other: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => other,
    }
  }

  /// Returns the value if present, otherwise returns the result of `supplier`. The supplier is
  /// never invoked on a present `Optional`.
  #[inline]
  pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => supplier(),
    }
  }

  /// Returns the value if present, otherwise fails with [`OptionalError::NoValuePresent`].
  #[inline]
  pub fn or_else_throw(self) -> Result<T, OptionalError> {
    self.or_else_throw_with(OptionalError::NoValuePresent)
  }

  /// Returns the value if present, otherwise fails with `error`, propagated verbatim.
  #[inline]
  pub fn or_else_throw_with<E>(self, error: E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Empty => Err(error),
    }
  }

  /// Returns the value if present, otherwise fails with [`OptionalError::NoValuePresent`].
  ///
  /// The preferred spelling is [`or_else_throw`](Self::or_else_throw).
  #[inline]
  pub fn get(self) -> Result<T, OptionalError> {
    self.or_else_throw()
  }


  /// Converts into an `Option`. This is the one place absence flows back out as a value: an
  /// absence-permitting fallback is `optional.into_option().or(fallback)`.
  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Empty => None,
    }
  }

  /// Converts from `&Optional<T>` to `Optional<&T>`.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Empty => Optional::Empty,
    }
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self {
    Self::Empty
  }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    Self::of_nullable(value)
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    optional.into_option()
  }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Optional[{}]", value),
      Self::Empty => write!(f, "Optional.empty"),
    }
  }
}
