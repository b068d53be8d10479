//! A value-presence container: [`Optional`](option::Optional) explicitly represents "a value of
//! type `T` is present" or "no value is present", making absence a first-class, checked concept
//! at call sites.

pub mod error;
pub mod option;

pub use error::OptionalError;
pub use option::Optional;
