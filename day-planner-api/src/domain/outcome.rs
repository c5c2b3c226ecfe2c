/// Successful result of a controller operation.
///
/// Failures (`NotFound`, `ValidationFailed`, `StoreUnavailable`) travel as
/// [`crate::ApiError`] on the `Err` side of an [`crate::ApiResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A payload for the caller.
    Ok(T),
    /// A new resource, with a reference that re-fetches it.
    Created { location: String, value: T },
    /// Success without a payload.
    NoContent,
}

impl<T> Outcome<T> {
    /// Returns the carried payload, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) | Outcome::Created { value, .. } => Some(value),
            Outcome::NoContent => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Created { location, .. } => Some(location),
            _ => None,
        }
    }
}
