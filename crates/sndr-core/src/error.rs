use crate::numeric::Real;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by the shared numeric helpers.
///
/// The stepping loop itself never raises mid-run; callers apply these
/// checks at the boundaries where a bad value should stop the program.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: Real },
}
