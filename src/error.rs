use thiserror::Error;

use crate::kind::Kind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejected call sequences. Both are programmer errors: start a new
/// statement instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The statement kind was configured a second time.
    #[error("statement kind already set to {current}, cannot switch to {requested}")]
    AlreadySet { current: Kind, requested: Kind },

    /// The operation does not apply to the statement kind.
    #[error("{operation} is not allowed for {}", display_kind(.kind))]
    NotAllowed {
        operation: &'static str,
        kind: Option<Kind>,
    },
}

fn display_kind(kind: &Option<Kind>) -> &'static str {
    match kind {
        Some(kind) => kind.as_str(),
        None => "a statement without a kind",
    }
}
