//! Error kinds shared by every container in this crate.
//!
//! Operations that take ownership of a value (a payload or a node) report failure with a
//! [`Rejected`] which hands the value back, so a failed call never swallows what the caller
//! passed in.

use std::fmt;

/// The distinct ways an operation on a container can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The container itself is absent.
    ///
    /// Every operation takes its container by reference, so safe code never sees this kind.
    /// It exists so the error space matches the other container libraries' kinds.
    #[error("container is absent")]
    NullContainer,
    /// A required argument is absent or structurally invalid, e.g. a parent path that doesn't
    /// lead to a node.
    #[error("invalid argument")]
    InvalidArgument,
    /// A key-based lookup or removal found no match.
    #[error("no matching element")]
    NotFound,
    /// The target slot is occupied or the key is already present.
    #[error("element already exists")]
    AlreadyExists,
    /// Memory for the operation could not be reserved.
    #[error("memory allocation failed")]
    AllocationFailure,
}

/// A failed operation together with the value it refused to take ownership of.
///
/// # Examples
///
/// ```
/// use ds_tree::bst::Bst;
/// use ds_tree::error::TreeError;
///
/// let mut tree = Bst::natural();
/// tree.insert(1).unwrap();
///
/// let rejected = tree.insert(1).unwrap_err();
/// assert_eq!(rejected.error, TreeError::AlreadyExists);
/// assert_eq!(rejected.into_inner(), 1);
/// ```
#[derive(thiserror::Error)]
#[error("{error}")]
pub struct Rejected<V> {
    /// Why the value was rejected.
    pub error: TreeError,
    /// The value, returned to the caller untouched.
    pub value: V,
}

impl<V> Rejected<V> {
    pub(crate) fn new(error: TreeError, value: V) -> Self {
        Self { error, value }
    }

    /// Gives back the rejected value, dropping the error.
    pub fn into_inner(self) -> V {
        self.value
    }
}

// Manual so that `unwrap_err` and friends work for payloads that aren't `Debug`.
impl<V> fmt::Debug for Rejected<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<V> From<Rejected<V>> for TreeError {
    fn from(rejected: Rejected<V>) -> Self {
        rejected.error
    }
}
