use thiserror::Error;

/// Failures reported by [`Tree`](crate::Tree) and [`Cursor`](crate::Cursor) operations. All
/// of them are deterministic: retrying the same call on the same tree fails the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// `minimum` or `maximum` was called on a tree with no nodes.
    #[error("the tree is empty")]
    EmptyTree,
    /// No node holds the requested key.
    #[error("no node holds the requested key")]
    KeyNotFound,
    /// The cursor is at the end position, so it has no key and cannot move.
    #[error("the cursor is at the end position")]
    InvalidCursor,
}
