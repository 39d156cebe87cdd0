//! The file-system facade and its collaborators.
//!
//! [`Pfs`] owns the tree and enforces every cross-cutting invariant:
//! folder-only destinations, cycle prevention on move/paste, accessibility
//! locking on edit. The [`Clipboard`] stages a position for paste; the
//! [`Zipper`] toggles accessibility across subtrees.

mod clipboard;
mod pfs;
mod zipper;

pub use clipboard::Clipboard;
pub use pfs::{DescendantFilter, FsError, Pfs};
pub use zipper::Zipper;
