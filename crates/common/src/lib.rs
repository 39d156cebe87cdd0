/**
 * Snapshot, backup, and restore of the
 *  document tree. Memento blobs plus the
 *  durable store and its caretaker.
 */
pub mod backup;
/**
 * Reversible operations over the file system
 *  and the linear undo/redo history that
 *  drives them.
 */
pub mod command;
/**
 * The documents stored at tree nodes:
 *  folders and files with their extensions,
 *  content, and accessibility state.
 */
pub mod document;
/**
 * The personal file system facade and its
 *  collaborators (clipboard, zipper).
 * Enforces the invariants the tree itself
 *  does not: folder-only destinations, cycle
 *  prevention, accessibility locking.
 */
pub mod fs;
/**
 * Arena-backed ordered multiway tree with
 *  positional handles.
 */
pub mod tree;

pub mod prelude {
    pub use crate::backup::{BackupError, BackupStore, Caretaker, Memento};
    pub use crate::command::{Command, CommandError, CommandManager};
    pub use crate::document::{Document, Extension};
    pub use crate::fs::{DescendantFilter, FsError, Pfs};
    pub use crate::tree::{Position, Tree, TreeError};
}
