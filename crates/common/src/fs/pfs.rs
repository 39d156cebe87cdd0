use std::cmp::Reverse;

use uuid::Uuid;

use crate::backup::Memento;
use crate::document::{Document, Extension};
use crate::tree::{Position, Tree, TreeError};

use super::clipboard::Clipboard;
use super::zipper::Zipper;

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("invalid move: {0}")]
    InvalidMove(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("invalid file: {0}")]
    InvalidFile(String),
    #[error("document not found: {0}")]
    DocumentNotFound(String),
    #[error("document is locked: {0}")]
    LockedDocument(String),
}

/// Kind filter for [`Pfs::direct_descendants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescendantFilter {
    Files,
    Folders,
    All,
}

/// The personal file system facade.
///
/// Owns the document tree, the clipboard, and the zipper, and implements
/// every structural and content operation together with the invariants
/// the tree itself does not enforce: folder-only paste/move destinations,
/// cycle prevention, and accessibility locking.
#[derive(Debug, Clone)]
pub struct Pfs {
    tree: Tree<Document>,
    clipboard: Clipboard,
    zipper: Zipper,
    // Source of the per-file change sequence; strictly increasing while
    // this instance lives, re-seeded when a foreign tree is adopted.
    edit_seq: u64,
}

impl Pfs {
    /// Build a file system with the given root document.
    pub fn new(root: Document) -> Self {
        Pfs {
            tree: Tree::with_root(root),
            clipboard: Clipboard::new(),
            zipper: Zipper,
            edit_seq: 0,
        }
    }

    /// Adopt an existing tree, e.g. one loaded from a snapshot.
    pub fn from_tree(tree: Tree<Document>) -> Self {
        let edit_seq = Self::max_change_seq(&tree);
        Pfs {
            tree,
            clipboard: Clipboard::new(),
            zipper: Zipper,
            edit_seq,
        }
    }

    fn max_change_seq(tree: &Tree<Document>) -> u64 {
        tree.elements()
            .filter_map(|doc| doc.file_data().map(|data| data.change_seq))
            .max()
            .unwrap_or(0)
    }

    /// Read-only view of the underlying tree.
    pub fn tree(&self) -> &Tree<Document> {
        &self.tree
    }

    pub fn root(&self) -> Option<Position> {
        self.tree.root()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    fn checked_name(name: &str) -> Result<(), FsError> {
        if name.trim().is_empty() {
            return Err(FsError::InvalidName("name must not be empty".to_string()));
        }
        Ok(())
    }

    // ---- structural operations ----

    /// Create an empty `.txt` file under `parent`.
    pub fn create_file(&mut self, name: &str, parent: Position) -> Result<Position, FsError> {
        self.create_file_with_extension(name, Extension::default(), parent)
    }

    /// Create an empty file with an explicit extension under `parent`.
    pub fn create_file_with_extension(
        &mut self,
        name: &str,
        extension: Extension,
        parent: Position,
    ) -> Result<Position, FsError> {
        Self::checked_name(name)?;
        let position = self
            .tree
            .insert(Some(parent), Document::file(name, extension))?;
        tracing::debug!(name, %extension, "created file");
        Ok(position)
    }

    /// Create a folder under `parent`.
    pub fn create_folder(&mut self, name: &str, parent: Position) -> Result<Position, FsError> {
        Self::checked_name(name)?;
        let position = self.tree.insert(Some(parent), Document::folder(name))?;
        tracing::debug!(name, "created folder");
        Ok(position)
    }

    /// Rename the document at `position`. Descendant names are untouched.
    pub fn rename(&mut self, position: Position, new_name: &str) -> Result<(), FsError> {
        Self::checked_name(new_name)?;
        let document = self.tree.get_mut(position)?;
        let old_name = document.name().to_string();
        document.rename(new_name);
        tracing::debug!(from = %old_name, to = %new_name, "renamed document");
        Ok(())
    }

    /// Detach the subtree at `position`; everything under it becomes
    /// unreachable from the root.
    pub fn remove(&mut self, position: Position) -> Result<Document, FsError> {
        let document = self.tree.remove(position)?;
        tracing::debug!(name = %document.name(), "removed document");
        Ok(document)
    }

    /// Replace a file's content, bumping its change counter.
    ///
    /// Fails with [`FsError::LockedDocument`] when the file is zipped or
    /// locked, and [`FsError::InvalidFile`] when the target is a folder.
    pub fn edit(&mut self, position: Position, new_content: &str) -> Result<(), FsError> {
        let document = self.tree.get_mut(position)?;
        let name = document.name().to_string();
        if !document.is_accessible() {
            return Err(FsError::LockedDocument(format!("'{name}' is zipped")));
        }
        match document.file_data_mut() {
            None => Err(FsError::InvalidFile(format!("'{name}' is not a file"))),
            Some(data) if data.locked => {
                Err(FsError::LockedDocument(format!("'{name}' is locked")))
            }
            Some(data) => {
                self.edit_seq += 1;
                data.content = new_content.to_string();
                data.change_seq = self.edit_seq;
                document.touch();
                tracing::debug!(name = %name, "edited file");
                Ok(())
            }
        }
    }

    /// A file's content.
    pub fn content(&self, position: Position) -> Result<&str, FsError> {
        let document = self.tree.get(position)?;
        document
            .file_data()
            .map(|data| data.content.as_str())
            .ok_or_else(|| FsError::InvalidFile(format!("'{}' is not a file", document.name())))
    }

    /// Stage `position` in the clipboard. The subtree is not duplicated
    /// until paste.
    pub fn copy(&mut self, position: Position) -> Result<Position, FsError> {
        self.tree.get(position)?;
        self.clipboard.set(position);
        Ok(position)
    }

    /// Paste the clipboard contents under `destination`.
    pub fn paste(&mut self, destination: Position) -> Result<Position, FsError> {
        let source = self
            .clipboard
            .get()
            .ok_or_else(|| FsError::DocumentNotFound("clipboard is empty".to_string()))?;
        self.paste_from(destination, source)
    }

    /// Recursively rebuild a structural copy of the subtree at `source`
    /// under `destination`.
    ///
    /// The destination must be a folder and must not be the source itself
    /// or a descendant of it; allowing either would splice a subtree into
    /// itself.
    pub fn paste_from(
        &mut self,
        destination: Position,
        source: Position,
    ) -> Result<Position, FsError> {
        if !self.tree.get(destination)?.is_folder() {
            return Err(FsError::InvalidDocument(
                "paste destination must be a folder".to_string(),
            ));
        }
        if destination == source || self.tree.is_ancestor(destination, source)? {
            return Err(FsError::InvalidMove(
                "cannot paste a subtree into itself".to_string(),
            ));
        }
        let pasted = self.paste_subtree(destination, source)?;
        tracing::debug!(name = %self.tree.get(pasted)?.name(), "pasted subtree");
        Ok(pasted)
    }

    fn paste_subtree(
        &mut self,
        destination: Position,
        source: Position,
    ) -> Result<Position, FsError> {
        let duplicate = self.tree.get(source)?.copy_of();
        let was_folder = duplicate.is_folder();
        let new_position = self.tree.insert(Some(destination), duplicate)?;
        if was_folder {
            for child in self.tree.children(source)? {
                self.paste_subtree(new_position, child)?;
            }
        }
        Ok(new_position)
    }

    /// Re-parent the subtree at `source` under `destination`.
    pub fn move_document(
        &mut self,
        source: Position,
        destination: Position,
    ) -> Result<(), FsError> {
        if !self.tree.get(destination)?.is_folder() {
            return Err(FsError::InvalidMove(
                "move destination must be a folder".to_string(),
            ));
        }
        if destination == source || self.tree.is_ancestor(destination, source)? {
            return Err(FsError::InvalidMove(
                "cannot move a subtree into itself".to_string(),
            ));
        }
        self.tree.move_to(source, destination)?;
        tracing::debug!(name = %self.tree.get(source)?.name(), "moved document");
        Ok(())
    }

    // ---- zip operations ----

    pub fn zip_folder(&mut self, position: Position) -> Result<(), FsError> {
        self.zipper.zip_folder(&mut self.tree, position)
    }

    pub fn unzip_folder(&mut self, position: Position) -> Result<(), FsError> {
        self.zipper.unzip_folder(&mut self.tree, position)
    }

    pub fn zip_file(&mut self, position: Position) -> Result<(), FsError> {
        self.zipper.zip_file(&mut self.tree, position)
    }

    pub fn unzip_file(&mut self, position: Position) -> Result<(), FsError> {
        self.zipper.unzip_file(&mut self.tree, position)
    }

    /// Accessibility flags across the subtree at `position`, target
    /// included. Folder zipping is not an involution for documents that
    /// were already inaccessible, so reversers record the exact flags
    /// and replay them instead of toggling.
    pub(crate) fn accessibility_snapshot(
        &self,
        position: Position,
    ) -> Result<Vec<(Position, bool)>, FsError> {
        let mut flags = Vec::new();
        for current in self.subtree(position)? {
            flags.push((current, self.tree.get(current)?.is_accessible()));
        }
        Ok(flags)
    }

    pub(crate) fn restore_accessibility(
        &mut self,
        flags: &[(Position, bool)],
    ) -> Result<(), FsError> {
        for &(position, accessible) in flags {
            self.tree.get_mut(position)?.set_accessible(accessible);
        }
        Ok(())
    }

    // ---- queries ----

    /// Depth-first search for the first document named `name`.
    pub fn find(&self, name: &str) -> Option<Position> {
        let root = self.tree.root()?;
        self.find_under(root, name)
    }

    fn find_under(&self, position: Position, name: &str) -> Option<Position> {
        let document = self.tree.get(position).ok()?;
        if document.name() == name {
            return Some(position);
        }
        for child in self.tree.children(position).ok()? {
            if let Some(found) = self.find_under(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Locate a document by its identity.
    pub fn find_by_id(&self, id: Uuid) -> Option<Position> {
        self.tree
            .positions()
            .find(|&position| matches!(self.tree.get(position), Ok(doc) if doc.id() == id))
    }

    /// Direct children of a folder, optionally filtered by kind.
    pub fn direct_descendants(
        &self,
        directory: Position,
        filter: DescendantFilter,
    ) -> Result<Vec<Position>, FsError> {
        let document = self.tree.get(directory)?;
        if !document.is_folder() {
            return Err(FsError::InvalidDocument(format!(
                "'{}' is not a folder",
                document.name()
            )));
        }
        let mut descendants = Vec::new();
        for child in self.tree.children(directory)? {
            let child_doc = self.tree.get(child)?;
            let keep = match filter {
                DescendantFilter::Files => child_doc.is_file(),
                DescendantFilter::Folders => child_doc.is_folder(),
                DescendantFilter::All => true,
            };
            if keep {
                descendants.push(child);
            }
        }
        Ok(descendants)
    }

    /// True iff `folder` has a direct child with the given identity.
    pub fn has_child(&self, folder: Position, id: Uuid) -> Result<bool, FsError> {
        Ok(self
            .direct_descendants(folder, DescendantFilter::All)?
            .into_iter()
            .any(|child| matches!(self.tree.get(child), Ok(doc) if doc.id() == id)))
    }

    fn subtree(&self, position: Position) -> Result<Vec<Position>, FsError> {
        let mut collected = Vec::new();
        let mut stack = vec![position];
        while let Some(current) = stack.pop() {
            self.tree.get(current)?;
            stack.extend(self.tree.children(current)?);
            collected.push(current);
        }
        Ok(collected)
    }

    /// Total byte size of all files at or beneath `position`.
    pub fn total_size(&self, position: Position) -> Result<u64, FsError> {
        let mut total = 0;
        for current in self.subtree(position)? {
            let document = self.tree.get(current)?;
            if let Some(data) = document.file_data() {
                total += data.content.len() as u64;
            }
        }
        Ok(total)
    }

    /// Number of documents strictly beneath `position`.
    pub fn descendant_count(&self, position: Position) -> Result<usize, FsError> {
        Ok(self.subtree(position)?.len() - 1)
    }

    /// The `n` most recently created documents, newest first. Timestamp
    /// ties resolve to the later-created document.
    pub fn last_created(&self, n: usize) -> Vec<Position> {
        let mut positions: Vec<Position> = self.tree.positions().collect();
        positions.sort_by_key(|&position| {
            let created = self
                .tree
                .get(position)
                .map(|doc| doc.created_at())
                .unwrap_or_default();
            Reverse((created, position.index))
        });
        positions.truncate(n);
        positions
    }

    /// The `n` most recently changed files, newest first. Files edited in
    /// the same second are ordered by their change sequence, so the later
    /// edit always ranks first.
    pub fn last_changed(&self, n: usize) -> Vec<Position> {
        let mut files: Vec<Position> = self
            .tree
            .positions()
            .filter(|&position| matches!(self.tree.get(position), Ok(doc) if doc.is_file()))
            .collect();
        files.sort_by_key(|&position| {
            let (changed, seq) = self
                .tree
                .get(position)
                .ok()
                .and_then(|doc| doc.file_data().map(|data| (data.changed_at, data.change_seq)))
                .unwrap_or_default();
            Reverse((changed, seq, position.index))
        });
        files.truncate(n);
        files
    }

    /// Number of documents reachable from the root.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn height(&self) -> i64 {
        self.tree.height()
    }

    /// Indented pre-order rendering of the hierarchy.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.tree.root() {
            self.render_level(root, 0, &mut out);
        }
        out
    }

    fn render_level(&self, position: Position, level: usize, out: &mut String) {
        if let Ok(document) = self.tree.get(position) {
            for _ in 0..level {
                out.push_str("  ");
            }
            if level > 0 {
                out.push_str("- ");
            }
            out.push_str(&document.to_string());
            out.push('\n');
        }
        if let Ok(children) = self.tree.children(position) {
            for child in children {
                self.render_level(child, level + 1, out);
            }
        }
    }

    // ---- snapshots (originator) ----

    /// Capture an opaque deep-copy snapshot of the whole tree.
    pub fn save_state(&self) -> Memento {
        Memento::capture(&self.tree)
    }

    /// Replace the live tree with the one held by a snapshot.
    pub fn set_state(&mut self, memento: Memento) {
        self.tree = memento.into_tree();
        self.edit_seq = self.edit_seq.max(Self::max_change_seq(&self.tree));
        self.clipboard.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_of(fs: &Pfs) -> Position {
        fs.root().unwrap()
    }

    fn sample() -> Pfs {
        Pfs::new(Document::folder("root"))
    }

    #[test]
    fn create_and_find_by_name() {
        let mut fs = sample();
        let root = root_of(&fs);
        fs.create_file("notes", root).unwrap();
        let found = fs.find("notes").unwrap();
        assert_eq!(fs.tree().get(found).unwrap().name(), "notes");
        assert!(fs.find("missing").is_none());
    }

    #[test]
    fn create_rejects_empty_name() {
        let mut fs = sample();
        let root = root_of(&fs);
        assert!(matches!(
            fs.create_folder("  ", root),
            Err(FsError::InvalidName(_))
        ));
    }

    #[test]
    fn find_by_id_locates_documents() {
        let mut fs = sample();
        let root = root_of(&fs);
        let position = fs.create_file("notes", root).unwrap();
        let id = fs.tree().get(position).unwrap().id();
        assert_eq!(fs.find_by_id(id), Some(position));
        assert!(fs.find_by_id(Uuid::new_v4()).is_none());
    }

    #[test]
    fn rename_changes_only_the_target() {
        let mut fs = sample();
        let root = root_of(&fs);
        let folder = fs.create_folder("docs", root).unwrap();
        let file = fs.create_file("draft", folder).unwrap();
        fs.rename(folder, "documents").unwrap();
        assert_eq!(fs.tree().get(folder).unwrap().name(), "documents");
        assert_eq!(fs.tree().get(file).unwrap().name(), "draft");
    }

    #[test]
    fn remove_makes_subtree_unfindable() {
        let mut fs = sample();
        let root = root_of(&fs);
        let folder = fs.create_folder("docs", root).unwrap();
        fs.create_file("draft", folder).unwrap();
        let before = fs.size();
        fs.remove(folder).unwrap();
        assert!(fs.find("docs").is_none());
        assert!(fs.find("draft").is_none());
        assert_eq!(before - fs.size(), 2);
    }

    #[test]
    fn edit_updates_content_and_counter() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        fs.edit(file, "hello").unwrap();
        assert_eq!(fs.content(file).unwrap(), "hello");
        assert_eq!(fs.tree().get(file).unwrap().file_data().unwrap().changes, 1);
    }

    #[test]
    fn edit_rejects_folders_and_zipped_files() {
        let mut fs = sample();
        let root = root_of(&fs);
        let folder = fs.create_folder("docs", root).unwrap();
        let file = fs.create_file("notes", folder).unwrap();
        assert!(matches!(
            fs.edit(folder, "nope"),
            Err(FsError::InvalidFile(_))
        ));
        fs.zip_folder(folder).unwrap();
        assert!(matches!(
            fs.edit(file, "nope"),
            Err(FsError::LockedDocument(_))
        ));
        fs.unzip_folder(folder).unwrap();
        fs.edit(file, "fine now").unwrap();
    }

    #[test]
    fn edit_rejects_locked_files() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        fs.tree.get_mut(file).unwrap().file_data_mut().unwrap().locked = true;
        assert!(matches!(
            fs.edit(file, "nope"),
            Err(FsError::LockedDocument(_))
        ));
    }

    #[test]
    fn paste_builds_an_independent_deep_copy() {
        let mut fs = sample();
        let root = root_of(&fs);
        let source = fs.create_folder("src", root).unwrap();
        let original_file = fs.create_file("main", source).unwrap();
        fs.edit(original_file, "fn main() {}").unwrap();
        let destination = fs.create_folder("dst", root).unwrap();

        fs.copy(source).unwrap();
        let pasted = fs.paste(destination).unwrap();

        let pasted_doc = fs.tree().get(pasted).unwrap();
        assert_eq!(pasted_doc.name(), "src_copy");
        assert_ne!(pasted_doc.id(), fs.tree().get(source).unwrap().id());

        let pasted_file = fs.find("main_copy").unwrap();
        assert_eq!(fs.content(pasted_file).unwrap(), "fn main() {}");

        // mutating the copy leaves the original alone
        fs.edit(pasted_file, "changed").unwrap();
        assert_eq!(fs.content(original_file).unwrap(), "fn main() {}");
    }

    #[test]
    fn paste_preserves_shape() {
        let mut fs = sample();
        let root = root_of(&fs);
        let source = fs.create_folder("src", root).unwrap();
        let inner = fs.create_folder("inner", source).unwrap();
        fs.create_file("a", source).unwrap();
        fs.create_file("b", inner).unwrap();
        let destination = fs.create_folder("dst", root).unwrap();

        fs.copy(source).unwrap();
        let pasted = fs.paste(destination).unwrap();
        assert_eq!(fs.descendant_count(pasted).unwrap(), 3);
    }

    #[test]
    fn paste_into_source_subtree_is_rejected() {
        let mut fs = sample();
        let root = root_of(&fs);
        let source = fs.create_folder("src", root).unwrap();
        let inner = fs.create_folder("inner", source).unwrap();

        fs.copy(source).unwrap();
        assert!(matches!(fs.paste(source), Err(FsError::InvalidMove(_))));
        assert!(matches!(fs.paste(inner), Err(FsError::InvalidMove(_))));
        // pasting into the source's own parent is fine
        fs.paste(root).unwrap();
        assert!(fs.find("src_copy").is_some());
    }

    #[test]
    fn paste_requires_folder_destination_and_clipboard() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        assert!(matches!(
            fs.paste(root),
            Err(FsError::DocumentNotFound(_))
        ));
        fs.copy(file).unwrap();
        assert!(matches!(
            fs.paste(file),
            Err(FsError::InvalidDocument(_))
        ));
    }

    #[test]
    fn move_reparents_without_changing_size() {
        let mut fs = sample();
        let root = root_of(&fs);
        let docs = fs.create_folder("docs", root).unwrap();
        let file = fs.create_file("notes", root).unwrap();
        let before = fs.size();
        fs.move_document(file, docs).unwrap();
        assert_eq!(fs.size(), before);
        assert_eq!(fs.tree().parent(file).unwrap(), Some(docs));
    }

    #[test]
    fn move_into_own_subtree_is_rejected() {
        let mut fs = sample();
        let root = root_of(&fs);
        let outer = fs.create_folder("outer", root).unwrap();
        let inner = fs.create_folder("inner", outer).unwrap();
        assert!(matches!(
            fs.move_document(outer, inner),
            Err(FsError::InvalidMove(_))
        ));
        assert!(matches!(
            fs.move_document(outer, outer),
            Err(FsError::InvalidMove(_))
        ));
    }

    #[test]
    fn move_requires_folder_destination() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        let other = fs.create_file("other", root).unwrap();
        assert!(matches!(
            fs.move_document(other, file),
            Err(FsError::InvalidMove(_))
        ));
    }

    #[test]
    fn direct_descendants_filters_by_kind() {
        let mut fs = sample();
        let root = root_of(&fs);
        fs.create_file("a", root).unwrap();
        fs.create_file("b", root).unwrap();
        fs.create_folder("c", root).unwrap();
        assert_eq!(
            fs.direct_descendants(root, DescendantFilter::Files)
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            fs.direct_descendants(root, DescendantFilter::Folders)
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            fs.direct_descendants(root, DescendantFilter::All)
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn total_size_sums_nested_files() {
        let mut fs = sample();
        let root = root_of(&fs);
        let docs = fs.create_folder("docs", root).unwrap();
        let inner = fs.create_folder("inner", docs).unwrap();
        let a = fs.create_file("a", docs).unwrap();
        let b = fs.create_file("b", inner).unwrap();
        fs.edit(a, "12345").unwrap();
        fs.edit(b, "123").unwrap();
        assert_eq!(fs.total_size(docs).unwrap(), 8);
        assert_eq!(fs.total_size(b).unwrap(), 3);
    }

    #[test]
    fn last_created_is_newest_first() {
        let mut fs = sample();
        let root = root_of(&fs);
        fs.create_file("first", root).unwrap();
        fs.create_file("second", root).unwrap();
        fs.create_file("third", root).unwrap();
        let names: Vec<String> = fs
            .last_created(2)
            .into_iter()
            .map(|p| fs.tree().get(p).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["third", "second"]);
    }

    #[test]
    fn last_changed_tracks_edits() {
        let mut fs = sample();
        let root = root_of(&fs);
        let a = fs.create_file("a", root).unwrap();
        let b = fs.create_file("b", root).unwrap();
        fs.edit(b, "x").unwrap();
        fs.edit(a, "y").unwrap();
        let names: Vec<String> = fs
            .last_changed(2)
            .into_iter()
            .map(|p| fs.tree().get(p).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn last_changed_orders_same_second_edits_by_recency() {
        let mut fs = sample();
        let root = root_of(&fs);
        let a = fs.create_file("a", root).unwrap();
        let b = fs.create_file("b", root).unwrap();
        let c = fs.create_file("c", root).unwrap();
        // all edits land within the same timestamp second; the change
        // sequence alone must decide the order
        fs.edit(c, "1").unwrap();
        fs.edit(a, "2").unwrap();
        fs.edit(b, "3").unwrap();
        fs.edit(a, "4").unwrap();
        let names: Vec<String> = fs
            .last_changed(3)
            .into_iter()
            .map(|p| fs.tree().get(p).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn edit_sequence_survives_snapshot_restore() {
        let mut fs = sample();
        let root = root_of(&fs);
        let a = fs.create_file("a", root).unwrap();
        let b = fs.create_file("b", root).unwrap();
        fs.edit(a, "first").unwrap();
        let snapshot = fs.save_state();
        fs.set_state(snapshot);
        // an edit after restore must still rank above the pre-snapshot one
        fs.edit(b, "second").unwrap();
        let names: Vec<String> = fs
            .last_changed(2)
            .into_iter()
            .map(|p| fs.tree().get(p).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn snapshot_restore_recovers_prior_state() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        fs.edit(file, "before").unwrap();

        let snapshot = fs.save_state();
        fs.edit(file, "after").unwrap();
        fs.remove(file).unwrap();
        assert!(fs.find("notes").is_none());

        fs.set_state(snapshot);
        let restored = fs.find("notes").unwrap();
        assert_eq!(fs.content(restored).unwrap(), "before");
    }

    #[test]
    fn snapshot_is_a_deep_copy() {
        let mut fs = sample();
        let root = root_of(&fs);
        let file = fs.create_file("notes", root).unwrap();
        fs.edit(file, "original").unwrap();

        let snapshot = fs.save_state();
        // mutating after the save must not bleed into the snapshot
        fs.edit(file, "mutated").unwrap();
        fs.set_state(snapshot);
        assert_eq!(fs.content(fs.find("notes").unwrap()).unwrap(), "original");
    }

    #[test]
    fn render_indents_by_level() {
        let mut fs = sample();
        let root = root_of(&fs);
        let docs = fs.create_folder("docs", root).unwrap();
        fs.create_file("draft", docs).unwrap();
        let rendered = fs.render();
        assert_eq!(rendered, "root\n  - docs\n    - draft.txt\n");
    }
}
