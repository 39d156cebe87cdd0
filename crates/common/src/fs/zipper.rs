use crate::document::Document;
use crate::tree::{Position, Tree};

use super::pfs::FsError;

/// Toggles the accessibility flag across documents.
///
/// Zipping a folder walks its subtree and marks every file inaccessible,
/// then marks the folder itself; intermediate subfolder flags are left
/// alone. The zipper does not reject re-zipping an already-zipped target;
/// the command layer checks accessibility before invoking it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zipper;

impl Zipper {
    pub fn zip_folder(&self, tree: &mut Tree<Document>, position: Position) -> Result<(), FsError> {
        self.set_folder(tree, position, false)
    }

    pub fn unzip_folder(
        &self,
        tree: &mut Tree<Document>,
        position: Position,
    ) -> Result<(), FsError> {
        self.set_folder(tree, position, true)
    }

    pub fn zip_file(&self, tree: &mut Tree<Document>, position: Position) -> Result<(), FsError> {
        self.set_file(tree, position, false)
    }

    pub fn unzip_file(&self, tree: &mut Tree<Document>, position: Position) -> Result<(), FsError> {
        self.set_file(tree, position, true)
    }

    fn set_folder(
        &self,
        tree: &mut Tree<Document>,
        position: Position,
        accessible: bool,
    ) -> Result<(), FsError> {
        let document = tree.get(position)?;
        if !document.is_folder() {
            return Err(FsError::InvalidDocument(format!(
                "'{}' is not a folder",
                document.name()
            )));
        }
        self.set_contents(tree, position, accessible)?;
        tree.get_mut(position)?.set_accessible(accessible);
        Ok(())
    }

    /// Flip every file in the subtree, leaving subfolder flags untouched.
    fn set_contents(
        &self,
        tree: &mut Tree<Document>,
        position: Position,
        accessible: bool,
    ) -> Result<(), FsError> {
        for child in tree.children(position)? {
            if tree.get(child)?.is_file() {
                tree.get_mut(child)?.set_accessible(accessible);
            } else {
                self.set_contents(tree, child, accessible)?;
            }
        }
        Ok(())
    }

    fn set_file(
        &self,
        tree: &mut Tree<Document>,
        position: Position,
        accessible: bool,
    ) -> Result<(), FsError> {
        let document = tree.get(position)?;
        if !document.is_file() {
            return Err(FsError::InvalidFile(format!(
                "'{}' is not a file",
                document.name()
            )));
        }
        tree.get_mut(position)?.set_accessible(accessible);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Extension;

    fn sample() -> (Tree<Document>, Position, Position, Position, Position) {
        let mut tree = Tree::with_root(Document::folder("root"));
        let root = tree.root().unwrap();
        let folder = tree.insert(Some(root), Document::folder("docs")).unwrap();
        let inner = tree.insert(Some(folder), Document::folder("old")).unwrap();
        let file = tree
            .insert(Some(inner), Document::file("report", Extension::Pdf))
            .unwrap();
        (tree, root, folder, inner, file)
    }

    #[test]
    fn zip_folder_locks_descendant_files_and_itself() {
        let (mut tree, _, folder, inner, file) = sample();
        Zipper.zip_folder(&mut tree, folder).unwrap();
        assert!(!tree.get(folder).unwrap().is_accessible());
        assert!(!tree.get(file).unwrap().is_accessible());
        // intermediate folders keep their own flag
        assert!(tree.get(inner).unwrap().is_accessible());
    }

    #[test]
    fn unzip_restores_pre_zip_flags() {
        let (mut tree, _, folder, inner, file) = sample();
        Zipper.zip_folder(&mut tree, folder).unwrap();
        Zipper.unzip_folder(&mut tree, folder).unwrap();
        for position in [folder, inner, file] {
            assert!(tree.get(position).unwrap().is_accessible());
        }
    }

    #[test]
    fn zip_file_flips_one_flag() {
        let (mut tree, _, _, _, file) = sample();
        Zipper.zip_file(&mut tree, file).unwrap();
        assert!(!tree.get(file).unwrap().is_accessible());
        Zipper.unzip_file(&mut tree, file).unwrap();
        assert!(tree.get(file).unwrap().is_accessible());
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let (mut tree, _, folder, _, file) = sample();
        assert!(matches!(
            Zipper.zip_folder(&mut tree, file),
            Err(FsError::InvalidDocument(_))
        ));
        assert!(matches!(
            Zipper.zip_file(&mut tree, folder),
            Err(FsError::InvalidFile(_))
        ));
    }
}
