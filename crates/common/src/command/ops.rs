//! Concrete reversible commands.
//!
//! Constructors that need pre-state take the file system by reference and
//! capture it up front: the old name for a rename, the old parent for a
//! remove or move, the old content for an edit, the prior clipboard slot
//! for a copy. `unexecute` then replays that captured state.

use crate::backup::BackupStore;
use crate::document::Extension;
use crate::fs::{FsError, Pfs};
use crate::tree::Position;

use super::{Command, CommandError};

/// Create an empty file under a folder.
pub struct CreateFile {
    name: String,
    extension: Extension,
    parent: Position,
    created: Option<Position>,
}

impl CreateFile {
    pub fn new(name: impl Into<String>, parent: Position) -> Self {
        Self::with_extension(name, Extension::default(), parent)
    }

    pub fn with_extension(
        name: impl Into<String>,
        extension: Extension,
        parent: Position,
    ) -> Self {
        CreateFile {
            name: name.into(),
            extension,
            parent,
            created: None,
        }
    }
}

impl Command for CreateFile {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let position = fs.create_file_with_extension(&self.name, self.extension, self.parent)?;
        self.created = Some(position);
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let position = self
            .created
            .take()
            .ok_or(CommandError::UnsupportedReversal("create has not run"))?;
        fs.remove(position)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("create file '{}{}'", self.name, self.extension)
    }
}

/// Create a folder under a folder.
pub struct CreateFolder {
    name: String,
    parent: Position,
    created: Option<Position>,
}

impl CreateFolder {
    pub fn new(name: impl Into<String>, parent: Position) -> Self {
        CreateFolder {
            name: name.into(),
            parent,
            created: None,
        }
    }
}

impl Command for CreateFolder {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let position = fs.create_folder(&self.name, self.parent)?;
        self.created = Some(position);
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let position = self
            .created
            .take()
            .ok_or(CommandError::UnsupportedReversal("create has not run"))?;
        fs.remove(position)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("create folder '{}'", self.name)
    }
}

/// Rename a document, remembering its previous name.
pub struct Rename {
    position: Position,
    new_name: String,
    old_name: String,
}

impl Rename {
    pub fn new(
        fs: &Pfs,
        position: Position,
        new_name: impl Into<String>,
    ) -> Result<Self, FsError> {
        let old_name = fs.tree().get(position)?.name().to_string();
        Ok(Rename {
            position,
            new_name: new_name.into(),
            old_name,
        })
    }
}

impl Command for Rename {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.rename(self.position, &self.new_name)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.rename(self.position, &self.old_name)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("rename '{}' to '{}'", self.old_name, self.new_name)
    }
}

/// Detach a subtree. Undo re-attaches it under its former parent,
/// appended as the last child.
pub struct Remove {
    position: Position,
    parent: Position,
    name: String,
}

impl Remove {
    pub fn new(fs: &Pfs, position: Position) -> Result<Self, FsError> {
        let name = fs.tree().get(position)?.name().to_string();
        let parent = fs
            .tree()
            .parent(position)?
            .ok_or_else(|| FsError::InvalidDocument("cannot remove the root".to_string()))?;
        Ok(Remove {
            position,
            parent,
            name,
        })
    }
}

impl Command for Remove {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.remove(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.move_document(self.position, self.parent)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("remove '{}'", self.name)
    }
}

/// Replace a file's content, remembering the previous content.
pub struct Edit {
    position: Position,
    new_content: String,
    old_content: String,
}

impl Edit {
    pub fn new(
        fs: &Pfs,
        position: Position,
        new_content: impl Into<String>,
    ) -> Result<Self, FsError> {
        let old_content = fs.content(position)?.to_string();
        Ok(Edit {
            position,
            new_content: new_content.into(),
            old_content,
        })
    }
}

impl Command for Edit {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.edit(self.position, &self.new_content)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.edit(self.position, &self.old_content)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "edit file".to_string()
    }
}

/// Re-parent a subtree, remembering where it came from.
pub struct Move {
    source: Position,
    destination: Position,
    old_parent: Position,
}

impl Move {
    pub fn new(fs: &Pfs, source: Position, destination: Position) -> Result<Self, FsError> {
        let old_parent = fs
            .tree()
            .parent(source)?
            .ok_or_else(|| FsError::InvalidMove("cannot move the root".to_string()))?;
        Ok(Move {
            source,
            destination,
            old_parent,
        })
    }
}

impl Command for Move {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.move_document(self.source, self.destination)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.move_document(self.source, self.old_parent)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "move document".to_string()
    }
}

/// Stage a position in the clipboard, remembering the prior slot.
pub struct Copy {
    position: Position,
    previous: Option<Position>,
}

impl Copy {
    pub fn new(fs: &Pfs, position: Position) -> Self {
        Copy {
            position,
            previous: fs.clipboard().get(),
        }
    }
}

impl Command for Copy {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.copy(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.clipboard_mut().swap(self.previous);
        Ok(())
    }

    fn describe(&self) -> String {
        "copy to clipboard".to_string()
    }
}

/// Paste the clipboard under a folder. Undo removes the pasted subtree.
pub struct Paste {
    destination: Position,
    pasted: Option<Position>,
}

impl Paste {
    pub fn new(destination: Position) -> Self {
        Paste {
            destination,
            pasted: None,
        }
    }
}

impl Command for Paste {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let pasted = fs.paste(self.destination)?;
        self.pasted = Some(pasted);
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let pasted = self
            .pasted
            .take()
            .ok_or(CommandError::UnsupportedReversal("paste has not run"))?;
        fs.remove(pasted)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "paste from clipboard".to_string()
    }
}

/// Zip a folder subtree. Zipping an already-zipped folder is rejected
/// here rather than in the zipper.
///
/// Files in the subtree may already be zipped on their own, so execute
/// records every accessibility flag and unexecute replays the record
/// instead of unzipping the whole subtree.
pub struct ZipFolder {
    position: Position,
    prior_flags: Vec<(Position, bool)>,
}

impl ZipFolder {
    pub fn new(position: Position) -> Self {
        ZipFolder {
            position,
            prior_flags: Vec::new(),
        }
    }
}

impl Command for ZipFolder {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let document = fs.tree().get(self.position).map_err(FsError::from)?;
        if !document.is_accessible() {
            return Err(FsError::LockedDocument(format!(
                "'{}' is already zipped",
                document.name()
            ))
            .into());
        }
        self.prior_flags = fs.accessibility_snapshot(self.position)?;
        fs.zip_folder(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.restore_accessibility(&self.prior_flags)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "zip folder".to_string()
    }
}

/// Unzip a folder subtree. Like [`ZipFolder`], undo restores the
/// recorded flags rather than re-zipping everything.
pub struct UnzipFolder {
    position: Position,
    prior_flags: Vec<(Position, bool)>,
}

impl UnzipFolder {
    pub fn new(position: Position) -> Self {
        UnzipFolder {
            position,
            prior_flags: Vec::new(),
        }
    }
}

impl Command for UnzipFolder {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let document = fs.tree().get(self.position).map_err(FsError::from)?;
        if document.is_accessible() {
            return Err(FsError::InvalidDocument(format!(
                "'{}' is not zipped",
                document.name()
            ))
            .into());
        }
        self.prior_flags = fs.accessibility_snapshot(self.position)?;
        fs.unzip_folder(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.restore_accessibility(&self.prior_flags)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "unzip folder".to_string()
    }
}

/// Zip a single file.
pub struct ZipFile {
    position: Position,
}

impl ZipFile {
    pub fn new(position: Position) -> Self {
        ZipFile { position }
    }
}

impl Command for ZipFile {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let document = fs.tree().get(self.position).map_err(FsError::from)?;
        if !document.is_accessible() {
            return Err(FsError::LockedDocument(format!(
                "'{}' is already zipped",
                document.name()
            ))
            .into());
        }
        fs.zip_file(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.unzip_file(self.position)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "zip file".to_string()
    }
}

/// Unzip a single file.
pub struct UnzipFile {
    position: Position,
}

impl UnzipFile {
    pub fn new(position: Position) -> Self {
        UnzipFile { position }
    }
}

impl Command for UnzipFile {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let document = fs.tree().get(self.position).map_err(FsError::from)?;
        if document.is_accessible() {
            return Err(FsError::InvalidDocument(format!(
                "'{}' is not zipped",
                document.name()
            ))
            .into());
        }
        fs.unzip_file(self.position)?;
        Ok(())
    }

    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        fs.zip_file(self.position)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "unzip file".to_string()
    }
}

/// Snapshot the whole tree to a durable backup file. Irreversible.
pub struct Backup {
    store: BackupStore,
    written: Option<String>,
}

impl Backup {
    pub fn new(store: BackupStore) -> Self {
        Backup {
            store,
            written: None,
        }
    }

    /// File name of the backup written by `execute`, if any.
    pub fn written(&self) -> Option<&str> {
        self.written.as_deref()
    }
}

impl Command for Backup {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let memento = fs.save_state();
        self.written = Some(self.store.save_backup(&memento)?);
        Ok(())
    }

    fn unexecute(&mut self, _fs: &mut Pfs) -> Result<(), CommandError> {
        Err(CommandError::UnsupportedReversal(
            "a backup snapshot has no inverse",
        ))
    }

    fn describe(&self) -> String {
        "write backup".to_string()
    }
}
