use crate::tree::Position;

/// Single-slot holder for a position staged by copy.
///
/// The clipboard stores a lazy reference; the subtree is only duplicated
/// when it is pasted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clipboard {
    content: Option<Position>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, position: Position) {
        self.content = Some(position);
    }

    /// Replace the slot wholesale, returning the previous contents.
    pub fn swap(&mut self, content: Option<Position>) -> Option<Position> {
        std::mem::replace(&mut self.content, content)
    }

    pub fn get(&self) -> Option<Position> {
        self.content
    }

    pub fn clear(&mut self) {
        self.content = None;
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn matches(&self, position: Position) -> bool {
        self.content == Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::tree::Tree;

    #[test]
    fn holds_at_most_one_position() {
        let tree = Tree::with_root(Document::folder("root"));
        let root = tree.root().unwrap();

        let mut clipboard = Clipboard::new();
        assert!(!clipboard.has_content());

        clipboard.set(root);
        assert!(clipboard.matches(root));

        let previous = clipboard.swap(None);
        assert_eq!(previous, Some(root));
        assert!(!clipboard.has_content());
    }
}
