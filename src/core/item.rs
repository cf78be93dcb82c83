use std::fmt;

use uuid::Uuid;

/// Handle identifying one item for its whole lifetime.
///
/// Two items with the same content still carry different ids, so removal and
/// toggling never depend on comparing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    content: String,
    /// Original bytes when they were not valid UTF-8; `content` then holds
    /// the lossy decoding shown in the window.
    raw: Option<Box<[u8]>>,
    done: bool,
}

impl Item {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            content: content.into(),
            raw: None,
            done: false,
        }
    }

    /// Build an item from stored bytes, keeping them verbatim for writing back.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(content) => Self::new(content),
            Err(e) => {
                let raw = e.into_bytes();
                let mut item = Self::new(String::from_utf8_lossy(&raw).into_owned());
                item.raw = Some(raw.into_boxed_slice());
                item
            }
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content exactly as it was stored.
    pub fn content_bytes(&self) -> &[u8] {
        self.raw.as_deref().unwrap_or(self.content.as_bytes())
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Flip the completion flag and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_not_done() {
        let item = Item::new("Walk the dog");
        assert_eq!(item.content(), "Walk the dog");
        assert!(!item.is_done());
    }

    #[test]
    fn same_content_different_identity() {
        let a = Item::new("Buy coffee");
        let b = Item::new("Buy coffee");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn invalid_utf8_keeps_original_bytes() {
        let item = Item::from_bytes(b"Caf\xe9 au lait".to_vec());
        assert_eq!(item.content(), "Caf\u{FFFD} au lait");
        assert_eq!(item.content_bytes(), b"Caf\xe9 au lait");
    }

    #[test]
    fn valid_utf8_bytes_match_content() {
        let item = Item::from_bytes("Résumé".as_bytes().to_vec());
        assert_eq!(item.content(), "Résumé");
        assert_eq!(item.content_bytes(), "Résumé".as_bytes());
    }

    #[test]
    fn toggle_flips_flag() {
        let mut item = Item::new("Do homework");
        assert!(item.toggle());
        assert!(item.is_done());
        assert!(!item.toggle());
        item.set_done(true);
        assert!(item.is_done());
    }
}
