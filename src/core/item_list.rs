use super::item::{Item, ItemId};

/// Ordered, owning collection of to-do items.
///
/// Insertion order is display order and is never rearranged. Callers keep
/// `ItemId` handles; the list is the only owner of the items themselves.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return its handle.
    pub fn add(&mut self, content: impl Into<String>, done: bool) -> ItemId {
        self.push(Item::new(content), done)
    }

    fn push(&mut self, mut item: Item, done: bool) -> ItemId {
        item.set_done(done);
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Append an item read from storage, preserving its bytes.
    pub fn add_bytes(&mut self, content: Vec<u8>, done: bool) -> ItemId {
        self.push(Item::from_bytes(content), done)
    }

    /// Remove the first item with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// Flip the done flag of `id`, returning the new state.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .map(Item::toggle)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(list: &ItemList) -> Vec<&str> {
        list.iter().map(Item::content).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut list = ItemList::new();
        list.add("Walk the dog", false);
        list.add("Buy coffee", true);
        list.add("Do homework", false);

        assert_eq!(contents(&list), ["Walk the dog", "Buy coffee", "Do homework"]);
        assert!(list.all()[1].is_done());
    }

    #[test]
    fn add_then_remove_restores_list() {
        let mut list = ItemList::new();
        list.add("first", false);
        list.add("second", true);
        let before = contents(&list).join("|");

        let id = list.add("temporary", false);
        let removed = list.remove(id).unwrap();

        assert_eq!(removed.content(), "temporary");
        assert_eq!(list.len(), 2);
        assert_eq!(contents(&list).join("|"), before);
    }

    #[test]
    fn remove_matches_identity_not_content() {
        let mut list = ItemList::new();
        let first = list.add("same", false);
        let second = list.add("same", true);

        list.remove(second);

        assert_eq!(list.len(), 1);
        assert_eq!(list.all()[0].id(), first);
        assert!(!list.all()[0].is_done());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = ItemList::new();
        list.add("keep", false);
        let gone = list.add("gone", false);
        list.remove(gone);

        assert!(list.remove(gone).is_none());
        assert_eq!(contents(&list), ["keep"]);
    }

    #[test]
    fn empty_content_accepted() {
        let mut list = ItemList::new();
        let id = list.add("", false);
        assert_eq!(list.get(id).unwrap().content(), "");
    }

    #[test]
    fn toggle_by_id() {
        let mut list = ItemList::new();
        let id = list.add("Finish the todo app", false);

        assert_eq!(list.toggle(id), Some(true));
        assert!(list.get(id).unwrap().is_done());
        assert_eq!(list.toggle(id), Some(false));

        list.remove(id);
        assert_eq!(list.toggle(id), None);
    }
}
