use gtodo::core::item::ItemId;

#[derive(Debug, Clone)]
pub enum Message {
    // Input row
    InputChanged(String),
    AddItem,

    // Item rows
    ToggleItemDone(ItemId),
    RemoveItem(ItemId),
}
