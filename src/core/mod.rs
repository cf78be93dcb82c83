pub mod item;
pub mod item_list;
