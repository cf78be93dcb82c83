use crate::core::item::Item;
use crate::core::item_list::ItemList;

/// Encodes items into the `<0|1> <content>` line format.
pub struct RecordWriter;

impl RecordWriter {
    /// Write the whole store, one line per item, in list order.
    pub fn write_file(list: &ItemList) -> Vec<u8> {
        let mut out = Vec::new();
        for item in list {
            Self::write_record_into(&mut out, item);
        }
        out
    }

    /// Write a single item as one newline-terminated line.
    ///
    /// Content bytes are written verbatim; an embedded newline would split
    /// the record on the next load.
    pub fn write_record(item: &Item) -> Vec<u8> {
        let mut out = Vec::new();
        Self::write_record_into(&mut out, item);
        out
    }

    fn write_record_into(out: &mut Vec<u8>, item: &Item) {
        out.push(if item.is_done() { b'1' } else { b'0' });
        out.push(b' ');
        out.extend_from_slice(item.content_bytes());
        out.push(b'\n');
    }
}
