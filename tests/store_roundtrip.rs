use gtodo::core::item_list::ItemList;
use gtodo::store;

fn snapshot(list: &ItemList) -> Vec<(String, bool)> {
    list.iter()
        .map(|item| (item.content().to_string(), item.is_done()))
        .collect()
}

#[test]
fn load_two_records_and_save_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gtodo");
    std::fs::write(&path, "1 Buy milk\n0 Walk dog\n").unwrap();

    let list = store::load(&path);
    assert_eq!(
        snapshot(&list),
        vec![("Buy milk".to_string(), true), ("Walk dog".to_string(), false)]
    );

    store::save(&path, &list).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 Buy milk\n0 Walk dog\n");
}

#[test]
fn save_then_read_preserves_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gtodo");

    let mut list = ItemList::new();
    list.add("Walk the dog", false);
    list.add("Buy coffee", true);
    list.add("", false);
    list.add("Résumé: ünïcode ✓", true);
    list.add("trailing space ", false);

    store::save(&path, &list).unwrap();
    let loaded = store::read(&path).unwrap();

    assert_eq!(snapshot(&loaded), snapshot(&list));
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gtodo");
    std::fs::write(&path, "0 one\n0 two\n0 three\n").unwrap();

    let mut list = store::load(&path);
    let first = list.iter().next().unwrap().id();
    list.remove(first);
    store::save(&path, &list).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 two\n0 three\n");
}

#[test]
fn nonexistent_path_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store::load(&dir.path().join("missing")).is_empty());
}

#[test]
fn malformed_line_does_not_affect_neighbours() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gtodo");
    std::fs::write(&path, "1 before\ntrue garbage\n0 after\n").unwrap();

    let parsed = store::read_records(&path).unwrap();
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].line, 2);

    let list = store::read(&path).unwrap();
    assert_eq!(
        snapshot(&list),
        vec![("before".to_string(), true), ("after".to_string(), false)]
    );
}
