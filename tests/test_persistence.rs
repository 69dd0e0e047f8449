use dsbox::model::Container;
use dsbox::store::{CollectionKind, LoadSummary, Registry, StoreError};
use std::fs;
use tempfile::tempdir;

fn values_of(registry: &Registry, name: &str) -> Vec<String> {
    registry
        .find(name)
        .unwrap()
        .collection()
        .as_container()
        .values()
        .map(str::to_string)
        .collect()
}

/// Creates `name` of `kind` and restores `values` into it.
fn fill(registry: &mut Registry, name: &str, kind: CollectionKind, values: &[&str]) {
    let container = registry.create(name, kind).unwrap().as_container_mut();
    for value in values {
        container.restore(value.to_string());
    }
}

// ============= Serialization =============

#[test]
fn test_serialize_one_line_per_entry_in_slot_order() {
    let mut registry = Registry::new();
    fill(&mut registry, "arr", CollectionKind::Array, &["x", "y"]);
    fill(&mut registry, "empty", CollectionKind::Queue, &[]);
    fill(&mut registry, "t", CollectionKind::Tree, &["m", "c", "x"]);

    assert_eq!(registry.serialize(), "ARRAY arr x y\nQUEUE empty\nTREE t c m x\n");
}

#[test]
fn test_empty_registry_serializes_to_nothing() {
    assert_eq!(Registry::new().serialize(), "");
}

#[test]
fn test_every_kind_round_trips() {
    let mut registry = Registry::new();
    fill(&mut registry, "m", CollectionKind::Array, &["1", "2", "3"]);
    fill(&mut registry, "f", CollectionKind::ForwardList, &["a", "b"]);
    fill(&mut registry, "l", CollectionKind::LinkedList, &["c", "d"]);
    fill(&mut registry, "s", CollectionKind::Stack, &["bottom", "top"]);
    fill(&mut registry, "q", CollectionKind::Queue, &["first", "last"]);
    fill(&mut registry, "t", CollectionKind::Tree, &["k", "b", "z", "a"]);

    let text = registry.serialize();
    let mut restored = Registry::new();
    assert_eq!(restored.deserialize(&text), 6);

    assert_eq!(restored.serialize(), text);
    for entry in registry.entries() {
        let other = restored.find(entry.name()).unwrap();
        assert_eq!(other.kind(), entry.kind());
        assert_eq!(values_of(&restored, entry.name()), values_of(&registry, entry.name()));
        assert_eq!(restored.slot_of(entry.name()), registry.slot_of(entry.name()));
    }
}

#[test]
fn test_stack_order_survives_reload() {
    let mut registry = Registry::new();
    {
        let stack = registry
            .create("s", CollectionKind::Stack)
            .unwrap()
            .as_stack_mut("SPUSH")
            .unwrap();
        for value in ["A", "B", "C"] {
            stack.push(value.to_string());
        }
    }
    let text = registry.serialize();
    assert_eq!(text, "STACK s A B C\n");

    let mut restored = Registry::new();
    restored.deserialize(&text);
    let stack = restored
        .find_mut("s")
        .unwrap()
        .collection_mut()
        .as_stack_mut("SPOP")
        .unwrap();
    assert_eq!(stack.pop().unwrap(), "C");
    assert_eq!(stack.pop().unwrap(), "B");
    assert_eq!(stack.pop().unwrap(), "A");
}

// ============= Deserialization =============

#[test]
fn test_unknown_and_incomplete_lines_are_skipped() {
    let text = "ARRAY a 1 2\nHEAP h 9\n\nTREE\n   \nQUEUE q z\n";
    let mut registry = Registry::new();

    assert_eq!(registry.deserialize(text), 2);
    assert_eq!(registry.len(), 2);
    assert!(registry.find("h").is_none());
    assert_eq!(values_of(&registry, "a"), vec!["1", "2"]);
    assert_eq!(values_of(&registry, "q"), vec!["z"]);
}

#[test]
fn test_deserialize_replaces_previous_content() {
    let mut registry = Registry::new();
    fill(&mut registry, "old", CollectionKind::Stack, &["x"]);

    registry.deserialize("TREE new a\n");
    assert!(registry.find("old").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_overflowing_lines_are_skipped() {
    let text = "STACK a 1\nSTACK b 2\nSTACK c 3\n";
    let mut registry = Registry::with_capacity(2);

    assert_eq!(registry.deserialize(text), 2);
    assert!(registry.find("c").is_none());
}

#[test]
fn test_overflowing_lines_are_counted() {
    let text = "TREE a\nTREE b\nTREE a x\nTREE c\nTREE d\n";
    let mut registry = Registry::with_capacity(2);

    let summary = registry.load_text(text);
    assert_eq!(summary, LoadSummary { loaded: 3, over_capacity: 2 });
    assert_eq!(values_of(&registry, "a"), vec!["x"]);
}

#[test]
fn test_long_forward_list_reloads_in_order() {
    let count = 200_000;
    let values: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    let text = format!("FLIST f {}\n", values.join(" "));

    let mut registry = Registry::new();
    assert_eq!(registry.deserialize(&text), 1);

    let list = registry
        .find_mut("f")
        .unwrap()
        .collection_mut()
        .as_forward_list_mut("FGET_TAIL")
        .unwrap();
    assert_eq!(list.len(), count);
    assert_eq!(list.head().unwrap(), "0");
    assert_eq!(list.tail().unwrap(), "199999");
    assert_eq!(registry.serialize(), text);
}

#[test]
fn test_vertical_tab_and_form_feed_separate_tokens() {
    let mut registry = Registry::new();
    assert_eq!(registry.deserialize("STACK s\x0Bt x\nQUEUE q\x0Cy\n"), 2);
    assert_eq!(values_of(&registry, "s"), vec!["t", "x"]);
    assert_eq!(values_of(&registry, "q"), vec!["y"]);
}

#[test]
fn test_tree_lines_deduplicate_values() {
    let mut registry = Registry::new();
    registry.deserialize("TREE t b a b c a\n");
    assert_eq!(values_of(&registry, "t"), vec!["a", "b", "c"]);
}

#[test]
fn test_tabs_and_crlf_are_accepted() {
    let mut registry = Registry::new();
    registry.deserialize("LLIST\tl  x\ty\r\nFLIST f w\r\n");
    assert_eq!(values_of(&registry, "l"), vec!["x", "y"]);
    assert_eq!(values_of(&registry, "f"), vec!["w"]);
}

// ============= Files =============

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.txt");

    let mut registry = Registry::new();
    fill(&mut registry, "q", CollectionKind::Queue, &["1", "2"]);
    fill(&mut registry, "t", CollectionKind::Tree, &["b", "a"]);
    registry.save_to_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "QUEUE q 1 2\nTREE t a b\n");

    let loaded = dsbox::load_file(&path).unwrap();
    assert_eq!(loaded.serialize(), registry.serialize());
}

#[test]
fn test_save_overwrites_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.txt");
    fs::write(&path, "ARRAY stale 1 2 3\nARRAY more\n").unwrap();

    let mut registry = Registry::new();
    fill(&mut registry, "s", CollectionKind::Stack, &["x"]);
    dsbox::save_file(&registry, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "STACK s x\n");
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let mut registry = Registry::new();
    fill(&mut registry, "a", CollectionKind::Array, &["1"]);

    let summary = registry.load_from_file(dir.path().join("absent.txt")).unwrap();
    assert_eq!(summary, LoadSummary::default());
    assert!(registry.is_empty());
}

#[test]
fn test_unwritable_path_reports_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("store.txt");

    let err = Registry::new().save_to_file(&path).unwrap_err();
    match err {
        StoreError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
