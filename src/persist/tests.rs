#![cfg(test)]

use std::fmt::Debug;
use std::io::ErrorKind;

use proptest::collection::vec;
use proptest::prelude::*;
use tempfile::tempdir;

use super::*;
use crate::collections::binary_tree::BinarySearchTree;
use crate::collections::contiguous::{DynamicArray, Stack};
use crate::collections::hash::{ChainedHashTable, OpenHashTable};
use crate::collections::linked::{DoublyLinkedList, Queue, SinglyLinkedList};

fn text_of(value: &impl Persist) -> String {
    let mut out = Vec::new();
    value.write_text(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn binary_of(value: &impl Persist) -> Vec<u8> {
    let mut out = Vec::new();
    value.write_binary(&mut out).unwrap();
    out
}

fn from_text<P: Persist + Default>(text: &str) -> Result<P> {
    let mut value = P::default();
    value.read_text(&mut text.as_bytes())?;
    Ok(value)
}

fn from_binary<P: Persist + Default>(bytes: &[u8]) -> Result<P> {
    let mut value = P::default();
    value.read_binary(&mut &bytes[..])?;
    Ok(value)
}

/// Saves `value` to a scratch file in both formats and loads each back into a fresh container.
fn file_round_trip<P: Persist + Default + PartialEq + Debug>(value: &P) {
    let dir = tempdir().unwrap();

    for format in [Format::Text, Format::Binary] {
        let path = dir.path().join(format!("collection.{format}"));
        value.save(&path, format).unwrap();

        let mut loaded = P::default();
        loaded.load(&path, format).unwrap();
        assert_eq!(&loaded, value, "Round trip through the {format} format changed the contents.");
    }
}

/// Asserts that loading what `value` saves and saving it again reproduces the same bytes, in both
/// formats.
fn assert_idempotent<P: Persist + Default>(value: &P) {
    let text = text_of(value);
    assert_eq!(text_of(&from_text::<P>(&text).unwrap()), text);

    let bytes = binary_of(value);
    assert_eq!(binary_of(&from_binary::<P>(&bytes).unwrap()), bytes);
}

fn words() -> Vec<String> {
    ["alpha", "bravo", "", "charlie delta", "écho"].map(String::from).to_vec()
}

#[test]
fn test_sequence_round_trips() {
    file_round_trip(&words().into_iter().collect::<DynamicArray<_>>());
    file_round_trip(&words().into_iter().collect::<SinglyLinkedList<_>>());
    file_round_trip(&words().into_iter().collect::<DoublyLinkedList<_>>());
    file_round_trip(&words().into_iter().collect::<Stack<_>>());
    file_round_trip(&words().into_iter().collect::<Queue<_>>());
    file_round_trip(&(-3..40).collect::<DynamicArray<i32>>());
}

#[test]
fn test_empty_round_trips() {
    file_round_trip(&DynamicArray::<String>::new());
    file_round_trip(&SinglyLinkedList::<String>::new());
    file_round_trip(&Queue::<String>::new());
    file_round_trip(&BinarySearchTree::<i32>::new());

    assert_eq!(text_of(&Stack::<String>::new()), "0\n");
    assert_eq!(binary_of(&DoublyLinkedList::<String>::new()), [0, 0, 0, 0]);
}

#[test]
fn test_sequence_layout() {
    let arr: DynamicArray<String> = ["a", "bc"].map(String::from).into_iter().collect();

    assert_eq!(text_of(&arr), "2\na\nbc\n");
    assert_eq!(binary_of(&arr), [2, 0, 0, 0, 1, 0, 0, 0, b'a', 2, 0, 0, 0, b'b', b'c']);
}

#[test]
fn test_stack_saves_bottom_to_top() {
    let stack: Stack<String> = ["bottom", "middle", "top"].map(String::from).into_iter().collect();
    assert_eq!(text_of(&stack), "3\nbottom\nmiddle\ntop\n");

    let mut loaded: Stack<String> = from_text(&text_of(&stack)).unwrap();
    assert_eq!(loaded.pop().as_deref(), Some("top"));
}

#[test]
fn test_loaded_array_is_presized() {
    let arr: DynamicArray<String> = from_text("3\nx\ny\nz\n").unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.cap(), 7);
}

#[test]
fn test_load_replaces_contents() {
    let mut list: SinglyLinkedList<String> = ["old"].map(String::from).into_iter().collect();
    list.read_text(&mut "1\nnew\n".as_bytes()).unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list.front().map(String::as_str), Some("new"));
}

#[test]
fn test_text_tolerates_missing_final_newline() {
    let queue: Queue<String> = from_text("2\nfirst\nsecond").unwrap();
    assert_eq!(queue.iter().map(String::as_str).collect::<Vec<_>>(), ["first", "second"]);
}

#[test]
fn test_text_malformed_headers() {
    let missing = from_text::<DynamicArray<String>>("").unwrap_err();
    assert!(matches!(missing, PersistError::Format(FormatError::MissingHeader)));

    let invalid = from_text::<DynamicArray<String>>("many\na\n").unwrap_err();
    assert!(matches!(invalid, PersistError::Format(FormatError::InvalidCount(ref c)) if c == "many"));

    let negative = from_text::<DynamicArray<String>>("-1\n").unwrap_err();
    assert!(matches!(negative, PersistError::Format(FormatError::InvalidCount(_))));
}

#[test]
fn test_text_missing_record() {
    let err = from_text::<SinglyLinkedList<String>>("3\na\nb\n").unwrap_err();
    assert!(matches!(
        err,
        PersistError::Format(FormatError::MissingRecord { expected: 3, found: 2 })
    ));
}

#[test]
fn test_text_ignores_lines_past_count() {
    let list: DoublyLinkedList<String> = from_text("1\nkept\nignored\n").unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn test_binary_truncation() {
    let arr: DynamicArray<String> = ["hello"].map(String::from).into_iter().collect();
    let bytes = binary_of(&arr);
    assert_eq!(bytes.len(), 13);

    for cut in [2, 6, 10, 12] {
        let err = from_binary::<DynamicArray<String>>(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, PersistError::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof),
            "Cutting the file at {cut} bytes should be an unexpected EOF, not {err:?}."
        );
    }
}

#[test]
fn test_binary_huge_length_prefix_is_truncation() {
    let mut bytes = 1_i32.to_le_bytes().to_vec();
    bytes.extend(i32::MAX.to_le_bytes());
    bytes.extend(b"short");

    let err = from_binary::<DynamicArray<String>>(&bytes).unwrap_err();
    assert!(matches!(err, PersistError::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof));
}

#[test]
fn test_binary_negative_count_and_length() {
    let err = from_binary::<Queue<String>>(&(-1_i32).to_le_bytes()).unwrap_err();
    assert!(matches!(err, PersistError::Format(FormatError::NegativeLength(-1))));

    let mut bytes = 1_i32.to_le_bytes().to_vec();
    bytes.extend((-5_i32).to_le_bytes());
    let err = from_binary::<Queue<String>>(&bytes).unwrap_err();
    assert!(matches!(err, PersistError::Format(FormatError::NegativeLength(-5))));
}

#[test]
fn test_binary_invalid_utf8() {
    let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 0xC3, 0x28];
    let err = from_binary::<DynamicArray<String>>(&bytes).unwrap_err();
    assert!(matches!(err, PersistError::Format(FormatError::InvalidUtf8(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let mut arr = DynamicArray::<String>::new();

    let err = arr.load_text(dir.path().join("missing.txt")).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_tree_layout() {
    let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    assert_eq!(text_of(&tree), "2\n1\n#\n#\n3\n#\n#\n");

    let single: BinarySearchTree<i32> = [5].into_iter().collect();
    let bytes: Vec<u8> = [1, 5, -1, -1].into_iter().flat_map(i32::to_le_bytes).collect();
    assert_eq!(binary_of(&single), bytes);

    assert_eq!(text_of(&BinarySearchTree::<i32>::new()), "#\n");
    assert_eq!(binary_of(&BinarySearchTree::<i32>::new()), (-1_i32).to_le_bytes());
}

#[test]
fn test_tree_keeps_shape() {
    let tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80, 65].into_iter().collect();
    file_round_trip(&tree);

    let loaded: BinarySearchTree<i32> = from_binary(&binary_of(&tree)).unwrap();
    assert_eq!(
        loaded.pre_order().collect::<Vec<_>>(),
        tree.pre_order().collect::<Vec<_>>()
    );
    assert_eq!(loaded.height(), tree.height());
}

#[test]
fn test_tree_load_errors() {
    let truncated = from_text::<BinarySearchTree<i32>>("5\n#\n").unwrap_err();
    assert!(matches!(truncated, PersistError::Format(FormatError::TruncatedTree)));

    let empty = from_text::<BinarySearchTree<i32>>("").unwrap_err();
    assert!(matches!(empty, PersistError::Format(FormatError::TruncatedTree)));

    let key = from_text::<BinarySearchTree<i32>>("five\n#\n#\n").unwrap_err();
    assert!(matches!(key, PersistError::Format(FormatError::InvalidKey(_))));

    let marker = from_binary::<BinarySearchTree<i32>>(&2_i32.to_le_bytes()).unwrap_err();
    assert!(matches!(marker, PersistError::Format(FormatError::InvalidMarker(2))));

    let cut = from_binary::<BinarySearchTree<i32>>(&1_i32.to_le_bytes()).unwrap_err();
    assert!(cut.is_io());
}

#[test]
fn test_failed_tree_load_keeps_tree() {
    let mut tree: BinarySearchTree<i32> = [1, 2].into_iter().collect();
    let before = tree.clone();

    assert!(tree.read_text(&mut "7\n3\n".as_bytes()).is_err());
    assert_eq!(tree, before);
}

#[test]
fn test_chained_values_are_not_persisted() {
    let mut table = ChainedHashTable::new();
    table.insert("apple", "red");
    table.insert("apple", "green");
    table.insert("kiwi", "brown");

    for format in [Format::Text, Format::Binary] {
        let mut loaded = ChainedHashTable::new();
        match format {
            Format::Text => loaded.read_text(&mut text_of(&table).as_bytes()).unwrap(),
            Format::Binary => loaded.read_binary(&mut &binary_of(&table)[..]).unwrap(),
        }

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.count("apple"), 2, "Duplicate keys should survive a {format} round trip.");
        assert!(loaded.contains("kiwi"));
        assert!(loaded.iter().all(|(_, value)| value.is_empty()));
    }
}

#[test]
fn test_open_table_round_trip() {
    let mut table = OpenHashTable::with_cap(31);
    table.insert("one", "1").unwrap();
    table.insert("two", "2").unwrap();
    table.insert("three", "3").unwrap();
    table.remove("two");

    let text = text_of(&table);
    assert!(text.starts_with("31 2\n"));

    for loaded in [
        from_text::<OpenHashTable>(&text).unwrap(),
        from_binary::<OpenHashTable>(&binary_of(&table)).unwrap(),
    ] {
        assert_eq!(loaded.cap(), 31);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.tombstones(), 0, "Tombstones shouldn't be written.");
        assert_eq!(loaded.get("one"), Some("1"));
        assert_eq!(loaded.get("three"), Some("3"));
        assert!(!loaded.contains("two"));
    }
}

#[test]
fn test_open_table_text_records() {
    let table: OpenHashTable = from_text("11 2\nbare\nkey\tvalue\twith tab\n").unwrap();

    assert_eq!(table.get("bare"), Some(""), "A record without a tab should have an empty value.");
    assert_eq!(table.get("key"), Some("value\twith tab"));
}

#[test]
fn test_open_table_malformed_headers() {
    let size = from_text::<OpenHashTable>("101\n").unwrap_err();
    assert!(matches!(size, PersistError::Format(FormatError::MissingField("size"))));

    let cap = from_text::<OpenHashTable>("lots 1\n").unwrap_err();
    assert!(matches!(cap, PersistError::Format(FormatError::InvalidCount(_))));

    let missing = from_text::<OpenHashTable>("").unwrap_err();
    assert!(matches!(missing, PersistError::Format(FormatError::MissingHeader)));
}

#[test]
fn test_open_table_rejects_huge_capacity() {
    let text = from_text::<OpenHashTable>("4000000000000000000 0\n").unwrap_err();
    assert!(matches!(
        text,
        PersistError::Format(FormatError::CapacityTooLarge(4_000_000_000_000_000_000))
    ));

    let mut bytes = i32::MAX.to_le_bytes().to_vec();
    bytes.extend(0_i32.to_le_bytes());
    let binary = from_binary::<OpenHashTable>(&bytes).unwrap_err();
    assert!(matches!(
        binary,
        PersistError::Format(FormatError::CapacityTooLarge(cap)) if cap == i32::MAX as usize
    ));
}

#[test]
fn test_open_table_rejects_capacity_below_size() {
    let text = from_text::<OpenHashTable>("2 3\na\nb\nc\n").unwrap_err();
    assert!(matches!(
        text,
        PersistError::Format(FormatError::CapacityBelowSize { cap: 2, len: 3 })
    ));

    let bytes: Vec<u8> = [2, 3].into_iter().flat_map(i32::to_le_bytes).collect();
    let binary = from_binary::<OpenHashTable>(&bytes).unwrap_err();
    assert!(matches!(
        binary,
        PersistError::Format(FormatError::CapacityBelowSize { cap: 2, len: 3 })
    ));

    let mut table = OpenHashTable::with_cap(7);
    table.insert("kept", "1").unwrap();
    assert!(table.read_text(&mut "1 2\na\t1\nb\t2\n".as_bytes()).unwrap_err().is_format());
    assert_eq!(table.cap(), 7);
    assert_eq!(table.get("kept"), Some("1"));
}

#[test]
fn test_open_table_overfull_file() {
    // "a", "d" and "g" all probe slots 1 and 2 of 3.
    let err = from_text::<OpenHashTable>("3 3\na\t1\nd\t2\ng\t3\n").unwrap_err();
    assert!(err.is_table_full());
}

#[test]
fn test_open_table_idempotent_without_collisions() {
    let mut table = OpenHashTable::new();
    for key in ["a", "b", "c", "d"] {
        table.insert(key, key.repeat(3)).unwrap();
    }
    table.remove("c");

    let text = text_of(&table);
    let bytes = binary_of(&table);
    assert_eq!(text_of(&from_text::<OpenHashTable>(&text).unwrap()), text);
    assert_eq!(binary_of(&from_binary::<OpenHashTable>(&bytes).unwrap()), bytes);
}

#[test]
fn test_format_from_str() {
    assert_eq!("text".parse::<Format>(), Ok(Format::Text));
    assert_eq!("Binary".parse::<Format>(), Ok(Format::Binary));
    assert!("json".parse::<Format>().is_err());
    assert_eq!(Format::Binary.to_string(), "binary");
}

fn line() -> impl Strategy<Value = String> {
    "[^\n]{0,12}"
}

proptest! {
    #[test]
    fn prop_array_round_trip(items in vec(line(), 0..40)) {
        let arr: DynamicArray<String> = items.iter().cloned().collect();

        let text = text_of(&arr);
        let text_loaded: DynamicArray<String> = from_text(&text).unwrap();
        prop_assert_eq!(&text_loaded, &arr);
        prop_assert_eq!(text_of(&text_loaded), text);

        let bytes = binary_of(&arr);
        let binary_loaded: DynamicArray<String> = from_binary(&bytes).unwrap();
        prop_assert_eq!(&binary_loaded, &arr);
        prop_assert_eq!(binary_of(&binary_loaded), bytes);
    }

    #[test]
    fn prop_sequences_idempotent(items in vec(line(), 0..40)) {
        assert_idempotent(&items.iter().cloned().collect::<DynamicArray<String>>());
        assert_idempotent(&items.iter().cloned().collect::<Stack<String>>());
        assert_idempotent(&items.iter().cloned().collect::<SinglyLinkedList<String>>());
        assert_idempotent(&items.iter().cloned().collect::<DoublyLinkedList<String>>());
        assert_idempotent(&items.iter().cloned().collect::<Queue<String>>());
    }

    #[test]
    fn prop_list_round_trip(items in vec(line(), 0..40)) {
        let list: DoublyLinkedList<String> = items.iter().cloned().collect();

        let loaded: DoublyLinkedList<String> = from_binary(&binary_of(&list)).unwrap();
        prop_assert_eq!(loaded.iter().collect::<Vec<_>>(), items.iter().collect::<Vec<_>>());

        let loaded: DoublyLinkedList<String> = from_text(&text_of(&list)).unwrap();
        prop_assert_eq!(loaded, list);
    }

    #[test]
    fn prop_tree_round_trip(keys in vec(any::<i32>(), 0..64)) {
        let tree: BinarySearchTree<i32> = keys.into_iter().collect();

        let text = text_of(&tree);
        let text_loaded: BinarySearchTree<i32> = from_text(&text).unwrap();
        prop_assert_eq!(&text_loaded, &tree);
        prop_assert_eq!(text_of(&text_loaded), text);

        let bytes = binary_of(&tree);
        let binary_loaded: BinarySearchTree<i32> = from_binary(&bytes).unwrap();
        prop_assert_eq!(&binary_loaded, &tree);
        prop_assert_eq!(binary_of(&binary_loaded), bytes);
    }

    #[test]
    fn prop_chained_idempotent(keys in vec("[a-z]{1,6}", 0..60)) {
        let mut table = ChainedHashTable::new();
        for key in &keys {
            table.insert(key.as_str(), "value");
        }

        let text = text_of(&table);
        let loaded: ChainedHashTable = from_text(&text).unwrap();
        prop_assert_eq!(loaded.len(), keys.len());
        prop_assert_eq!(text_of(&loaded), text);

        let bytes = binary_of(&table);
        let loaded: ChainedHashTable = from_binary(&bytes).unwrap();
        prop_assert_eq!(binary_of(&loaded), bytes);
    }

    #[test]
    fn prop_open_table_keeps_pairs(
        pairs in vec(("[a-z]{1,6}", line()), 0..40),
        removed in vec("[a-z]{1,6}", 0..10),
    ) {
        let mut table = OpenHashTable::with_cap(211);
        for (key, value) in &pairs {
            table.insert(key.as_str(), value.as_str()).unwrap();
        }
        for key in &removed {
            table.remove(key);
        }

        let loaded: OpenHashTable = from_binary(&binary_of(&table)).unwrap();
        let mut expected: Vec<_> = table.iter().collect();
        let mut actual: Vec<_> = loaded.iter().collect();
        expected.sort();
        actual.sort();

        prop_assert_eq!(loaded.cap(), 211);
        prop_assert_eq!(actual, expected);
        for key in &removed {
            prop_assert!(!loaded.contains(key));
        }
    }
}
