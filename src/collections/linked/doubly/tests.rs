#![cfg(test)]

use super::*;

fn collect(list: &DoublyLinkedList<&'static str>) -> Vec<&'static str> {
    list.iter().copied().collect()
}

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_front("b");
    list.push_front("a");
    list.push_back("c");
    assert_eq!(collect(&list), ["a", "b", "c"]);
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        ["c", "b", "a"],
        "Backward iteration should follow the prev links."
    );

    assert_eq!(list.pop_back(), Some("c"));
    assert_eq!(list.pop_front(), Some("a"));
    assert_eq!((list.front(), list.back()), (Some(&"b"), Some(&"b")));
    assert_eq!(list.pop_back(), Some("b"));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_relative_operations() {
    let mut list: DoublyLinkedList<_> = ["b", "d"].into_iter().collect();
    assert!(list.insert_before(&"b", "a"));
    assert!(list.insert_after(&"b", "c"));
    assert!(list.insert_after(&"d", "e"));
    assert!(!list.insert_after(&"z", "never"));
    assert_eq!(collect(&list), ["a", "b", "c", "d", "e"]);
    assert_eq!(list.back(), Some(&"e"));

    assert_eq!(list.delete_before(&"a"), None);
    assert_eq!(list.delete_after(&"e"), None);
    assert_eq!(list.delete_before(&"c"), Some("b"));
    assert_eq!(list.delete_after(&"d"), Some("e"));
    assert_eq!(collect(&list), ["a", "c", "d"]);
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        ["d", "c", "a"],
        "Deletions should keep the prev links consistent."
    );
}

#[test]
fn test_find_and_remove() {
    let mut list: DoublyLinkedList<String> =
        ["one", "two", "three"].map(String::from).into_iter().collect();
    assert!(list.contains(&"two".to_string()));
    assert!(list.remove_value(&"one".to_string()));
    assert_eq!(list.front().map(String::as_str), Some("two"));

    if let Some(value) = list.find_by_mut(|value| value == "three") {
        value.push('!');
    }
    assert_eq!(list.find_by(|value| value.ends_with('!')).map(String::as_str), Some("three!"));
    assert_eq!(list.remove_first_by(|value| value.len() == 6).as_deref(), Some("three!"));
    assert_eq!(format!("{list}"), "two");
}

#[test]
fn test_iterators_meet_in_the_middle() {
    let list: DoublyLinkedList<u8> = (1..=5).collect();
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &3, &4]);

    let mut owned = list.clone().into_iter();
    assert_eq!(owned.next_back(), Some(5));
    assert_eq!(owned.collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(format!("{list:?}"), "[1, 2, 3, 4, 5]");
}
