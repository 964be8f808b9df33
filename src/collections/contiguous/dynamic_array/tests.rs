#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_push_grows_by_doubling() {
    let mut arr = DynamicArray::new();
    assert_eq!(arr.cap(), 4);

    for i in 0..4 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), 4, "Filling the DynamicArray exactly shouldn't grow it.");

    arr.push(4);
    assert_eq!(arr.cap(), 8, "Pushing past the capacity should double it.");
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);

    let mut arr = DynamicArray::with_cap(0);
    arr.push("a");
    assert_eq!(arr.cap(), 4, "Growing from zero should allocate the default capacity.");
}

#[test]
fn test_insert_and_remove() {
    let mut arr: DynamicArray<_> = ["a", "c"].into_iter().collect();
    arr.insert(1, "b").expect("index 1 is in bounds");
    arr.insert(0, "start").expect("index 0 is in bounds");
    arr.insert(4, "end").expect("index len appends");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["start", "a", "b", "c", "end"]);

    assert_eq!(
        arr.insert(9, "nope"),
        Err(IndexOutOfBounds { index: 9, len: 5 }),
        "Inserting past the length should fail without modifying the DynamicArray."
    );
    assert_eq!(arr.len(), 5);

    assert_eq!(arr.remove(0), Some("start"));
    assert_eq!(arr.remove(3), Some("end"));
    assert_eq!(arr.remove(3), None, "Removing past the length should return None.");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn test_get_and_set() {
    let mut arr: DynamicArray<String> = ["zero", "one"].map(String::from).into_iter().collect();
    assert_eq!(arr.get(1).map(String::as_str), Some("one"));
    assert_eq!(arr.get(2), None);

    assert_eq!(arr.set(0, "ZERO".into()).as_deref(), Ok("zero"));
    assert_eq!(arr[0], "ZERO");
    assert!(arr.set(2, "two".into()).is_err(), "Setting past the length should fail.");

    assert_panics!({
        let arr: DynamicArray<u8> = DynamicArray::new();
        arr[0]
    }, "Index 0 out of bounds");
}

#[test]
fn test_pop_and_clear() {
    let mut arr: DynamicArray<u8> = (0..10).collect();
    assert_eq!(arr.pop(), Some(9));
    assert_eq!(arr.last(), Some(&8));
    assert_eq!(arr.first(), Some(&0));
    assert!(arr.contains(&5));
    assert!(!arr.contains(&9));

    arr.clear();
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), 4, "Clearing should reset the capacity.");
    assert_eq!(arr.pop(), None);
}

#[test]
fn test_reserve() {
    let mut arr: DynamicArray<u8> = DynamicArray::with_cap(2);
    arr.push(1);
    arr.reserve(10);
    assert_eq!(arr.cap(), 11);
    arr.reserve(3);
    assert_eq!(arr.cap(), 11, "Reserving less than the spare capacity shouldn't reallocate.");
    assert_eq!(arr[0], 1);
}

#[test]
fn test_iterators() {
    let mut arr: DynamicArray<u32> = (1..=4).collect();
    for item in arr.iter_mut() {
        *item *= 10;
    }
    assert_eq!(arr.iter().rev().copied().collect::<Vec<_>>(), [40, 30, 20, 10]);
    assert_eq!(arr.iter().len(), 4);
    assert_eq!(arr.clone().into_iter().collect::<Vec<_>>(), [10, 20, 30, 40]);
    assert_eq!(format!("{arr}"), "[10, 20, 30, 40]");
}
