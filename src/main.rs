use std::env;
use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use classic_collections::collections::binary_tree::BinarySearchTree;
use classic_collections::collections::contiguous::{DynamicArray, Stack};
use classic_collections::collections::hash::{ChainedHashTable, OpenHashTable};
use classic_collections::collections::linked::{DoublyLinkedList, Queue, SinglyLinkedList};
use classic_collections::persist::{Format, Persist};
use env_logger::Env;
use log::info;

/// Saves `value` in both formats under `dir`, loads each file into a fresh `P` and logs the
/// result alongside the original.
fn round_trip<P>(dir: &Path, name: &str, value: &P) -> Result<(), Box<dyn Error>>
where
    P: Persist + Default + Display,
{
    info!("[{name}] {value}");

    for format in [Format::Text, Format::Binary] {
        let path = dir.join(format!("{name}.{format}"));
        value.save(&path, format)?;

        let mut loaded = P::default();
        loaded.load(&path, format)?;
        info!("[{name}] reloaded from {}: {loaded}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let dir = env::args().nth(1).map(PathBuf::from).unwrap_or_else(env::temp_dir);
    info!("writing collections to {}", dir.display());

    let words = ["apple", "banana", "cherry", "date"].map(String::from);

    let arr: DynamicArray<String> = words.iter().cloned().collect();
    round_trip(&dir, "dynamic_array", &arr)?;

    let singly: SinglyLinkedList<String> = words.iter().cloned().collect();
    round_trip(&dir, "singly_linked_list", &singly)?;

    let mut doubly: DoublyLinkedList<String> = words.iter().cloned().collect();
    doubly.insert_after(&String::from("banana"), String::from("blueberry"));
    round_trip(&dir, "doubly_linked_list", &doubly)?;

    let mut stack: Stack<String> = words.iter().cloned().collect();
    stack.pop();
    round_trip(&dir, "stack", &stack)?;

    let mut queue: Queue<String> = words.iter().cloned().collect();
    queue.pop();
    round_trip(&dir, "queue", &queue)?;

    let mut chained = ChainedHashTable::new();
    for (word, len) in words.iter().map(|word| (word, word.len())) {
        chained.insert(word.as_str(), len.to_string());
    }
    round_trip(&dir, "chained_hash_table", &chained)?;

    let mut open = OpenHashTable::with_cap(13);
    for word in &words {
        open.insert(word.as_str(), word.to_uppercase())?;
    }
    open.remove("banana");
    round_trip(&dir, "open_hash_table", &open)?;

    let mut tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    tree.remove(&30);
    round_trip(&dir, "binary_search_tree", &tree)?;

    Ok(())
}
