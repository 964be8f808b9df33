use std::io::{BufRead, Read, Write};

use super::{Persist, Record, Result, binary, text};
use crate::collections::contiguous::{DynamicArray, Stack};
use crate::collections::linked::{DoublyLinkedList, Queue, SinglyLinkedList};

/// The largest count that a load will pre-size a [`DynamicArray`] for. Larger arrays still load,
/// growing as they go.
const MAX_PRESIZE: usize = 1 << 16;

/// Loaded arrays start with room for twice the declared count, plus one.
fn presized<T>(count: usize) -> DynamicArray<T> {
    DynamicArray::with_cap(count.min(MAX_PRESIZE) * 2 + 1)
}

impl<T: Record> Persist for DynamicArray<T> {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn write_text(&self, writer: &mut impl Write) -> Result<()> {
        text::write_records(writer, self.len(), self)
    }

    fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()> {
        let count = text::read_count(reader)?;
        *self = presized(count);
        text::read_records(reader, count, |value| self.push(value))
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        binary::write_records(writer, self.len(), self)
    }

    fn read_binary(&mut self, reader: &mut impl Read) -> Result<()> {
        let count = binary::read_len(reader)?;
        *self = presized(count);
        binary::read_records(reader, count, |value| self.push(value))
    }
}

macro_rules! impl_persist_sequence {
    ($collection:ident => $push:ident) => {
        impl<T: Record> Persist for $collection<T> {
            fn record_count(&self) -> usize {
                self.len()
            }

            fn write_text(&self, writer: &mut impl Write) -> Result<()> {
                text::write_records(writer, self.len(), self)
            }

            fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()> {
                let count = text::read_count(reader)?;
                self.clear();
                text::read_records(reader, count, |value| self.$push(value))
            }

            fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
                binary::write_records(writer, self.len(), self)
            }

            fn read_binary(&mut self, reader: &mut impl Read) -> Result<()> {
                let count = binary::read_len(reader)?;
                self.clear();
                binary::read_records(reader, count, |value| self.$push(value))
            }
        }
    };
    ($collection:ident => $push:ident, $($c:ident => $p:ident),+) => {
        impl_persist_sequence!($collection => $push);
        impl_persist_sequence!($($c => $p),+);
    };
}

impl_persist_sequence!(
    Stack => push,
    SinglyLinkedList => push_back,
    DoublyLinkedList => push_back,
    Queue => push
);
