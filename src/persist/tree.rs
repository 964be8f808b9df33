use std::io::{BufRead, Read, Write};

use super::{FormatError, Persist, Record, Result, binary, text};
use crate::collections::binary_tree::BinarySearchTree;

const NULL_LINE: &str = "#";
const NULL_MARKER: i32 = -1;
const NODE_MARKER: i32 = 1;

/// Trees are written in pre-order with an explicit entry for every absent child, and rebuilt
/// node by node in the same order, so a loaded tree has exactly the saved shape. There's no count
/// header; an empty tree is a single null entry.
///
/// Loading builds a new tree and only replaces `self` once the whole tree has been read.
impl Persist for BinarySearchTree<i32> {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn write_text(&self, writer: &mut impl Write) -> Result<()> {
        for slot in self.pre_order_slots() {
            match slot {
                Some(key) => writeln!(writer, "{key}")?,
                None => writeln!(writer, "{NULL_LINE}")?,
            }
        }
        Ok(())
    }

    fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()> {
        *self = BinarySearchTree::from_pre_order(|| -> Result<Option<i32>> {
            let line = text::read_line(reader)?.ok_or(FormatError::TruncatedTree)?;
            if line.trim() == NULL_LINE {
                Ok(None)
            } else {
                Ok(Some(i32::parse_text(&line)?))
            }
        })?;
        Ok(())
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        for slot in self.pre_order_slots() {
            match slot {
                Some(key) => {
                    binary::write_i32(writer, NODE_MARKER)?;
                    key.write_binary(writer)?;
                },
                None => binary::write_i32(writer, NULL_MARKER)?,
            }
        }
        Ok(())
    }

    fn read_binary(&mut self, reader: &mut impl Read) -> Result<()> {
        *self = BinarySearchTree::from_pre_order(|| -> Result<Option<i32>> {
            match binary::read_i32(reader)? {
                NULL_MARKER => Ok(None),
                NODE_MARKER => Ok(Some(i32::read_binary(reader)?)),
                marker => Err(FormatError::InvalidMarker(marker).into()),
            }
        })?;
        Ok(())
    }
}
