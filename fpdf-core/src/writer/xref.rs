//! Object-number allocation and cross-reference bookkeeping.

use crate::error::{PdfError, Result};
use crate::objects::ObjectId;
use std::collections::BTreeSet;

/// Offset record for one written object, kept only long enough to build
/// the xref table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    pub object_number: u32,
    pub offset: u64,
}

/// Hands out object numbers and remembers which of them still have to be
/// written.
///
/// Numbers 1 and 2 are fixed (pages root and resource dictionary) and are
/// pending from the start; fresh numbers begin at 3. Every number handed
/// out must eventually be written exactly once, which keeps the numbering
/// contiguous and every `N 0 R` resolvable.
#[derive(Debug)]
pub struct ObjectAllocator {
    last_number: u32,
    pending: BTreeSet<u32>,
    entries: Vec<XrefEntry>,
}

impl ObjectAllocator {
    pub fn new() -> Self {
        Self {
            last_number: 2,
            pending: BTreeSet::from([1, 2]),
            entries: Vec::new(),
        }
    }

    /// Reserve the next object number.
    pub fn reserve(&mut self) -> ObjectId {
        self.last_number += 1;
        self.pending.insert(self.last_number);
        ObjectId::new(self.last_number)
    }

    /// Record that `id` starts at `offset`.
    pub fn record(&mut self, id: ObjectId, offset: u64) -> Result<()> {
        if !self.pending.remove(&id.number()) {
            return Err(PdfError::InvalidStructure(format!(
                "object {} was written twice or never reserved",
                id.number()
            )));
        }
        self.entries.push(XrefEntry {
            object_number: id.number(),
            offset,
        });
        Ok(())
    }

    /// Fail on the first reserved number that was never written.
    pub fn ensure_complete(&self) -> Result<()> {
        match self.pending.iter().next() {
            Some(&number) => Err(PdfError::DanglingReference(number)),
            None => Ok(()),
        }
    }

    /// Written entries sorted by object number.
    pub fn sorted_entries(&self) -> Vec<XrefEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|entry| entry.object_number);
        entries
    }

    pub fn object_count(&self) -> usize {
        self.entries.len()
    }

    pub fn last_number(&self) -> u32 {
        self.last_number
    }
}

impl Default for ObjectAllocator {
    fn default() -> Self {
        Self::new()
    }
}
