//! Accounting for the attach slot and the fixed-capacity module table.
//!
//! The module table has a fixed wire capacity; a target with more modules
//! than fit must still enumerate successfully, with the overflow visible as
//! `copied < found` instead of silently dropped.

use crate::structs::ModuleInfo;

/// Outcome of one enumeration: how many modules the walk saw versus how many
/// fit the caller's table. `copied < found` means the table truncated.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModuleCount {
    pub found: u32,
    pub copied: u32,
}

/// Fills a module table in walk order, counting past capacity.
pub struct ModuleTableFill<'a> {
    table: &'a mut [ModuleInfo],
    count: ModuleCount,
}

impl<'a> ModuleTableFill<'a> {
    /// Zeroes the table up front so a shorter result never leaks stale
    /// entries from a previous, larger enumeration.
    pub fn new(table: &'a mut [ModuleInfo]) -> Self {
        table.fill(ModuleInfo::EMPTY);
        Self {
            table,
            count: ModuleCount::default(),
        }
    }

    /// Records one walked module. Past capacity the entry is dropped but
    /// still counted.
    pub fn push(&mut self, module: ModuleInfo) {
        let slot = self.count.copied as usize;
        self.count.found += 1;
        if slot < self.table.len() {
            self.table[slot] = module;
            self.count.copied += 1;
        }
    }

    pub fn finish(self) -> ModuleCount {
        self.count
    }
}

/// The attach slot holds one pid; zero means no target is registered and
/// every dependent operation must refuse to run.
pub fn attached_pid(slot: u32) -> Option<u32> {
    match slot {
        0 => None,
        pid => Some(pid),
    }
}
