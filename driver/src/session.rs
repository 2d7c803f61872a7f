//! Attach state and the shared enumeration tables.
//!
//! Concurrency contract: the attach slot and each table sit behind their own
//! `spin::Mutex`. A handler holds the table lock across the whole
//! populate-and-copy sequence, so one response always describes a single
//! target. The slot and the tables are not locked together: an Attach racing
//! a ListModules means the enumeration sees either the old or the new pid.
//! Both are valid outcomes, and nothing mixes two targets in one response.

use common::{
    structs::{ModuleInfo, ThreadInfo},
    vars::{MAX_MODULES, MAX_THREADS},
};
use probex::error::ProbeError;
use spin::{Lazy, Mutex};

/// Single-slot registration of the current target process.
pub struct Session {
    pid: u32,
}

impl Session {
    /// Overwrites the slot unconditionally. No liveness check: a pid that
    /// never existed or has exited fails on first use, not here.
    pub fn attach(&mut self, pid: u32) {
        self.pid = pid;
    }

    /// The attached pid, or `NotAttached` while the slot is empty.
    pub fn pid(&self) -> Result<u32, ProbeError> {
        common::tables::attached_pid(self.pid).ok_or(ProbeError::NotAttached)
    }
}

pub static SESSION: Lazy<Mutex<Session>> = Lazy::new(|| Mutex::new(Session { pid: 0 }));

/// Staging table for ListModules; reflects only the most recent successful
/// enumeration. Zeroed before each population so a smaller target never
/// shows stale entries from a larger one.
pub static MODULE_TABLE: Lazy<Mutex<[ModuleInfo; MAX_MODULES]>> =
    Lazy::new(|| Mutex::new([ModuleInfo::EMPTY; MAX_MODULES]));

/// Thread table counterpart. The snapshot walk is diagnostics-only, so this
/// stays zeroed; it exists to keep the response layout stable.
pub static THREAD_TABLE: Lazy<Mutex<[ThreadInfo; MAX_THREADS]>> =
    Lazy::new(|| Mutex::new([ThreadInfo::EMPTY; MAX_THREADS]));
