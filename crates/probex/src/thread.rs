//! System process/thread snapshot walk.
//!
//! Diagnostics-only today: the walk visits every process record and logs its
//! thread count, but extracts no per-thread fields. The record chain comes
//! from `ZwQuerySystemInformation` and is still iterated defensively through
//! the bounded record walker.

use core::ffi::c_void;

use ntapi::ntexapi::SystemProcessInformation;
use wdk_sys::{NT_SUCCESS, POOL_FLAG_NON_PAGED};

use common::records::RecordWalker;

use crate::{data::ZwQuerySystemInformation, error::ProbeError, utils::pool::PoolMemory};

/// Snapshot buffer size. The original tooling used a fixed 1 MiB window;
/// records past it are simply not visited.
const SNAPSHOT_LEN: usize = 1024 * 1024;

/// Offset of `NumberOfThreads` inside a process record, after the
/// `NextEntryOffset` header.
const THREAD_COUNT_OFFSET: usize = 4;

/// Walks the system-wide process snapshot, logging each record's thread
/// count. Returns how many process records were visited.
pub unsafe fn fetch_thread_snapshot() -> crate::Result<u32> {
    let snapshot = PoolMemory::new(
        POOL_FLAG_NON_PAGED,
        SNAPSHOT_LEN as u64,
        u32::from_ne_bytes(*b"prbT"),
    )
    .ok_or(ProbeError::ResourceExhausted("ExAllocatePool2"))?;

    let mut return_length = 0u32;
    let status = ZwQuerySystemInformation(
        SystemProcessInformation,
        snapshot.ptr as *mut c_void,
        SNAPSHOT_LEN as u32,
        &mut return_length,
    );

    if !NT_SUCCESS(status) {
        return Err(ProbeError::ApiCallFailed("ZwQuerySystemInformation", status));
    }

    let filled = (return_length as usize).min(SNAPSHOT_LEN);
    let buffer = core::slice::from_raw_parts(snapshot.ptr as *const u8, filled);

    let mut processes = 0u32;
    for record in RecordWalker::new(buffer) {
        let threads = record
            .get(THREAD_COUNT_OFFSET..THREAD_COUNT_OFFSET + 4)
            .and_then(|b| b.try_into().ok())
            .map(u32::from_le_bytes)
            .unwrap_or(0);

        log::info!("process record {processes}: {threads} threads");
        processes += 1;
    }

    Ok(processes)
}
