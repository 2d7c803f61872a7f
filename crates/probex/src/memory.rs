//! Pinned, fault-contained copies out of another address space.
//!
//! The source pages belong to a process that may free or reprotect them at
//! any instant, including mid-copy. Every access therefore goes through a
//! pinned, non-cached, read-only system mapping, and the byte copy itself
//! runs inside an SEH boundary that converts an access fault into an error
//! result instead of taking down the kernel.

use core::ptr::null_mut;

use wdk_sys::{
    ntddk::{
        IoAllocateMdl, IoFreeMdl, MmMapLockedPagesSpecifyCache, MmProbeAndLockPages,
        MmProtectMdlSystemAddress, MmUnlockPages, MmUnmapLockedPages,
    },
    MdlMappingNoExecute, NT_SUCCESS, PAGE_READONLY, PMDL, _LOCK_OPERATION::IoReadAccess,
    _MEMORY_CACHING_TYPE::MmNonCached, _MM_PAGE_PRIORITY::HighPagePriority, _MODE::KernelMode,
};

use crate::{
    error::ProbeError, utils::attach::ProcessAttach, utils::pool::PoolMemory, Process,
};

/// A pinned, read-only system-space view of `[source, source + size)`.
///
/// Construction acquires three resources in order: the MDL describing the
/// region, the page pin, and the system mapping. `Drop` releases whatever was
/// acquired in reverse order on every exit path, so a failure after any step
/// leaks nothing.
pub struct ReadMapping {
    mdl: PMDL,
    mapped: *const u8,
    locked: bool,
}

impl ReadMapping {
    /// Pins and maps the source region for reading.
    ///
    /// The caller must already be in the address-space context that `source`
    /// is meaningful in (attached, for a target-process pointer). The probe
    /// itself faults on an unmapped source; that fault is contained here.
    pub unsafe fn new(source: *const u8, size: usize) -> crate::Result<Self> {
        if source.is_null() || size == 0 {
            return Err(ProbeError::NullPointer("source"));
        }

        let mdl = IoAllocateMdl(source as _, size as u32, 0, 0, null_mut());
        if mdl.is_null() {
            return Err(ProbeError::ResourceExhausted("IoAllocateMdl"));
        }

        let mut mapping = Self {
            mdl,
            mapped: null_mut(),
            locked: false,
        };

        if microseh::try_seh(|| MmProbeAndLockPages(mdl, KernelMode as i8, IoReadAccess)).is_err() {
            // Drop frees the MDL; the pages were never locked.
            return Err(ProbeError::CopyFault);
        }
        mapping.locked = true;

        // Non-cached: a cross-process view must not inherit cache assumptions
        // tied to the original mapping.
        let mapped = MmMapLockedPagesSpecifyCache(
            mdl,
            KernelMode as i8,
            MmNonCached,
            null_mut(),
            0,
            HighPagePriority as u32 | MdlMappingNoExecute,
        );
        if mapped.is_null() {
            return Err(ProbeError::ResourceExhausted("MmMapLockedPagesSpecifyCache"));
        }
        mapping.mapped = mapped as *const u8;

        // The view is a source; read-only protection guards against an
        // accidental write through it.
        let status = MmProtectMdlSystemAddress(mdl, PAGE_READONLY);
        if !NT_SUCCESS(status) {
            return Err(ProbeError::ApiCallFailed("MmProtectMdlSystemAddress", status));
        }

        Ok(mapping)
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.mapped
    }
}

impl Drop for ReadMapping {
    fn drop(&mut self) {
        unsafe {
            if !self.mapped.is_null() {
                MmUnmapLockedPages(self.mapped as _, self.mdl);
            }

            if self.locked {
                MmUnlockPages(self.mdl);
            }

            if !self.mdl.is_null() {
                IoFreeMdl(self.mdl);
            }
        }
    }
}

/// Copies `size` bytes from `source` (a pointer in the currently attached
/// address space) into `dst` (kernel memory) through a pinned mapping.
///
/// On failure the destination may hold a partial copy; callers discard it.
pub unsafe fn copy_from_attached(dst: *mut u8, source: *const u8, size: usize) -> crate::Result<()> {
    let mapping = ReadMapping::new(source, size)?;

    microseh::try_seh(|| core::ptr::copy_nonoverlapping(mapping.as_ptr(), dst, size)).map_err(
        |err| {
            log::error!("contained access fault during copy: {:?}", err.code());
            ProbeError::CopyFault
        },
    )
}

/// Reads `dst.len()` bytes from `address` in the target process.
///
/// Stages through non-paged pool so nothing is written to the caller's
/// buffer unless the pinned copy fully succeeded: either all requested
/// bytes land in `dst`, or `dst` is untouched.
pub unsafe fn read_virtual_memory(pid: u32, address: u64, dst: &mut [u8]) -> crate::Result<()> {
    if dst.is_empty() {
        return Ok(());
    }

    let target = Process::new(pid)?;
    let staging = PoolMemory::new(
        wdk_sys::POOL_FLAG_NON_PAGED,
        dst.len() as u64,
        u32::from_ne_bytes(*b"prbR"),
    )
    .ok_or(ProbeError::ResourceExhausted("ExAllocatePool2"))?;

    {
        let _attach = ProcessAttach::new(target.e_process);
        copy_from_attached(staging.ptr as *mut u8, address as *const u8, dst.len())?;
    }

    core::ptr::copy_nonoverlapping(staging.ptr as *const u8, dst.as_mut_ptr(), dst.len());
    Ok(())
}

/// Write path of the protocol. Specified on the wire, intentionally not
/// implemented; every call reports unsupported.
pub unsafe fn write_virtual_memory(_pid: u32, _address: u64, _src: &[u8]) -> crate::Result<()> {
    Err(ProbeError::Unsupported)
}
