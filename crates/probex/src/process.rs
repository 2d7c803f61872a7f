use wdk_sys::{
    ntddk::{ObfDereferenceObject, PsLookupProcessByProcessId},
    NT_SUCCESS, PEPROCESS,
};

use crate::error::ProbeError;

/// A referenced `EPROCESS`, resolved from a raw process identifier.
///
/// The attach slot holds a bare pid with no ownership of the target, so the
/// lookup happens again on every operation; this type keeps the reference
/// count balanced for the duration of one operation.
pub struct Process {
    pub e_process: PEPROCESS,
}

impl Process {
    /// Resolves `pid` to a live process. A pid that no longer refers to a
    /// running process fails here, which is where a stale attach surfaces.
    #[inline]
    pub fn new(pid: u32) -> crate::Result<Self> {
        let mut process = core::ptr::null_mut();

        let status = unsafe { PsLookupProcessByProcessId(pid as usize as _, &mut process) };
        if NT_SUCCESS(status) {
            Ok(Self { e_process: process })
        } else {
            Err(ProbeError::ProcessNotFound(pid))
        }
    }
}

impl Drop for Process {
    fn drop(&mut self) {
        if !self.e_process.is_null() {
            unsafe { ObfDereferenceObject(self.e_process as _) };
        }
    }
}
