use wdk_sys::{
    ntddk::{KeStackAttachProcess, KeUnstackDetachProcess},
    KAPC_STATE, PRKPROCESS,
};

/// Scoped switch of the calling thread's address-space view to a target
/// process, so pointers inside that process (its PEB, its loader list) can
/// be dereferenced directly.
///
/// Detaches on drop, so the original view is restored on every exit path,
/// including an early return after a contained fault. Not reentrant; the
/// session lock serializes callers.
pub struct ProcessAttach {
    apc_state: KAPC_STATE,
    attached: bool,
}

impl ProcessAttach {
    #[inline]
    pub fn new(target_process: PRKPROCESS) -> Self {
        let mut apc_state = unsafe { core::mem::zeroed::<KAPC_STATE>() };

        unsafe {
            KeStackAttachProcess(target_process, &mut apc_state);
        }

        Self {
            apc_state,
            attached: true,
        }
    }

    /// Detaches before the scope ends, for callers that need to leave the
    /// target context while holding other resources.
    #[inline]
    pub fn detach(&mut self) {
        if self.attached {
            unsafe {
                KeUnstackDetachProcess(&mut self.apc_state);
            }

            self.attached = false;
        }
    }
}

impl Drop for ProcessAttach {
    fn drop(&mut self) {
        if self.attached {
            unsafe {
                KeUnstackDetachProcess(&mut self.apc_state);
            }
        }
    }
}
