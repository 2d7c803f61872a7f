use alloc::{boxed::Box, collections::btree_map::BTreeMap};

use probex::error::ProbeError;
use wdk_sys::{IO_STACK_LOCATION, IRP, NTSTATUS};

use crate::modules::{
    register_memory_ioctls, register_module_ioctls, register_process_ioctls,
    register_thread_ioctls,
};

/// Type alias for an IOCTL handler function.
///
/// Each handler receives a pointer to an `IRP` (I/O Request Packet) and the
/// current `IO_STACK_LOCATION`, and returns the status to complete the
/// request with. On error the dispatcher zeroes the valid-byte count.
pub type IoctlHandler =
    Box<dyn Fn(*mut IRP, *mut IO_STACK_LOCATION) -> Result<NTSTATUS, ProbeError> + Send + Sync>;

/// Type for mapping IOCTL control codes to their respective handlers.
type Ioctls = BTreeMap<u32, IoctlHandler>;

/// Manages IOCTL operations and handler registration.
#[derive(Default)]
pub struct IoctlManager {
    handlers: Ioctls,
}

impl IoctlManager {
    /// Registers a new IOCTL handler.
    pub fn register_handler(&mut self, code: u32, handler: IoctlHandler) {
        self.handlers.insert(code, handler);
    }

    /// Retrieves the IOCTL handler for the given control code.
    pub fn get_handler(&self, control_code: u32) -> Option<&IoctlHandler> {
        self.handlers.get(&control_code)
    }

    /// Loads the handlers for every functional area.
    pub fn load_handlers(&mut self) {
        register_process_ioctls(self);
        register_module_ioctls(self);
        register_thread_ioctls(self);
        register_memory_ioctls(self);
    }
}
