use alloc::boxed::Box;
use wdk_sys::{IO_STACK_LOCATION, IRP, STATUS_SUCCESS};

use common::{ioctls::LIST_MODULES, structs::ModuleListRequest};

use crate::{
    ioctls::IoctlManager,
    session::{MODULE_TABLE, SESSION},
    utils::get_request_buffer,
};

/// Registers the IOCTL handlers for module-related operations.
///
/// * **LIST_MODULES** - Enumerates the loaded modules of the attached
///   process into the staging table and copies the table into the response.
///   Truncation at table capacity is reported through the `found`/`copied`
///   pair, not as an error.
pub fn register_module_ioctls(ioctls: &mut IoctlManager) {
    ioctls.register_handler(
        LIST_MODULES,
        Box::new(|irp: *mut IRP, stack: *mut IO_STACK_LOCATION| unsafe {
            let request = get_request_buffer::<ModuleListRequest>(irp, stack)?;
            let pid = SESSION.lock().pid()?;

            // Held across populate and copy: the response describes exactly
            // one enumeration of one target.
            let mut table = MODULE_TABLE.lock();
            let count = probex::enumerate_modules(pid, &mut table[..])?;

            (*request).output.found = count.found;
            (*request).output.copied = count.copied;
            (*request).output.modules.copy_from_slice(&table[..]);

            log::info!(
                "enumerated {} modules for process {pid} ({} copied)",
                count.found,
                count.copied
            );

            (*irp).IoStatus.Information = size_of::<ModuleListRequest>() as u64;
            Ok(STATUS_SUCCESS)
        }),
    );
}
