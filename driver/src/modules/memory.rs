use alloc::boxed::Box;
use wdk_sys::{IO_STACK_LOCATION, IRP, STATUS_SUCCESS};

use common::{
    ioctls::{READ_MEMORY, WRITE_MEMORY},
    structs::{MemoryReadRequest, MemoryWriteRequest},
    vars::TRANSFER_LEN,
};
use probex::error::ProbeError;

use crate::{ioctls::IoctlManager, session::SESSION, utils::get_request_buffer};

/// Registers the IOCTL handlers for memory operations on the attached
/// process.
///
/// * **READ_MEMORY** - Resolves a module base by name, adds the caller's
///   offset, and copies bytes out through the pinned-mapping primitive.
///   Either the full requested size comes back or the request fails; there
///   is no partial-success signaling.
/// * **WRITE_MEMORY** - Protocol stub; reports unsupported after the attach
///   gate.
pub fn register_memory_ioctls(ioctls: &mut IoctlManager) {
    ioctls.register_handler(
        READ_MEMORY,
        Box::new(|irp: *mut IRP, stack: *mut IO_STACK_LOCATION| unsafe {
            let request = get_request_buffer::<MemoryReadRequest>(irp, stack)?;
            let pid = SESSION.lock().pid()?;

            let size = (*request).input.size as usize;
            if size > TRANSFER_LEN {
                return Err(ProbeError::BufferTooSmall);
            }

            let base = probex::find_module_base(pid, &(*request).input.name)?;
            (*request).output.base = base;

            let address = base.wrapping_add((*request).input.offset);
            probex::read_virtual_memory(pid, address, &mut (*request).output.bytes[..size])?;

            log::info!("read {size} bytes at {address:#x} from process {pid}");

            (*irp).IoStatus.Information = size_of::<MemoryReadRequest>() as u64;
            Ok(STATUS_SUCCESS)
        }),
    );

    ioctls.register_handler(
        WRITE_MEMORY,
        Box::new(|irp: *mut IRP, stack: *mut IO_STACK_LOCATION| unsafe {
            let request = get_request_buffer::<MemoryWriteRequest>(irp, stack)?;
            let pid = SESSION.lock().pid()?;

            let size = ((*request).input.size as usize).min(TRANSFER_LEN);

            // The write path is specified on the wire but intentionally not
            // implemented; this reports unsupported for every input.
            probex::write_virtual_memory(pid, (*request).input.offset, &(*request).input.bytes[..size])?;

            (*irp).IoStatus.Information = size_of::<MemoryWriteRequest>() as u64;
            Ok(STATUS_SUCCESS)
        }),
    );
}
