use alloc::boxed::Box;
use wdk_sys::{IO_STACK_LOCATION, IRP, STATUS_SUCCESS};

use common::{ioctls::ATTACH_PROCESS, structs::AttachRequest};

use crate::{ioctls::IoctlManager, session::SESSION, utils::get_request_buffer};

/// Registers the IOCTL handlers for process-related operations.
///
/// * **ATTACH_PROCESS** - Registers the target process identifier that gates
///   every other operation. Overwrites any previous target and performs no
///   liveness validation; a dead pid fails on first use instead.
pub fn register_process_ioctls(ioctls: &mut IoctlManager) {
    ioctls.register_handler(
        ATTACH_PROCESS,
        Box::new(|irp: *mut IRP, stack: *mut IO_STACK_LOCATION| unsafe {
            let request = get_request_buffer::<AttachRequest>(irp, stack)?;
            let pid = (*request).input.pid;

            SESSION.lock().attach(pid);
            log::info!("attached to process {pid}");

            (*irp).IoStatus.Information = size_of::<AttachRequest>() as u64;
            Ok(STATUS_SUCCESS)
        }),
    );
}
