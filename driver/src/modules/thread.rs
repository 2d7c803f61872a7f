use alloc::boxed::Box;
use wdk_sys::{IO_STACK_LOCATION, IRP, STATUS_SUCCESS};

use common::{ioctls::LIST_THREADS, structs::ThreadListRequest};

use crate::{
    ioctls::IoctlManager,
    session::{SESSION, THREAD_TABLE},
    utils::get_request_buffer,
};

/// Registers the IOCTL handlers for thread-related operations.
///
/// * **LIST_THREADS** - Walks the system process snapshot. Diagnostics only:
///   per-record thread counts go to the log, the response table stays zeroed
///   with `found = copied = 0`.
pub fn register_thread_ioctls(ioctls: &mut IoctlManager) {
    ioctls.register_handler(
        LIST_THREADS,
        Box::new(|irp: *mut IRP, stack: *mut IO_STACK_LOCATION| unsafe {
            let request = get_request_buffer::<ThreadListRequest>(irp, stack)?;
            let pid = SESSION.lock().pid()?;

            let visited = probex::fetch_thread_snapshot()?;
            log::info!("snapshot visited {visited} process records (target pid {pid})");

            let table = THREAD_TABLE.lock();
            (*request).output.found = 0;
            (*request).output.copied = 0;
            (*request).output.threads.copy_from_slice(&table[..]);

            (*irp).IoStatus.Information = size_of::<ThreadListRequest>() as u64;
            Ok(STATUS_SUCCESS)
        }),
    );
}
