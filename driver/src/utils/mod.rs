use probex::error::ProbeError;
use wdk_sys::{IO_STACK_LOCATION, IRP};

pub mod uni;

/// Retrieves the typed request block from a buffered-I/O IRP.
///
/// Both halves of the request live in the system buffer: the controller's
/// `In` fields arrive in it and the handler overwrites the `Out` fields in
/// place. Both declared lengths must cover the full request shape.
pub unsafe fn get_request_buffer<T>(
    irp: *mut IRP,
    stack: *mut IO_STACK_LOCATION,
) -> Result<*mut T, ProbeError> {
    let buffer = (*irp).AssociatedIrp.SystemBuffer;
    if buffer.is_null() {
        return Err(ProbeError::NullPointer("SystemBuffer"));
    }

    let input_length = (*stack).Parameters.DeviceIoControl.InputBufferLength;
    let output_length = (*stack).Parameters.DeviceIoControl.OutputBufferLength;
    if (input_length as usize) < size_of::<T>() || (output_length as usize) < size_of::<T>() {
        return Err(ProbeError::BufferTooSmall);
    }

    Ok(buffer as *mut T)
}
