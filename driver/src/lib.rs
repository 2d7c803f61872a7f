//! Kernel driver exposing the cross-process introspection engine to a
//! single controller through a device object and buffered IOCTLs.

#![no_std]

extern crate alloc;
extern crate wdk_panic;

use {
    crate::ioctls::IoctlManager,
    crate::utils::uni,
    kernel_log::KernelLogger,
    spin::Lazy,
    wdk_sys::{ntddk::*, *},
};

mod allocator;
mod ioctls;
mod modules;
mod session;
mod utils;

/// The name of the device in the device namespace.
const DEVICE_NAME: &str = "\\Device\\probe";

/// The name of the device in the DOS device namespace.
const DOS_DEVICE_NAME: &str = "\\??\\probe";

/// Dispatch table, built once on first use.
static IOCTLS: Lazy<IoctlManager> = Lazy::new(|| {
    let mut manager = IoctlManager::default();
    manager.load_handlers();
    manager
});

/// Driver entry point, called by the system at load time. Creates the
/// communication device and its symbolic link and wires up the IRP
/// callbacks.
#[export_name = "DriverEntry"]
pub unsafe extern "system" fn driver_entry(
    driver: &mut DRIVER_OBJECT,
    _registry_path: PCUNICODE_STRING,
) -> NTSTATUS {
    KernelLogger::init(log::LevelFilter::Info).expect("Failed to initialize logger");

    log::info!("probe loaded");

    let device_name = uni::str_to_unicode(DEVICE_NAME);
    let dos_device_name = uni::str_to_unicode(DOS_DEVICE_NAME);
    let mut device_object: *mut DEVICE_OBJECT = core::ptr::null_mut();
    let mut status = IoCreateDevice(
        driver,
        0,
        &mut device_name.to_unicode(),
        FILE_DEVICE_UNKNOWN,
        FILE_DEVICE_SECURE_OPEN,
        0,
        &mut device_object,
    );

    if !NT_SUCCESS(status) {
        log::error!("IoCreateDevice failed with status: {status}");
        return status;
    }

    driver.DriverUnload = Some(driver_unload);
    driver.MajorFunction[IRP_MJ_CREATE as usize] = Some(driver_close);
    driver.MajorFunction[IRP_MJ_CLOSE as usize] = Some(driver_close);
    driver.MajorFunction[IRP_MJ_DEVICE_CONTROL as usize] = Some(device_control);

    status = IoCreateSymbolicLink(&mut dos_device_name.to_unicode(), &mut device_name.to_unicode());

    if !NT_SUCCESS(status) {
        IoDeleteDevice(device_object);
        log::error!("IoCreateSymbolicLink failed with status: {status}");
        return status;
    }

    // Requests travel through the system buffer; handlers overwrite the
    // request struct in place.
    (*device_object).Flags |= DO_BUFFERED_IO;
    (*device_object).Flags &= !DO_DEVICE_INITIALIZING;

    STATUS_SUCCESS
}

/// Handles device control requests (IOCTL).
///
/// Resolves the control code against the dispatch table and runs the
/// handler. A handler failure is degraded to a status code with zero valid
/// output bytes; it never terminates the privileged context.
pub unsafe extern "C" fn device_control(_device: *mut DEVICE_OBJECT, irp: *mut IRP) -> NTSTATUS {
    let stack = (*irp).Tail.Overlay.__bindgen_anon_2.__bindgen_anon_1.CurrentStackLocation;
    let control_code = (*stack).Parameters.DeviceIoControl.IoControlCode;

    let status = match IOCTLS.get_handler(control_code) {
        Some(handler) => match handler(irp, stack) {
            Ok(status) => status,
            Err(err) => {
                log::error!("request {control_code:#x} failed: {err}");
                (*irp).IoStatus.Information = 0;
                err.to_ntstatus()
            }
        },
        None => {
            (*irp).IoStatus.Information = 0;
            STATUS_INVALID_DEVICE_REQUEST
        }
    };

    (*irp).IoStatus.__bindgen_anon_1.Status = status;
    IofCompleteRequest(irp, IO_NO_INCREMENT as i8);

    status
}

/// Completes open/close of the device with success.
pub unsafe extern "C" fn driver_close(_device_object: *mut DEVICE_OBJECT, irp: *mut IRP) -> NTSTATUS {
    (*irp).IoStatus.__bindgen_anon_1.Status = STATUS_SUCCESS;
    (*irp).IoStatus.Information = 0;
    IofCompleteRequest(irp, IO_NO_INCREMENT as i8);
    STATUS_SUCCESS
}

/// Removes the symbolic link and the device on unload.
pub unsafe extern "C" fn driver_unload(driver_object: *mut DRIVER_OBJECT) {
    log::info!("unloading probe");

    let dos_device_name = uni::str_to_unicode(DOS_DEVICE_NAME);
    IoDeleteSymbolicLink(&mut dos_device_name.to_unicode());
    IoDeleteDevice((*driver_object).DeviceObject);
}
