use ntapi::ntexapi::SYSTEM_INFORMATION_CLASS;
use wdk_sys::{NTSTATUS, PEPROCESS, PULONG, PVOID, ULONG};

use super::structs::PEB;

extern "system" {
    pub fn PsGetProcessPeb(Process: PEPROCESS) -> *mut PEB;

    pub fn ZwQuerySystemInformation(
        SystemInformationClass: SYSTEM_INFORMATION_CLASS,
        SystemInformation: PVOID,
        SystemInformationLength: ULONG,
        ReturnLength: PULONG,
    ) -> NTSTATUS;
}
