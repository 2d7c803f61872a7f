//! Wire-layout guarantees the controller binary depends on.

use core::mem::{align_of, offset_of, size_of};

use common::ioctls::{self, ctl_code};
use common::structs::*;
use common::vars::*;

#[test]
fn control_codes_are_distinct() {
    let codes = [
        ioctls::ATTACH_PROCESS,
        ioctls::LIST_MODULES,
        ioctls::LIST_THREADS,
        ioctls::READ_MEMORY,
        ioctls::WRITE_MEMORY,
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn control_codes_use_buffered_method() {
    // CTL_CODE with METHOD_BUFFERED leaves the low two bits clear.
    assert_eq!(ioctls::ATTACH_PROCESS & 0b11, 0);
    assert_eq!(ioctls::ATTACH_PROCESS >> 16, 0x22);
    assert_eq!(ctl_code(0x22, 0x800, 0, 0), 0x0022_2000);
}

#[test]
fn module_info_layout_is_stable() {
    assert_eq!(offset_of!(ModuleInfo, base), 0);
    assert_eq!(offset_of!(ModuleInfo, size), 8);
    assert_eq!(offset_of!(ModuleInfo, name), 12);
    assert_eq!(align_of::<ModuleInfo>(), 8);
    // 8 + 4 + 512, padded to the u64 alignment.
    assert_eq!(size_of::<ModuleInfo>(), 528);
}

#[test]
fn module_list_carries_both_counts_before_the_table() {
    assert_eq!(offset_of!(ModuleListOut, found), 0);
    assert_eq!(offset_of!(ModuleListOut, copied), 4);
    assert_eq!(offset_of!(ModuleListOut, modules), 8);
    assert_eq!(
        size_of::<ModuleListRequest>(),
        8 + MAX_MODULES * size_of::<ModuleInfo>()
    );
}

#[test]
fn thread_list_layout_is_stable() {
    assert_eq!(size_of::<ThreadInfo>(), 16);
    assert_eq!(
        size_of::<ThreadListRequest>(),
        8 + MAX_THREADS * size_of::<ThreadInfo>()
    );
}

#[test]
fn read_request_in_half_precedes_out_half() {
    assert_eq!(offset_of!(MemoryReadRequest, input), 0);
    assert_eq!(
        offset_of!(MemoryReadRequest, output),
        size_of::<MemoryReadIn>()
    );
    assert_eq!(size_of::<MemoryReadIn>(), 2 * MODULE_NAME_LEN + 16);
    assert_eq!(size_of::<MemoryReadOut>(), 8 + TRANSFER_LEN);
}

#[test]
fn write_request_mirrors_read_plus_payload() {
    assert_eq!(
        size_of::<MemoryWriteIn>(),
        size_of::<MemoryReadIn>() + TRANSFER_LEN
    );
    assert_eq!(size_of::<MemoryWriteOut>(), 8);
}

#[test]
fn empty_module_entry_is_all_zero() {
    let entry = ModuleInfo::EMPTY;
    assert_eq!(entry.base, 0);
    assert_eq!(entry.size, 0);
    assert!(entry.name.iter().all(|&c| c == 0));
}
