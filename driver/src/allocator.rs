use core::alloc::{GlobalAlloc, Layout};
use wdk_sys::{
    ntddk::{ExAllocatePool2, ExFreePool},
    POOL_FLAG_NON_PAGED,
};

#[global_allocator]
static GLOBAL_ALLOCATOR: KernelAlloc = KernelAlloc;

/// Standard memory allocator for kernel space, backed by `ExAllocatePool2`.
struct KernelAlloc;

// Stored little-endian, so the reversed byte order reads correctly in
// pool-tracking tooling.
const RUST_TAG: u32 = u32::from_ne_bytes(*b"rust");

unsafe impl GlobalAlloc for KernelAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let memory = ExAllocatePool2(POOL_FLAG_NON_PAGED, layout.size() as u64, RUST_TAG);
        if memory.is_null() {
            return core::ptr::null_mut();
        }

        memory.cast()
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        ExFreePool(ptr.cast());
    }
}
