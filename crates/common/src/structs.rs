//! Fixed-layout request/response structures.
//!
//! Each request is a single `#[repr(C)]` block with an `In` half written by
//! the controller and an `Out` half written by the driver. The driver reports
//! `size_of` the whole request as the valid byte count on success and zero on
//! failure, so the controller discards the `Out` half on any non-success
//! status.

use crate::vars::{MAX_MODULES, MAX_THREADS, MODULE_NAME_LEN, TRANSFER_LEN};

/// One loaded module of the target process.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ModuleInfo {
    /// Base address of the mapped image in the target's address space.
    pub base: u64,

    /// Size of the mapped image in bytes.
    pub size: u32,

    /// `BaseDllName`, UTF-16, NUL-terminated, truncated at the buffer.
    pub name: [u16; MODULE_NAME_LEN],
}

impl ModuleInfo {
    pub const EMPTY: ModuleInfo = ModuleInfo {
        base: 0,
        size: 0,
        name: [0; MODULE_NAME_LEN],
    };
}

impl Default for ModuleInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One thread of the target process. Declared for layout compatibility with
/// the controller; the current driver never fills these in.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadInfo {
    /// Thread identifier.
    pub tid: u32,

    /// Scheduler state at snapshot time.
    pub state: u32,

    /// Thread start address in the target's address space.
    pub start_address: u64,
}

impl ThreadInfo {
    pub const EMPTY: ThreadInfo = ThreadInfo {
        tid: 0,
        state: 0,
        start_address: 0,
    };
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AttachIn {
    /// Target process identifier. Not validated at attach time; a stale pid
    /// surfaces as a failure on first use.
    pub pid: u32,
}

/// Attach request. Always succeeds; overwrites any previous target.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AttachRequest {
    pub input: AttachIn,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ModuleListOut {
    /// Modules present in the target's loader list.
    pub found: u32,

    /// Entries actually copied into `modules`; `copied <= MAX_MODULES` and
    /// `copied <= found`. A shorter value means the table truncated.
    pub copied: u32,

    pub modules: [ModuleInfo; MAX_MODULES],
}

/// ListModules request: no input beyond the attached pid.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ModuleListRequest {
    pub output: ModuleListOut,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ThreadListOut {
    pub found: u32,
    pub copied: u32,
    pub threads: [ThreadInfo; MAX_THREADS],
}

/// ListThreads request. The snapshot walk is diagnostics-only today, so the
/// driver reports `found = copied = 0` over a zeroed table.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ThreadListRequest {
    pub output: ThreadListOut,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryReadIn {
    /// Module name to resolve, UTF-16, NUL-terminated, case-insensitive.
    pub name: [u16; MODULE_NAME_LEN],

    /// Byte offset from the resolved module base.
    pub offset: u64,

    /// Bytes to copy; must not exceed `TRANSFER_LEN`.
    pub size: u64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryReadOut {
    /// The resolved module base address.
    pub base: u64,

    /// The copied bytes; the first `size` bytes are valid on success.
    pub bytes: [u8; TRANSFER_LEN],
}

/// ReadMemory request: resolve `name`, add `offset`, copy `size` bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryReadRequest {
    pub input: MemoryReadIn,
    pub output: MemoryReadOut,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryWriteIn {
    pub name: [u16; MODULE_NAME_LEN],
    pub offset: u64,
    pub size: u64,
    pub bytes: [u8; TRANSFER_LEN],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryWriteOut {
    pub base: u64,
}

/// WriteMemory request. Fully specified on the wire; the driver answers
/// every instance with an unsupported status.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct MemoryWriteRequest {
    pub input: MemoryWriteIn,
    pub output: MemoryWriteOut,
}
