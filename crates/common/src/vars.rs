/// Capacity of the module table. Enumeration past this bound truncates;
/// the response still reports how many entries were actually found.
pub const MAX_MODULES: usize = 128;

/// Capacity of the thread table.
pub const MAX_THREADS: usize = 128;

/// Module names are UTF-16, NUL-terminated, clamped to this many units.
pub const MODULE_NAME_LEN: usize = 256;

/// Transfer window for a single memory read/write request, in bytes.
pub const TRANSFER_LEN: usize = 4096;

/// Upper bound on loaded-module list walks. The list lives in another
/// address space and is untrusted; a corrupted cycle must not spin forever.
pub const MAX_MODULE_WALK: usize = 4096;
