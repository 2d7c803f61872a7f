//! Loaded-module introspection: walking the target's loader list.
//!
//! The list is a circular `LIST_ENTRY` chain hanging off the target's PEB,
//! entirely in the target's address space. Every node is fetched through the
//! pinned copy primitive rather than dereferenced in place, and the walk is
//! additionally bounded: the chain is untrusted input and a corrupted cycle
//! must not spin the caller forever.

use core::mem::offset_of;

use common::{
    structs::ModuleInfo,
    tables::ModuleTableFill,
    vars::{MAX_MODULE_WALK, MODULE_NAME_LEN},
    wide,
};

pub use common::tables::ModuleCount;

use crate::{
    copy_from_attached,
    data::{PsGetProcessPeb, LDR_DATA_TABLE_ENTRY, PEB, PEB_LDR_DATA},
    error::ProbeError,
    utils::attach::ProcessAttach,
    Process,
};

/// The loader links the process image itself as the first entry; the walk
/// starts at the second.
struct ModuleWalk {
    head: usize,
    next: usize,
    steps: usize,
}

impl ModuleWalk {
    /// Reads the target's PEB and loader data, returning a walk positioned on
    /// the first DLL entry. Caller must be attached to the target.
    unsafe fn begin(e_process: wdk_sys::PEPROCESS) -> crate::Result<Self> {
        let peb_ptr = PsGetProcessPeb(e_process);
        if peb_ptr.is_null() {
            return Err(ProbeError::NullPointer("PEB"));
        }

        let mut peb = core::mem::zeroed::<PEB>();
        copy_from_attached(
            &mut peb as *mut PEB as *mut u8,
            peb_ptr as *const u8,
            size_of::<PEB>(),
        )?;

        if peb.Ldr.is_null() {
            return Err(ProbeError::NullPointer("PEB_LDR_DATA"));
        }

        let mut ldr = core::mem::zeroed::<PEB_LDR_DATA>();
        copy_from_attached(
            &mut ldr as *mut PEB_LDR_DATA as *mut u8,
            peb.Ldr as *const u8,
            size_of::<PEB_LDR_DATA>(),
        )?;

        let head = peb.Ldr as usize + offset_of!(PEB_LDR_DATA, InLoadOrderModuleList);
        let first = ldr.InLoadOrderModuleList.Flink as usize;
        if first == 0 {
            return Err(ProbeError::NullPointer("InLoadOrderModuleList"));
        }

        // Skip the main image entry.
        let mut image = core::mem::zeroed::<LDR_DATA_TABLE_ENTRY>();
        copy_from_attached(
            &mut image as *mut LDR_DATA_TABLE_ENTRY as *mut u8,
            first as *const u8,
            size_of::<LDR_DATA_TABLE_ENTRY>(),
        )?;

        Ok(Self {
            head,
            next: image.InLoadOrderLinks.Flink as usize,
            steps: 0,
        })
    }

    /// Fetches the next entry, or `None` once the walk closed the circle or
    /// hit the defensive iteration bound.
    unsafe fn next_entry(&mut self) -> crate::Result<Option<LDR_DATA_TABLE_ENTRY>> {
        if self.next == self.head || self.next == 0 || self.steps >= MAX_MODULE_WALK {
            return Ok(None);
        }
        self.steps += 1;

        // `InLoadOrderLinks` sits at offset 0, so the link pointer is the
        // entry pointer.
        let mut entry = core::mem::zeroed::<LDR_DATA_TABLE_ENTRY>();
        copy_from_attached(
            &mut entry as *mut LDR_DATA_TABLE_ENTRY as *mut u8,
            self.next as *const u8,
            size_of::<LDR_DATA_TABLE_ENTRY>(),
        )?;

        self.next = entry.InLoadOrderLinks.Flink as usize;
        Ok(Some(entry))
    }
}

/// Copies an entry's `BaseDllName` into a fixed, NUL-terminated wide buffer.
unsafe fn read_entry_name(entry: &LDR_DATA_TABLE_ENTRY) -> crate::Result<[u16; MODULE_NAME_LEN]> {
    let mut name = [0u16; MODULE_NAME_LEN];

    let units = (entry.BaseDllName.Length as usize / 2).min(MODULE_NAME_LEN - 1);
    if units > 0 && !entry.BaseDllName.Buffer.is_null() {
        copy_from_attached(
            name.as_mut_ptr() as *mut u8,
            entry.BaseDllName.Buffer as *const u8,
            units * 2,
        )?;
    }

    Ok(name)
}

/// Walks the loaded-module list of `pid` into `table`.
///
/// The table is zeroed first so a shorter result never leaks stale entries
/// from a previous, larger target. The walk keeps counting past capacity;
/// truncation shows up as `copied < found`, never as an error.
pub unsafe fn enumerate_modules(pid: u32, table: &mut [ModuleInfo]) -> crate::Result<ModuleCount> {
    let target = Process::new(pid)?;
    let _attach = ProcessAttach::new(target.e_process);

    let mut walk = ModuleWalk::begin(target.e_process)?;
    let mut fill = ModuleTableFill::new(table);

    while let Some(entry) = walk.next_entry()? {
        if entry.DllBase.is_null() {
            continue;
        }

        fill.push(ModuleInfo {
            base: entry.DllBase as u64,
            size: entry.SizeOfImage,
            name: read_entry_name(&entry)?,
        });
    }

    Ok(fill.finish())
}

/// Resolves one module's base address by case-insensitive name match.
///
/// Reads names straight out of the target per entry instead of consulting
/// the enumeration table, so it needs no prior ListModules call and never
/// observes a stale table.
pub unsafe fn find_module_base(pid: u32, name: &[u16]) -> crate::Result<u64> {
    let target = Process::new(pid)?;
    let _attach = ProcessAttach::new(target.e_process);

    let mut walk = ModuleWalk::begin(target.e_process)?;

    while let Some(entry) = walk.next_entry()? {
        if entry.DllBase.is_null() {
            continue;
        }

        let entry_name = read_entry_name(&entry)?;
        if wide::eq_ignore_case(&entry_name, name) {
            return Ok(entry.DllBase as u64);
        }
    }

    Err(ProbeError::ModuleNotFound)
}
