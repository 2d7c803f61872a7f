//! Module-table accounting and the attach-slot gate.

use common::structs::ModuleInfo;
use common::tables::{attached_pid, ModuleTableFill};
use common::vars::{MAX_MODULES, MODULE_NAME_LEN};

fn module(base: u64) -> ModuleInfo {
    let mut name = [0u16; MODULE_NAME_LEN];
    name[0] = b'm' as u16;
    ModuleInfo {
        base,
        size: 0x1000,
        name,
    }
}

#[test]
fn fill_within_capacity_copies_everything() {
    let mut table = [ModuleInfo::EMPTY; 4];
    let mut fill = ModuleTableFill::new(&mut table);
    for i in 0..3 {
        fill.push(module(0x10000 + i));
    }
    let count = fill.finish();

    assert_eq!(count.found, 3);
    assert_eq!(count.copied, 3);
    assert_eq!(table[2].base, 0x10002);
    assert_eq!(table[3].base, 0);
}

#[test]
fn fill_past_capacity_keeps_counting_without_failing() {
    const EXTRA: u32 = 5;

    let mut table = [ModuleInfo::EMPTY; MAX_MODULES];
    let mut fill = ModuleTableFill::new(&mut table);
    for i in 0..MAX_MODULES as u32 + EXTRA {
        fill.push(module(0x10000 + i as u64));
    }
    let count = fill.finish();

    // Truncation is visible in the counts, never an error.
    assert_eq!(count.copied, MAX_MODULES as u32);
    assert_eq!(count.found, MAX_MODULES as u32 + EXTRA);
    assert!(count.copied <= count.found);

    // The table holds the first MAX_MODULES entries in walk order.
    assert_eq!(table[0].base, 0x10000);
    assert_eq!(table[MAX_MODULES - 1].base, 0x10000 + MAX_MODULES as u64 - 1);
}

#[test]
fn refilling_with_fewer_entries_zeroes_the_tail() {
    let mut table = [ModuleInfo::EMPTY; 8];

    let mut fill = ModuleTableFill::new(&mut table);
    for i in 0..8 {
        fill.push(module(0x10000 + i));
    }
    assert_eq!(fill.finish().copied, 8);

    let mut fill = ModuleTableFill::new(&mut table);
    for i in 0..2 {
        fill.push(module(0x20000 + i));
    }
    let count = fill.finish();

    assert_eq!(count.found, 2);
    assert_eq!(count.copied, 2);
    assert_eq!(table[1].base, 0x20001);
    // No stale entries from the larger run survive past the new result.
    assert_eq!(table[2].base, 0);
    assert_eq!(table[7].size, 0);
    assert_eq!(table[7].name, [0u16; MODULE_NAME_LEN]);
}

#[test]
fn empty_slot_reports_no_target() {
    assert_eq!(attached_pid(0), None);
}

#[test]
fn occupied_slot_reports_its_pid() {
    assert_eq!(attached_pid(4321), Some(4321));
}
