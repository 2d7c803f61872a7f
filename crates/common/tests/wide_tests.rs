//! Wide-string comparison used for module name resolution.

use common::vars::MODULE_NAME_LEN;
use common::wide;

fn buf(s: &str) -> [u16; MODULE_NAME_LEN] {
    let mut out = [0u16; MODULE_NAME_LEN];
    wide::encode(s, &mut out);
    out
}

#[test]
fn len_stops_at_nul() {
    let name = buf("kernel32.dll");
    assert_eq!(wide::len(&name), "kernel32.dll".len());
}

#[test]
fn len_of_unterminated_buffer_is_full() {
    let raw = [0x41u16; 8];
    assert_eq!(wide::len(&raw), 8);
}

#[test]
fn match_is_case_insensitive() {
    assert!(wide::eq_ignore_case(&buf("KERNEL32.DLL"), &buf("kernel32.dll")));
    assert!(wide::eq_ignore_case(&buf("NtDll.Dll"), &buf("ntdll.dll")));
}

#[test]
fn different_names_do_not_match() {
    assert!(!wide::eq_ignore_case(&buf("kernel32.dll"), &buf("kernelbase.dll")));
    assert!(!wide::eq_ignore_case(&buf("kernel32.dll"), &buf("kernel32.dl")));
}

#[test]
fn prefix_is_not_a_match() {
    assert!(!wide::eq_ignore_case(&buf("kernel32"), &buf("kernel32.dll")));
}

#[test]
fn empty_names_match_each_other_only() {
    assert!(wide::eq_ignore_case(&buf(""), &buf("")));
    assert!(!wide::eq_ignore_case(&buf(""), &buf("a")));
}

#[test]
fn non_ascii_units_compare_exactly() {
    // Case folding is ASCII-only; anything above stays verbatim.
    let mut a = [0u16; 4];
    let mut b = [0u16; 4];
    a[0] = 0x00C4; // 'Ä'
    b[0] = 0x00E4; // 'ä'
    assert!(!wide::eq_ignore_case(&a, &b));
}

#[test]
fn encode_truncates_and_terminates() {
    let mut out = [0xFFFFu16; 5];
    let written = wide::encode("abcdef", &mut out);
    assert_eq!(written, 4);
    assert_eq!(out, [b'a' as u16, b'b' as u16, b'c' as u16, b'd' as u16, 0]);
}
