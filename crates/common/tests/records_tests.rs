//! Record-chain iteration used on the system process snapshot.

use common::records::RecordWalker;

fn record(next_offset: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = next_offset.to_le_bytes().to_vec();
    out.extend_from_slice(payload);
    out
}

#[test]
fn empty_buffer_yields_nothing() {
    assert_eq!(RecordWalker::new(&[]).count(), 0);
}

#[test]
fn buffer_shorter_than_a_header_yields_nothing() {
    assert_eq!(RecordWalker::new(&[0, 0, 0]).count(), 0);
}

#[test]
fn single_terminated_record() {
    let buf = record(0, b"payload");
    let records: Vec<_> = RecordWalker::new(&buf).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], &buf[..]);
}

#[test]
fn chain_of_three_records() {
    let mut buf = record(12, b"aaaaaaaa");
    buf.extend(record(8, b"bbbb"));
    buf.extend(record(0, b"cc"));

    let records: Vec<_> = RecordWalker::new(&buf).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].len(), 12);
    assert_eq!(&records[1][4..], b"bbbb");
    assert_eq!(&records[2][4..], b"cc");
}

#[test]
fn offset_past_the_buffer_drops_the_malformed_record() {
    let mut buf = record(12, b"aaaaaaaa");
    buf.extend(record(1024, b"bbbb"));

    // Only the well-formed prefix comes back; the record whose declared
    // length runs past the buffer is never handed to a consumer.
    let records: Vec<_> = RecordWalker::new(&buf).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 12);
}

#[test]
fn offset_smaller_than_a_header_drops_the_malformed_record() {
    let mut buf = record(12, b"aaaaaaaa");
    buf.extend(record(2, b"bbbb"));
    buf.extend(record(0, b"cc"));

    let records: Vec<_> = RecordWalker::new(&buf).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 12);
}

#[test]
fn chain_ending_flush_with_the_buffer_keeps_its_last_record() {
    // No zero terminator, but the final record sits exactly inside the
    // buffer; it is well-formed and must not be dropped.
    let mut buf = record(12, b"aaaaaaaa");
    buf.extend(record(8, b"bbbb"));

    let records: Vec<_> = RecordWalker::new(&buf).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][4..], b"bbbb");
}

#[test]
fn walk_always_terminates_on_self_referencing_chain() {
    // A record declaring its own length over and over still advances and
    // runs off the end instead of looping.
    let mut buf = Vec::new();
    for _ in 0..16 {
        buf.extend(record(4, b""));
    }
    assert_eq!(RecordWalker::new(&buf).count(), 16);
}
