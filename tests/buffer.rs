// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use bytebuf::{ByteBuffer, DecodeFrom, EncodeTo};
use hex_literal::hex;

#[test]
fn sequential_put_get_scenario() {
    let mut buf = ByteBuffer::with_capacity(30);
    buf.put_u8(0xDE);
    buf.put_u8(0xAD);
    buf.put_u8(0xBA);
    buf.put_u8(0xBE);
    assert_eq!(buf.size(), 4);
    assert_eq!(buf.write_pos(), 4);
    assert_eq!(buf.as_slice(), hex!("de ad ba be"));

    buf.set_read_pos(0);
    let mut out = [0u8; 4];
    buf.get_bytes(&mut out);
    assert_eq!(out, hex!("de ad ba be"));
    assert_eq!(buf.read_pos(), 4);
}

#[test]
fn typed_roundtrip_at_written_position() {
    // put_T followed by rewinding the read cursor to the written
    // position returns the value exactly, for every supported width.
    let mut buf = ByteBuffer::with_capacity(64);
    buf.put_u8(0x7F);

    let pos = buf.write_pos();
    buf.put_u64(0x0123_4567_89AB_CDEF);
    buf.set_read_pos(pos);
    assert_eq!(buf.get_u64(), 0x0123_4567_89AB_CDEF);

    let pos = buf.write_pos();
    buf.put_f32(3.5);
    buf.set_read_pos(pos);
    assert_eq!(buf.get_f32(), 3.5);

    let pos = buf.write_pos();
    buf.put_f64(-0.125);
    buf.set_read_pos(pos);
    assert_eq!(buf.get_f64(), -0.125);

    let pos = buf.write_pos();
    buf.put_u16(0xBEEF);
    buf.set_read_pos(pos);
    assert_eq!(buf.get_u16(), 0xBEEF);
}

#[test]
fn dumps_visit_every_byte_in_order() {
    let buf = ByteBuffer::from_bytes(b"TesTtest2");
    assert_eq!(buf.size(), 9);

    let hex = buf.hex_dump();
    assert_eq!(hex.split(' ').count(), buf.size());
    assert!(hex.starts_with("0x54 0x65 0x73 0x54"));

    let ascii = buf.ascii_dump();
    assert_eq!(ascii.len(), buf.size());
    assert_eq!(ascii, "TesTtest2");
}

#[test]
fn from_bytes_positions() {
    let buf = ByteBuffer::from_bytes(&hex!("01 02 03 04 05"));
    assert_eq!(buf.size(), 5);
    assert_eq!(buf.write_pos(), 5);
    assert_eq!(buf.read_pos(), 0);
}

#[test]
fn growth_exactly_accommodates_absolute_write() {
    let mut buf = ByteBuffer::with_capacity(0);
    buf.put_u32_at(0xAABBCCDD, 10);
    assert_eq!(buf.size(), 14);
}

#[test]
fn clone_equality_contract() {
    let mut original = ByteBuffer::from_bytes(&hex!("de ad ba be"));
    original.set_read_pos(2);

    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(original, copy);
    assert_eq!(copy.read_pos(), 0);
    assert_eq!(copy.write_pos(), 0);

    let mut copy = copy;
    copy.put_u8_at(0x00, 0);
    assert_ne!(copy, original);
    assert_eq!(original.as_slice(), hex!("de ad ba be"));

    // Different lengths are never equal, whatever the content.
    let shorter = ByteBuffer::from_bytes(&hex!("de ad ba"));
    assert_ne!(shorter, original);
}

#[test]
fn find_single_occurrence_and_sentinel() {
    // Every byte non-zero, exactly one occurrence of the key.
    let buf = ByteBuffer::from_bytes(&hex!("11 22 33 44 55"));
    assert_eq!(buf.find(0x44u8, 0), Some(3));
    assert_eq!(buf.find(0x44u8, 4), None);

    // All-zero buffer: a non-zero key misses immediately.
    let zeroed = ByteBuffer::from_bytes(&[0u8; 8]);
    assert_eq!(zeroed.find(0x44u8, 0), None);
}

#[test]
fn replace_contract() {
    let mut buf = ByteBuffer::from_bytes(b"TesTtest2");
    buf.replace(b'T', b'_', 0, true);
    assert_eq!(buf.ascii_dump(), "_esTtest2");

    let mut buf = ByteBuffer::from_bytes(b"TesTtest2");
    buf.replace(b'T', b'_', 0, false);
    assert_eq!(buf.ascii_dump(), "_es_test2");
}

#[test]
fn packet_over_frozen_wire_bytes() {
    use bytebuf::packet::{ChatMessagePacket, Packet};

    let pkt = ChatMessagePacket {
        name: "fubar".to_string(),
        message: "message yay!".to_string(),
    };

    let mut outgoing = ByteBuffer::new();
    pkt.encode_to(&mut outgoing).unwrap();

    // Simulate the wire: freeze to immutable bytes, re-load on arrival.
    let wire = outgoing.freeze();
    let mut incoming = ByteBuffer::from_bytes(&wire);
    match Packet::decode_from(&mut incoming).unwrap() {
        Packet::ChatMessage(parsed) => assert_eq!(parsed, pkt),
        other => panic!("decoded wrong packet: {:?}", other),
    }
}

#[test]
fn http_request_over_buffer() {
    use bytebuf::http::{Method, Request};

    let mut req = Request::new(Method::Get, "/index.html");
    req.headers.add("Host", "localhost");

    let mut buf = ByteBuffer::new();
    req.encode_to(&mut buf).unwrap();

    buf.set_read_pos(0);
    let parsed = Request::decode_from(&mut buf).unwrap();
    assert_eq!(parsed, req);
}
