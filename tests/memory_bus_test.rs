//! Tests for the memory map: RAM mirroring, the stub I/O window, flat
//! high memory and little-endian word access.

use emu6502::{MemoryBus, SystemMemory};

// ========== RAM Mirroring ==========

#[test]
fn test_ram_mirrors_every_2k() {
    let mut mem = SystemMemory::new();

    mem.write(0x0000, 0xAA).unwrap();

    assert_eq!(mem.read(0x0800).unwrap(), 0xAA);
    assert_eq!(mem.read(0x1000).unwrap(), 0xAA);
    assert_eq!(mem.read(0x1800).unwrap(), 0xAA);
}

#[test]
fn test_write_through_mirror_lands_in_ram() {
    let mut mem = SystemMemory::new();

    mem.write(0x1FFF, 0x5A).unwrap();

    assert_eq!(mem.read(0x07FF).unwrap(), 0x5A);
    assert_eq!(mem.read(0x0FFF).unwrap(), 0x5A);
}

#[test]
fn test_distinct_ram_offsets_do_not_alias() {
    let mut mem = SystemMemory::new();

    mem.write(0x0100, 0x01).unwrap();
    mem.write(0x0101, 0x02).unwrap();

    assert_eq!(mem.read(0x0100).unwrap(), 0x01);
    assert_eq!(mem.read(0x0101).unwrap(), 0x02);
}

// ========== Stub I/O Window ==========

#[test]
fn test_stub_window_reads_zero() {
    let mem = SystemMemory::new();

    for addr in [0x2000, 0x2007, 0x2008, 0x3FFF] {
        assert_eq!(mem.read(addr).unwrap(), 0);
    }
}

#[test]
fn test_stub_window_drops_writes() {
    let mut mem = SystemMemory::new();

    mem.write(0x2000, 0xFF).unwrap();
    mem.write(0x3FFF, 0xFF).unwrap();

    assert_eq!(mem.read(0x2000).unwrap(), 0);
    assert_eq!(mem.read(0x3FFF).unwrap(), 0);
    // And nothing leaked into RAM or high memory
    assert_eq!(mem.read(0x0000).unwrap(), 0);
    assert_eq!(mem.read(0x4000).unwrap(), 0);
}

// ========== Flat High Memory ==========

#[test]
fn test_high_memory_is_flat() {
    let mut mem = SystemMemory::new();

    mem.write(0x4000, 0x11).unwrap();
    mem.write(0x8000, 0x22).unwrap();
    mem.write(0xFFFF, 0x33).unwrap();

    assert_eq!(mem.read(0x4000).unwrap(), 0x11);
    assert_eq!(mem.read(0x8000).unwrap(), 0x22);
    assert_eq!(mem.read(0xFFFF).unwrap(), 0x33);
    // No mirroring up here
    assert_eq!(mem.read(0x4800).unwrap(), 0x00);
}

// ========== Word Access ==========

#[test]
fn test_word_access_is_little_endian() {
    let mut mem = SystemMemory::new();

    mem.write_u16(0x4000, 0x1234).unwrap();

    assert_eq!(mem.read(0x4000).unwrap(), 0x34);
    assert_eq!(mem.read(0x4001).unwrap(), 0x12);
    assert_eq!(mem.read_u16(0x4000).unwrap(), 0x1234);
}

#[test]
fn test_word_access_through_mirror() {
    let mut mem = SystemMemory::new();

    mem.write_u16(0x0800, 0xBEEF).unwrap();

    assert_eq!(mem.read_u16(0x0000).unwrap(), 0xBEEF);
}
