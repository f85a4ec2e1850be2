//! Tests for the register transfer instructions TAX, TAY, TXA, TYA, TSX
//! and TXS.

use emu6502::{flags, SystemMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<SystemMemory> {
    let mut cpu = CPU::new(SystemMemory::new());
    cpu.load(program).unwrap();
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu(&[0xAA]); // TAX
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_tax_zero_flag() {
    let mut cpu = setup_cpu(&[0xAA]);
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.is_flag_set(flags::ZERO));
}

#[test]
fn test_tay_negative_flag() {
    let mut cpu = setup_cpu(&[0xA8]); // TAY
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.is_flag_set(flags::NEGATIVE));
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu(&[0x8A]); // TXA
    cpu.set_x(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu(&[0x98]); // TYA
    cpu.set_y(0x66);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_tsx() {
    let mut cpu = setup_cpu(&[0xBA]); // TSX
    cpu.set_sp(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.is_flag_set(flags::NEGATIVE));
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu(&[0x9A]); // TXS
    cpu.set_x(0x00); // a zero transfer that must NOT set Z
    cpu.set_sp(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.is_flag_set(flags::ZERO));
}

#[test]
fn test_txs_tsx_round_trip() {
    let mut cpu = setup_cpu(&[0x9A, 0xBA]); // TXS; TSX
    cpu.set_x(0x37);

    cpu.step().unwrap();
    cpu.set_x(0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x37);
}
