//! Tests for subroutine call/return (JSR, RTS) and RTI.

use emu6502::{flags, SystemMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<SystemMemory> {
    let mut cpu = CPU::new(SystemMemory::new());
    cpu.load(program).unwrap();
    cpu.reset().unwrap();
    cpu
}

// ========== JSR ==========

#[test]
fn test_jsr_jumps_to_target() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x70]); // JSR $7000

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x7000);
}

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x70]);

    cpu.step().unwrap();

    // Return address is 0x0602 (last byte of the JSR), high byte pushed
    // first so it sits at the higher stack address
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.read(0x01FF).unwrap(), 0x06);
    assert_eq!(cpu.read(0x01FE).unwrap(), 0x02);
}

// ========== RTS ==========

#[test]
fn test_rts_returns_past_the_jsr() {
    // JSR $0604; NOP; RTS-target: LDA #$42
    let mut cpu = setup_cpu(&[0x20, 0x04, 0x06, 0xEA, 0x60]); // JSR; NOP; RTS

    cpu.step().unwrap(); // JSR -> 0x0604
    assert_eq!(cpu.pc(), 0x0604);

    cpu.step().unwrap(); // RTS

    assert_eq!(cpu.pc(), 0x0603); // instruction after the JSR
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_nested_subroutines() {
    // 0x0600: JSR $0606
    // 0x0603: NOP (final resume point)
    // 0x0604: (padding)
    // 0x0606: JSR $060A
    // 0x0609: RTS
    // 0x060A: RTS
    let mut cpu = setup_cpu(&[
        0x20, 0x06, 0x06, // JSR $0606
        0xEA, 0xEA, 0xEA, // padding
        0x20, 0x0A, 0x06, // JSR $060A
        0x60, // RTS (outer)
        0x60, // RTS (inner)
    ]);

    cpu.step().unwrap(); // outer JSR
    assert_eq!(cpu.pc(), 0x0606);
    cpu.step().unwrap(); // inner JSR
    assert_eq!(cpu.pc(), 0x060A);
    cpu.step().unwrap(); // inner RTS
    assert_eq!(cpu.pc(), 0x0609);
    cpu.step().unwrap(); // outer RTS
    assert_eq!(cpu.pc(), 0x0603);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== RTI ==========

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu(&[0x40]); // RTI
    // Hand-build an interrupt frame: status, then return address
    cpu.push((0x1234u16 >> 8) as u8).unwrap();
    cpu.push(0x34).unwrap();
    cpu.push(flags::CARRY | flags::ZERO).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert!(cpu.is_flag_set(flags::CARRY));
    assert!(cpu.is_flag_set(flags::ZERO));
    // Unused bit forced on even though the pushed byte lacked it
    assert!(cpu.is_flag_set(flags::UNUSED));
}

#[test]
fn test_rti_does_not_add_one_to_pc() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.push(0x07).unwrap();
    cpu.push(0x00).unwrap();
    cpu.push(0x00).unwrap(); // status

    cpu.step().unwrap();

    // RTS would land at 0x0701; RTI restores the exact address
    assert_eq!(cpu.pc(), 0x0700);
}
