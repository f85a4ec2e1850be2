//! Tests for the fetch-decode-execute loop: multi-instruction programs,
//! the per-step callback and load_and_run.

use emu6502::{flags, SystemMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<SystemMemory> {
    let mut cpu = CPU::new(SystemMemory::new());
    cpu.load(program).unwrap();
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_lda_tax_inx_sequence() {
    // LDA #$C0; TAX; INX
    let mut cpu = setup_cpu(&[0xA9, 0xC0, 0xAA, 0xE8]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xC0);
    assert_eq!(cpu.x(), 0xC1);
    assert!(cpu.is_flag_set(flags::NEGATIVE));
}

#[test]
fn test_lda_sec_sbc_sequence() {
    // LDA #$00; SEC; SBC #$01
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0x38, 0xE9, 0x01]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.is_flag_set(flags::CARRY));
    assert!(cpu.is_flag_set(flags::ZERO));

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.is_flag_set(flags::CARRY)); // borrow
    assert!(cpu.is_flag_set(flags::NEGATIVE));
}

#[test]
fn test_run_with_callback_stops_on_false() {
    let mut cpu = setup_cpu(&[0xE8, 0xE8, 0xE8, 0xE8]); // INX x4

    let mut calls = 0;
    cpu.run_with_callback(|_| {
        calls += 1;
        calls <= 2
    })
    .unwrap();

    assert_eq!(calls, 3); // two true, one false
    assert_eq!(cpu.x(), 2);
}

#[test]
fn test_callback_observes_state_before_each_fetch() {
    let mut cpu = setup_cpu(&[0xE8, 0xE8, 0xE8]);

    let mut seen = Vec::new();
    cpu.run_with_callback(|cpu| {
        seen.push(cpu.x());
        cpu.x() < 3
    })
    .unwrap();

    assert_eq!(seen, vec![0, 1, 2, 3]);
}

#[test]
fn test_callback_can_feed_input() {
    // LDA $FF (zero page, the demo's key byte)
    let mut cpu = setup_cpu(&[0xA5, 0xFF]);

    let mut first = true;
    cpu.run_with_callback(|cpu| {
        if first {
            first = false;
            cpu.write(0x00FF, 0x77).unwrap(); // 'w'
            true
        } else {
            false
        }
    })
    .unwrap();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_load_and_run() {
    let mut cpu = CPU::new(SystemMemory::new());

    let mut steps = 0;
    cpu.load_and_run(&[0xA9, 0x05, 0x85, 0x10], |_| {
        steps += 1;
        steps <= 2
    })
    .unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.read(0x0010).unwrap(), 0x05);
}

#[test]
fn test_loop_program_with_branch() {
    // LDA #$00; CLC; ADC #$01; CMP #$05; BNE -6; (accumulate to 5)
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0x18, 0x69, 0x01, 0xC9, 0x05, 0xD0, 0xFA]);

    let mut budget = 0;
    cpu.run_with_callback(|cpu| {
        budget += 1;
        budget < 100 && cpu.pc() != 0x0609
    })
    .unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.pc(), 0x0609);
}
