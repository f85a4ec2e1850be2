//! Property-based tests for addressing mode resolution, driven through
//! real instructions so the whole fetch path is exercised.

use emu6502::{MemoryBus, SystemMemory, CPU};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU<SystemMemory> {
    let mut cpu = CPU::new(SystemMemory::new());
    cpu.load(program).unwrap();
    cpu.reset().unwrap();
    cpu
}

proptest! {
    /// Zero-page X indexing wraps within the zero page for every
    /// base/index combination.
    #[test]
    fn prop_zero_page_x_wraps(base: u8, x: u8, value: u8) {
        let mut cpu = setup_cpu(&[0xB5, base]); // LDA base,X
        cpu.set_x(x);
        let effective = base.wrapping_add(x) as u16;
        cpu.write(effective, value).unwrap();

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Absolute,Y indexing wraps through the full 16-bit space.
    #[test]
    fn prop_absolute_y_wraps_16bit(base in 0x4000u16..=0xFFFF, y: u8, value: u8) {
        let effective = base.wrapping_add(y as u16);
        // Stay clear of the program, vector and mirrored regions
        prop_assume!(effective >= 0x4000 && effective < 0xFFF0);

        let mut cpu = setup_cpu(&[0xB9, base as u8, (base >> 8) as u8]); // LDA base,Y
        cpu.set_y(y);
        cpu.write(effective, value).unwrap();

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Relative branch targets cover the full signed offset range.
    #[test]
    fn prop_relative_offset_sign_extends(offset: u8) {
        let mut cpu = setup_cpu(&[0xD0, offset]); // BNE, Z clear after reset

        cpu.step().unwrap();

        let expected = 0x0602u16.wrapping_add(offset as i8 as u16);
        prop_assert_eq!(cpu.pc(), expected);
    }

    /// Indirect,X pointer arithmetic wraps within the zero page.
    #[test]
    fn prop_indirect_x_pointer_wraps(ptr: u8, x: u8, value: u8) {
        let lo_addr = ptr.wrapping_add(x);
        let hi_addr = lo_addr.wrapping_add(1);
        // A pointer landing on the demo-style low bytes is fine; just keep
        // the target out of the mirrored/stub regions
        let target = 0x4321u16;

        let mut cpu = setup_cpu(&[0xA1, ptr]); // LDA (ptr,X)
        cpu.set_x(x);
        cpu.write(lo_addr as u16, (target & 0xFF) as u8).unwrap();
        cpu.write(hi_addr as u16, (target >> 8) as u8).unwrap();
        cpu.write(target, value).unwrap();

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Indirect JMP honors the page-wrap quirk everywhere in flat memory.
    #[test]
    fn prop_jmp_indirect_page_wrap(page in 0x40u8..=0xFE, lo: u8, hi: u8) {
        let ptr = ((page as u16) << 8) | 0x00FF;

        let mut cpu = setup_cpu(&[0x6C, 0xFF, page]); // JMP ($page FF)
        cpu.write(ptr, lo).unwrap();
        cpu.write((page as u16) << 8, hi).unwrap(); // buggy high-byte source

        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), ((hi as u16) << 8) | lo as u16);
    }

    /// Mirrored RAM reads equal their canonical low-address counterpart.
    #[test]
    fn prop_ram_mirror_reads(offset in 0u16..0x0800, value: u8) {
        let mut mem = SystemMemory::new();
        mem.write(offset, value).unwrap();

        for mirror in 1u16..4 {
            prop_assert_eq!(mem.read(offset + mirror * 0x0800).unwrap(), value);
        }
    }
}
