//! # Opcode Table
//!
//! The complete table of official 6502 opcodes, the single source of truth
//! for instruction decoding.
//!
//! The table is a dense 256-entry array indexed directly by opcode byte, so
//! lookup is a single indexing operation. Entries for undocumented/reserved
//! opcodes are `None`; the execution engine treats those as no-op steps.
//! The table is immutable process-wide constant data, assembled at compile
//! time from the 151-entry official instruction list.
//!
//! Cycle counts are carried for informational purposes (tracing,
//! disassembly-style output) and are never enforced — this emulator does not
//! model instruction timing.

use crate::addressing::AddressingMode;

/// Instruction mnemonic, one of the 56 official 6502 instructions.
///
/// Dispatch matches on this enum; there is no string matching anywhere in
/// the execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
}

/// Static metadata for a single documented opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode byte this entry describes.
    pub opcode: u8,
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// Total instruction size in bytes, opcode included (1-3).
    pub size: u8,
    /// Base cycle count. Informational only, not enforced.
    pub cycles: u8,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
}

use AddressingMode::*;
use Mnemonic::*;

/// The official instruction set: (opcode, mnemonic, size, cycles, mode).
const INSTRUCTIONS: &[(u8, Mnemonic, u8, u8, AddressingMode)] = &[
    (0x69, Adc, 2, 2, Immediate),
    (0x65, Adc, 2, 3, ZeroPage),
    (0x75, Adc, 2, 4, ZeroPageX),
    (0x6D, Adc, 3, 4, Absolute),
    (0x7D, Adc, 3, 4, AbsoluteX),
    (0x79, Adc, 3, 4, AbsoluteY),
    (0x61, Adc, 2, 6, IndirectX),
    (0x71, Adc, 2, 5, IndirectY),
    (0x29, And, 2, 2, Immediate),
    (0x25, And, 2, 3, ZeroPage),
    (0x35, And, 2, 4, ZeroPageX),
    (0x2D, And, 3, 4, Absolute),
    (0x3D, And, 3, 4, AbsoluteX),
    (0x39, And, 3, 4, AbsoluteY),
    (0x21, And, 2, 6, IndirectX),
    (0x31, And, 2, 5, IndirectY),
    (0x0A, Asl, 1, 2, Accumulator),
    (0x06, Asl, 2, 5, ZeroPage),
    (0x16, Asl, 2, 6, ZeroPageX),
    (0x0E, Asl, 3, 6, Absolute),
    (0x1E, Asl, 3, 7, AbsoluteX),
    (0x90, Bcc, 2, 2, Relative),
    (0xB0, Bcs, 2, 2, Relative),
    (0xF0, Beq, 2, 2, Relative),
    (0x24, Bit, 2, 3, ZeroPage),
    (0x2C, Bit, 3, 4, Absolute),
    (0x30, Bmi, 2, 2, Relative),
    (0xD0, Bne, 2, 2, Relative),
    (0x10, Bpl, 2, 2, Relative),
    (0x00, Brk, 1, 7, Implied),
    (0x50, Bvc, 2, 2, Relative),
    (0x70, Bvs, 2, 2, Relative),
    (0x18, Clc, 1, 2, Implied),
    (0xD8, Cld, 1, 2, Implied),
    (0x58, Cli, 1, 2, Implied),
    (0xB8, Clv, 1, 2, Implied),
    (0xC9, Cmp, 2, 2, Immediate),
    (0xC5, Cmp, 2, 3, ZeroPage),
    (0xD5, Cmp, 2, 4, ZeroPageX),
    (0xCD, Cmp, 3, 4, Absolute),
    (0xDD, Cmp, 3, 4, AbsoluteX),
    (0xD9, Cmp, 3, 4, AbsoluteY),
    (0xC1, Cmp, 2, 6, IndirectX),
    (0xD1, Cmp, 2, 5, IndirectY),
    (0xE0, Cpx, 2, 2, Immediate),
    (0xE4, Cpx, 2, 3, ZeroPage),
    (0xEC, Cpx, 3, 4, Absolute),
    (0xC0, Cpy, 2, 2, Immediate),
    (0xC4, Cpy, 2, 3, ZeroPage),
    (0xCC, Cpy, 3, 4, Absolute),
    (0xC6, Dec, 2, 5, ZeroPage),
    (0xD6, Dec, 2, 6, ZeroPageX),
    (0xCE, Dec, 3, 6, Absolute),
    (0xDE, Dec, 3, 7, AbsoluteX),
    (0xCA, Dex, 1, 2, Implied),
    (0x88, Dey, 1, 2, Implied),
    (0x49, Eor, 2, 2, Immediate),
    (0x45, Eor, 2, 3, ZeroPage),
    (0x55, Eor, 2, 4, ZeroPageX),
    (0x4D, Eor, 3, 4, Absolute),
    (0x5D, Eor, 3, 4, AbsoluteX),
    (0x59, Eor, 3, 4, AbsoluteY),
    (0x41, Eor, 2, 6, IndirectX),
    (0x51, Eor, 2, 5, IndirectY),
    (0xE6, Inc, 2, 5, ZeroPage),
    (0xF6, Inc, 2, 6, ZeroPageX),
    (0xEE, Inc, 3, 6, Absolute),
    (0xFE, Inc, 3, 7, AbsoluteX),
    (0xE8, Inx, 1, 2, Implied),
    (0xC8, Iny, 1, 2, Implied),
    (0x4C, Jmp, 3, 3, Absolute),
    (0x6C, Jmp, 3, 5, Indirect),
    (0x20, Jsr, 3, 6, Absolute),
    (0xA9, Lda, 2, 2, Immediate),
    (0xA5, Lda, 2, 3, ZeroPage),
    (0xB5, Lda, 2, 4, ZeroPageX),
    (0xAD, Lda, 3, 4, Absolute),
    (0xBD, Lda, 3, 4, AbsoluteX),
    (0xB9, Lda, 3, 4, AbsoluteY),
    (0xA1, Lda, 2, 6, IndirectX),
    (0xB1, Lda, 2, 5, IndirectY),
    (0xA2, Ldx, 2, 2, Immediate),
    (0xA6, Ldx, 2, 3, ZeroPage),
    (0xB6, Ldx, 2, 4, ZeroPageY),
    (0xAE, Ldx, 3, 4, Absolute),
    (0xBE, Ldx, 3, 4, AbsoluteY),
    (0xA0, Ldy, 2, 2, Immediate),
    (0xA4, Ldy, 2, 3, ZeroPage),
    (0xB4, Ldy, 2, 4, ZeroPageX),
    (0xAC, Ldy, 3, 4, Absolute),
    (0xBC, Ldy, 3, 4, AbsoluteX),
    (0x4A, Lsr, 1, 2, Accumulator),
    (0x46, Lsr, 2, 5, ZeroPage),
    (0x56, Lsr, 2, 6, ZeroPageX),
    (0x4E, Lsr, 3, 6, Absolute),
    (0x5E, Lsr, 3, 7, AbsoluteX),
    (0xEA, Nop, 1, 2, Implied),
    (0x09, Ora, 2, 2, Immediate),
    (0x05, Ora, 2, 3, ZeroPage),
    (0x15, Ora, 2, 4, ZeroPageX),
    (0x0D, Ora, 3, 4, Absolute),
    (0x1D, Ora, 3, 4, AbsoluteX),
    (0x19, Ora, 3, 4, AbsoluteY),
    (0x01, Ora, 2, 6, IndirectX),
    (0x11, Ora, 2, 5, IndirectY),
    (0x48, Pha, 1, 3, Implied),
    (0x08, Php, 1, 3, Implied),
    (0x68, Pla, 1, 4, Implied),
    (0x28, Plp, 1, 4, Implied),
    (0x2A, Rol, 1, 2, Accumulator),
    (0x26, Rol, 2, 5, ZeroPage),
    (0x36, Rol, 2, 6, ZeroPageX),
    (0x2E, Rol, 3, 6, Absolute),
    (0x3E, Rol, 3, 7, AbsoluteX),
    (0x6A, Ror, 1, 2, Accumulator),
    (0x66, Ror, 2, 5, ZeroPage),
    (0x76, Ror, 2, 6, ZeroPageX),
    (0x6E, Ror, 3, 6, Absolute),
    (0x7E, Ror, 3, 7, AbsoluteX),
    (0x40, Rti, 1, 6, Implied),
    (0x60, Rts, 1, 6, Implied),
    (0xE9, Sbc, 2, 2, Immediate),
    (0xE5, Sbc, 2, 3, ZeroPage),
    (0xF5, Sbc, 2, 4, ZeroPageX),
    (0xED, Sbc, 3, 4, Absolute),
    (0xFD, Sbc, 3, 4, AbsoluteX),
    (0xF9, Sbc, 3, 4, AbsoluteY),
    (0xE1, Sbc, 2, 6, IndirectX),
    (0xF1, Sbc, 2, 5, IndirectY),
    (0x38, Sec, 1, 2, Implied),
    (0xF8, Sed, 1, 2, Implied),
    (0x78, Sei, 1, 2, Implied),
    (0x85, Sta, 2, 3, ZeroPage),
    (0x95, Sta, 2, 4, ZeroPageX),
    (0x8D, Sta, 3, 4, Absolute),
    (0x9D, Sta, 3, 5, AbsoluteX),
    (0x99, Sta, 3, 5, AbsoluteY),
    (0x81, Sta, 2, 6, IndirectX),
    (0x91, Sta, 2, 6, IndirectY),
    (0x86, Stx, 2, 3, ZeroPage),
    (0x96, Stx, 2, 4, ZeroPageY),
    (0x8E, Stx, 3, 4, Absolute),
    (0x84, Sty, 2, 3, ZeroPage),
    (0x94, Sty, 2, 4, ZeroPageX),
    (0x8C, Sty, 3, 4, Absolute),
    (0xAA, Tax, 1, 2, Implied),
    (0xA8, Tay, 1, 2, Implied),
    (0xBA, Tsx, 1, 2, Implied),
    (0x8A, Txa, 1, 2, Implied),
    (0x9A, Txs, 1, 2, Implied),
    (0x98, Tya, 1, 2, Implied),
];

const fn build_table() -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        let (opcode, mnemonic, size, cycles, mode) = INSTRUCTIONS[i];
        table[opcode as usize] = Some(Instruction {
            opcode,
            mnemonic,
            size,
            cycles,
            mode,
        });
        i += 1;
    }
    table
}

/// Dense opcode-indexed decode table. `None` marks undocumented opcodes.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size, 2);
///
/// // 0x02 is an undocumented opcode
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Instruction>; 256] = build_table();
