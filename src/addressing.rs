//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502 and the operand resolution that turns
//! a mode into an effective address and operand value.
//!
//! Resolution advances the program counter past the consumed operand bytes.
//! Operand fetches that fail (impossible with full address-space coverage,
//! but the bus contract allows it) resolve to 0 rather than aborting the
//! instruction.
//!
//! ## Operand Sizes
//!
//! - **0 bytes**: Implied, Accumulator
//! - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
//!   IndirectX, IndirectY
//! - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Address read from a 16-bit pointer. Only JMP uses this mode; it
    /// reproduces the hardware page-wrap bug (see
    /// [`CPU::operand_address`]).
    Indirect,

    /// Zero-page pointer indexed by X before dereferencing.
    ///
    /// Example: LDA ($20,X)
    IndirectX,

    /// Zero-page pointer dereferenced, then indexed by Y.
    ///
    /// Example: LDA ($20),Y
    IndirectY,

    /// Signed 8-bit offset relative to the next instruction, used by
    /// branches.
    Relative,

    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,
}

impl<M: MemoryBus> CPU<M> {
    /// Fetches the byte at PC and advances PC, defaulting to 0 if the read
    /// fails.
    fn fetch_byte(&mut self) -> u8 {
        let byte = self.read(self.pc).unwrap_or(0);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC and advances PC by 2.
    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Computes the effective address for `mode`, consuming the operand
    /// bytes at PC.
    ///
    /// Modes without a meaningful address (Accumulator, Implied) return 0;
    /// their handlers never use it.
    ///
    /// Two hardware quirks are reproduced deliberately:
    /// - `ZeroPageX`/`ZeroPageY`/`IndirectX` index arithmetic wraps within
    ///   the zero page — there is no carry into the high byte.
    /// - `Indirect` pointers whose low byte is 0xFF read their high byte
    ///   from the start of the *same* page instead of crossing into the
    ///   next one.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte() as u16,
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                base.wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                base.wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => {
                self.fetch_word().wrapping_add(self.x as u16)
            }
            AddressingMode::AbsoluteY => {
                self.fetch_word().wrapping_add(self.y as u16)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                // Page-wrap bug: a pointer ending in 0xFF fetches its high
                // byte from the start of the same page.
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr - 0x00FF
                } else {
                    ptr.wrapping_add(1)
                };
                let lo = self.read(ptr).unwrap_or(0) as u16;
                let hi = self.read(hi_addr).unwrap_or(0) as u16;
                (hi << 8) | lo
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                let lo = self.read(ptr as u16).unwrap_or(0) as u16;
                let hi = self.read(ptr.wrapping_add(1) as u16).unwrap_or(0) as u16;
                (hi << 8) | lo
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let lo = self.read(ptr as u16).unwrap_or(0) as u16;
                let hi = self.read(ptr.wrapping_add(1) as u16).unwrap_or(0) as u16;
                let base = (hi << 8) | lo;
                base.wrapping_add(self.y as u16)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                // PC here is already past the offset byte.
                self.pc.wrapping_add(offset as u16)
            }
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
        }
    }

    /// Reads the operand value for a resolved address.
    ///
    /// Immediate reads the program byte at the operand address, Accumulator
    /// yields the A register, Implied yields 0; every other mode reads
    /// memory at the effective address, defaulting to 0 on access failure.
    pub(crate) fn operand_value(&self, mode: AddressingMode, addr: u16) -> u8 {
        match mode {
            AddressingMode::Accumulator => self.a,
            AddressingMode::Implied => 0,
            _ => self.read(addr).unwrap_or(0),
        }
    }
}
