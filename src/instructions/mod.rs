//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of the official 6502
//! instructions, organized by category. Each handler is a standalone
//! function taking a mutable reference to the CPU plus the already-resolved
//! operand (a value for read-style instructions, an effective address for
//! stores, jumps and branches, or both for read-modify-write shifts).
//!
//! Handlers are infallible from the caller's point of view: if a memory
//! write inside a handler faults, the handler drops its in-progress
//! mutation and the instruction degrades to a no-op for that step.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
