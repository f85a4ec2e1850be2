//! # MOS 6502 Emulator Core
//!
//! An emulator for the MOS Technology 6502 processor with a memory-mapped
//! bus, a screen-sampling window for host renderers, and WebAssembly
//! bindings for browser frontends.
//!
//! This crate provides CPU state structures, a trait-based memory bus
//! abstraction with hardware-style mirroring, a table-driven opcode
//! metadata system covering the official instruction set, and a bundled
//! snake demo program that exercises all of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{SystemMemory, CPU};
//!
//! let mut cpu = CPU::new(SystemMemory::new());
//!
//! // LDA #$C0; TAX; INX
//! cpu.load(&[0xA9, 0xC0, 0xAA, 0xE8]).unwrap();
//! cpu.reset().unwrap();
//!
//! for _ in 0..3 {
//!     cpu.step().unwrap();
//! }
//!
//! assert_eq!(cpu.a(), 0xC0);
//! assert_eq!(cpu.x(), 0xC1);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via
//!   the [`MemoryBus`] trait; [`SystemMemory`] supplies the standard map
//!   (mirrored 2KB RAM, stub I/O window, flat high memory)
//! - **Table-Driven Design**: all opcode metadata lives in one 256-entry
//!   constant table indexed directly by opcode byte
//! - **Host-Driven Execution**: the core has no internal run loop policy;
//!   hosts call [`CPU::step`] or supply a callback that decides when to stop
//! - **WebAssembly Portability**: no OS dependencies, deterministic
//!   execution, optional `wasm` feature with JavaScript bindings
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait, mirrored RAM and the system memory map
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration and operand resolution
//! - `flags` - Status register bit masks
//! - `stack` - Stack page push/pull
//! - `screen` - Screen window sampling for host renderers
//! - `demo` - Bundled snake demo program

pub mod addressing;
pub mod cpu;
pub mod demo;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod screen;
pub mod stack;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, MAX_PROGRAM_LEN, PROGRAM_ORIGIN, RESET_VECTOR};
pub use memory::{MemoryBus, MemoryError, Ram, SystemMemory};
pub use opcodes::{Instruction, Mnemonic, OPCODE_TABLE};
pub use screen::{ScreenState, FRAME_LEN, PALETTE, SCREEN_BASE};

/// Errors that can occur during CPU execution.
///
/// The core has no fatal-error channel for program content; these only
/// surface from `load` preconditions and from an unreadable opcode fetch,
/// which cannot happen with [`SystemMemory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// A memory access failed.
    Memory(MemoryError),

    /// The program passed to `load` exceeds the loadable region.
    ///
    /// Contains the rejected program's length.
    ProgramTooLarge(usize),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::Memory(err) => write!(f, "{}", err),
            ExecutionError::ProgramTooLarge(len) => {
                write!(f, "Program of {} bytes exceeds the loadable region", len)
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Memory(err) => Some(err),
            ExecutionError::ProgramTooLarge(_) => None,
        }
    }
}

impl From<MemoryError> for ExecutionError {
    fn from(err: MemoryError) -> Self {
        ExecutionError::Memory(err)
    }
}
