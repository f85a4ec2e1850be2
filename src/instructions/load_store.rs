//! # Load and Store Instructions
//!
//! This module implements register loads and stores:
//! - LDA / LDX / LDY: Load a register from memory or an immediate
//! - STA / STX / STY: Store a register to memory
//!
//! Loads update Z and N from the loaded value. Stores touch no flags; a
//! store whose write faults leaves the machine unchanged.

use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a = value;
    cpu.update_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.x = value;
    cpu.update_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.y = value;
    cpu.update_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let _ = cpu.write(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let _ = cpu.write(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let _ = cpu.write(addr, cpu.y);
}
