//! # Increment and Decrement Instructions
//!
//! This module implements wrapping increments and decrements:
//! - INC / DEC: Read-modify-write on a memory location
//! - INX / INY / DEX / DEY: Index register variants
//!
//! All of them wrap at the byte boundary (0xFF + 1 = 0x00) and update Z
//! and N from the result. The memory variants only update flags once the
//! write-back has succeeded.

use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let result = cpu.read(addr).unwrap_or(0).wrapping_add(1);
    if cpu.write(addr, result).is_ok() {
        cpu.update_zn(result);
    }
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let result = cpu.read(addr).unwrap_or(0).wrapping_sub(1);
    if cpu.write(addr, result).is_ok() {
        cpu.update_zn(result);
    }
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
}
