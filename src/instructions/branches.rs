//! # Conditional Branch Instructions
//!
//! This module implements the eight conditional branches, one per tested
//! flag polarity:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! The branch target is the already-resolved relative address (PC past the
//! operand plus the sign-extended offset, wrapping through the 16-bit
//! space). A taken branch replaces PC with the target; an untaken branch
//! does nothing, since PC already points at the next instruction.

use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, !cpu.is_flag_set(flags::CARRY));
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, cpu.is_flag_set(flags::CARRY));
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, !cpu.is_flag_set(flags::ZERO));
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, cpu.is_flag_set(flags::ZERO));
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, !cpu.is_flag_set(flags::NEGATIVE));
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, cpu.is_flag_set(flags::NEGATIVE));
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, !cpu.is_flag_set(flags::OVERFLOW));
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    branch_if(cpu, addr, cpu.is_flag_set(flags::OVERFLOW));
}

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16, condition: bool) {
    if condition {
        cpu.pc = addr;
    }
}
