//! # Status Flag Instructions
//!
//! This module implements the single-flag set/clear instructions:
//! - CLC / SEC: Carry
//! - CLD / SED: Decimal (stored faithfully, never consulted by arithmetic)
//! - CLI / SEI: Interrupt disable
//! - CLV: Overflow (clear only; there is no SEV)

use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::CARRY, false);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::CARRY, true);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::DECIMAL, false);
}

/// Executes the SED (Set Decimal Flag) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::DECIMAL, true);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::INTERRUPT_DISABLE, false);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::INTERRUPT_DISABLE, true);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.assign_flag(flags::OVERFLOW, false);
}
