//! # Control Flow Instructions
//!
//! This module implements jumps, subroutine calls and returns:
//! - JMP: Unconditional jump (absolute and indirect, with the page-wrap bug)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//!
//! JSR pushes the address of its own last byte (PC past the operand,
//! minus one); RTS compensates by adding one to the pulled address. RTI
//! pulls the status byte first and restores PC without the +1.

use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The indirect form's page-wrap quirk is handled during address
/// resolution, so by the time the handler runs `addr` is final.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    cpu.pc = addr;
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let return_addr = cpu.pc.wrapping_sub(1);
    if cpu.push_u16(return_addr).is_ok() {
        cpu.pc = addr;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    if let Ok(addr) = cpu.pull_u16() {
        cpu.pc = addr.wrapping_add(1);
    }
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (unused bit forced back on), then pulls the
/// return address. Unlike RTS there is no +1 adjustment.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    if let Ok(status) = cpu.pull() {
        cpu.status = status | flags::UNUSED;
        if let Ok(addr) = cpu.pull_u16() {
            cpu.pc = addr;
        }
    }
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
