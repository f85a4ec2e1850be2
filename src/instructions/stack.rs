//! # Stack Instructions
//!
//! This module implements the stack push/pull instructions:
//! - PHA / PLA: Push and pull the accumulator
//! - PHP / PLP: Push and pull the status register
//!
//! PHP pushes the status byte with the Break and Unused bits forced on,
//! the way the 6502 presents them to software. PLP carries a quirk: the
//! popped byte supplies every flag except Break, which keeps its prior
//! in-register value.

use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let _ = cpu.push(cpu.a);
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    if let Ok(value) = cpu.pull() {
        cpu.a = value;
        cpu.update_zn(value);
    }
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let _ = cpu.push(cpu.status | flags::BREAK | flags::UNUSED);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The unused bit is forced on and the Break bit is taken from the
/// current status rather than the popped byte. Hardware ignores the
/// pushed Break bit too, but it does so by having no Break flip-flop at
/// all; here the prior value simply survives the pull.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    if let Ok(value) = cpu.pull() {
        let prior_break = cpu.status & flags::BREAK;
        cpu.status = (value & !flags::BREAK) | prior_break | flags::UNUSED;
    }
}
