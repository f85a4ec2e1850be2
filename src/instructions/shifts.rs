//! # Shift and Rotate Instructions
//!
//! This module implements single-bit shifts and rotates:
//! - ASL: Arithmetic Shift Left (bit 7 into carry, 0 into bit 0)
//! - LSR: Logical Shift Right (bit 0 into carry, 0 into bit 7)
//! - ROL: Rotate Left (carry into bit 0, bit 7 into carry)
//! - ROR: Rotate Right (carry into bit 7, bit 0 into carry)
//!
//! Each comes in an accumulator form and a memory read-modify-write form,
//! selected by the addressing mode. For the memory form, flags are only
//! updated after the write-back succeeds; a faulted write leaves the
//! machine unchanged.

use crate::addressing::AddressingMode;
use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    addr: u16,
    value: u8,
    mode: AddressingMode,
) {
    let carry = value & 0b1000_0000 != 0;
    let result = value << 1;
    store_shift_result(cpu, addr, result, carry, mode);
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    addr: u16,
    value: u8,
    mode: AddressingMode,
) {
    let carry = value & 0b0000_0001 != 0;
    let result = value >> 1;
    store_shift_result(cpu, addr, result, carry, mode);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    addr: u16,
    value: u8,
    mode: AddressingMode,
) {
    let carry_in = if cpu.is_flag_set(flags::CARRY) { 1 } else { 0 };
    let carry = value & 0b1000_0000 != 0;
    let result = (value << 1) | carry_in;
    store_shift_result(cpu, addr, result, carry, mode);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    addr: u16,
    value: u8,
    mode: AddressingMode,
) {
    let carry_in = if cpu.is_flag_set(flags::CARRY) { 0b1000_0000 } else { 0 };
    let carry = value & 0b0000_0001 != 0;
    let result = (value >> 1) | carry_in;
    store_shift_result(cpu, addr, result, carry, mode);
}

/// Writes a shift result to its destination and updates C, Z and N.
///
/// Accumulator mode writes the register directly; every other mode is a
/// read-modify-write whose flag updates are gated on the write-back.
fn store_shift_result<M: MemoryBus>(
    cpu: &mut CPU<M>,
    addr: u16,
    result: u8,
    carry: bool,
    mode: AddressingMode,
) {
    match mode {
        AddressingMode::Accumulator => {
            cpu.a = result;
        }
        _ => {
            if cpu.write(addr, result).is_err() {
                return;
            }
        }
    }
    cpu.assign_flag(flags::CARRY, carry);
    cpu.update_zn(result);
}
