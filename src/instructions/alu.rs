//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Logical Exclusive OR
//! - BIT: Bit Test
//! - CMP / CPX / CPY: Register comparisons

use crate::flags;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Carry is set
/// on unsigned overflow past 0xFF; the overflow flag is set when both
/// addends share a sign the result does not.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    add_to_accumulator(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtraction is addition of the operand's one's complement, so SBC with
/// carry set behaves as a true subtract and carry clear borrows one.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    add_to_accumulator(cpu, value ^ 0xFF);
}

/// Shared ADC/SBC core: A + value + carry, updating C, V, Z and N.
fn add_to_accumulator<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = if cpu.is_flag_set(flags::CARRY) { 1 } else { 0 };

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.assign_flag(flags::CARRY, sum > 0xFF);

    // Overflow: both inputs share a sign bit the result lacks
    let overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.assign_flag(flags::OVERFLOW, overflow);

    cpu.a = result;
    cpu.update_zn(result);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a &= value;
    cpu.update_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a |= value;
    cpu.update_zn(cpu.a);
}

/// Executes the EOR (Logical Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a ^= value;
    cpu.update_zn(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Zero is set from `A & value`; negative and overflow are copied straight
/// from bits 7 and 6 of the operand, not the AND result. The accumulator
/// is left untouched.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.assign_flag(flags::ZERO, cpu.a & value == 0);
    cpu.assign_flag(flags::NEGATIVE, value & 0b1000_0000 != 0);
    cpu.assign_flag(flags::OVERFLOW, value & 0b0100_0000 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.a, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.x, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    compare(cpu, cpu.y, value);
}

/// Shared comparison core: carry when `register >= value`, Z and N from
/// the wrapping difference. Registers are never modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.assign_flag(flags::CARRY, register >= value);
    cpu.update_zn(register.wrapping_sub(value));
}
