//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC flag byte with bit 5 forced to 1
//! - **Memory**: any [`MemoryBus`] implementation
//!
//! ## Execution Model
//!
//! One [`CPU::step`] fetches the opcode at PC (the only memory access whose
//! failure aborts the step), advances PC, looks the opcode up in
//! [`OPCODE_TABLE`], resolves the operand for its addressing mode and
//! dispatches to the handler. BRK and undocumented opcodes perform no
//! further action — the step ends with PC one past the opcode byte.
//!
//! The loop has no in-band stop condition beyond an unreadable fetch (which
//! cannot happen with [`SystemMemory`](crate::SystemMemory)); halting is the
//! host's job, via the [`CPU::run_with_callback`] trace hook or by simply
//! not calling `step` again.
//!
//! ## Program Loading
//!
//! [`CPU::load`] copies raw machine code to the fixed origin `0x0600` and
//! points the reset vector (`0xFFFC`/`0xFFFD`) at it; [`CPU::reset`] then
//! reinitializes the registers and jumps to the vector.

use crate::instructions::{
    alu, branches, control, flags as flag_ops, inc_dec, load_store, shifts,
    stack as stack_ops, transfer,
};
use crate::opcodes::{Instruction, Mnemonic, OPCODE_TABLE};
use crate::stack::STACK_RESET;
use crate::{flags, ExecutionError, MemoryBus, MemoryError};

/// Address programs are loaded at.
pub const PROGRAM_ORIGIN: u16 = 0x0600;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Largest program `load` accepts.
pub const MAX_PROGRAM_LEN: usize = 49152;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait; the
/// CPU owns its memory exclusively, so there is exactly one owner of the
/// whole machine state at any time.
///
/// # Examples
///
/// ```
/// use emu6502::{SystemMemory, CPU};
///
/// let mut cpu = CPU::new(SystemMemory::new());
///
/// // LDA #$05; STA $10
/// cpu.load(&[0xA9, 0x05, 0x85, 0x10]).unwrap();
/// cpu.reset().unwrap();
/// assert_eq!(cpu.pc(), 0x0600);
///
/// cpu.step().unwrap();
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x05);
/// assert_eq!(cpu.read(0x10).unwrap(), 0x05);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Packed status register (bit 5 always 1)
    pub(crate) status: u8,

    /// Program counter (address of the next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a fresh CPU: registers zeroed, status carrying only the
    /// forced unused bit, stack pointer at 0xFF.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            status: flags::UNUSED,
            pc: 0,
            sp: STACK_RESET,
            memory,
        }
    }

    /// Copies `program` into memory at [`PROGRAM_ORIGIN`] and writes the
    /// origin into the reset vector.
    ///
    /// The copy goes through the normal memory map, so bytes landing in the
    /// mirrored low region are subject to mirroring like any other write.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::ProgramTooLarge`] if `program` exceeds
    /// [`MAX_PROGRAM_LEN`] bytes; [`ExecutionError::Memory`] if a copy
    /// write faults.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        if program.len() > MAX_PROGRAM_LEN {
            return Err(ExecutionError::ProgramTooLarge(program.len()));
        }
        for (i, byte) in program.iter().enumerate() {
            self.write(PROGRAM_ORIGIN.wrapping_add(i as u16), *byte)?;
        }
        self.write_u16(RESET_VECTOR, PROGRAM_ORIGIN)?;
        Ok(())
    }

    /// Reinitializes the register file and jumps to the reset vector.
    ///
    /// A/X/Y are zeroed, the status register keeps only the forced unused
    /// bit, SP returns to 0xFF and PC is loaded from 0xFFFC/0xFFFD.
    /// Memory contents are untouched.
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = flags::UNUSED;
        self.sp = STACK_RESET;
        self.pc = self.read_u16(RESET_VECTOR)?;
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC and advances PC past it. BRK (0x00) and
    /// opcodes missing from [`OPCODE_TABLE`] end the step there — they are
    /// silently skipped rather than raising an illegal-instruction fault,
    /// and BRK deliberately performs no status push or interrupt-vector
    /// fetch. Anything else resolves its operand and runs the handler.
    ///
    /// # Errors
    ///
    /// Only a failed opcode fetch is fatal. Access failures inside a
    /// handler degrade that instruction to a no-op instead.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        match OPCODE_TABLE[opcode as usize] {
            Some(instr) if instr.mnemonic != Mnemonic::Brk => {
                self.execute(instr);
            }
            // BRK or an undocumented opcode: nothing further this step.
            _ => {}
        }
        Ok(())
    }

    /// Runs the fetch-decode-execute loop with a per-step trace callback.
    ///
    /// `callback` is invoked once before each fetch and returns whether to
    /// keep running; returning `false` is the host's stop switch. The only
    /// in-band halt is a failed opcode fetch. The callback must not drive
    /// the same CPU recursively — it gets the exclusive borrow.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{SystemMemory, CPU};
    ///
    /// let mut cpu = CPU::new(SystemMemory::new());
    /// cpu.load(&[0xE8, 0xE8, 0xE8]).unwrap(); // INX x3
    /// cpu.reset().unwrap();
    ///
    /// let mut steps = 0;
    /// cpu.run_with_callback(|_cpu| {
    ///     steps += 1;
    ///     steps <= 3
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(cpu.x(), 3);
    /// ```
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<(), ExecutionError>
    where
        F: FnMut(&mut Self) -> bool,
    {
        while callback(self) {
            self.step()?;
        }
        Ok(())
    }

    /// Composes [`load`](Self::load), [`reset`](Self::reset) and
    /// [`run_with_callback`](Self::run_with_callback).
    pub fn load_and_run<F>(&mut self, program: &[u8], callback: F) -> Result<(), ExecutionError>
    where
        F: FnMut(&mut Self) -> bool,
    {
        self.load(program)?;
        self.reset()?;
        self.run_with_callback(callback)
    }

    /// Resolves the operand and dispatches to the mnemonic's handler.
    fn execute(&mut self, instr: Instruction) {
        let addr = self.operand_address(instr.mode);
        let value = self.operand_value(instr.mode, addr);

        match instr.mnemonic {
            Mnemonic::Lda => load_store::execute_lda(self, value),
            Mnemonic::Ldx => load_store::execute_ldx(self, value),
            Mnemonic::Ldy => load_store::execute_ldy(self, value),
            Mnemonic::Sta => load_store::execute_sta(self, addr),
            Mnemonic::Stx => load_store::execute_stx(self, addr),
            Mnemonic::Sty => load_store::execute_sty(self, addr),
            Mnemonic::Tax => transfer::execute_tax(self),
            Mnemonic::Tay => transfer::execute_tay(self),
            Mnemonic::Txa => transfer::execute_txa(self),
            Mnemonic::Tya => transfer::execute_tya(self),
            Mnemonic::Tsx => transfer::execute_tsx(self),
            Mnemonic::Txs => transfer::execute_txs(self),
            Mnemonic::Adc => alu::execute_adc(self, value),
            Mnemonic::Sbc => alu::execute_sbc(self, value),
            Mnemonic::And => alu::execute_and(self, value),
            Mnemonic::Eor => alu::execute_eor(self, value),
            Mnemonic::Ora => alu::execute_ora(self, value),
            Mnemonic::Bit => alu::execute_bit(self, value),
            Mnemonic::Cmp => alu::execute_cmp(self, value),
            Mnemonic::Cpx => alu::execute_cpx(self, value),
            Mnemonic::Cpy => alu::execute_cpy(self, value),
            Mnemonic::Inc => inc_dec::execute_inc(self, addr),
            Mnemonic::Dec => inc_dec::execute_dec(self, addr),
            Mnemonic::Inx => inc_dec::execute_inx(self),
            Mnemonic::Iny => inc_dec::execute_iny(self),
            Mnemonic::Dex => inc_dec::execute_dex(self),
            Mnemonic::Dey => inc_dec::execute_dey(self),
            Mnemonic::Asl => shifts::execute_asl(self, addr, value, instr.mode),
            Mnemonic::Lsr => shifts::execute_lsr(self, addr, value, instr.mode),
            Mnemonic::Rol => shifts::execute_rol(self, addr, value, instr.mode),
            Mnemonic::Ror => shifts::execute_ror(self, addr, value, instr.mode),
            Mnemonic::Bcc => branches::execute_bcc(self, addr),
            Mnemonic::Bcs => branches::execute_bcs(self, addr),
            Mnemonic::Beq => branches::execute_beq(self, addr),
            Mnemonic::Bne => branches::execute_bne(self, addr),
            Mnemonic::Bmi => branches::execute_bmi(self, addr),
            Mnemonic::Bpl => branches::execute_bpl(self, addr),
            Mnemonic::Bvc => branches::execute_bvc(self, addr),
            Mnemonic::Bvs => branches::execute_bvs(self, addr),
            Mnemonic::Jmp => control::execute_jmp(self, addr),
            Mnemonic::Jsr => control::execute_jsr(self, addr),
            Mnemonic::Rts => control::execute_rts(self),
            Mnemonic::Rti => control::execute_rti(self),
            Mnemonic::Nop => control::execute_nop(self),
            Mnemonic::Pha => stack_ops::execute_pha(self),
            Mnemonic::Pla => stack_ops::execute_pla(self),
            Mnemonic::Php => stack_ops::execute_php(self),
            Mnemonic::Plp => stack_ops::execute_plp(self),
            Mnemonic::Clc => flag_ops::execute_clc(self),
            Mnemonic::Sec => flag_ops::execute_sec(self),
            Mnemonic::Cld => flag_ops::execute_cld(self),
            Mnemonic::Sed => flag_ops::execute_sed(self),
            Mnemonic::Cli => flag_ops::execute_cli(self),
            Mnemonic::Sei => flag_ops::execute_sei(self),
            Mnemonic::Clv => flag_ops::execute_clv(self),
            // Filtered out in step(); kept for match exhaustiveness.
            Mnemonic::Brk => {}
        }
    }

    // ========== Memory Access ==========

    /// Reads a byte through the memory bus.
    pub fn read(&self, addr: u16) -> Result<u8, MemoryError> {
        self.memory.read(addr)
    }

    /// Writes a byte through the memory bus.
    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        self.memory.write(addr, value)
    }

    /// Reads a little-endian word through the memory bus.
    pub fn read_u16(&self, addr: u16) -> Result<u16, MemoryError> {
        self.memory.read_u16(addr)
    }

    /// Writes a little-endian word through the memory bus.
    pub fn write_u16(&mut self, addr: u16, value: u16) -> Result<(), MemoryError> {
        self.memory.write_u16(addr, value)
    }

    /// Borrows the memory implementation.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory implementation.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Getters / Setters ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward
    /// from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register. The unused bit is forced back on.
    pub fn set_status(&mut self, value: u8) {
        self.status = value | flags::UNUSED;
    }
}
