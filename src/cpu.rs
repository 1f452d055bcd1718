//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! reset and interrupt sequencing, and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: N, V, U, B, D, I, Z, C packed in a [`Status`]
//! - **Cycle countdown**: ticks left before the next fetch
//!
//! ## Execution Model
//!
//! An instruction's effects are applied all at once when it is dispatched.
//! Its cycle cost is then loaded into a countdown that must drain before the
//! next fetch. Drivers can use either framing:
//! - `clock()`: advance one tick, dispatching when the countdown is empty
//! - `step()`: run exactly one instruction and return its cost
//!
//! Interrupts are only sampled between instructions. `irq()` and `nmi()` take
//! effect immediately when called; they do not queue.

use crate::addressing::{self, Operand, Target};
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::{MemoryBus, Operation, Status, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Cycles consumed by the reset sequence.
pub const RESET_CYCLES: u8 = 8;

/// Cycles consumed by servicing an IRQ.
pub const IRQ_CYCLES: u8 = 7;

/// Cycles consumed by servicing an NMI.
pub const NMI_CYCLES: u8 = 8;

/// Fixed memory locations holding the addresses loaded into PC on reset and
/// interrupts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector {
    /// Non-maskable interrupt, $FFFA/$FFFB
    Nmi,
    /// Reset, $FFFC/$FFFD
    Reset,
    /// IRQ and BRK, $FFFE/$FFFF
    IrqBrk,
}

impl Vector {
    /// Address of the vector's low byte.
    pub const fn address(self) -> u16 {
        match self {
            Vector::Nmi => 0xFFFA,
            Vector::Reset => 0xFFFC,
            Vector::IrqBrk => 0xFFFE,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus` trait.
/// Pass `&mut memory` instead of `memory` to keep ownership of the bus.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, Status, Vector};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(Vector::Reset, 0x8000);
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = Cpu::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), Status::UNUSED);
/// assert_eq!(cpu.cycles_remaining(), 8); // reset sequence still pending
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Opcode of the most recently dispatched instruction
    pub(crate) opcode: u8,

    /// Ticks left before the next fetch
    pub(crate) cycles_remaining: u8,

    /// Total ticks elapsed since construction
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU attached to the given memory bus and resets it.
    ///
    /// See [`Cpu::reset`] for the resulting state.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::default(),
            opcode: 0,
            cycles_remaining: 0,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU into its reset state.
    ///
    /// - A, X, Y are zeroed
    /// - SP is set to 0xFD
    /// - Status holds only the Unused bit
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - The next 8 ticks are consumed by the reset sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, MemoryBus, Vector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(Vector::Reset, 0xC000);
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.set_a(0x55);
    /// cpu.set_pc(0x1234);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.a(), 0);
    /// assert_eq!(cpu.pc(), 0xC000);
    /// ```
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.status = Status::default();
        self.opcode = 0;
        self.pc = self.read_vector(Vector::Reset);
        self.cycles_remaining = RESET_CYCLES;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Advances the CPU by one clock tick.
    ///
    /// When no cycles are outstanding, the next instruction is fetched and
    /// executed in full, and its cost is loaded into the countdown. Every tick,
    /// including the dispatching one, then consumes one cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, MemoryBus, Vector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.write(0x8000, 0xE8); // INX
    ///
    /// let mut cpu = Cpu::new(mem);
    ///
    /// // Eight ticks of reset, then INX dispatches on the ninth
    /// for _ in 0..8 {
    ///     cpu.clock();
    /// }
    /// assert_eq!(cpu.x(), 0);
    ///
    /// cpu.clock();
    /// assert_eq!(cpu.x(), 1);
    /// assert_eq!(cpu.cycles_remaining(), 1);
    /// ```
    pub fn clock(&mut self) {
        if self.cycles_remaining == 0 {
            self.cycles_remaining = self.dispatch();
        }

        self.cycles_remaining -= 1;
        self.cycles += 1;
    }

    /// Executes one instruction and returns its cycle cost.
    ///
    /// Any countdown still pending from a reset, an interrupt or a partly
    /// clocked instruction is paid off first; those ticks count toward
    /// [`Cpu::cycles`] but not toward the return value. On return the CPU is
    /// idle, so `clock()` and `step()` can be mixed freely.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, MemoryBus, Vector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = Cpu::new(mem);
    ///
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 8 + 2); // reset + NOP
    /// ```
    pub fn step(&mut self) -> u8 {
        self.cycles += self.cycles_remaining as u64;
        self.cycles_remaining = 0;

        let cost = self.dispatch();
        self.cycles += cost as u64;
        cost
    }

    /// Runs whole instructions until at least `cycle_budget` ticks have elapsed.
    ///
    /// Returns the number of ticks actually consumed, which may exceed the
    /// budget by part of the last instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, Vector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.load(0x8000, &[0xEA; 32]).unwrap(); // NOPs, 2 cycles each
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.step(); // settle the reset sequence
    ///
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.pc(), 0x8006);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step();
        }

        self.cycles - start_cycles
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the Interrupt Disable flag is set. Otherwise pushes PC
    /// (high byte first) and the status with Break clear and Unused set, sets
    /// Interrupt Disable, loads PC from $FFFE/$FFFF and charges 7 cycles.
    ///
    /// Returns `true` if the interrupt was taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, Status, Vector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.set_vector(Vector::IrqBrk, 0x9000);
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.step();
    ///
    /// cpu.set_flag(Status::INTERRUPT_DISABLE, true);
    /// assert!(!cpu.irq());
    ///
    /// cpu.set_flag(Status::INTERRUPT_DISABLE, false);
    /// assert!(cpu.irq());
    /// assert_eq!(cpu.pc(), 0x9000);
    /// ```
    pub fn irq(&mut self) -> bool {
        if self.status.contains(Status::INTERRUPT_DISABLE) {
            log::trace!("IRQ masked at PC=${:04X}", self.pc);
            return false;
        }

        self.interrupt(Vector::IrqBrk, IRQ_CYCLES);
        true
    }

    /// Raises a non-maskable interrupt.
    ///
    /// Same sequence as [`Cpu::irq`] but unconditional, vectored through
    /// $FFFA/$FFFB, and charged 8 cycles.
    pub fn nmi(&mut self) {
        self.interrupt(Vector::Nmi, NMI_CYCLES);
    }

    fn interrupt(&mut self, vector: Vector, cost: u8) {
        self.push_word(self.pc);

        self.status.remove(Status::BREAK);
        self.status.insert(Status::UNUSED);
        self.push(self.status.bits());
        self.status.insert(Status::INTERRUPT_DISABLE);

        let from = self.pc;
        self.pc = self.read_vector(vector);
        self.cycles_remaining = self.cycles_remaining.saturating_add(cost);

        log::debug!("{:?}: ${:04X} -> ${:04X}", vector, from, self.pc);
    }

    /// Fetches, decodes and executes one instruction. Returns its total cost.
    fn dispatch(&mut self) -> u8 {
        let at = self.pc;
        self.opcode = self.next_byte();
        let metadata = &OPCODE_TABLE[self.opcode as usize];

        if metadata.operation == Operation::Unknown {
            log::debug!("undocumented opcode ${:02X} at ${:04X}", self.opcode, at);
        }

        let operand = addressing::resolve(self, metadata.addressing_mode);
        let extra = self.execute(metadata.operation, operand);
        let cost = metadata.base_cycles + extra;

        log::trace!(
            "${:04X}: {:02X} {} ({} cycles)",
            at,
            self.opcode,
            metadata.mnemonic,
            cost
        );
        cost
    }

    /// Runs an operation on a resolved operand. Returns the extra cycles owed.
    fn execute(&mut self, operation: Operation, operand: Operand) -> u8 {
        match operation {
            // Arithmetic and logic
            Operation::Adc => alu::adc(self, operand),
            Operation::Sbc => alu::sbc(self, operand),
            Operation::And => alu::and(self, operand),
            Operation::Ora => alu::ora(self, operand),
            Operation::Eor => alu::eor(self, operand),
            Operation::Cmp => alu::cmp(self, operand),
            Operation::Cpx => alu::cpx(self, operand),
            Operation::Cpy => alu::cpy(self, operand),
            Operation::Bit => alu::bit(self, operand),

            // Shifts and rotates
            Operation::Asl => shifts::asl(self, operand),
            Operation::Lsr => shifts::lsr(self, operand),
            Operation::Rol => shifts::rol(self, operand),
            Operation::Ror => shifts::ror(self, operand),

            // Increments and decrements
            Operation::Inc => inc_dec::inc(self, operand),
            Operation::Dec => inc_dec::dec(self, operand),
            Operation::Inx => inc_dec::inx(self),
            Operation::Iny => inc_dec::iny(self),
            Operation::Dex => inc_dec::dex(self),
            Operation::Dey => inc_dec::dey(self),

            // Loads and stores
            Operation::Lda => load_store::lda(self, operand),
            Operation::Ldx => load_store::ldx(self, operand),
            Operation::Ldy => load_store::ldy(self, operand),
            Operation::Sta => load_store::sta(self, operand),
            Operation::Stx => load_store::stx(self, operand),
            Operation::Sty => load_store::sty(self, operand),

            // Register transfers
            Operation::Tax => transfer::tax(self),
            Operation::Tay => transfer::tay(self),
            Operation::Txa => transfer::txa(self),
            Operation::Tya => transfer::tya(self),
            Operation::Tsx => transfer::tsx(self),
            Operation::Txs => transfer::txs(self),

            // Stack
            Operation::Pha => stack::pha(self),
            Operation::Php => stack::php(self),
            Operation::Pla => stack::pla(self),
            Operation::Plp => stack::plp(self),

            // Branches
            Operation::Bcc => branches::branch_if(self, operand, Status::CARRY, false),
            Operation::Bcs => branches::branch_if(self, operand, Status::CARRY, true),
            Operation::Bne => branches::branch_if(self, operand, Status::ZERO, false),
            Operation::Beq => branches::branch_if(self, operand, Status::ZERO, true),
            Operation::Bpl => branches::branch_if(self, operand, Status::NEGATIVE, false),
            Operation::Bmi => branches::branch_if(self, operand, Status::NEGATIVE, true),
            Operation::Bvc => branches::branch_if(self, operand, Status::OVERFLOW, false),
            Operation::Bvs => branches::branch_if(self, operand, Status::OVERFLOW, true),

            // Jumps, subroutines and interrupts
            Operation::Jmp => control::jmp(self, operand),
            Operation::Jsr => control::jsr(self, operand),
            Operation::Rts => control::rts(self),
            Operation::Brk => control::brk(self),
            Operation::Rti => control::rti(self),
            Operation::Nop => control::nop(operand),
            Operation::Unknown => 0,

            // Flag set/clear
            Operation::Clc => flags::clc(self),
            Operation::Sec => flags::sec(self),
            Operation::Cli => flags::cli(self),
            Operation::Sei => flags::sei(self),
            Operation::Cld => flags::cld(self),
            Operation::Sed => flags::sed(self),
            Operation::Clv => flags::clv(self),
        }
    }

    // ========== Bus Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC past it.
    pub(crate) fn next_word(&mut self) -> u16 {
        let lo = self.next_byte() as u16;
        let hi = self.next_byte() as u16;
        (hi << 8) | lo
    }

    /// Operand value: the accumulator in implied mode, otherwise the byte at
    /// the resolved address.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand.target {
            Target::Accumulator => self.a,
            Target::Address(addr) => self.memory.read(addr),
            Target::Relative(offset) => offset as u8,
        }
    }

    /// Stores a result where the operand came from.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand.target {
            Target::Accumulator => self.a = value,
            Target::Address(addr) => self.memory.write(addr, value),
            Target::Relative(_) => {}
        }
    }

    fn read_vector(&self, vector: Vector) -> u16 {
        self.memory.read_word(vector.address())
    }

    // ========== Stack Helpers ==========

    /// Writes at 0x0100+SP, then decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads at 0x0100+SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte, then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pulls low byte, then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the live status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Returns the total number of ticks elapsed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the ticks left before the next instruction is fetched.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles_remaining
    }

    /// Returns true when the next `clock()` will fetch an instruction.
    pub fn is_idle(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Returns the opcode of the most recently dispatched instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the mnemonic of the most recently dispatched instruction.
    pub fn mnemonic(&self) -> &'static str {
        OPCODE_TABLE[self.opcode as usize].mnemonic
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets or clears the given flag(s).
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }
}
