//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 CPU emulator: register file, status flags, a
//! 256-entry opcode table, 12 addressing modes, interrupt handling and cycle
//! accounting.
//!
//! Instructions execute atomically at dispatch time. The cycle countdown only
//! throttles when the *next* instruction may be fetched, so drivers can either
//! tick the core with [`Cpu::clock`] or run whole instructions with [`Cpu::step`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, FlatMemory, MemoryBus, Status, Vector};
//!
//! // Create 64KB flat memory and point the reset vector at 0x8000
//! let mut memory = FlatMemory::new();
//! memory.set_vector(Vector::Reset, 0x8000);
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! // Initialize CPU - it loads PC from the reset vector
//! let mut cpu = Cpu::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert_eq!(cpu.status(), Status::UNUSED);
//!
//! // The first step pays off the 8-cycle reset sequence, then runs LDA
//! assert_eq!(cpu.step(), 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset/interrupt sequencing and the dispatch loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration and operand resolution
//! - `status` - Status register bit set

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, Vector};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{verify_table, OpcodeMetadata, Operation, OPCODE_TABLE};
pub use status::Status;

/// Errors raised at the boundary of the emulator.
///
/// Instruction execution itself never fails: undocumented opcodes degrade to
/// no-ops and every address is valid. These variants cover loading program
/// images and the one-time opcode table check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A program image does not fit between its origin and 0xFFFF.
    #[error("image of {len} bytes at ${origin:04X} runs past the end of the address space")]
    ImageOutOfRange { origin: u16, len: usize },

    /// An opcode table entry is internally inconsistent.
    #[error("opcode ${opcode:02X}: {reason}")]
    InvalidOpcodeEntry { opcode: u8, reason: &'static str },
}
