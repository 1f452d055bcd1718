//! # Instruction Semantics
//!
//! One function per instruction, grouped by family. Each takes the CPU and,
//! where it needs one, the operand already resolved by its addressing mode.
//!
//! Every function returns the cycles it owes on top of the opcode's base cost:
//! the page-crossing penalty for reads that honour it, or the taken/page-cross
//! cost of a branch. Most return zero.
//!
//! - `alu`: ADC SBC AND ORA EOR CMP CPX CPY BIT
//! - `branches`: the eight flag-conditional branches
//! - `shifts`: ASL LSR ROL ROR
//! - `load_store`: LDA LDX LDY STA STX STY
//! - `inc_dec`: INC DEC INX INY DEX DEY
//! - `control`: JMP JSR RTS BRK RTI NOP
//! - `stack`: PHA PHP PLA PLP
//! - `flags`: CLC SEC CLI SEI CLD SED CLV
//! - `transfer`: TAX TAY TXA TYA TSX TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
