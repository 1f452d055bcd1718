//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that drives
//! dispatch. Every possible opcode byte maps to an operation, an addressing
//! mode and a base cycle count taken from the documented NMOS 6502 timing
//! table.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with "???" mnemonic
//!
//! Illegal opcodes execute as no-ops. The NOP family among them uses the
//! addressing mode the silicon actually decodes, so the program counter skips
//! the right number of operand bytes and the absolute,X variants pay the
//! page-crossing cycle. `$EB` behaves as `SBC #imm`.

use crate::addressing::AddressingMode;
use crate::Error;

/// The operation an opcode performs, independent of its addressing mode.
///
/// One variant per documented 6502 mnemonic, plus [`Operation::Unknown`] for
/// the undocumented opcodes that do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode with no modelled effect.
    Unknown,
}

impl Operation {
    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bmi
                | Operation::Bne
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }

    const fn is_store(self) -> bool {
        matches!(self, Operation::Sta | Operation::Stx | Operation::Sty)
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    /// Diagnostic only.
    pub mnemonic: &'static str,

    /// What the instruction does.
    pub operation: Operation,

    /// How the instruction locates its operand.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before page-crossing and taken-branch extras.
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    const fn new(
        mnemonic: &'static str,
        operation: Operation,
        addressing_mode: AddressingMode,
        base_cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            operation,
            addressing_mode,
            base_cycles,
        }
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        self.addressing_mode.instruction_size()
    }

    /// True if this opcode is not part of the documented instruction set.
    pub fn is_illegal(&self) -> bool {
        self.mnemonic == "???"
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Built at compile time and never mutated.
///
/// # Examples
///
/// ```
/// use cpu6502::{Operation, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Illegal opcodes degrade to no-ops
/// let illegal = &OPCODE_TABLE[0x02];
/// assert!(illegal.is_illegal());
/// assert_eq!(illegal.operation, Operation::Unknown);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Operation::*;

    const fn e(m: &'static str, op: Operation, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
        OpcodeMetadata::new(m, op, mode, cycles)
    }

    const fn ill(cycles: u8) -> OpcodeMetadata {
        OpcodeMetadata::new("???", Unknown, Implied, cycles)
    }

    const fn nop(mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
        OpcodeMetadata::new("???", Nop, mode, cycles)
    }

    [
        // 0x00
        e("BRK", Brk, Implied, 7),   e("ORA", Ora, IndirectX, 6), ill(2),                      ill(8),
        nop(ZeroPage, 3),            e("ORA", Ora, ZeroPage, 3),  e("ASL", Asl, ZeroPage, 5),  ill(5),
        e("PHP", Php, Implied, 3),   e("ORA", Ora, Immediate, 2), e("ASL", Asl, Implied, 2),   ill(2),
        nop(Absolute, 4),            e("ORA", Ora, Absolute, 4),  e("ASL", Asl, Absolute, 6),  ill(6),
        // 0x10
        e("BPL", Bpl, Relative, 2),  e("ORA", Ora, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("ORA", Ora, ZeroPageX, 4), e("ASL", Asl, ZeroPageX, 6), ill(6),
        e("CLC", Clc, Implied, 2),   e("ORA", Ora, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("ORA", Ora, AbsoluteX, 4), e("ASL", Asl, AbsoluteX, 7), ill(7),
        // 0x20
        e("JSR", Jsr, Absolute, 6),  e("AND", And, IndirectX, 6), ill(2),                      ill(8),
        e("BIT", Bit, ZeroPage, 3),  e("AND", And, ZeroPage, 3),  e("ROL", Rol, ZeroPage, 5),  ill(5),
        e("PLP", Plp, Implied, 4),   e("AND", And, Immediate, 2), e("ROL", Rol, Implied, 2),   ill(2),
        e("BIT", Bit, Absolute, 4),  e("AND", And, Absolute, 4),  e("ROL", Rol, Absolute, 6),  ill(6),
        // 0x30
        e("BMI", Bmi, Relative, 2),  e("AND", And, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("AND", And, ZeroPageX, 4), e("ROL", Rol, ZeroPageX, 6), ill(6),
        e("SEC", Sec, Implied, 2),   e("AND", And, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("AND", And, AbsoluteX, 4), e("ROL", Rol, AbsoluteX, 7), ill(7),
        // 0x40
        e("RTI", Rti, Implied, 6),   e("EOR", Eor, IndirectX, 6), ill(2),                      ill(8),
        nop(ZeroPage, 3),            e("EOR", Eor, ZeroPage, 3),  e("LSR", Lsr, ZeroPage, 5),  ill(5),
        e("PHA", Pha, Implied, 3),   e("EOR", Eor, Immediate, 2), e("LSR", Lsr, Implied, 2),   ill(2),
        e("JMP", Jmp, Absolute, 3),  e("EOR", Eor, Absolute, 4),  e("LSR", Lsr, Absolute, 6),  ill(6),
        // 0x50
        e("BVC", Bvc, Relative, 2),  e("EOR", Eor, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("EOR", Eor, ZeroPageX, 4), e("LSR", Lsr, ZeroPageX, 6), ill(6),
        e("CLI", Cli, Implied, 2),   e("EOR", Eor, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("EOR", Eor, AbsoluteX, 4), e("LSR", Lsr, AbsoluteX, 7), ill(7),
        // 0x60
        e("RTS", Rts, Implied, 6),   e("ADC", Adc, IndirectX, 6), ill(2),                      ill(8),
        nop(ZeroPage, 3),            e("ADC", Adc, ZeroPage, 3),  e("ROR", Ror, ZeroPage, 5),  ill(5),
        e("PLA", Pla, Implied, 4),   e("ADC", Adc, Immediate, 2), e("ROR", Ror, Implied, 2),   ill(2),
        e("JMP", Jmp, Indirect, 5),  e("ADC", Adc, Absolute, 4),  e("ROR", Ror, Absolute, 6),  ill(6),
        // 0x70
        e("BVS", Bvs, Relative, 2),  e("ADC", Adc, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("ADC", Adc, ZeroPageX, 4), e("ROR", Ror, ZeroPageX, 6), ill(6),
        e("SEI", Sei, Implied, 2),   e("ADC", Adc, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("ADC", Adc, AbsoluteX, 4), e("ROR", Ror, AbsoluteX, 7), ill(7),
        // 0x80
        nop(Immediate, 2),           e("STA", Sta, IndirectX, 6), nop(Immediate, 2),           ill(6),
        e("STY", Sty, ZeroPage, 3),  e("STA", Sta, ZeroPage, 3),  e("STX", Stx, ZeroPage, 3),  ill(3),
        e("DEY", Dey, Implied, 2),   nop(Immediate, 2),           e("TXA", Txa, Implied, 2),   ill(2),
        e("STY", Sty, Absolute, 4),  e("STA", Sta, Absolute, 4),  e("STX", Stx, Absolute, 4),  ill(4),
        // 0x90
        e("BCC", Bcc, Relative, 2),  e("STA", Sta, IndirectY, 6), ill(2),                      ill(6),
        e("STY", Sty, ZeroPageX, 4), e("STA", Sta, ZeroPageX, 4), e("STX", Stx, ZeroPageY, 4), ill(4),
        e("TYA", Tya, Implied, 2),   e("STA", Sta, AbsoluteY, 5), e("TXS", Txs, Implied, 2),   ill(5),
        ill(5),                      e("STA", Sta, AbsoluteX, 5), ill(5),                      ill(5),
        // 0xA0
        e("LDY", Ldy, Immediate, 2), e("LDA", Lda, IndirectX, 6), e("LDX", Ldx, Immediate, 2), ill(6),
        e("LDY", Ldy, ZeroPage, 3),  e("LDA", Lda, ZeroPage, 3),  e("LDX", Ldx, ZeroPage, 3),  ill(3),
        e("TAY", Tay, Implied, 2),   e("LDA", Lda, Immediate, 2), e("TAX", Tax, Implied, 2),   ill(2),
        e("LDY", Ldy, Absolute, 4),  e("LDA", Lda, Absolute, 4),  e("LDX", Ldx, Absolute, 4),  ill(4),
        // 0xB0
        e("BCS", Bcs, Relative, 2),  e("LDA", Lda, IndirectY, 5), ill(2),                      ill(5),
        e("LDY", Ldy, ZeroPageX, 4), e("LDA", Lda, ZeroPageX, 4), e("LDX", Ldx, ZeroPageY, 4), ill(4),
        e("CLV", Clv, Implied, 2),   e("LDA", Lda, AbsoluteY, 4), e("TSX", Tsx, Implied, 2),   ill(4),
        e("LDY", Ldy, AbsoluteX, 4), e("LDA", Lda, AbsoluteX, 4), e("LDX", Ldx, AbsoluteY, 4), ill(4),
        // 0xC0
        e("CPY", Cpy, Immediate, 2), e("CMP", Cmp, IndirectX, 6), nop(Immediate, 2),           ill(8),
        e("CPY", Cpy, ZeroPage, 3),  e("CMP", Cmp, ZeroPage, 3),  e("DEC", Dec, ZeroPage, 5),  ill(5),
        e("INY", Iny, Implied, 2),   e("CMP", Cmp, Immediate, 2), e("DEX", Dex, Implied, 2),   ill(2),
        e("CPY", Cpy, Absolute, 4),  e("CMP", Cmp, Absolute, 4),  e("DEC", Dec, Absolute, 6),  ill(6),
        // 0xD0
        e("BNE", Bne, Relative, 2),  e("CMP", Cmp, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("CMP", Cmp, ZeroPageX, 4), e("DEC", Dec, ZeroPageX, 6), ill(6),
        e("CLD", Cld, Implied, 2),   e("CMP", Cmp, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("CMP", Cmp, AbsoluteX, 4), e("DEC", Dec, AbsoluteX, 7), ill(7),
        // 0xE0
        e("CPX", Cpx, Immediate, 2), e("SBC", Sbc, IndirectX, 6), nop(Immediate, 2),           ill(8),
        e("CPX", Cpx, ZeroPage, 3),  e("SBC", Sbc, ZeroPage, 3),  e("INC", Inc, ZeroPage, 5),  ill(5),
        e("INX", Inx, Implied, 2),   e("SBC", Sbc, Immediate, 2), e("NOP", Nop, Implied, 2),   e("???", Sbc, Immediate, 2),
        e("CPX", Cpx, Absolute, 4),  e("SBC", Sbc, Absolute, 4),  e("INC", Inc, Absolute, 6),  ill(6),
        // 0xF0
        e("BEQ", Beq, Relative, 2),  e("SBC", Sbc, IndirectY, 5), ill(2),                      ill(8),
        nop(ZeroPageX, 4),           e("SBC", Sbc, ZeroPageX, 4), e("INC", Inc, ZeroPageX, 6), ill(6),
        e("SED", Sed, Implied, 2),   e("SBC", Sbc, AbsoluteY, 4), nop(Implied, 2),             ill(7),
        nop(AbsoluteX, 4),           e("SBC", Sbc, AbsoluteX, 4), e("INC", Inc, AbsoluteX, 7), ill(7),
    ]
}

/// Checks every table entry for internal consistency.
///
/// The table is fixed at compile time, so this only needs to run once, at
/// startup or in tests. It catches entries whose addressing mode cannot work
/// with their operation.
///
/// # Errors
///
/// Returns [`Error::InvalidOpcodeEntry`] for the first inconsistent entry.
///
/// # Examples
///
/// ```
/// cpu6502::verify_table().expect("opcode table is consistent");
/// ```
pub fn verify_table() -> Result<(), Error> {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let invalid = |reason| Error::InvalidOpcodeEntry {
            opcode: opcode as u8,
            reason,
        };
        let mode = entry.addressing_mode;
        let op = entry.operation;

        if entry.base_cycles == 0 {
            return Err(invalid("zero base cycles"));
        }
        if entry.mnemonic.is_empty() {
            return Err(invalid("empty mnemonic"));
        }
        if op.is_branch() != (mode == AddressingMode::Relative) {
            return Err(invalid("relative mode is reserved for branches"));
        }
        if (mode == AddressingMode::Indirect) && op != Operation::Jmp {
            return Err(invalid("indirect mode is only valid for JMP"));
        }
        if op == Operation::Jsr && mode != AddressingMode::Absolute {
            return Err(invalid("JSR must be absolute"));
        }
        if op.is_store() && matches!(mode, AddressingMode::Immediate | AddressingMode::Implied) {
            return Err(invalid("stores need a memory address"));
        }
        if matches!(op, Operation::Inc | Operation::Dec) && mode == AddressingMode::Implied {
            return Err(invalid("INC/DEC need a memory address"));
        }
    }

    log::debug!("opcode table verified: {} entries", OPCODE_TABLE.len());
    Ok(())
}
