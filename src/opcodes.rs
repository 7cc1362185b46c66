//! MOS 6502 / Ricoh 2A03 opcode tables
//!
//! Every one of the 256 opcodes decodes to an instruction and an addressing
//! mode; the unofficial ones are flagged so listings can mark them.

/// CPU status flag bits as they appear in the P register
pub const FLAG_CARRY: u8 = 0x01;
pub const FLAG_ZERO: u8 = 0x02;
pub const FLAG_INTERRUPT: u8 = 0x04;
pub const FLAG_DECIMAL: u8 = 0x08;
pub const FLAG_BREAK: u8 = 0x10;
pub const FLAG_OVERFLOW: u8 = 0x40;
pub const FLAG_NEGATIVE: u8 = 0x80;

const NZ: u8 = FLAG_NEGATIVE | FLAG_ZERO;
const NZC: u8 = NZ | FLAG_CARRY;
const NVZC: u8 = NZC | FLAG_OVERFLOW;
const ALL_FLAGS: u8 = NVZC | FLAG_INTERRUPT | FLAG_DECIMAL | FLAG_BREAK;

/// Data cell bits: which registers and memory an instruction touches
pub const CELL_A: u8 = 0x01;
pub const CELL_X: u8 = 0x02;
pub const CELL_Y: u8 = 0x04;
pub const CELL_P: u8 = 0x08;
pub const CELL_S: u8 = 0x10;
pub const CELL_PC: u8 = 0x20;
pub const CELL_M: u8 = 0x40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inst {
    Adc, And, Asl,
    Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy,
    Dec, Dex, Dey,
    Eor,
    Inc, Inx, Iny,
    Jmp, Jsr,
    Lda, Ldx, Ldy, Lsr,
    Nop,
    Ora,
    Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts,
    Sbc, Sec, Sed, Sei, Sta, Stx, Sty,
    Tax, Tay, Tsx, Txa, Txs, Tya,
    // Unofficial
    Alr, Anc, Ane, Arr, Dcp, Isc, Jam, Las, Lax, Lxa,
    Rla, Rra, Sax, Sbx, Sha, Shx, Shy, Slo, Sre, Tas,
}

/// How an instruction uses its operand; drives cycle costs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Store,
    Modify,
    Other,
}

impl Inst {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Inst::Adc => "ADC",
            Inst::And => "AND",
            Inst::Asl => "ASL",
            Inst::Bcc => "BCC",
            Inst::Bcs => "BCS",
            Inst::Beq => "BEQ",
            Inst::Bit => "BIT",
            Inst::Bmi => "BMI",
            Inst::Bne => "BNE",
            Inst::Bpl => "BPL",
            Inst::Brk => "BRK",
            Inst::Bvc => "BVC",
            Inst::Bvs => "BVS",
            Inst::Clc => "CLC",
            Inst::Cld => "CLD",
            Inst::Cli => "CLI",
            Inst::Clv => "CLV",
            Inst::Cmp => "CMP",
            Inst::Cpx => "CPX",
            Inst::Cpy => "CPY",
            Inst::Dec => "DEC",
            Inst::Dex => "DEX",
            Inst::Dey => "DEY",
            Inst::Eor => "EOR",
            Inst::Inc => "INC",
            Inst::Inx => "INX",
            Inst::Iny => "INY",
            Inst::Jmp => "JMP",
            Inst::Jsr => "JSR",
            Inst::Lda => "LDA",
            Inst::Ldx => "LDX",
            Inst::Ldy => "LDY",
            Inst::Lsr => "LSR",
            Inst::Nop => "NOP",
            Inst::Ora => "ORA",
            Inst::Pha => "PHA",
            Inst::Php => "PHP",
            Inst::Pla => "PLA",
            Inst::Plp => "PLP",
            Inst::Rol => "ROL",
            Inst::Ror => "ROR",
            Inst::Rti => "RTI",
            Inst::Rts => "RTS",
            Inst::Sbc => "SBC",
            Inst::Sec => "SEC",
            Inst::Sed => "SED",
            Inst::Sei => "SEI",
            Inst::Sta => "STA",
            Inst::Stx => "STX",
            Inst::Sty => "STY",
            Inst::Tax => "TAX",
            Inst::Tay => "TAY",
            Inst::Tsx => "TSX",
            Inst::Txa => "TXA",
            Inst::Txs => "TXS",
            Inst::Tya => "TYA",
            Inst::Alr => "ALR",
            Inst::Anc => "ANC",
            Inst::Ane => "ANE",
            Inst::Arr => "ARR",
            Inst::Dcp => "DCP",
            Inst::Isc => "ISC",
            Inst::Jam => "JAM",
            Inst::Las => "LAS",
            Inst::Lax => "LAX",
            Inst::Lxa => "LXA",
            Inst::Rla => "RLA",
            Inst::Rra => "RRA",
            Inst::Sax => "SAX",
            Inst::Sbx => "SBX",
            Inst::Sha => "SHA",
            Inst::Shx => "SHX",
            Inst::Shy => "SHY",
            Inst::Slo => "SLO",
            Inst::Sre => "SRE",
            Inst::Tas => "TAS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Inst::Adc => "Add with carry",
            Inst::And => "Logical AND",
            Inst::Asl => "Arithmetic shift left",
            Inst::Bcc => "Branch if carry clear",
            Inst::Bcs => "Branch if carry set",
            Inst::Beq => "Branch if zero",
            Inst::Bit => "Test bits with A",
            Inst::Bmi => "Branch if negative",
            Inst::Bne => "Branch if not zero",
            Inst::Bpl => "Branch if positive",
            Inst::Brk => "Break",
            Inst::Bvc => "Branch if overflow clear",
            Inst::Bvs => "Branch if overflow set",
            Inst::Clc => "Clear carry",
            Inst::Cld => "Clear decimal mode",
            Inst::Cli => "Clear interrupt disable",
            Inst::Clv => "Clear overflow",
            Inst::Cmp => "Compare to A",
            Inst::Cpx => "Compare to X",
            Inst::Cpy => "Compare to Y",
            Inst::Dec => "Decrement memory",
            Inst::Dex => "Decrement X",
            Inst::Dey => "Decrement Y",
            Inst::Eor => "Logical EXCLUSIVE OR",
            Inst::Inc => "Increment memory",
            Inst::Inx => "Increment X",
            Inst::Iny => "Increment Y",
            Inst::Jmp => "Jump",
            Inst::Jsr => "Jump to subroutine",
            Inst::Lda => "Load A",
            Inst::Ldx => "Load X",
            Inst::Ldy => "Load Y",
            Inst::Lsr => "Logical shift right",
            Inst::Nop => "No operation",
            Inst::Ora => "Logical OR",
            Inst::Pha => "Push A",
            Inst::Php => "Push S",
            Inst::Pla => "Pull A",
            Inst::Plp => "Pull S",
            Inst::Rol => "Rotate left",
            Inst::Ror => "Rotate right",
            Inst::Rti => "Return from interrupt",
            Inst::Rts => "Return from subroutine",
            Inst::Sbc => "Subtract with carry",
            Inst::Sec => "Set carry",
            Inst::Sed => "Set decimal mode",
            Inst::Sei => "Set interrupt disable",
            Inst::Sta => "Store A",
            Inst::Stx => "Store X",
            Inst::Sty => "Store Y",
            Inst::Tax => "Transfer A to X",
            Inst::Tay => "Transfer A to Y",
            Inst::Tsx => "Transfer SP to X",
            Inst::Txa => "Transfer X to A",
            Inst::Txs => "Transfer X to SP",
            Inst::Tya => "Transfer Y to A",
            Inst::Alr => "AND + LSR",
            Inst::Anc => "AND + set carry as if ASL or ROL",
            Inst::Ane => "AND with X + LDA (highly unstable)",
            Inst::Arr => "AND + ROR with adder side-effects",
            Inst::Dcp => "DEC + CMP",
            Inst::Isc => "INC + SBC",
            Inst::Jam => "Jams the CPU",
            Inst::Las => "AND with SP + store SP + LDA/TSX",
            Inst::Lax => "LDA + LDX",
            Inst::Lxa => "AND + LDA/LDX (highly unstable)",
            Inst::Rla => "ROL + AND",
            Inst::Rra => "ROR + ADC",
            Inst::Sax => "Store AND(A,X)",
            Inst::Sbx => "AND(A,X) + CMP + LDX",
            Inst::Sha => "Store AND(A,X,ADDR_HI + 1) (unstable)",
            Inst::Shx => "Store AND(X,ADDR_HI + 1) (unstable)",
            Inst::Shy => "Store AND(Y,ADDR_HI + 1) (unstable)",
            Inst::Slo => "ASL + ORA",
            Inst::Sre => "LSR + EOR",
            Inst::Tas => "Load AND(A,X) into SP + store AND(A,X,ADDR_HI + 1) (unstable)",
        }
    }

    /// Status flags the instruction can change
    pub fn flags(&self) -> u8 {
        match self {
            Inst::Adc | Inst::Sbc | Inst::Arr | Inst::Isc | Inst::Rra => NVZC,
            Inst::Bit => FLAG_NEGATIVE | FLAG_OVERFLOW | FLAG_ZERO,
            Inst::Asl | Inst::Lsr | Inst::Rol | Inst::Ror => NZC,
            Inst::Cmp | Inst::Cpx | Inst::Cpy => NZC,
            Inst::Alr | Inst::Anc | Inst::Dcp | Inst::Rla | Inst::Sbx | Inst::Slo | Inst::Sre => NZC,
            Inst::And | Inst::Eor | Inst::Ora => NZ,
            Inst::Dec | Inst::Dex | Inst::Dey | Inst::Inc | Inst::Inx | Inst::Iny => NZ,
            Inst::Lda | Inst::Ldx | Inst::Ldy | Inst::Pla => NZ,
            Inst::Tax | Inst::Tay | Inst::Tsx | Inst::Txa | Inst::Tya => NZ,
            Inst::Ane | Inst::Las | Inst::Lax | Inst::Lxa => NZ,
            Inst::Brk => FLAG_BREAK | FLAG_INTERRUPT,
            Inst::Clc | Inst::Sec => FLAG_CARRY,
            Inst::Cld | Inst::Sed => FLAG_DECIMAL,
            Inst::Cli | Inst::Sei => FLAG_INTERRUPT,
            Inst::Clv => FLAG_OVERFLOW,
            Inst::Plp | Inst::Rti => ALL_FLAGS,
            _ => 0,
        }
    }

    /// Registers and memory the instruction reads or writes, ignoring
    /// whatever the addressing mode adds
    pub fn cells(&self) -> u8 {
        match self {
            Inst::Adc | Inst::And | Inst::Bit | Inst::Cmp | Inst::Eor | Inst::Lda => {
                CELL_A | CELL_P | CELL_M
            }
            Inst::Ora | Inst::Sbc => CELL_A | CELL_P | CELL_M,
            Inst::Alr | Inst::Anc | Inst::Arr | Inst::Dcp | Inst::Isc => CELL_A | CELL_P | CELL_M,
            Inst::Rla | Inst::Rra | Inst::Slo | Inst::Sre => CELL_A | CELL_P | CELL_M,
            Inst::Asl | Inst::Dec | Inst::Inc | Inst::Lsr | Inst::Rol | Inst::Ror => {
                CELL_P | CELL_M
            }
            Inst::Bcc | Inst::Bcs | Inst::Beq | Inst::Bmi | Inst::Bne | Inst::Bpl => CELL_P | CELL_PC,
            Inst::Bvc | Inst::Bvs => CELL_P | CELL_PC,
            Inst::Brk | Inst::Rti => CELL_P | CELL_S | CELL_PC | CELL_M,
            Inst::Clc | Inst::Cld | Inst::Cli | Inst::Clv | Inst::Sec | Inst::Sed | Inst::Sei => {
                CELL_P
            }
            Inst::Cpx | Inst::Ldx => CELL_X | CELL_P | CELL_M,
            Inst::Cpy | Inst::Ldy => CELL_Y | CELL_P | CELL_M,
            Inst::Dex | Inst::Inx => CELL_X | CELL_P,
            Inst::Dey | Inst::Iny => CELL_Y | CELL_P,
            Inst::Jmp => CELL_PC,
            Inst::Jsr | Inst::Rts => CELL_S | CELL_PC | CELL_M,
            Inst::Nop | Inst::Jam => 0,
            Inst::Pha => CELL_A | CELL_S | CELL_M,
            Inst::Php | Inst::Plp => CELL_P | CELL_S | CELL_M,
            Inst::Pla => CELL_A | CELL_P | CELL_S | CELL_M,
            Inst::Sta => CELL_A | CELL_M,
            Inst::Stx | Inst::Shx => CELL_X | CELL_M,
            Inst::Sty | Inst::Shy => CELL_Y | CELL_M,
            Inst::Tax | Inst::Txa => CELL_A | CELL_X | CELL_P,
            Inst::Tay | Inst::Tya => CELL_A | CELL_Y | CELL_P,
            Inst::Tsx => CELL_S | CELL_X | CELL_P,
            Inst::Txs => CELL_X | CELL_S,
            Inst::Ane | Inst::Lax | Inst::Lxa | Inst::Sbx => CELL_A | CELL_X | CELL_P | CELL_M,
            Inst::Las => CELL_A | CELL_X | CELL_S | CELL_P | CELL_M,
            Inst::Sax | Inst::Sha => CELL_A | CELL_X | CELL_M,
            Inst::Tas => CELL_A | CELL_X | CELL_S | CELL_M,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Inst::Adc | Inst::And | Inst::Bit | Inst::Cmp | Inst::Cpx | Inst::Cpy => Access::Read,
            Inst::Eor | Inst::Lda | Inst::Ldx | Inst::Ldy | Inst::Nop | Inst::Ora | Inst::Sbc => {
                Access::Read
            }
            Inst::Alr | Inst::Anc | Inst::Ane | Inst::Arr | Inst::Las | Inst::Lax | Inst::Lxa => {
                Access::Read
            }
            Inst::Sbx => Access::Read,
            Inst::Sta | Inst::Stx | Inst::Sty | Inst::Sax => Access::Store,
            Inst::Sha | Inst::Shx | Inst::Shy | Inst::Tas => Access::Store,
            Inst::Asl | Inst::Dec | Inst::Inc | Inst::Lsr | Inst::Rol | Inst::Ror => Access::Modify,
            Inst::Dcp | Inst::Isc | Inst::Rla | Inst::Rra | Inst::Slo | Inst::Sre => Access::Modify,
            _ => Access::Other,
        }
    }
}

/// Addressing modes, including the fixed-shape modes of stack, jump and
/// interrupt instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    Imp,
    Imm,
    Zp,
    Zpx,
    Zpy,
    Indx,
    Indy,
    Abs,
    Absx,
    Absy,
    Psh,
    Pll,
    Bch,
    Jsr,
    Rts,
    Jabs,
    Jind,
    Brk,
    Rti,
    Jam,
}

impl AddrMode {
    /// Total instruction length in bytes
    pub fn len(&self) -> usize {
        match self {
            AddrMode::Imp
            | AddrMode::Psh
            | AddrMode::Pll
            | AddrMode::Rts
            | AddrMode::Brk
            | AddrMode::Rti
            | AddrMode::Jam => 1,
            AddrMode::Imm
            | AddrMode::Zp
            | AddrMode::Zpx
            | AddrMode::Zpy
            | AddrMode::Indx
            | AddrMode::Indy
            | AddrMode::Bch => 2,
            AddrMode::Abs
            | AddrMode::Absx
            | AddrMode::Absy
            | AddrMode::Jsr
            | AddrMode::Jabs
            | AddrMode::Jind => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AddrMode::Imp
            | AddrMode::Psh
            | AddrMode::Pll
            | AddrMode::Rts
            | AddrMode::Brk
            | AddrMode::Rti
            | AddrMode::Jam => "Implied",
            AddrMode::Imm => "Immediate",
            AddrMode::Zp => "Zero-Page",
            AddrMode::Zpx => "Zero-Page,X",
            AddrMode::Zpy => "Zero-Page,Y",
            AddrMode::Indx => "(Indirect,X)",
            AddrMode::Indy => "(Indirect),Y",
            AddrMode::Abs | AddrMode::Jsr | AddrMode::Jabs => "Absolute",
            AddrMode::Absx => "Absolute,X",
            AddrMode::Absy => "Absolute,Y",
            AddrMode::Bch => "Relative",
            AddrMode::Jind => "Indirect",
        }
    }

    /// Index register cells implied by the mode
    pub fn cells(&self) -> u8 {
        match self {
            AddrMode::Zpx | AddrMode::Indx | AddrMode::Absx => CELL_X,
            AddrMode::Zpy | AddrMode::Indy | AddrMode::Absy => CELL_Y,
            AddrMode::Jind => CELL_M,
            _ => 0,
        }
    }

    /// Render the operand from the bytes following the opcode
    pub fn format_operand(&self, operand: &[u8]) -> String {
        match (self, operand) {
            (AddrMode::Imm, [lo, ..]) => format!("#${:02X}", lo),
            (AddrMode::Zp, [lo, ..]) => format!("${:02X}", lo),
            (AddrMode::Zpx, [lo, ..]) => format!("${:02X},X", lo),
            (AddrMode::Zpy, [lo, ..]) => format!("${:02X},Y", lo),
            (AddrMode::Indx, [lo, ..]) => format!("(${:02X},X)", lo),
            (AddrMode::Indy, [lo, ..]) => format!("(${:02X}),Y", lo),
            (AddrMode::Bch, [offset, ..]) => format!("{:+}", *offset as i8),
            (AddrMode::Abs | AddrMode::Jsr | AddrMode::Jabs, [lo, hi, ..]) => {
                format!("${:04X}", u16::from_le_bytes([*lo, *hi]))
            }
            (AddrMode::Absx, [lo, hi, ..]) => {
                format!("${:04X},X", u16::from_le_bytes([*lo, *hi]))
            }
            (AddrMode::Absy, [lo, hi, ..]) => {
                format!("${:04X},Y", u16::from_le_bytes([*lo, *hi]))
            }
            (AddrMode::Jind, [lo, hi, ..]) => {
                format!("(${:04X})", u16::from_le_bytes([*lo, *hi]))
            }
            _ => String::new(),
        }
    }
}

/// One decode table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub instruction: Inst,
    pub mode: AddrMode,
    pub unofficial: bool,
}

const fn op(instruction: Inst, mode: AddrMode) -> OpcodeEntry {
    OpcodeEntry { instruction, mode, unofficial: false }
}

const fn un(instruction: Inst, mode: AddrMode) -> OpcodeEntry {
    OpcodeEntry { instruction, mode, unofficial: true }
}

use AddrMode as M;
use Inst as I;

const JAM: OpcodeEntry = un(I::Jam, M::Jam);

/// Decoding table for all official MOS6502 and unofficial Ricoh 2A03 opcodes
#[rustfmt::skip]
pub static DECODE: [OpcodeEntry; 256] = [
    // 0x00
    op(I::Brk, M::Brk), op(I::Ora, M::Indx), JAM, un(I::Slo, M::Indx),
    un(I::Nop, M::Zp), op(I::Ora, M::Zp), op(I::Asl, M::Zp), un(I::Slo, M::Zp),
    op(I::Php, M::Psh), op(I::Ora, M::Imm), op(I::Asl, M::Imp), un(I::Anc, M::Imm),
    un(I::Nop, M::Abs), op(I::Ora, M::Abs), op(I::Asl, M::Abs), un(I::Slo, M::Abs),
    // 0x10
    op(I::Bpl, M::Bch), op(I::Ora, M::Indy), JAM, un(I::Slo, M::Indy),
    un(I::Nop, M::Zpx), op(I::Ora, M::Zpx), op(I::Asl, M::Zpx), un(I::Slo, M::Zpx),
    op(I::Clc, M::Imp), op(I::Ora, M::Absy), un(I::Nop, M::Imp), un(I::Slo, M::Absy),
    un(I::Nop, M::Absx), op(I::Ora, M::Absx), op(I::Asl, M::Absx), un(I::Slo, M::Absx),
    // 0x20
    op(I::Jsr, M::Jsr), op(I::And, M::Indx), JAM, un(I::Rla, M::Indx),
    op(I::Bit, M::Zp), op(I::And, M::Zp), op(I::Rol, M::Zp), un(I::Rla, M::Zp),
    op(I::Plp, M::Pll), op(I::And, M::Imm), op(I::Rol, M::Imp), un(I::Anc, M::Imm),
    op(I::Bit, M::Abs), op(I::And, M::Abs), op(I::Rol, M::Abs), un(I::Rla, M::Abs),
    // 0x30
    op(I::Bmi, M::Bch), op(I::And, M::Indy), JAM, un(I::Rla, M::Indy),
    un(I::Nop, M::Zpx), op(I::And, M::Zpx), op(I::Rol, M::Zpx), un(I::Rla, M::Zpx),
    op(I::Sec, M::Imp), op(I::And, M::Absy), un(I::Nop, M::Imp), un(I::Rla, M::Absy),
    un(I::Nop, M::Absx), op(I::And, M::Absx), op(I::Rol, M::Absx), un(I::Rla, M::Absx),
    // 0x40
    op(I::Rti, M::Rti), op(I::Eor, M::Indx), JAM, un(I::Sre, M::Indx),
    un(I::Nop, M::Zp), op(I::Eor, M::Zp), op(I::Lsr, M::Zp), un(I::Sre, M::Zp),
    op(I::Pha, M::Psh), op(I::Eor, M::Imm), op(I::Lsr, M::Imp), un(I::Alr, M::Imm),
    op(I::Jmp, M::Jabs), op(I::Eor, M::Abs), op(I::Lsr, M::Abs), un(I::Sre, M::Abs),
    // 0x50
    op(I::Bvc, M::Bch), op(I::Eor, M::Indy), JAM, un(I::Sre, M::Indy),
    un(I::Nop, M::Zpx), op(I::Eor, M::Zpx), op(I::Lsr, M::Zpx), un(I::Sre, M::Zpx),
    op(I::Cli, M::Imp), op(I::Eor, M::Absy), un(I::Nop, M::Imp), un(I::Sre, M::Absy),
    un(I::Nop, M::Absx), op(I::Eor, M::Absx), op(I::Lsr, M::Absx), un(I::Sre, M::Absx),
    // 0x60
    op(I::Rts, M::Rts), op(I::Adc, M::Indx), JAM, un(I::Rra, M::Indx),
    un(I::Nop, M::Zp), op(I::Adc, M::Zp), op(I::Ror, M::Zp), un(I::Rra, M::Zp),
    op(I::Pla, M::Pll), op(I::Adc, M::Imm), op(I::Ror, M::Imp), un(I::Arr, M::Imm),
    op(I::Jmp, M::Jind), op(I::Adc, M::Abs), op(I::Ror, M::Abs), un(I::Rra, M::Abs),
    // 0x70
    op(I::Bvs, M::Bch), op(I::Adc, M::Indy), JAM, un(I::Rra, M::Indy),
    un(I::Nop, M::Zpx), op(I::Adc, M::Zpx), op(I::Ror, M::Zpx), un(I::Rra, M::Zpx),
    op(I::Sei, M::Imp), op(I::Adc, M::Absy), un(I::Nop, M::Imp), un(I::Rra, M::Absy),
    un(I::Nop, M::Absx), op(I::Adc, M::Absx), op(I::Ror, M::Absx), un(I::Rra, M::Absx),
    // 0x80
    un(I::Nop, M::Imm), op(I::Sta, M::Indx), un(I::Nop, M::Imm), un(I::Sax, M::Indx),
    op(I::Sty, M::Zp), op(I::Sta, M::Zp), op(I::Stx, M::Zp), un(I::Sax, M::Zp),
    op(I::Dey, M::Imp), un(I::Nop, M::Imm), op(I::Txa, M::Imp), un(I::Ane, M::Imm),
    op(I::Sty, M::Abs), op(I::Sta, M::Abs), op(I::Stx, M::Abs), un(I::Sax, M::Abs),
    // 0x90
    op(I::Bcc, M::Bch), op(I::Sta, M::Indy), JAM, un(I::Sha, M::Indy),
    op(I::Sty, M::Zpx), op(I::Sta, M::Zpx), op(I::Stx, M::Zpy), un(I::Sax, M::Zpy),
    op(I::Tya, M::Imp), op(I::Sta, M::Absy), op(I::Txs, M::Imp), un(I::Tas, M::Absy),
    un(I::Shy, M::Absx), op(I::Sta, M::Absx), un(I::Shx, M::Absy), un(I::Sha, M::Absy),
    // 0xA0
    op(I::Ldy, M::Imm), op(I::Lda, M::Indx), op(I::Ldx, M::Imm), un(I::Lax, M::Indx),
    op(I::Ldy, M::Zp), op(I::Lda, M::Zp), op(I::Ldx, M::Zp), un(I::Lax, M::Zp),
    op(I::Tay, M::Imp), op(I::Lda, M::Imm), op(I::Tax, M::Imp), un(I::Lxa, M::Imm),
    op(I::Ldy, M::Abs), op(I::Lda, M::Abs), op(I::Ldx, M::Abs), un(I::Lax, M::Abs),
    // 0xB0
    op(I::Bcs, M::Bch), op(I::Lda, M::Indy), JAM, un(I::Lax, M::Indy),
    op(I::Ldy, M::Zpx), op(I::Lda, M::Zpx), op(I::Ldx, M::Zpy), un(I::Lax, M::Zpy),
    op(I::Clv, M::Imp), op(I::Lda, M::Absy), op(I::Tsx, M::Imp), un(I::Las, M::Absy),
    op(I::Ldy, M::Absx), op(I::Lda, M::Absx), op(I::Ldx, M::Absy), un(I::Lax, M::Absy),
    // 0xC0
    op(I::Cpy, M::Imm), op(I::Cmp, M::Indx), un(I::Nop, M::Imm), un(I::Dcp, M::Indx),
    op(I::Cpy, M::Zp), op(I::Cmp, M::Zp), op(I::Dec, M::Zp), un(I::Dcp, M::Zp),
    op(I::Iny, M::Imp), op(I::Cmp, M::Imm), op(I::Dex, M::Imp), un(I::Sbx, M::Imm),
    op(I::Cpy, M::Abs), op(I::Cmp, M::Abs), op(I::Dec, M::Abs), un(I::Dcp, M::Abs),
    // 0xD0
    op(I::Bne, M::Bch), op(I::Cmp, M::Indy), JAM, un(I::Dcp, M::Indy),
    un(I::Nop, M::Zpx), op(I::Cmp, M::Zpx), op(I::Dec, M::Zpx), un(I::Dcp, M::Zpx),
    op(I::Cld, M::Imp), op(I::Cmp, M::Absy), un(I::Nop, M::Imp), un(I::Dcp, M::Absy),
    un(I::Nop, M::Absx), op(I::Cmp, M::Absx), op(I::Dec, M::Absx), un(I::Dcp, M::Absx),
    // 0xE0
    op(I::Cpx, M::Imm), op(I::Sbc, M::Indx), un(I::Nop, M::Imm), un(I::Isc, M::Indx),
    op(I::Cpx, M::Zp), op(I::Sbc, M::Zp), op(I::Inc, M::Zp), un(I::Isc, M::Zp),
    op(I::Inx, M::Imp), op(I::Sbc, M::Imm), op(I::Nop, M::Imp), un(I::Sbc, M::Imm),
    op(I::Cpx, M::Abs), op(I::Sbc, M::Abs), op(I::Inc, M::Abs), un(I::Isc, M::Abs),
    // 0xF0
    op(I::Beq, M::Bch), op(I::Sbc, M::Indy), JAM, un(I::Isc, M::Indy),
    un(I::Nop, M::Zpx), op(I::Sbc, M::Zpx), op(I::Inc, M::Zpx), un(I::Isc, M::Zpx),
    op(I::Sed, M::Imp), op(I::Sbc, M::Absy), un(I::Nop, M::Imp), un(I::Isc, M::Absy),
    un(I::Nop, M::Absx), op(I::Sbc, M::Absx), op(I::Inc, M::Absx), un(I::Isc, M::Absx),
];
