use crate::error::DisError;
use crate::opcodes::{self, Access, AddrMode, Inst, CELL_A, CELL_M};
use std::fmt::{Display, Error, Formatter};

/// Cycle cost of one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycles {
    /// Base cycle count; negative means the instruction never completes
    pub count: i8,
    /// +1 if branch taken
    pub branch_taken: bool,
    /// +1 if page boundary crossed
    pub page_boundary: bool,
}

impl Cycles {
    fn of(instruction: Inst, mode: AddrMode) -> Self {
        let access = instruction.access();
        let (count, page_boundary) = match mode {
            AddrMode::Imp | AddrMode::Imm => (2, false),
            AddrMode::Psh => (3, false),
            AddrMode::Pll => (4, false),
            AddrMode::Jabs => (3, false),
            AddrMode::Jind => (5, false),
            AddrMode::Jsr | AddrMode::Rts | AddrMode::Rti => (6, false),
            AddrMode::Brk => (7, false),
            AddrMode::Jam => (-1, false),
            AddrMode::Bch => {
                return Cycles {
                    count: 2,
                    branch_taken: true,
                    page_boundary: true,
                }
            }
            AddrMode::Zp => match access {
                Access::Modify => (5, false),
                _ => (3, false),
            },
            AddrMode::Zpx | AddrMode::Zpy | AddrMode::Abs => match access {
                Access::Modify => (6, false),
                _ => (4, false),
            },
            AddrMode::Absx | AddrMode::Absy => match access {
                Access::Modify => (7, false),
                Access::Store => (5, false),
                _ => (4, true),
            },
            AddrMode::Indx => match access {
                Access::Modify => (8, false),
                _ => (6, false),
            },
            AddrMode::Indy => match access {
                Access::Modify => (8, false),
                Access::Store => (6, false),
                _ => (5, true),
            },
        };
        Cycles {
            count,
            branch_taken: false,
            page_boundary,
        }
    }
}

/// A decoded 6502 instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode followed by 0-2 operand bytes
    pub bytes: Vec<u8>,
    pub instruction: Inst,
    pub mode: AddrMode,
    pub unofficial: bool,
}

impl Instruction {
    /// Decode the instruction starting at `offset`
    pub fn decode(memory: &[u8], offset: usize) -> Result<Self, DisError> {
        let opcode = *memory.get(offset).ok_or(DisError::Eof)?;
        let entry = opcodes::DECODE[opcode as usize];
        let len = entry.mode.len();
        let bytes = memory
            .get(offset..offset + len)
            .ok_or(DisError::Eof)?
            .to_vec();

        Ok(Instruction {
            bytes,
            instruction: entry.instruction,
            mode: entry.mode,
            unofficial: entry.unofficial,
        })
    }

    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }

    pub fn description(&self) -> &'static str {
        self.instruction.description()
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    pub fn operand(&self) -> String {
        self.mode.format_operand(&self.bytes[1..])
    }

    pub fn cycles(&self) -> Cycles {
        Cycles::of(self.instruction, self.mode)
    }

    /// Status flags this instruction can change
    pub fn flags(&self) -> u8 {
        self.instruction.flags()
    }

    /// Registers and memory touched, adjusted for the addressing mode
    pub fn cells(&self) -> u8 {
        let mut cells = self.instruction.cells() | self.mode.cells();
        match self.mode {
            // Accumulator forms of the shift/rotate instructions
            AddrMode::Imp if self.instruction.access() == Access::Modify => {
                cells = (cells & !CELL_M) | CELL_A;
            }
            AddrMode::Imm => cells &= !CELL_M,
            _ => {}
        }
        cells
    }

    pub fn cycle_text(&self) -> String {
        let cycles = self.cycles();
        let mut text = if cycles.count < 0 {
            "∞ cycles".to_string()
        } else if cycles.count == 1 {
            "1 cycle".to_string()
        } else {
            format!("{} cycles", cycles.count)
        };
        if cycles.branch_taken {
            text.push_str("\n(+1 if branch taken)");
        }
        if cycles.page_boundary {
            text.push_str("\n(+1 if page-boundary crossed)");
        }
        text
    }

    /// Render as raw bytes followed by the assembly text
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let hex: Vec<String> = self.bytes.iter().map(|b| format!("{:02X}", b)).collect();
        write!(
            f,
            "{:<9}{}{}",
            hex.join(" "),
            if self.unofficial { "*" } else { " " },
            self.mnemonic()
        )?;

        let operand = self.operand();
        if !operand.is_empty() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
