use crate::bank::BankView;
use crate::error::DisError;
use crate::instruction::Instruction;
use log::trace;

/// Result of one decode step
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Instruction {
        consumed: usize,
        instruction: Instruction,
    },
    /// Cursor reached the end of the bank
    EndOfBank,
}

/// Decodes a single instruction at a cursor offset into a bank
pub trait InstructionDecoder: Send + Sync {
    fn decode(&self, bank: &BankView<'_>, cursor: usize) -> Result<Decoded, DisError>;
}

/// MOS 6502 decoder covering the full 2A03 opcode set
#[derive(Debug, Default, Clone, Copy)]
pub struct Mos6502Decoder;

impl InstructionDecoder for Mos6502Decoder {
    fn decode(&self, bank: &BankView<'_>, cursor: usize) -> Result<Decoded, DisError> {
        if cursor >= bank.size() {
            return Ok(Decoded::EndOfBank);
        }

        let instruction = Instruction::decode(bank.bytes(), cursor)?;
        trace!(
            "bank {} +{:04x}: {}",
            bank.ord(),
            cursor,
            instruction.display()
        );
        Ok(Decoded::Instruction {
            consumed: instruction.size(),
            instruction,
        })
    }
}
