//! Elided instruction listings for program banks
//!
//! A listing walks a bank from its first byte to its last, decoding one
//! instruction at a time. Runs of byte-identical instructions collapse into
//! a single [`ListingLine::Elided`] marker; the first instruction of a run is
//! always shown, and a run that reaches the end of the bank also shows its
//! final instruction at the address it was decoded from.
//!
//! A verbose builder skips elision and lists every decoded instruction.

use crate::bank::BankView;
use crate::decoder::{Decoded, InstructionDecoder};
use crate::error::InspectError;
use crate::instruction::Instruction;
use log::debug;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingLine {
    Decoded {
        address: u16,
        instruction: Instruction,
    },
    /// One or more repeats of the previous instruction were suppressed
    Elided,
    /// Decoding stopped here; always the last line of a listing
    Failed { address: u16, error: InspectError },
}

impl ListingLine {
    pub fn display(&self) -> String {
        match self {
            ListingLine::Decoded {
                address,
                instruction,
            } => format!("{:04X}: {}", address, instruction.display()),
            ListingLine::Elided => "⋯".to_string(),
            ListingLine::Failed { address, error } => {
                format!("{:04X}: {}", address, error.message())
            }
        }
    }

    pub fn address(&self) -> Option<u16> {
        match self {
            ListingLine::Decoded { address, .. } | ListingLine::Failed { address, .. } => {
                Some(*address)
            }
            ListingLine::Elided => None,
        }
    }
}

pub type Listing = Vec<ListingLine>;

/// The error that truncated a listing, if any
pub fn listing_error(lines: &[ListingLine]) -> Option<&InspectError> {
    match lines.last() {
        Some(ListingLine::Failed { error, .. }) => Some(error),
        _ => None,
    }
}

pub struct ListingBuilder<'d> {
    decoder: &'d dyn InstructionDecoder,
    elide: bool,
}

impl<'d> ListingBuilder<'d> {
    pub fn new(decoder: &'d dyn InstructionDecoder) -> Self {
        ListingBuilder {
            decoder,
            elide: true,
        }
    }

    /// List every instruction instead of collapsing repeats
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.elide = !verbose;
        self
    }

    pub fn build(&self, bank: &BankView<'_>) -> Listing {
        let mut lines = Vec::new();
        let mut cursor = 0usize;
        let mut address = bank.base_address();
        let mut prev: Option<Instruction> = None;
        let mut skipping = false;

        loop {
            let (consumed, instruction) = match self.decoder.decode(bank, cursor) {
                Ok(Decoded::Instruction {
                    consumed,
                    instruction,
                }) if consumed > 0 => (consumed, instruction),
                Ok(_) => {
                    // Show the last instruction of a run that hit the end
                    if skipping {
                        if let Some(last) = prev.take() {
                            lines.push(ListingLine::Decoded {
                                address: address.wrapping_sub(last.size() as u16),
                                instruction: last,
                            });
                        }
                    }
                    break;
                }
                Err(err) => {
                    debug!(
                        "bank {} decode failed at {:04X} (+{}): {} ({})",
                        bank.ord(),
                        address,
                        cursor,
                        err.message(),
                        err.code()
                    );
                    lines.push(ListingLine::Failed {
                        address,
                        error: InspectError::wrap_dis(err),
                    });
                    break;
                }
            };

            let repeated = self.elide
                && prev
                    .as_ref()
                    .map_or(false, |p| p.bytes == instruction.bytes);
            if repeated {
                if !skipping {
                    lines.push(ListingLine::Elided);
                    skipping = true;
                }
            } else {
                lines.push(ListingLine::Decoded {
                    address,
                    instruction: instruction.clone(),
                });
                skipping = false;
            }
            prev = Some(instruction);

            cursor += consumed;
            address = address.wrapping_add(consumed as u16);
        }

        lines
    }
}

/// Clipboard text for a whole listing, headed by the bank description
pub fn listing_text(bank: &BankView<'_>, lines: &[ListingLine]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Block {} ({}KB)", bank.ord(), bank.size_kb());
    let _ = writeln!(text, "--------");
    for line in lines {
        let _ = writeln!(text, "{}", line.display());
    }
    text
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
