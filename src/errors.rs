use std::fmt;

use colored::Colorize;

/// One of the 512 opcode slots.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OpcodeSlot {
    Primary(u8),
    Secondary(u8, u8),
}

impl fmt::Display for OpcodeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeSlot::Primary(opcode) => write!(f, "{:#04X}", opcode),
            OpcodeSlot::Secondary(first, second) => write!(f, "{:#04X} {:#04X}", first, second),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Opcode {0} is not covered by the instruction table")]
    DecodeCoverage(OpcodeSlot),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn print_error(error: &Error) {
    eprintln!("{}: {}", "ERROR".red(), error);

    if let Error::DecodeCoverage(slot) = error {
        eprintln!(
            "   {} no literal case or family pattern matches {}",
            "|".blue(),
            slot.to_string().yellow()
        );
    }
}
