use thiserror::Error;

use crate::constants::MAX_PROGRAM_SIZE;

/// Conditions the Chip-8 reports to its environment instead of recovering from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Chip8Error {
    #[error("program is {size} bytes but at most {max} bytes fit in memory", max = MAX_PROGRAM_SIZE)]
    ProgramTooLarge { size: usize },

    #[error("invalid opcode {opcode:04X} at {address:#05X}")]
    InvalidOpcode { opcode: u16, address: u16 },

    #[error("call stack overflow at {address:#05X}")]
    StackOverflow { address: u16 },

    #[error("return with an empty call stack at {address:#05X}")]
    StackUnderflow { address: u16 },

    #[error("key {0:#X} is outside the keypad (0x0..=0xF)")]
    InvalidKey(u8),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_address() {
        let err = Chip8Error::InvalidOpcode {
            opcode: 0xFFFF,
            address: 0x200,
        };
        assert_eq!(err.to_string(), "invalid opcode FFFF at 0x200");
    }

    #[test]
    fn test_program_too_large_names_the_limit() {
        let err = Chip8Error::ProgramTooLarge { size: 0xE01 };
        assert_eq!(
            err.to_string(),
            "program is 3585 bytes but at most 3584 bytes fit in memory"
        );
    }
}
