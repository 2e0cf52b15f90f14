pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, TIMER_HZ};
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use quirks::{IndexOverflow, InvalidOpcodePolicy, Quirks};
pub use state::{FrameBuffer, Keypad};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod quirks;
pub mod state;
