use log::debug;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, FONT_START, KEY_COUNT, MAX_PROGRAM_SIZE,
    MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT, SPRITE_SHEET, STACK_SIZE,
};
use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel.
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Pressed status of the keys 0..F.
pub type Keypad = [bool; KEY_COUNT];

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - all 16 are general purpose
///     - VF is also overwritten as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - (stack) 16 return addresses
/// - (sp) how many of them are in use
///
/// Timers
/// - 2 8-bit timers (delay & sound), counted down by the environment at 60Hz
///
/// ## Memory
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font
///     - programs are loaded from 0x200
/// - 64x32 frame buffer and a flag recording whether it changed since the last render
///
/// ## Input
/// - Emulation is suspended while `register_needing_key` is Some
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub register_needing_key: Option<u8>,
}

impl State {
    /// Zeroed memory, registers and screen with the program counter at 0x200.
    pub fn new() -> Self {
        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory: [0; MEMORY_SIZE],
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            register_needing_key: None,
        }
    }

    /// Copies the sprite sheet into its reserved region.
    pub fn load_font(&mut self) {
        let start = FONT_START as usize;
        self.memory[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
    }

    /// Copies a program to 0x200 and points the program counter at it.
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::ProgramTooLarge {
                size: program.len(),
            });
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
        self.pc = PROGRAM_START;
        debug!("loaded {} byte program at {:#05X}", program.len(), start);
        Ok(())
    }

    /// Reads a byte; the address wraps at the end of memory.
    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize % MEMORY_SIZE]
    }

    /// Writes a byte; the address wraps at the end of memory.
    pub fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize % MEMORY_SIZE] = value;
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> Opcode {
        Opcode::from_bytes(self.read(self.pc), self.read(self.pc.wrapping_add(1)))
    }

    /// Overwrites VF with 1 or 0.
    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = flag as u8;
    }

    /// Pushes a return address.
    /// Fails without touching the stack if it is already full.
    /// Errors report `pc - 2` since the pc has already moved past the executing word.
    pub fn push(&mut self, address: u16) -> Result<()> {
        let sp = self.sp as usize;
        if sp >= STACK_SIZE {
            return Err(Chip8Error::StackOverflow {
                address: self.pc.wrapping_sub(2),
            });
        }
        self.stack[sp] = address;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow {
                address: self.pc.wrapping_sub(2),
            });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
