use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::quirks::{InvalidOpcodePolicy, Quirks};
use crate::state::{FrameBuffer, Keypad, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `pressed_keys` with public interfaces for manipulating them
///  - the `quirks` it was configured with
///  - the random number generator behind `RND`
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - stepping the CPU
/// - ticking its timers
/// - inspecting its frame buffer for rendering by some display
/// - asking whether a tone should be playing
pub struct Chip8 {
    state: State,
    pressed_keys: Keypad,
    quirks: Quirks,
    rng: StdRng,
}

impl Chip8 {
    /// A machine with the font loaded, ready for `load_program`.
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    /// A machine with zeroed memory and no font.
    pub fn blank() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; KEY_COUNT],
            quirks: Quirks::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        let mut chip8 = Self::blank();
        chip8.quirks = quirks;
        chip8.load_font();
        chip8
    }

    /// Reseeds `RND` so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Back to a freshly initialized machine with the font loaded.
    /// Quirks and held keys are kept; the program must be loaded again.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.load_font();
    }

    pub fn load_font(&mut self) {
        self.state.load_font();
    }

    /// Load a program into memory at 0x200
    ///
    /// # Arguments
    /// * `program` the bytes of a ROM, at most 0xE00 of them
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.state.load_program(program)
    }

    /// Advances the CPU by a single instruction
    /// - if awaiting a keypress, only checks for one
    /// - otherwise gets and executes the next opcode
    ///
    /// On error the machine is left as it was before the call.
    pub fn step(&mut self) -> Result<()> {
        if let Some(register) = self.state.register_needing_key {
            if let Some(key) = self.pressed_keys.iter().position(|&pressed| pressed) {
                self.state.v[register as usize] = key as u8;
                self.state.register_needing_key = None;
                self.state.pc = self.state.pc.wrapping_add(0x2);
            }
            return Ok(());
        }

        let address = self.state.pc;
        let op = self.state.fetch();
        let instruction = match Instruction::decode(op) {
            Some(instruction) => instruction,
            None => {
                return match self.quirks.invalid_opcode {
                    InvalidOpcodePolicy::Halt => Err(Chip8Error::InvalidOpcode {
                        opcode: op.word(),
                        address,
                    }),
                    InvalidOpcodePolicy::Skip => {
                        debug!("skipping invalid opcode {} at {:#05X}", op, address);
                        self.state.pc = address.wrapping_add(0x2);
                        Ok(())
                    }
                }
            }
        };

        trace!(
            "{} {:?} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction,
            self.state.v,
            self.state.i,
            address
        );

        self.state.pc = address.wrapping_add(0x2);
        let result = instruction.execute(
            &mut self.state,
            &self.pressed_keys,
            &self.quirks,
            &mut self.rng,
        );
        if result.is_err() {
            self.state.pc = address;
        }
        result
    }

    /// Counts both timers down by one, stopping at 0.
    /// Meant to be called 60 times a second however many steps ran in between.
    pub fn tick(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Whether a tone should be playing right now.
    pub fn should_sound(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key, 0x0..=0xF
    /// * `pressed` whether it is held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .pressed_keys
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKey(key))?;
        *slot = pressed;
        Ok(())
    }

    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.set_key(key, true)
    }

    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.set_key(key, false)
    }

    /// The FrameBuffer and whether it changed since `clear_dirty_flag` was last called
    pub fn frame(&self) -> (&FrameBuffer, bool) {
        (&self.state.frame_buffer, self.state.draw_flag)
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Acknowledges that the current frame has been rendered.
    pub fn clear_dirty_flag(&mut self) {
        self.state.draw_flag = false;
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.state.register_needing_key.is_some()
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn program_counter(&self) -> u16 {
        self.state.pc
    }

    pub fn stack_depth(&self) -> usize {
        self.state.sp as usize
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn memory(&self) -> &[u8] {
        &self.state.memory
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
