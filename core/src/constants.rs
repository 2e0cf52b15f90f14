/// Bytes of addressable memory; every address is taken modulo this.
pub const MEMORY_SIZE: usize = 0x1000;

/// Programs are loaded here and execution starts here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest program that fits between `PROGRAM_START` and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the built-in hexadecimal font is loaded.
pub const FONT_START: u16 = 0x050;

/// Each font glyph is 4 pixels wide and 5 rows (bytes) tall.
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Return addresses the call stack can hold before overflowing.
pub const STACK_SIZE: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Index of VF, the register doubling as carry/borrow/collision flag.
pub const FLAG_REGISTER: usize = 0xF;

/// Rate, in Hz, at which the environment is expected to tick the timers.
pub const TIMER_HZ: u32 = 60;

/// Default instructions executed per second.
pub const CLOCK_SPEED: u32 = 700;

/// # Sprite Sheet
/// Glyphs for the hexadecimal digits 0..F, 5 bytes each.
/// Only the high nibble of each byte is drawn:
/// ```text
/// 0xF0 -> ****
/// 0x90 -> *  *
/// 0x90 -> *  *
/// 0x90 -> *  *
/// 0xF0 -> ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
