use rand::RngCore;

use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::quirks::Quirks;
use crate::state::{Keypad, State};

/// A decoded instruction with its operands.
///
/// Register operands (`x`, `y`) are indices 0x0..=0xF, `kk` is an immediate byte,
/// `addr` a 12-bit address and `n` a sprite height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0 CLS
    Cls,
    /// 00EE RET
    Ret,
    /// 1nnn JP addr
    Jp { addr: u16 },
    /// 2nnn CALL addr
    Call { addr: u16 },
    /// 3xkk SE Vx, byte
    SeByte { x: u8, kk: u8 },
    /// 4xkk SNE Vx, byte
    SneByte { x: u8, kk: u8 },
    /// 5xy0 SE Vx, Vy
    SeReg { x: u8, y: u8 },
    /// 6xkk LD Vx, byte
    LdByte { x: u8, kk: u8 },
    /// 7xkk ADD Vx, byte
    AddByte { x: u8, kk: u8 },
    /// 8xy0 LD Vx, Vy
    LdReg { x: u8, y: u8 },
    /// 8xy1 OR Vx, Vy
    Or { x: u8, y: u8 },
    /// 8xy2 AND Vx, Vy
    And { x: u8, y: u8 },
    /// 8xy3 XOR Vx, Vy
    Xor { x: u8, y: u8 },
    /// 8xy4 ADD Vx, Vy
    AddReg { x: u8, y: u8 },
    /// 8xy5 SUB Vx, Vy
    Sub { x: u8, y: u8 },
    /// 8xy6 SHR Vx
    Shr { x: u8 },
    /// 8xy7 SUBN Vx, Vy
    Subn { x: u8, y: u8 },
    /// 8xyE SHL Vx
    Shl { x: u8 },
    /// 9xy0 SNE Vx, Vy
    SneReg { x: u8, y: u8 },
    /// Annn LD I, addr
    LdI { addr: u16 },
    /// Bnnn JP V0, addr
    JpV0 { addr: u16 },
    /// Cxkk RND Vx, byte
    Rnd { x: u8, kk: u8 },
    /// Dxyn DRW Vx, Vy, n
    Drw { x: u8, y: u8, n: u8 },
    /// Ex9E SKP Vx
    Skp { x: u8 },
    /// ExA1 SKNP Vx
    Sknp { x: u8 },
    /// Fx07 LD Vx, DT
    LdVxDt { x: u8 },
    /// Fx0A LD Vx, K
    LdVxK { x: u8 },
    /// Fx15 LD DT, Vx
    LdDtVx { x: u8 },
    /// Fx18 LD ST, Vx
    LdStVx { x: u8 },
    /// Fx1E ADD I, Vx
    AddI { x: u8 },
    /// Fx29 LD F, Vx
    LdF { x: u8 },
    /// Fx33 LD B, Vx
    LdB { x: u8 },
    /// Fx55 LD [I], Vx
    Store { x: u8 },
    /// Fx65 LD Vx, [I]
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for an Opcode, or None if the word isn't one.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x1, ..) => Instruction::Jp { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::SeByte { x, kk },
            (0x4, ..) => Instruction::SneByte { x, kk },
            (0x5, .., 0x0) => Instruction::SeReg { x, y },
            (0x6, ..) => Instruction::LdByte { x, kk },
            (0x7, ..) => Instruction::AddByte { x, kk },
            (0x8, .., 0x0) => Instruction::LdReg { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::Shr { x },
            (0x8, .., 0x7) => Instruction::Subn { x, y },
            (0x8, .., 0xE) => Instruction::Shl { x },
            (0x9, .., 0x0) => Instruction::SneReg { x, y },
            (0xA, ..) => Instruction::LdI { addr },
            (0xB, ..) => Instruction::JpV0 { addr },
            (0xC, ..) => Instruction::Rnd { x, kk },
            (0xD, ..) => Instruction::Drw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::Skp { x },
            (0xE, _, 0xA, 0x1) => Instruction::Sknp { x },
            (0xF, _, 0x0, 0x7) => Instruction::LdVxDt { x },
            (0xF, _, 0x0, 0xA) => Instruction::LdVxK { x },
            (0xF, _, 0x1, 0x5) => Instruction::LdDtVx { x },
            (0xF, _, 0x1, 0x8) => Instruction::LdStVx { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddI { x },
            (0xF, _, 0x2, 0x9) => Instruction::LdF { x },
            (0xF, _, 0x3, 0x3) => Instruction::LdB { x },
            (0xF, _, 0x5, 0x5) => Instruction::Store { x },
            (0xF, _, 0x6, 0x5) => Instruction::Read { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Applies the instruction to `state`.
    ///
    /// The pc must already point past the instruction's own word; jumps, calls,
    /// returns and skips overwrite or adjust it from there.
    pub fn execute(
        self,
        state: &mut State,
        pressed_keys: &Keypad,
        quirks: &Quirks,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        match self {
            Instruction::Cls => clr(state),
            Instruction::Ret => return rts(state),
            Instruction::Jp { addr } => jump(state, addr),
            Instruction::Call { addr } => return call(state, addr),
            Instruction::SeByte { x, kk } => ske(state, x, kk),
            Instruction::SneByte { x, kk } => skne(state, x, kk),
            Instruction::SeReg { x, y } => skre(state, x, y),
            Instruction::LdByte { x, kk } => load(state, x, kk),
            Instruction::AddByte { x, kk } => add(state, x, kk),
            Instruction::LdReg { x, y } => mv(state, x, y),
            Instruction::Or { x, y } => or(state, x, y),
            Instruction::And { x, y } => and(state, x, y),
            Instruction::Xor { x, y } => xor(state, x, y),
            Instruction::AddReg { x, y } => addreg(state, x, y),
            Instruction::Sub { x, y } => sub(state, x, y),
            Instruction::Shr { x } => shr(state, x),
            Instruction::Subn { x, y } => subn(state, x, y),
            Instruction::Shl { x } => shl(state, x),
            Instruction::SneReg { x, y } => skrne(state, x, y),
            Instruction::LdI { addr } => loadi(state, addr),
            Instruction::JpV0 { addr } => jumpi(state, addr),
            Instruction::Rnd { x, kk } => rnd(state, x, kk, rng),
            Instruction::Drw { x, y, n } => draw(state, x, y, n),
            Instruction::Skp { x } => skpr(state, x, pressed_keys),
            Instruction::Sknp { x } => skup(state, x, pressed_keys),
            Instruction::LdVxDt { x } => moved(state, x),
            Instruction::LdVxK { x } => keyd(state, x),
            Instruction::LdDtVx { x } => loads(state, x),
            Instruction::LdStVx { x } => ld(state, x),
            Instruction::AddI { x } => addi(state, x, quirks.index_overflow),
            Instruction::LdF { x } => ldspr(state, x),
            Instruction::LdB { x } => bcd(state, x),
            Instruction::Store { x } => stor(state, x),
            Instruction::Read { x } => read(state, x),
        }
        Ok(())
    }
}
