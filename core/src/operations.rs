use rand::{Rng, RngCore};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START};
use crate::error::Result;
use crate::quirks::IndexOverflow;
use crate::state::{Keypad, State};

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    state.pc = state.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    state.push(state.pc)?;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    skip_if(state, state.v[x as usize] == kk);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    skip_if(state, state.v[x as usize] != kk);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    skip_if(state, state.v[x as usize] == state.v[y as usize]);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] |= state.v[y as usize];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] &= state.v[y as usize];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] ^= state.v[y as usize];
}

// The flag-setting operations below write Vx first and VF last, so VF holds the
// flag even when it is also the destination.

/// Vx += Vy; VF = overflow
pub fn addreg(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.set_flag(over);
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    state.v[x as usize] = res;
    state.set_flag(!under);
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    state.v[x as usize] = value >> 1;
    state.set_flag(value & 0x1 == 0x1);
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    state.v[x as usize] = res;
    state.set_flag(!under);
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    state.v[x as usize] = value << 1;
    state.set_flag(value & 0x80 == 0x80);
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    skip_if(state, state.v[x as usize] != state.v[y as usize]);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = u16::from(state.v[0x0]) + addr;
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut State, x: u8, kk: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.v[x as usize] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased.
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let origin_x = state.v[x as usize] as usize;
    let origin_y = state.v[y as usize] as usize;
    let mut collision = false;

    for row in 0..n as u16 {
        let sprite_row = state.read(state.i.wrapping_add(row));
        let py = (origin_y + row as usize) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if sprite_row & (0x80 >> bit) == 0 {
                continue;
            }
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[py][px];
            collision |= *pixel;
            *pixel = !*pixel;
            state.draw_flag = true;
        }
    }

    state.set_flag(collision);
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8, pressed_keys: &Keypad) {
    let key = state.v[x as usize] & 0xF;
    skip_if(state, pressed_keys[key as usize]);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8, pressed_keys: &Keypad) {
    let key = state.v[x as usize] & 0xF;
    skip_if(state, !pressed_keys[key as usize]);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
}

/// await keypress for Vx
/// The pc stays on this instruction until a key resolves the wait.
pub fn keyd(state: &mut State, x: u8) {
    state.register_needing_key = Some(x);
    state.pc = state.pc.wrapping_sub(0x2);
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
}

/// I += Vx
pub fn addi(state: &mut State, x: u8, overflow: IndexOverflow) {
    let sum = state.i.wrapping_add(u16::from(state.v[x as usize]));
    state.i = match overflow {
        IndexOverflow::Wrap => sum & 0x0FFF,
        IndexOverflow::Grow => sum,
    };
}

/// I = FONT_START + (Vx & 0xF) * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
pub fn ldspr(state: &mut State, x: u8) {
    state.i = FONT_START + u16::from(state.v[x as usize] & 0xF) * FONT_GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in (0..).zip(digits) {
        state.write(state.i.wrapping_add(offset), digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left unchanged
pub fn stor(state: &mut State, x: u8) {
    for register in 0..=x {
        state.write(
            state.i.wrapping_add(u16::from(register)),
            state.v[register as usize],
        );
    }
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left unchanged
pub fn read(state: &mut State, x: u8) {
    for register in 0..=x {
        state.v[register as usize] = state.read(state.i.wrapping_add(u16::from(register)));
    }
}
