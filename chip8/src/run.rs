use std::fs;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use jace_core::{Chip8, TIMER_HZ};
use jace_display::Display;

use crate::audio::Beeper;
use crate::clock::Clock;
use crate::config::Config;
use crate::keymap::keymap;

/// How long the loop sleeps between iterations.
const IDLE: Duration = Duration::from_millis(1);

pub fn run(config: Config) -> anyhow::Result<()> {
    // Load ROM
    let rom = fs::read(&config.rom)
        .with_context(|| format!("unable to read {}", config.rom.display()))?;
    let mut chip8 = Chip8::with_quirks(config.quirks);
    if let Some(seed) = config.seed {
        chip8 = chip8.with_seed(seed);
    }
    chip8
        .load_program(&rom)
        .with_context(|| format!("unable to load {}", config.rom.display()))?;
    info!("loaded {} ({} bytes)", config.rom.display(), rom.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl).map_err(anyhow::Error::msg)?;
    let mut beeper = Beeper::new(&sdl).map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let start = Instant::now();
    let mut cpu_clock = Clock::new(config.hz, start);
    let mut timer_clock = Clock::new(TIMER_HZ, start);

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc)?;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        for _ in 0..cpu_clock.ticks_due(now) {
            chip8.step().context("machine halted")?;
        }
        for _ in 0..timer_clock.ticks_due(now) {
            chip8.tick();
        }

        // Render the frame if it changed, then acknowledge it
        if let Some(frame) = chip8.get_frame() {
            display.render(frame).map_err(anyhow::Error::msg)?;
            chip8.clear_dirty_flag();
        }
        beeper.set_playing(chip8.should_sound());

        std::thread::sleep(IDLE);
    }

    beeper.set_playing(false);
    info!("session ended");
    Ok(())
}
