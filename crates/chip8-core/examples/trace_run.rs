//! Headless run harness: steps a built-in program and prints the display.

use std::error::Error;

use chip8_core::{disassemble, Chip8, Instruction};
use proptest as _;
use rand as _;
use rstest as _;
use thiserror as _;

/// Draws the digits 0 through 3 with the built-in font, then parks.
const PROGRAM: [u16; 18] = [
    0x6A00, // VA = 0 (row anchor)
    0x6100, 0xF129, 0x6002, 0xD0A5, // digit 0 at x = 2
    0x6101, 0xF129, 0x6008, 0xD0A5, // digit 1 at x = 8
    0x6102, 0xF129, 0x600E, 0xD0A5, // digit 2 at x = 14
    0x6103, 0xF129, 0x6014, 0xD0A5, // digit 3 at x = 20
    0x1222, // park
];

fn rom(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut core = Chip8::with_seed(0);
    core.load_rom(&rom(&PROGRAM))?;

    for _ in 0..PROGRAM.len() - 1 {
        let pc = core.registers().pc();
        let word = u16::from_be_bytes([core.memory().read(pc)?, core.memory().read(pc + 1)?]);
        println!("{pc:#06X}  {}", disassemble(Instruction::new(word)));
        core.step()?;
        core.clear_key_transition();
    }

    if core.needs_redraw() {
        for row in core.pixels() {
            let line: String = row.iter().map(|on| if *on { '#' } else { '.' }).collect();
            println!("{line}");
        }
        core.clear_redraw();
    }

    Ok(())
}
