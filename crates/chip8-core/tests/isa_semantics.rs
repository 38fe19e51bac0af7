//! Program-level conformance: whole instructions driven through the public
//! load/step/tick/input surface, the way a host drives the machine.

use chip8_core::{Chip8, Fault, Key, LoadError, VRegister, MAX_ROM_BYTES, ROM_BASE};
use proptest as _;
use rand as _;
use rstest as _;
use thiserror as _;

/// Assembles instruction words into a loadable image, high byte first.
fn rom(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// A machine with the image loaded and a fixed random seed.
fn boot(words: &[u16]) -> Chip8 {
    let mut core = Chip8::with_seed(7);
    core.load_rom(&rom(words)).expect("image fits");
    core
}

/// Steps `count` instructions with the reference driver contract: the
/// key-transition flag is cleared after every step.
fn drive(core: &mut Chip8, count: usize) {
    for _ in 0..count {
        core.step().expect("program should run");
        core.clear_key_transition();
    }
}

#[test]
fn load_boundary_is_exact() {
    let mut core = Chip8::with_seed(7);
    assert_eq!(core.load_rom(&vec![0; MAX_ROM_BYTES]), Ok(()));
    assert_eq!(
        core.load_rom(&vec![0; MAX_ROM_BYTES + 1]),
        Err(LoadError::RomTooLarge {
            rom_len: MAX_ROM_BYTES + 1,
            max: MAX_ROM_BYTES,
        })
    );
}

#[test]
fn skips_cost_four_bytes_when_taken_and_two_when_not() {
    // V1 = 0x42; SE V1, 0x42 skips the LD V1, 0x00 shadow instruction.
    let mut core = boot(&[0x6142, 0x3142, 0x6100, 0x6207]);
    drive(&mut core, 3);
    assert_eq!(core.registers().v(VRegister::V1), 0x42);
    assert_eq!(core.registers().v(VRegister::V2), 0x07);
    assert_eq!(core.registers().pc(), ROM_BASE + 8);

    // Same program with a failing comparison: the shadow executes.
    let mut core = boot(&[0x6142, 0x3143, 0x6100, 0x6207]);
    drive(&mut core, 3);
    assert_eq!(core.registers().v(VRegister::V1), 0x00);
    assert_eq!(core.registers().pc(), ROM_BASE + 6);
}

#[test]
fn subroutine_call_and_return_roundtrip_the_program_counter() {
    let image = [
        0x2208, // 0x200: CALL 0x208
        0x6202, // 0x202: V2 = 2 (runs after the return)
        0x1204, // 0x204: park
        0x0000, // 0x206: padding
        0x6101, // 0x208: V1 = 1
        0x00EE, // 0x20A: RET
    ];
    let mut core = boot(&image);
    drive(&mut core, 4);
    assert_eq!(core.registers().v(VRegister::V1), 1);
    assert_eq!(core.registers().v(VRegister::V2), 2);
    assert_eq!(core.registers().pc(), ROM_BASE + 4);
}

#[test]
fn return_without_a_call_is_a_fatal_underflow() {
    let mut core = boot(&[0x00EE]);
    assert_eq!(core.step(), Err(Fault::StackUnderflow { pc: ROM_BASE }));
}

#[test]
fn runaway_program_counter_is_a_fatal_fetch_fault() {
    let mut core = boot(&[0x1FFE]); // jump to the last instruction slot boundary
    drive(&mut core, 1);
    assert_eq!(core.step(), Err(Fault::FetchOutOfRange { pc: 0x0FFE }));
}

#[test]
fn blocking_wait_parks_until_a_key_transition_arrives() {
    let mut core = boot(&[0xF30A, 0x6201]); // LD V3, K; V2 = 1
    for _ in 0..5 {
        core.step().expect("wait should spin");
        core.clear_key_transition();
        assert_eq!(core.registers().pc(), ROM_BASE);
    }

    core.register_key_press(Key::KC);
    drive(&mut core, 2);
    assert_eq!(core.registers().v(VRegister::V3), 0xC);
    assert_eq!(core.registers().v(VRegister::V2), 1);
    assert_eq!(core.registers().pc(), ROM_BASE + 4);
}

#[test]
fn repeated_press_of_the_same_key_does_not_unpark_the_wait() {
    let mut core = boot(&[0xF30A]);
    core.register_key_press(Key::K4);
    drive(&mut core, 1); // transition consumed by the driver clear
    assert_eq!(core.registers().pc(), ROM_BASE + 2);

    let mut parked = boot(&[0xF30A]);
    parked.register_key_press(Key::K4);
    parked.clear_key_transition();
    parked.register_key_press(Key::K4); // same key again: no transition
    drive(&mut parked, 3);
    assert_eq!(parked.registers().pc(), ROM_BASE);
}

#[test]
fn key_skips_follow_the_latched_key() {
    // V1 = 5; SKP V1 skips the shadow when key 5 is latched.
    let mut core = boot(&[0x6105, 0xE19E, 0x6199, 0x6201]);
    core.register_key_press(Key::K5);
    drive(&mut core, 3);
    assert_eq!(core.registers().v(VRegister::V1), 5);
    assert_eq!(core.registers().v(VRegister::V2), 1);
}

#[test]
fn draw_twice_restores_the_buffer_and_reports_the_collision() {
    // I = glyph "8"; draw, then draw again at the same anchor.
    let image = [0x6108, 0xF129, 0xD005, 0xD005];
    let mut core = boot(&image);
    core.clear_redraw();

    drive(&mut core, 3);
    assert_eq!(core.registers().v(VRegister::VF), 0);
    assert!(core.needs_redraw());
    let lit = core
        .pixels()
        .iter()
        .flatten()
        .filter(|pixel| **pixel)
        .count();
    assert!(lit > 0, "first draw should light pixels");

    drive(&mut core, 1);
    assert_eq!(core.registers().v(VRegister::VF), 1);
    assert!(core.pixels().iter().flatten().all(|pixel| !pixel));
}

#[test]
fn timer_cadence_is_owned_by_the_host_not_the_step_rate() {
    let mut core = boot(&[0x6A09, 0xFA15, 0xFA18]); // DT = ST = 9
    drive(&mut core, 3);
    assert_eq!(core.delay_timer(), 9);
    assert_eq!(core.sound_timer(), 9);

    // No steps in between: ticks alone drain the counters and floor at 0.
    for _ in 0..20 {
        core.tick_timers();
    }
    assert_eq!(core.delay_timer(), 0);
    assert_eq!(core.sound_timer(), 0);
}

#[test]
fn undefined_encodings_are_no_ops_but_observable() {
    let mut core = boot(&[0x8AB9, 0x6201]); // unassigned ALU sub-key, then V2 = 1
    drive(&mut core, 2);
    assert_eq!(core.registers().v(VRegister::V2), 1);
    assert_eq!(core.diag().unknown_count(), 1);
    let last = core.diag().last_unknown().expect("recorded encoding");
    assert_eq!(last.word, 0x8AB9);
    assert_eq!(last.pc, ROM_BASE);
}

#[test]
fn bcd_and_register_file_transfers_compose() {
    // V1 = 173; I = 0x400; store BCD; load V0..=V2 back from the digits.
    let image = [0x61AD, 0xA400, 0xF133, 0xF265];
    let mut core = boot(&image);
    drive(&mut core, 4);
    assert_eq!(core.registers().v(VRegister::V0), 1);
    assert_eq!(core.registers().v(VRegister::V1), 7);
    assert_eq!(core.registers().v(VRegister::V2), 3);
}
