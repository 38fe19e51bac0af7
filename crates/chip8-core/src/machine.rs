//! The machine facade owning all core state.
//!
//! [`Chip8`] is the single instance a host drives: it loads a program image,
//! steps the interpreter, ticks the timers on its own cadence, delivers key
//! presses, and polls the frame buffer once per frame. All state is owned
//! exclusively by the machine; hosts mutate it only through these
//! operations, and obtain a fresh machine by reconstructing it.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::decoder::Instruction;
use crate::diag::DiagCounters;
use crate::display::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::execute;
use crate::fault::{Fault, LoadError};
use crate::input::{InputLatch, Key};
use crate::memory::{AddressSpace, MEMORY_BYTES};
use crate::state::{CallStack, RegisterBank};
use crate::timers::Timers;

/// Highest program counter from which a full instruction may be fetched.
const FETCH_LIMIT: u16 = MEMORY_BYTES as u16 - 2;

/// The cycle-stepped virtual machine.
pub struct Chip8 {
    pub(crate) memory: AddressSpace,
    pub(crate) regs: RegisterBank,
    pub(crate) stack: CallStack,
    pub(crate) frame: FrameBuffer,
    pub(crate) timers: Timers,
    pub(crate) input: InputLatch,
    pub(crate) diag: DiagCounters,
    pub(crate) rng: SmallRng,
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

impl Chip8 {
    /// Creates a machine with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates a machine with a deterministic random source.
    ///
    /// Two machines built from the same seed and driven identically stay
    /// byte-for-byte identical.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            memory: AddressSpace::new(),
            regs: RegisterBank::default(),
            stack: CallStack::new(),
            frame: FrameBuffer::new(),
            timers: Timers::new(),
            input: InputLatch::new(),
            diag: DiagCounters::new(),
            rng,
        }
    }

    /// Loads a program image at the ROM base.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RomTooLarge`] when the image does not fit; the
    /// machine is untouched and the host may offer another image.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.memory.load_rom(rom)
    }

    /// Fetches the instruction under the program counter and advances the
    /// counter by 2.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::FetchOutOfRange`] when the counter is past the legal
    /// fetch range. That indicates a runaway or malformed program; there is
    /// no recovery.
    pub fn fetch(&mut self) -> Result<Instruction, Fault> {
        let pc = self.regs.pc();
        if pc >= FETCH_LIMIT {
            return Err(Fault::FetchOutOfRange { pc });
        }
        let hi = self.memory.read(pc)?;
        let lo = self.memory.read(pc.wrapping_add(1))?;
        self.regs.advance_pc();
        Ok(Instruction::from_bytes(hi, lo))
    }

    /// Executes one fetched instruction.
    ///
    /// Branch, skip, call, and return forms set the program counter
    /// themselves; everything else leaves the fetch advance in place.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`Fault`] on stack underflow or an out-of-range data
    /// access.
    pub fn execute(&mut self, inst: Instruction) -> Result<(), Fault> {
        execute::execute(self, inst)
    }

    /// Fetches and executes one instruction.
    ///
    /// # Errors
    ///
    /// Propagates any fatal [`Fault`] from the fetch or the execution.
    pub fn step(&mut self) -> Result<(), Fault> {
        let inst = self.fetch()?;
        self.execute(inst)
    }

    /// Decrements both timers; the host calls this at its own fixed cadence
    /// (60 Hz in the reference driver), independent of the step rate.
    pub const fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Current delay timer value.
    #[must_use]
    pub const fn delay_timer(&self) -> u8 {
        self.timers.delay()
    }

    /// Current sound timer value.
    #[must_use]
    pub const fn sound_timer(&self) -> u8 {
        self.timers.sound()
    }

    /// Delivers a key press into the input latch.
    pub const fn register_key_press(&mut self, key: Key) {
        self.input.register_key_press(key);
    }

    /// Clears the key-transition flag; the host calls this once per step,
    /// after the step has had its chance to observe the flag.
    pub const fn clear_key_transition(&mut self) {
        self.input.clear_transition();
    }

    /// Read-only view of the pixel grid, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        self.frame.pixels()
    }

    /// Whether any pixel changed since the host last cleared the flag.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.frame.is_dirty()
    }

    /// Clears the redraw flag after the host has rendered a frame.
    pub const fn clear_redraw(&mut self) {
        self.frame.clear_dirty();
    }

    /// Read-only view of the register bank.
    #[must_use]
    pub const fn registers(&self) -> &RegisterBank {
        &self.regs
    }

    /// Read-only view of the address space.
    #[must_use]
    pub const fn memory(&self) -> &AddressSpace {
        &self.memory
    }

    /// Current diagnostic counters.
    #[must_use]
    pub const fn diag(&self) -> &DiagCounters {
        &self.diag
    }
}
