//! Cycle-stepped CHIP-8 virtual machine core.
//!
//! The crate owns all machine state (memory, registers, call stack, timers,
//! display bitmap, input latch) and exposes one repeatable step operation:
//! fetch an instruction, decode it, mutate state by its semantics. Hosts
//! supply everything real-time around it: windowing, rendering, key mapping,
//! ROM file reading, and the 60 Hz timer cadence.

/// Error taxonomy for the load boundary and fatal execution faults.
pub mod fault;
pub use fault::{Fault, LoadError};

/// Memory model primitives and the built-in glyph font.
pub mod memory;
pub use memory::{
    glyph_address, AddressSpace, FONT_BASE, FONT_GLYPHS, FONT_GLYPH_BYTES, FONT_GLYPH_COUNT,
    MAX_ROM_BYTES, MEMORY_BYTES, ROM_BASE,
};

/// Architectural machine-state primitives.
pub mod state;
pub use state::{CallStack, RegisterBank, VRegister, V_REGISTER_COUNT};

/// Instruction field views and operation classification.
pub mod decoder;
pub use decoder::{Instruction, Operation};

/// Monochrome frame buffer with XOR blitting and collision reporting.
pub mod display;
pub use display::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Delay and sound countdown counters.
pub mod timers;
pub use timers::Timers;

/// Last-pressed-key latch with transition tracking.
pub mod input;
pub use input::{InputLatch, Key};

/// Saturating diagnostic counters for host-side observability.
pub mod diag;
pub use diag::{DiagCounters, UnknownEncoding};

/// Mnemonic rendering for diagnostics and host-side error reporting.
pub mod disasm;
pub use disasm::disassemble;

/// The machine facade owning all core state.
pub mod machine;
pub use machine::Chip8;

mod execute;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
