use thiserror::Error;

/// Error raised at the ROM load boundary.
///
/// Load errors are recoverable: the machine is untouched and the host may
/// offer another image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The image does not fit between the load base and the end of memory.
    #[error("rom image of {rom_len} bytes exceeds the {max} bytes available")]
    RomTooLarge {
        /// Size of the rejected image in bytes.
        rom_len: usize,
        /// Bytes available from the load base to the end of memory.
        max: usize,
    },
}

/// Fatal faults raised during execution.
///
/// None of these are recoverable: they indicate a runaway or malformed
/// program, and the host should report and halt rather than continue
/// stepping. A fresh machine is obtained by reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Fault {
    /// Instruction fetch attempted past the legal fetch range.
    #[error("instruction fetch at {pc:#06X} is past the end of memory")]
    FetchOutOfRange {
        /// Program counter at fetch time.
        pc: u16,
    },
    /// Subroutine return executed with an empty call stack.
    #[error("return at {pc:#06X} with an empty call stack")]
    StackUnderflow {
        /// Program counter after the faulting fetch.
        pc: u16,
    },
    /// Data access targeted an address outside the 4 KiB address space.
    #[error("memory access at {addr:#06X} is outside the address space")]
    AddressOutOfRange {
        /// The out-of-range address.
        addr: u16,
    },
}
