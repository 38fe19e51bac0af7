//! Mnemonic rendering for diagnostics and host-side error reporting.

use crate::decoder::{Instruction, Operation};

/// Renders an instruction as a conventional assembler mnemonic.
///
/// Undefined encodings render as a raw `.word` directive so hosts can report
/// exactly what a malformed ROM contained.
#[must_use]
pub fn disassemble(inst: Instruction) -> String {
    let (x, y, n) = (inst.x(), inst.y(), inst.n());
    let nn = inst.nn();
    let nnn = inst.nnn();

    match Operation::classify(inst) {
        Some(Operation::ClearDisplay) => "CLS".to_owned(),
        Some(Operation::Return) => "RET".to_owned(),
        Some(Operation::Jump) => format!("JP {nnn:#05X}"),
        Some(Operation::Call) => format!("CALL {nnn:#05X}"),
        Some(Operation::SkipEqImmediate) => format!("SE V{x:X}, {nn:#04X}"),
        Some(Operation::SkipNeImmediate) => format!("SNE V{x:X}, {nn:#04X}"),
        Some(Operation::SkipEqRegister) => format!("SE V{x:X}, V{y:X}"),
        Some(Operation::LoadImmediate) => format!("LD V{x:X}, {nn:#04X}"),
        Some(Operation::AddImmediate) => format!("ADD V{x:X}, {nn:#04X}"),
        Some(Operation::CopyRegister) => format!("LD V{x:X}, V{y:X}"),
        Some(Operation::Or) => format!("OR V{x:X}, V{y:X}"),
        Some(Operation::And) => format!("AND V{x:X}, V{y:X}"),
        Some(Operation::Xor) => format!("XOR V{x:X}, V{y:X}"),
        Some(Operation::AddWithCarry) => format!("ADD V{x:X}, V{y:X}"),
        Some(Operation::Sub) => format!("SUB V{x:X}, V{y:X}"),
        Some(Operation::ShiftRight) => format!("SHR V{x:X}"),
        Some(Operation::SubReversed) => format!("SUBN V{x:X}, V{y:X}"),
        Some(Operation::ShiftLeft) => format!("SHL V{x:X}"),
        Some(Operation::SkipNeRegister) => format!("SNE V{x:X}, V{y:X}"),
        Some(Operation::LoadIndex) => format!("LD I, {nnn:#05X}"),
        Some(Operation::JumpWithOffset) => format!("JP V{x:X}, {nnn:#05X}"),
        Some(Operation::Random) => format!("RND V{x:X}, {nn:#04X}"),
        Some(Operation::Draw) => format!("DRW V{x:X}, V{y:X}, {n:#03X}"),
        Some(Operation::SkipKeyPressed) => format!("SKP V{x:X}"),
        Some(Operation::SkipKeyNotPressed) => format!("SKNP V{x:X}"),
        Some(Operation::ReadDelayTimer) => format!("LD V{x:X}, DT"),
        Some(Operation::WaitForKey) => format!("LD V{x:X}, K"),
        Some(Operation::SetDelayTimer) => format!("LD DT, V{x:X}"),
        Some(Operation::SetSoundTimer) => format!("LD ST, V{x:X}"),
        Some(Operation::AddIndex) => format!("ADD I, V{x:X}"),
        Some(Operation::LoadGlyphAddress) => format!("LD F, V{x:X}"),
        Some(Operation::StoreBcd) => format!("LD B, V{x:X}"),
        Some(Operation::StoreRegisters) => format!("LD [I], V{x:X}"),
        Some(Operation::LoadRegisters) => format!("LD V{x:X}, [I]"),
        None => format!(".word {:#06X}", inst.word()),
    }
}
