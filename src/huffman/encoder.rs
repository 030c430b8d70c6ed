use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use std::io::{Read, Seek, Write};

use super::code::CodeTable;
use super::freq::FrequencyTable;
use super::header::write_tree;
use super::tree::build_tree;
use super::{END_OF_BLOCK, MAGIC, SYMBOL_BITS};

/// Statistics from a compression operation.
#[derive(Clone, Debug, Default)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Leaves in the emitted tree, end-of-block marker included.
    pub distinct_symbols: usize,
}

/// Compress `input` into `output`.
///
/// Scans the input twice: a first pass counts symbol frequencies, then the
/// source is rewound and each symbol is re-read and emitted as its code. The
/// wire format is the 32-bit magic tag, the serialized tree, and the code
/// stream terminated by the end-of-block code, zero-padded to a byte
/// boundary.
///
/// Any finite input (the empty one included) produces a valid encoding; the
/// only failure paths are I/O errors from `input` or `output`.
pub fn compress<R: Read + Seek, W: Write>(input: R, output: W) -> Result<CompressStats> {
    let mut reader = BitReader::new(input);
    let freq = FrequencyTable::scan(&mut reader)?;
    let input_bytes = reader.bytes_read();

    let tree = build_tree(&freq);
    let codes = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::new(output);
    writer.write_bits(MAGIC, 32)?;
    write_tree(&tree, &mut writer)?;

    reader.reset()?;
    while let Some(symbol) = reader.read_bits(SYMBOL_BITS)? {
        emit_code(&mut writer, &codes, symbol as u16)?;
    }
    emit_code(&mut writer, &codes, END_OF_BLOCK)?;

    let output_bytes = writer.bytes_written();
    writer.finish()?;

    Ok(CompressStats { input_bytes, output_bytes, distinct_symbols: freq.distinct() })
}

/// Emit a symbol's code bit-for-bit, leading zeros included.
fn emit_code<W: Write>(writer: &mut BitWriter<W>, codes: &CodeTable, symbol: u16) -> Result<()> {
    let code = codes
        .code(symbol)
        .ok_or_else(|| Error::Internal(format!("no code for scanned symbol {}", symbol)))?;
    for &bit in code {
        writer.write_bit(bit)?;
    }
    Ok(())
}
