use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use std::io::{Read, Write};

use super::header::read_tree;
use super::tree::HuffNode;
use super::{END_OF_BLOCK, MAGIC, SYMBOL_BITS};

/// Statistics from a decompression operation.
#[derive(Clone, Debug, Default)]
pub struct DecompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

/// Decompress `input` into `output`.
///
/// Validates the 32-bit magic tag, rebuilds the tree from the header, then
/// walks the payload bit by bit: left on `0`, right on `1`, emitting each
/// non-marker leaf's byte and restarting at the root, until the end-of-block
/// leaf terminates the stream.
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<DecompressStats> {
    let mut reader = BitReader::new(input);

    let magic = reader.read_bits(32)?.ok_or(Error::UnexpectedEndOfStream)?;
    if magic != MAGIC {
        return Err(Error::UnsupportedFormat { expected: MAGIC, found: magic });
    }

    let root = read_tree(&mut reader)?;

    // A lone leaf can only be the end-of-block marker (empty payload); any
    // other leaf root admits no finite decoding.
    if let HuffNode::Leaf { symbol, .. } = &root {
        if *symbol != END_OF_BLOCK {
            return Err(Error::MalformedHeader);
        }
    }

    let mut writer = BitWriter::new(output);
    let mut current = &root;
    loop {
        match current {
            HuffNode::Leaf { symbol, .. } => {
                if *symbol == END_OF_BLOCK {
                    break;
                }
                writer.write_bits(u32::from(*symbol), SYMBOL_BITS)?;
                current = &root;
            }
            HuffNode::Internal { left, right, .. } => {
                let bit = reader.read_bit()?.ok_or(Error::UnexpectedEndOfStream)?;
                current = if bit { &**right } else { &**left };
            }
        }
    }

    let output_bytes = writer.bytes_written();
    writer.finish()?;

    Ok(DecompressStats { input_bytes: reader.bytes_read(), output_bytes })
}
