use super::tree::HuffNode;
use super::ALPHABET_SIZE;

/// Bit-path codes for every leaf symbol: `false` = left, `true` = right.
///
/// Codes are stored as explicit bit paths rather than packed integers: the
/// format imposes no length cap, and a sufficiently skewed input can push a
/// leaf deeper than any fixed integer width over a 257-symbol alphabet.
/// Prefix-freedom holds structurally, every code is the path to a distinct
/// leaf of one binary tree.
#[derive(Clone, Debug)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// Record the root-to-leaf path for every leaf in `root`.
    ///
    /// A leaf at the root gets the empty path: the degenerate single-symbol
    /// alphabet needs no payload bits per symbol.
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = Vec::new();
        collect(root, &mut path, &mut codes);
        Self { codes }
    }

    /// The code for `symbol`, or `None` if it is not a leaf of the tree.
    pub fn code(&self, symbol: u16) -> Option<&[bool]> {
        self.codes[symbol as usize].as_deref()
    }
}

fn collect(node: &HuffNode, path: &mut Vec<bool>, codes: &mut [Option<Vec<bool>>]) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            collect(left, path, codes);
            path.pop();
            path.push(true);
            collect(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::freq::FrequencyTable;
    use crate::huffman::tree::build_tree;
    use crate::huffman::END_OF_BLOCK;

    fn codes_for(bytes: &[u8]) -> CodeTable {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &b in bytes {
            counts[b as usize] += 1;
        }
        CodeTable::from_tree(&build_tree(&FrequencyTable::from_counts(counts)))
    }

    #[test]
    fn test_codes_follow_tree_shape() {
        // 'a'=2 sits alone under the root; 'b' and the marker share the
        // other branch.
        let codes = codes_for(b"aab");

        assert_eq!(codes.code(0x61).unwrap(), &[false]);
        assert_eq!(codes.code(0x62).unwrap(), &[true, false]);
        assert_eq!(codes.code(END_OF_BLOCK).unwrap(), &[true, true]);
        assert!(codes.code(0x63).is_none());
    }

    #[test]
    fn test_leaf_root_gets_empty_code() {
        let codes = codes_for(b"");
        assert_eq!(codes.code(END_OF_BLOCK).unwrap(), &[] as &[bool]);
    }

    #[test]
    fn test_prefix_free() {
        // Skewed counts exercise a lopsided tree
        let mut bytes = Vec::new();
        for (byte, reps) in [(b'a', 50usize), (b'b', 20), (b'c', 20), (b'd', 5), (b'e', 1)] {
            bytes.extend(std::iter::repeat(byte).take(reps));
        }
        let codes = codes_for(&bytes);

        let assigned: Vec<&[bool]> =
            (0..ALPHABET_SIZE as u16).filter_map(|s| codes.code(s)).collect();
        assert!(assigned.len() >= 2);

        for (i, a) in assigned.iter().enumerate() {
            for (j, b) in assigned.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_every_present_symbol_has_a_code() {
        let bytes: Vec<u8> = (0..=255).collect();
        let codes = codes_for(&bytes);

        for symbol in 0..ALPHABET_SIZE as u16 {
            assert!(codes.code(symbol).is_some(), "symbol {} missing a code", symbol);
        }
    }
}
