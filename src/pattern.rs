/// Matches `opcode` against an 8 character pattern over `0`, `1` and `x`.
///
/// The last character constrains bit 0 and the first constrains bit 7. `x` matches
/// either value.
pub fn matches(opcode: u8, pattern: &str) -> bool {
    assert_eq!(pattern.len(), 8, "bit pattern '{}' must be 8 characters", pattern);

    let mut opcode = opcode;
    for c in pattern.chars().rev() {
        let bit = opcode & 1;
        match c {
            '0' if bit != 0 => return false,
            '1' if bit != 1 => return false,
            '0' | '1' | 'x' => {}
            _ => panic!("invalid character '{}' in bit pattern '{}'", c, pattern),
        }
        opcode >>= 1;
    }

    true
}

/// A bit pattern compiled down to a mask of the literal positions and their values.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct BitPattern {
    pub mask: u8,
    pub value: u8,
}

impl BitPattern {
    pub const fn new(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        if bytes.len() != 8 {
            panic!("bit pattern must be 8 characters");
        }

        let mut mask = 0u8;
        let mut value = 0u8;
        let mut i = 0;
        while i < 8 {
            let bit = 1u8 << (7 - i);
            match bytes[i] {
                b'0' => mask |= bit,
                b'1' => {
                    mask |= bit;
                    value |= bit;
                }
                b'x' => {}
                _ => panic!("bit pattern may only contain '0', '1' and 'x'"),
            }
            i += 1;
        }

        Self { mask, value }
    }

    pub const fn matches(&self, opcode: u8) -> bool {
        opcode & self.mask == self.value
    }
}
