use std::fmt;

/// 8-bit operand field, numbered the way the ISA encodes it.
///
/// `None` (6) is not an absent operand: it selects the byte in memory at `HL`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Register8 {
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    None = 6,
    A = 7,
}

impl Register8 {
    pub const ALL: [Register8; 8] = [
        Register8::B,
        Register8::C,
        Register8::D,
        Register8::E,
        Register8::H,
        Register8::L,
        Register8::None,
        Register8::A,
    ];

    /// Decodes the low 3 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    pub const fn is_memory(self) -> bool {
        matches!(self, Register8::None)
    }
}

impl fmt::Display for Register8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Register8::B => "B",
            Register8::C => "C",
            Register8::D => "D",
            Register8::E => "E",
            Register8::H => "H",
            Register8::L => "L",
            Register8::None => "(HL)",
            Register8::A => "A",
        })
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Register16 {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
}

impl fmt::Display for Register16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Register16::AF => "AF",
            Register16::BC => "BC",
            Register16::DE => "DE",
            Register16::HL => "HL",
            Register16::SP => "SP",
            Register16::PC => "PC",
        })
    }
}

/// 2-bit register pair field of `INC rr`, `DEC rr`, `LD rr, d16` and `ADD HL, rr`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Register16A {
    BC = 0,
    DE = 1,
    HL = 2,
    SP = 3,
}

impl Register16A {
    /// Decodes the low 2 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Register16A::BC,
            1 => Register16A::DE,
            2 => Register16A::HL,
            _ => Register16A::SP,
        }
    }
}

impl From<Register16A> for Register16 {
    fn from(value: Register16A) -> Self {
        match value {
            Register16A::BC => Register16::BC,
            Register16A::DE => Register16::DE,
            Register16A::HL => Register16::HL,
            Register16A::SP => Register16::SP,
        }
    }
}

/// 2-bit register pair field of `PUSH` and `POP`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Register16B {
    BC = 0,
    DE = 1,
    HL = 2,
    AF = 3,
}

impl Register16B {
    /// Decodes the low 2 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Register16B::BC,
            1 => Register16B::DE,
            2 => Register16B::HL,
            _ => Register16B::AF,
        }
    }
}

impl From<Register16B> for Register16 {
    fn from(value: Register16B) -> Self {
        match value {
            Register16B::BC => Register16::BC,
            Register16B::DE => Register16::DE,
            Register16B::HL => Register16::HL,
            Register16B::AF => Register16::AF,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum ConditionalJumpType {
    NotZero = 0,
    Zero = 1,
    NotCarry = 2,
    Carry = 3,
}

impl ConditionalJumpType {
    /// Decodes the low 2 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ConditionalJumpType::NotZero,
            1 => ConditionalJumpType::Zero,
            2 => ConditionalJumpType::NotCarry,
            _ => ConditionalJumpType::Carry,
        }
    }
}

impl fmt::Display for ConditionalJumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConditionalJumpType::NotZero => "NZ",
            ConditionalJumpType::Zero => "Z",
            ConditionalJumpType::NotCarry => "NC",
            ConditionalJumpType::Carry => "C",
        })
    }
}

/// Sub-operation of the CB `00xxxxxx` rotate/shift family.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum BitwiseOps {
    RotateLeft = 0,
    RotateRight = 1,
    RotateLeftThroughCarry = 2,
    RotateRightThroughCarry = 3,
    ShiftLeft = 4,
    ArithmeticShiftRight = 5,
    SwapNibbles = 6,
    ShiftRight = 7,
}

impl BitwiseOps {
    /// Decodes the low 3 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => BitwiseOps::RotateLeft,
            1 => BitwiseOps::RotateRight,
            2 => BitwiseOps::RotateLeftThroughCarry,
            3 => BitwiseOps::RotateRightThroughCarry,
            4 => BitwiseOps::ShiftLeft,
            5 => BitwiseOps::ArithmeticShiftRight,
            6 => BitwiseOps::SwapNibbles,
            _ => BitwiseOps::ShiftRight,
        }
    }
}

impl fmt::Display for BitwiseOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitwiseOps::RotateLeft => "RLC",
            BitwiseOps::RotateRight => "RRC",
            BitwiseOps::RotateLeftThroughCarry => "RL",
            BitwiseOps::RotateRightThroughCarry => "RR",
            BitwiseOps::ShiftLeft => "SLA",
            BitwiseOps::ArithmeticShiftRight => "SRA",
            BitwiseOps::SwapNibbles => "SWAP",
            BitwiseOps::ShiftRight => "SRL",
        })
    }
}

/// CB `01`, `10` and `11` families, selected by the top 2 bits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum BitfieldOps {
    BitCheck = 1,
    BitReset = 2,
    BitSet = 3,
}

impl BitfieldOps {
    /// Decodes a 2-bit field. `0` is the rotate/shift family and yields `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0 => None,
            1 => Some(BitfieldOps::BitCheck),
            2 => Some(BitfieldOps::BitReset),
            _ => Some(BitfieldOps::BitSet),
        }
    }
}

impl fmt::Display for BitfieldOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitfieldOps::BitCheck => "BIT",
            BitfieldOps::BitReset => "RES",
            BitfieldOps::BitSet => "SET",
        })
    }
}
