use crate::pattern::BitPattern;

pub const LD_A_INDIRECT: BitPattern = BitPattern::new("000xx010");
pub const ROTATE_A: BitPattern = BitPattern::new("000xx111");
pub const INC_DEC_R16: BitPattern = BitPattern::new("00xxx011");
pub const LD_R16_IMM: BitPattern = BitPattern::new("00xx0001");
pub const LD_R8_IMM: BitPattern = BitPattern::new("00xxx110");
pub const ADD_HL_R16: BitPattern = BitPattern::new("00xx1001");
pub const INC_DEC_R8: BitPattern = BitPattern::new("00xxx10x");
pub const LD_HL_INC_DEC: BitPattern = BitPattern::new("001xx010");
pub const LD_R8_R8: BitPattern = BitPattern::new("01xxxxxx");
pub const ALU_R8: BitPattern = BitPattern::new("10xxxxxx");
pub const ALU_IMM: BitPattern = BitPattern::new("11xxx110");
pub const PUSH_POP: BitPattern = BitPattern::new("11xx0x01");
pub const RST: BitPattern = BitPattern::new("11xxx111");
pub const RET_CC: BitPattern = BitPattern::new("110xx000");
pub const JP_CC: BitPattern = BitPattern::new("110xx010");
pub const JR_CC: BitPattern = BitPattern::new("001xx000");
pub const CALL_CC: BitPattern = BitPattern::new("110xx100");
pub const LD_IO: BitPattern = BitPattern::new("111x00x0");

/// Every primary family, for checks over the whole table.
pub const FAMILIES: &[(&str, BitPattern)] = &[
    ("ld a, (rr) / ld (rr), a", LD_A_INDIRECT),
    ("rotate a", ROTATE_A),
    ("inc/dec rr", INC_DEC_R16),
    ("ld rr, d16", LD_R16_IMM),
    ("ld r, d8", LD_R8_IMM),
    ("add hl, rr", ADD_HL_R16),
    ("inc/dec r", INC_DEC_R8),
    ("ld (hl+/-)", LD_HL_INC_DEC),
    ("ld r, r", LD_R8_R8),
    ("alu a, r", ALU_R8),
    ("alu a, d8", ALU_IMM),
    ("push/pop", PUSH_POP),
    ("rst", RST),
    ("ret cc", RET_CC),
    ("jp cc", JP_CC),
    ("jr cc", JR_CC),
    ("call cc", CALL_CC),
    ("ldh", LD_IO),
];

/// Opcodes the hardware leaves undefined.
pub const UNDEFINED_OPCODES: &[u8] = &[
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Opcodes handled as single values ahead of the families.
pub const LITERAL_OPCODES: &[u8] = &[
    0x00, 0x08, 0x10, 0x18, 0x27, 0x2F, 0x37, 0x3F, 0x76, 0xC3, 0xC9, 0xCB, 0xCD, 0xD9, 0xE8,
    0xE9, 0xEA, 0xF3, 0xF8, 0xF9, 0xFA, 0xFB,
];
