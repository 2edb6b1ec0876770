use crate::{
    flags::FlagSettings,
    types::{ConditionalJumpType, Register16, Register8},
};

/// Result of an arithmetic primitive.
///
/// `half_carry` and `carry` are sources whose non-zero-ness is the flag. `None`
/// means the primitive can not carry at all, which resets the flag.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Carried<V> {
    pub value: V,
    pub half_carry: Option<V>,
    pub carry: Option<V>,
}

impl<V> Carried<V> {
    pub fn new(value: V, half_carry: V, carry: V) -> Self {
        Self {
            value,
            half_carry: Some(half_carry),
            carry: Some(carry),
        }
    }
}

/// Everything the instruction table needs from a backend.
///
/// The table never touches storage itself. Every operation that produces a value
/// returns a `Value` handle which only ever flows back into this trait within the
/// same instruction.
pub trait Target {
    type Value: Clone;

    // Generation hooks. Backends that don't structure their output leave these alone.

    fn begin_opcode(&mut self, _opcode: u8) {}
    fn end_opcode(&mut self, _opcode: u8) {}
    fn begin_double_opcode(&mut self, _first: u8, _second: u8) {}
    fn end_double_opcode(&mut self, _first: u8, _second: u8) {}
    /// Emitted once inside the prefix opcode, before the secondary space is generated.
    fn opcode_cb_branching(&mut self) {}
    fn opcode_begins(&mut self) {}
    /// Called once per primary opcode after `extra_bytes` immediates were fetched.
    fn opcode_ends(&mut self, _extra_bytes: u8) {}

    // Immediates. PC must already point past them when it is read afterwards.

    fn load_pc8(&mut self) -> Self::Value;
    fn load_pc16(&mut self) -> Self::Value;

    // Registers. `Register8::None` never reaches these, (HL) goes through `load_hl8`.

    fn get_r8(&mut self, reg: Register8) -> Self::Value;
    fn get_r16(&mut self, reg: Register16) -> Self::Value;
    fn write_r8(&mut self, reg: Register8, value: Self::Value);
    fn write_r16(&mut self, reg: Register16, value: Self::Value);

    // Memory.

    fn load_mem8(&mut self, addr: Self::Value) -> Self::Value;
    fn load_mem16(&mut self, addr: Self::Value) -> Self::Value;
    fn store_mem8(&mut self, addr: Self::Value, value: Self::Value);
    fn store_mem16(&mut self, addr: Self::Value, value: Self::Value);
    fn load_hl8(&mut self) -> Self::Value;
    fn store_hl8(&mut self, value: Self::Value);
    /// Reads `0xFF00 + port`.
    fn load_io(&mut self, port: Self::Value) -> Self::Value;
    fn store_io(&mut self, port: Self::Value, value: Self::Value);

    // Arithmetic.

    fn add8(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    fn sub8(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    fn add8_carry(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    fn sub8_carry(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    fn cmp8(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    /// 16-bit sum with half carry out of bit 3 and carry out of bit 7.
    fn add16(&mut self, a: Self::Value, b: Self::Value) -> Carried<Self::Value>;
    /// 16-bit sum with half carry out of bit 11 and carry out of bit 15.
    fn add16_using_carry_modulo_16(
        &mut self,
        a: Self::Value,
        b: Self::Value,
    ) -> Carried<Self::Value>;
    fn sub16_no_carry(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;
    fn and8(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;
    fn xor8(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;
    fn or8(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;
    fn bitwise_not(&mut self, value: Self::Value) -> Self::Value;
    fn plus_1(&mut self, value: Self::Value) -> Self::Value;
    fn minus_1(&mut self, value: Self::Value) -> Self::Value;

    // Flags.

    fn set_flags(&mut self, flags: FlagSettings<Self::Value>);

    // Control.

    /// If `cond` holds (does not hold when `invert`), the instruction costs `cycles`
    /// and nothing after this call takes effect.
    fn do_nothing_if(&mut self, cond: Self::Value, cycles: u8, invert: bool);
    fn condition_to_value(&mut self, cond: ConditionalJumpType) -> Self::Value;
    fn require_equals(&mut self, a: Self::Value, b: Self::Value);
    /// Undefined opcode trap.
    fn abort(&mut self);

    // Bits and shifts.

    fn rotate8(&mut self, value: Self::Value, left: bool, through_carry: bool) -> Self::Value;
    fn shift8_left(&mut self, value: Self::Value) -> Self::Value;
    fn arithmetic_shift_right(&mut self, value: Self::Value) -> Self::Value;
    fn bitwise_shift_right(&mut self, value: Self::Value) -> Self::Value;
    fn swap_nibbles(&mut self, value: Self::Value) -> Self::Value;
    fn get_bit(&mut self, value: Self::Value, bit: u8) -> Self::Value;
    fn set_bit(&mut self, value: Self::Value, bit: u8, on: bool) -> Self::Value;
    /// BCD correction of A, returning the result and its carry source.
    fn perform_decimal_adjustment(&mut self, value: Self::Value) -> (Self::Value, Self::Value);

    // System.

    fn take_time(&mut self, cycles: u8);
    fn noop(&mut self);
    fn halt(&mut self);
    fn stop(&mut self);
    fn disable_interrupts(&mut self);
    fn enable_interrupts(&mut self);
    /// EI: interrupts come on after the next instruction.
    fn schedule_interrupt_enable(&mut self);
    fn sign_extend8(&mut self, value: Self::Value) -> Self::Value;
    fn get_imm_value(&mut self, value: u16) -> Self::Value;

    // Derived helpers.

    /// SP -= 2, returning the new SP.
    fn dec2_sp(&mut self) -> Self::Value {
        let sp = self.get_r16(Register16::SP);
        let two = self.get_imm_value(2);
        let sp = self.sub16_no_carry(sp, two);
        self.write_r16(Register16::SP, sp.clone());
        sp
    }

    /// SP = old_sp + 2.
    fn inc2_sp(&mut self, old_sp: Self::Value) {
        let two = self.get_imm_value(2);
        let sp = self.add16(old_sp, two);
        self.write_r16(Register16::SP, sp.value);
    }

    fn push_pc(&mut self) {
        let sp = self.dec2_sp();
        let pc = self.get_r16(Register16::PC);
        self.store_mem16(sp, pc);
    }
}
