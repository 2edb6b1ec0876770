use crate::{
    errors::OpcodeSlot,
    flags::{Flag, FlagSetting, FlagSettings},
    target::{Carried, Target},
    types::{ConditionalJumpType, Register16, Register8},
};

use super::{Emitter, Temp};

fn r8_field(reg: Register8) -> &'static str {
    match reg {
        Register8::B => "b",
        Register8::C => "c",
        Register8::D => "d",
        Register8::E => "e",
        Register8::H => "h",
        Register8::L => "l",
        Register8::A => "a",
        Register8::None => panic!("(HL) operand must go through load_hl8/store_hl8"),
    }
}

fn flag_name(flag: Flag) -> &'static str {
    match flag {
        Flag::Zero => "zero",
        Flag::Subtract => "subtract",
        Flag::HalfCarry => "half_carry",
        Flag::Carry => "carry",
    }
}

impl Emitter {
    /// Emits `let (tN, tN+1, tN+2) = expr;` for a value with two carry sources.
    fn assign_carried(&mut self, expr: String) -> Carried<Temp> {
        let value = self.temp();
        let half_carry = self.temp();
        let carry = self.temp();
        self.emit(format!(
            "let ({}, {}, {}) = {};",
            value, half_carry, carry, expr
        ));
        Carried::new(value, half_carry, carry)
    }
}

impl Target for Emitter {
    type Value = Temp;

    fn begin_opcode(&mut self, _opcode: u8) {
        self.open_scope();
    }

    fn end_opcode(&mut self, opcode: u8) {
        let handler = self.close_scope(OpcodeSlot::Primary(opcode));
        self.primary[opcode as usize] = handler;
    }

    fn begin_double_opcode(&mut self, _first: u8, _second: u8) {
        self.open_scope();
        self.current.length = Some(2);
    }

    fn end_double_opcode(&mut self, first: u8, second: u8) {
        let handler = self.close_scope(OpcodeSlot::Secondary(first, second));
        self.secondary[second as usize] = handler;
    }

    fn opcode_cb_branching(&mut self) {
        let second = self.assign("self.read_pc8()");
        self.emit(format!("self.dispatch_secondary({});", second));
    }

    fn opcode_begins(&mut self) {
        self.current.length = None;
    }

    fn opcode_ends(&mut self, extra_bytes: u8) {
        self.current.length = Some(1 + extra_bytes);
    }

    fn load_pc8(&mut self) -> Temp {
        self.assign("self.read_pc8()")
    }

    fn load_pc16(&mut self) -> Temp {
        self.assign("self.read_pc16()")
    }

    fn get_r8(&mut self, reg: Register8) -> Temp {
        self.assign(format!("self.regs.{}", r8_field(reg)))
    }

    fn get_r16(&mut self, reg: Register16) -> Temp {
        self.assign(match reg {
            Register16::AF => "self.regs.af()",
            Register16::BC => "self.regs.bc()",
            Register16::DE => "self.regs.de()",
            Register16::HL => "self.regs.hl()",
            Register16::SP => "self.regs.sp",
            Register16::PC => "self.regs.pc",
        })
    }

    fn write_r8(&mut self, reg: Register8, value: Temp) {
        self.emit(format!("self.regs.{} = {};", r8_field(reg), value));
    }

    fn write_r16(&mut self, reg: Register16, value: Temp) {
        match reg {
            Register16::AF => self.emit(format!("self.regs.set_af({});", value)),
            Register16::BC => self.emit(format!("self.regs.set_bc({});", value)),
            Register16::DE => self.emit(format!("self.regs.set_de({});", value)),
            Register16::HL => self.emit(format!("self.regs.set_hl({});", value)),
            Register16::SP => self.emit(format!("self.regs.sp = {};", value)),
            Register16::PC => {
                self.current.writes_pc = true;
                self.emit(format!("self.regs.pc = {};", value))
            }
        }
    }

    fn load_mem8(&mut self, addr: Temp) -> Temp {
        self.assign(format!("self.read8({})", addr))
    }

    fn load_mem16(&mut self, addr: Temp) -> Temp {
        self.assign(format!("self.read16({})", addr))
    }

    fn store_mem8(&mut self, addr: Temp, value: Temp) {
        self.emit(format!("self.write8({}, {});", addr, value));
    }

    fn store_mem16(&mut self, addr: Temp, value: Temp) {
        self.emit(format!("self.write16({}, {});", addr, value));
    }

    fn load_hl8(&mut self) -> Temp {
        self.assign("self.read8(self.regs.hl())")
    }

    fn store_hl8(&mut self, value: Temp) {
        self.emit(format!("self.write8(self.regs.hl(), {});", value));
    }

    fn load_io(&mut self, port: Temp) -> Temp {
        self.assign(format!("self.read8(0xFF00 | {} as u16)", port))
    }

    fn store_io(&mut self, port: Temp, value: Temp) {
        self.emit(format!("self.write8(0xFF00 | {} as u16, {});", port, value));
    }

    fn add8(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.add8({}, {})", a, b))
    }

    fn sub8(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.sub8({}, {})", a, b))
    }

    fn add8_carry(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.adc8({}, {})", a, b))
    }

    fn sub8_carry(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.sbc8({}, {})", a, b))
    }

    fn cmp8(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.sub8({}, {})", a, b))
    }

    fn add16(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.add16_low({}, {})", a, b))
    }

    fn add16_using_carry_modulo_16(&mut self, a: Temp, b: Temp) -> Carried<Temp> {
        self.assign_carried(format!("self.add16_high({}, {})", a, b))
    }

    fn sub16_no_carry(&mut self, a: Temp, b: Temp) -> Temp {
        self.assign(format!("{}.wrapping_sub({})", a, b))
    }

    fn and8(&mut self, a: Temp, b: Temp) -> Temp {
        self.assign(format!("{} & {}", a, b))
    }

    fn xor8(&mut self, a: Temp, b: Temp) -> Temp {
        self.assign(format!("{} ^ {}", a, b))
    }

    fn or8(&mut self, a: Temp, b: Temp) -> Temp {
        self.assign(format!("{} | {}", a, b))
    }

    fn bitwise_not(&mut self, value: Temp) -> Temp {
        self.assign(format!("!{}", value))
    }

    fn plus_1(&mut self, value: Temp) -> Temp {
        self.assign(format!("{}.wrapping_add(1)", value))
    }

    fn minus_1(&mut self, value: Temp) -> Temp {
        self.assign(format!("{}.wrapping_sub(1)", value))
    }

    fn set_flags(&mut self, flags: FlagSettings<Temp>) {
        for (flag, setting) in flags.iter() {
            let name = flag_name(flag);
            match setting {
                FlagSetting::Keep => {}
                FlagSetting::Reset => self.emit(format!("self.regs.set_{}(false);", name)),
                FlagSetting::Set => self.emit(format!("self.regs.set_{}(true);", name)),
                FlagSetting::Flip => {
                    self.emit(format!("self.regs.set_{0}(!self.regs.{0}());", name))
                }
                FlagSetting::IfZero(value) => {
                    self.emit(format!("self.regs.set_{}({} == 0);", name, value))
                }
                FlagSetting::IfNonZero(value) => {
                    self.emit(format!("self.regs.set_{}({} != 0);", name, value))
                }
            }
        }
    }

    fn do_nothing_if(&mut self, cond: Temp, cycles: u8, invert: bool) {
        let negate = if invert { "!" } else { "" };
        self.emit(format!("if {}{} {{", negate, cond));
        self.current.indent += 1;
        self.emit(format!("self.take_time({});", cycles));
        self.emit("return;");
        self.current.indent -= 1;
        self.emit("}");
    }

    fn condition_to_value(&mut self, cond: ConditionalJumpType) -> Temp {
        self.assign(match cond {
            ConditionalJumpType::NotZero => "!self.regs.zero()",
            ConditionalJumpType::Zero => "self.regs.zero()",
            ConditionalJumpType::NotCarry => "!self.regs.carry()",
            ConditionalJumpType::Carry => "self.regs.carry()",
        })
    }

    fn require_equals(&mut self, a: Temp, b: Temp) {
        self.emit(format!("self.require_equals({}, {});", a, b));
    }

    fn abort(&mut self) {
        self.emit("self.undefined_opcode();");
    }

    fn rotate8(&mut self, value: Temp, left: bool, through_carry: bool) -> Temp {
        let helper = match (left, through_carry) {
            (true, false) => "rlc8",
            (false, false) => "rrc8",
            (true, true) => "rl8",
            (false, true) => "rr8",
        };
        self.assign(format!("self.{}({})", helper, value))
    }

    fn shift8_left(&mut self, value: Temp) -> Temp {
        self.assign(format!("{} << 1", value))
    }

    fn arithmetic_shift_right(&mut self, value: Temp) -> Temp {
        self.assign(format!("({0} >> 1) | ({0} & 0x80)", value))
    }

    fn bitwise_shift_right(&mut self, value: Temp) -> Temp {
        self.assign(format!("{} >> 1", value))
    }

    fn swap_nibbles(&mut self, value: Temp) -> Temp {
        self.assign(format!("{}.rotate_left(4)", value))
    }

    fn get_bit(&mut self, value: Temp, bit: u8) -> Temp {
        self.assign(format!("({} >> {}) & 1", value, bit))
    }

    fn set_bit(&mut self, value: Temp, bit: u8, on: bool) -> Temp {
        if on {
            self.assign(format!("{} | (1 << {})", value, bit))
        } else {
            self.assign(format!("{} & !(1 << {})", value, bit))
        }
    }

    fn perform_decimal_adjustment(&mut self, value: Temp) -> (Temp, Temp) {
        let result = self.temp();
        let carry = self.temp();
        self.emit(format!("let ({}, {}) = self.daa({});", result, carry, value));
        (result, carry)
    }

    fn take_time(&mut self, cycles: u8) {
        self.emit(format!("self.take_time({});", cycles));
    }

    fn noop(&mut self) {
        self.emit("// nop");
    }

    fn halt(&mut self) {
        self.emit("self.halt();");
    }

    fn stop(&mut self) {
        self.emit("self.stop();");
    }

    fn disable_interrupts(&mut self) {
        self.emit("self.ime = false;");
    }

    fn enable_interrupts(&mut self) {
        self.emit("self.ime = true;");
    }

    fn schedule_interrupt_enable(&mut self) {
        self.emit("self.schedule_ime();");
    }

    fn sign_extend8(&mut self, value: Temp) -> Temp {
        self.assign(format!("{} as i8 as u16", value))
    }

    fn get_imm_value(&mut self, value: u16) -> Temp {
        self.assign(format!("{:#04x}", value))
    }
}
