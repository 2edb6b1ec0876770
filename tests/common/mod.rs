#![allow(dead_code)]

use dmgen::{
    decoder::CB_PREFIX,
    flags::{Flag, FlagSetting, FlagSettings},
    types::{ConditionalJumpType, Register16, Register8},
    Carried, InstructionTable, Target,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hooks {
    pub begin_opcode: usize,
    pub end_opcode: usize,
    pub begin_double_opcode: usize,
    pub end_double_opcode: usize,
    pub cb_branching: usize,
    pub opcode_begins: usize,
    pub opcode_ends: usize,
}

/// Evaluates instruction semantics directly against registers and memory.
pub struct Machine {
    pub regs: Registers,
    pub memory: Vec<u8>,
    pub cycles: u32,
    pub ime: bool,
    pub ime_scheduled: bool,
    pub halted: bool,
    pub stopped: bool,
    pub aborted: bool,
    pub require_failed: bool,
    pub last_flags: Option<FlagSettings<u16>>,
    pub hooks: Hooks,
    skipping: bool,
}

pub const PROGRAM_START: u16 = 0x0100;

impl Machine {
    pub fn new() -> Self {
        Self {
            regs: Registers {
                sp: 0xFFFE,
                pc: PROGRAM_START,
                ..Default::default()
            },
            memory: vec![0; 0x10000],
            cycles: 0,
            ime: false,
            ime_scheduled: false,
            halted: false,
            stopped: false,
            aborted: false,
            require_failed: false,
            last_flags: None,
            hooks: Hooks::default(),
            skipping: false,
        }
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.memory[addr.wrapping_add(i as u16) as usize] = *byte;
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.regs.f & (1 << flag.bit()) != 0
    }

    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        if on {
            self.regs.f |= 1 << flag.bit();
        } else {
            self.regs.f &= !(1 << flag.bit());
        }
    }

    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.regs.h, self.regs.l])
    }

    pub fn set_hl(&mut self, value: u16) {
        [self.regs.h, self.regs.l] = value.to_be_bytes();
    }

    /// Forgets any short-circuit from the previous instruction.
    pub fn begin_instruction(&mut self) {
        self.skipping = false;
        self.last_flags = None;
    }

    /// Executes the instruction at PC.
    pub fn step(&mut self) {
        self.begin_instruction();

        let opcode = self.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        if opcode == CB_PREFIX {
            let second = self.read(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
            InstructionTable::new(self).secondary(opcode, second);
        } else {
            self.opcode_begins();
            InstructionTable::new(self)
                .primary(opcode)
                .expect("primary opcode space is total");
        }
    }

    fn carry_in(&self) -> u16 {
        self.flag(Flag::Carry) as u16
    }

    fn apply(&self, flag: Flag, setting: &FlagSetting<u16>) -> bool {
        match setting {
            FlagSetting::Reset => false,
            FlagSetting::Set => true,
            FlagSetting::Keep => self.flag(flag),
            FlagSetting::Flip => !self.flag(flag),
            FlagSetting::IfZero(value) => *value == 0,
            FlagSetting::IfNonZero(value) => *value != 0,
        }
    }
}

/// Loads `program` at the start address, lets `setup` prepare state, and runs one instruction.
pub fn run(program: &[u8], setup: impl FnOnce(&mut Machine)) -> Machine {
    let mut machine = Machine::new();
    machine.load(PROGRAM_START, program);
    setup(&mut machine);
    machine.step();
    machine
}

fn carried(value: u16, half_carry: bool, carry: bool) -> Carried<u16> {
    Carried::new(value, half_carry as u16, carry as u16)
}

impl Target for Machine {
    type Value = u16;

    fn begin_opcode(&mut self, _opcode: u8) {
        self.hooks.begin_opcode += 1;
        self.begin_instruction();
    }

    fn end_opcode(&mut self, _opcode: u8) {
        self.hooks.end_opcode += 1;
    }

    fn begin_double_opcode(&mut self, _first: u8, _second: u8) {
        self.hooks.begin_double_opcode += 1;
        self.begin_instruction();
    }

    fn end_double_opcode(&mut self, _first: u8, _second: u8) {
        self.hooks.end_double_opcode += 1;
    }

    fn opcode_cb_branching(&mut self) {
        self.hooks.cb_branching += 1;
    }

    fn opcode_begins(&mut self) {
        self.hooks.opcode_begins += 1;
    }

    fn opcode_ends(&mut self, _extra_bytes: u8) {
        self.hooks.opcode_ends += 1;
    }

    fn load_pc8(&mut self) -> u16 {
        let value = self.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value as u16
    }

    fn load_pc16(&mut self) -> u16 {
        let value = self.read_word(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    fn get_r8(&mut self, reg: Register8) -> u16 {
        (match reg {
            Register8::B => self.regs.b,
            Register8::C => self.regs.c,
            Register8::D => self.regs.d,
            Register8::E => self.regs.e,
            Register8::H => self.regs.h,
            Register8::L => self.regs.l,
            Register8::A => self.regs.a,
            Register8::None => panic!("get_r8 called with (HL)"),
        }) as u16
    }

    fn get_r16(&mut self, reg: Register16) -> u16 {
        match reg {
            Register16::AF => u16::from_be_bytes([self.regs.a, self.regs.f]),
            Register16::BC => u16::from_be_bytes([self.regs.b, self.regs.c]),
            Register16::DE => u16::from_be_bytes([self.regs.d, self.regs.e]),
            Register16::HL => self.hl(),
            Register16::SP => self.regs.sp,
            Register16::PC => self.regs.pc,
        }
    }

    fn write_r8(&mut self, reg: Register8, value: u16) {
        if self.skipping {
            return;
        }
        let value = value as u8;
        match reg {
            Register8::B => self.regs.b = value,
            Register8::C => self.regs.c = value,
            Register8::D => self.regs.d = value,
            Register8::E => self.regs.e = value,
            Register8::H => self.regs.h = value,
            Register8::L => self.regs.l = value,
            Register8::A => self.regs.a = value,
            Register8::None => panic!("write_r8 called with (HL)"),
        }
    }

    fn write_r16(&mut self, reg: Register16, value: u16) {
        if self.skipping {
            return;
        }
        let [high, low] = value.to_be_bytes();
        match reg {
            Register16::AF => {
                self.regs.a = high;
                self.regs.f = low & 0xF0;
            }
            Register16::BC => [self.regs.b, self.regs.c] = [high, low],
            Register16::DE => [self.regs.d, self.regs.e] = [high, low],
            Register16::HL => self.set_hl(value),
            Register16::SP => self.regs.sp = value,
            Register16::PC => self.regs.pc = value,
        }
    }

    fn load_mem8(&mut self, addr: u16) -> u16 {
        self.read(addr) as u16
    }

    fn load_mem16(&mut self, addr: u16) -> u16 {
        self.read_word(addr)
    }

    fn store_mem8(&mut self, addr: u16, value: u16) {
        if self.skipping {
            return;
        }
        self.write(addr, value as u8);
    }

    fn store_mem16(&mut self, addr: u16, value: u16) {
        if self.skipping {
            return;
        }
        let [low, high] = value.to_le_bytes();
        self.write(addr, low);
        self.write(addr.wrapping_add(1), high);
    }

    fn load_hl8(&mut self) -> u16 {
        self.read(self.hl()) as u16
    }

    fn store_hl8(&mut self, value: u16) {
        let hl = self.hl();
        self.store_mem8(hl, value);
    }

    fn load_io(&mut self, port: u16) -> u16 {
        self.read(0xFF00 | (port & 0xFF)) as u16
    }

    fn store_io(&mut self, port: u16, value: u16) {
        self.store_mem8(0xFF00 | (port & 0xFF), value);
    }

    fn add8(&mut self, a: u16, b: u16) -> Carried<u16> {
        let sum = a + b;
        carried(sum & 0xFF, (a & 0xF) + (b & 0xF) > 0xF, sum > 0xFF)
    }

    fn sub8(&mut self, a: u16, b: u16) -> Carried<u16> {
        carried(a.wrapping_sub(b) & 0xFF, (a & 0xF) < (b & 0xF), a < b)
    }

    fn add8_carry(&mut self, a: u16, b: u16) -> Carried<u16> {
        let c = self.carry_in();
        let sum = a + b + c;
        carried(sum & 0xFF, (a & 0xF) + (b & 0xF) + c > 0xF, sum > 0xFF)
    }

    fn sub8_carry(&mut self, a: u16, b: u16) -> Carried<u16> {
        let c = self.carry_in();
        carried(
            a.wrapping_sub(b).wrapping_sub(c) & 0xFF,
            (a & 0xF) < (b & 0xF) + c,
            a < b + c,
        )
    }

    fn cmp8(&mut self, a: u16, b: u16) -> Carried<u16> {
        self.sub8(a, b)
    }

    fn add16(&mut self, a: u16, b: u16) -> Carried<u16> {
        carried(
            a.wrapping_add(b),
            (a & 0xF) + (b & 0xF) > 0xF,
            (a & 0xFF) + (b & 0xFF) > 0xFF,
        )
    }

    fn add16_using_carry_modulo_16(&mut self, a: u16, b: u16) -> Carried<u16> {
        carried(
            a.wrapping_add(b),
            (a & 0xFFF) + (b & 0xFFF) > 0xFFF,
            a as u32 + b as u32 > 0xFFFF,
        )
    }

    fn sub16_no_carry(&mut self, a: u16, b: u16) -> u16 {
        a.wrapping_sub(b)
    }

    fn and8(&mut self, a: u16, b: u16) -> u16 {
        a & b
    }

    fn xor8(&mut self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    fn or8(&mut self, a: u16, b: u16) -> u16 {
        a | b
    }

    fn bitwise_not(&mut self, value: u16) -> u16 {
        !value & 0xFF
    }

    fn plus_1(&mut self, value: u16) -> u16 {
        value.wrapping_add(1)
    }

    fn minus_1(&mut self, value: u16) -> u16 {
        value.wrapping_sub(1)
    }

    fn set_flags(&mut self, flags: FlagSettings<u16>) {
        if self.skipping {
            return;
        }
        let next = flags
            .iter()
            .map(|(flag, setting)| (flag, self.apply(flag, setting)))
            .collect::<Vec<_>>();
        for (flag, on) in next {
            self.set_flag(flag, on);
        }
        self.last_flags = Some(flags);
    }

    fn do_nothing_if(&mut self, cond: u16, cycles: u8, invert: bool) {
        if self.skipping {
            return;
        }
        if (cond != 0) != invert {
            self.cycles += cycles as u32;
            self.skipping = true;
        }
    }

    fn condition_to_value(&mut self, cond: ConditionalJumpType) -> u16 {
        (match cond {
            ConditionalJumpType::NotZero => !self.flag(Flag::Zero),
            ConditionalJumpType::Zero => self.flag(Flag::Zero),
            ConditionalJumpType::NotCarry => !self.flag(Flag::Carry),
            ConditionalJumpType::Carry => self.flag(Flag::Carry),
        }) as u16
    }

    fn require_equals(&mut self, a: u16, b: u16) {
        if a != b {
            self.require_failed = true;
        }
    }

    fn abort(&mut self) {
        self.aborted = true;
    }

    fn rotate8(&mut self, value: u16, left: bool, through_carry: bool) -> u16 {
        let value = value as u8;
        let carry = self.flag(Flag::Carry) as u8;
        (match (left, through_carry) {
            (true, false) => value.rotate_left(1),
            (false, false) => value.rotate_right(1),
            (true, true) => (value << 1) | carry,
            (false, true) => (value >> 1) | (carry << 7),
        }) as u16
    }

    fn shift8_left(&mut self, value: u16) -> u16 {
        (value << 1) & 0xFF
    }

    fn arithmetic_shift_right(&mut self, value: u16) -> u16 {
        (value >> 1) | (value & 0x80)
    }

    fn bitwise_shift_right(&mut self, value: u16) -> u16 {
        value >> 1
    }

    fn swap_nibbles(&mut self, value: u16) -> u16 {
        ((value & 0x0F) << 4) | ((value & 0xF0) >> 4)
    }

    fn get_bit(&mut self, value: u16, bit: u8) -> u16 {
        (value >> bit) & 1
    }

    fn set_bit(&mut self, value: u16, bit: u8, on: bool) -> u16 {
        if on {
            value | (1 << bit)
        } else {
            value & !(1 << bit)
        }
    }

    fn perform_decimal_adjustment(&mut self, value: u16) -> (u16, u16) {
        let mut a = value as u8;
        let mut carry = self.flag(Flag::Carry);
        let half_carry = self.flag(Flag::HalfCarry);

        if !self.flag(Flag::Subtract) {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if half_carry || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        } else {
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if half_carry {
                a = a.wrapping_sub(0x06);
            }
        }

        (a as u16, carry as u16)
    }

    fn take_time(&mut self, cycles: u8) {
        if self.skipping {
            return;
        }
        self.cycles += cycles as u32;
    }

    fn noop(&mut self) {}

    fn halt(&mut self) {
        self.halted = true;
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn disable_interrupts(&mut self) {
        if !self.skipping {
            self.ime = false;
        }
    }

    fn enable_interrupts(&mut self) {
        if !self.skipping {
            self.ime = true;
        }
    }

    fn schedule_interrupt_enable(&mut self) {
        self.ime_scheduled = true;
    }

    fn sign_extend8(&mut self, value: u16) -> u16 {
        value as u8 as i8 as i16 as u16
    }

    fn get_imm_value(&mut self, value: u16) -> u16 {
        value
    }
}
