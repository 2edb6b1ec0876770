mod common;

use common::{Machine, PROGRAM_START};
use dmgen::flags::Flag;

#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    a: u8,
    zero: bool,
    subtract: bool,
    half_carry: bool,
    carry: bool,
}

fn execute(machine: &mut Machine, opcode: u8, a: u8, b: u8, carry: bool) -> Outcome {
    machine.regs.pc = PROGRAM_START;
    machine.regs.a = a;
    machine.regs.b = b;
    machine.regs.f = 0;
    machine.set_flag(Flag::Carry, carry);
    machine.load(PROGRAM_START, &[opcode]);
    machine.step();

    Outcome {
        a: machine.regs.a,
        zero: machine.flag(Flag::Zero),
        subtract: machine.flag(Flag::Subtract),
        half_carry: machine.flag(Flag::HalfCarry),
        carry: machine.flag(Flag::Carry),
    }
}

fn add(a: u8, b: u8, carry_in: bool) -> Outcome {
    let c = carry_in as i32;
    let wide = a as i32 + b as i32 + c;
    Outcome {
        a: wide as u8,
        zero: wide as u8 == 0,
        subtract: false,
        half_carry: (a & 0x0F) as i32 + (b & 0x0F) as i32 + c >= 0x10,
        carry: wide >= 0x100,
    }
}

fn sub(a: u8, b: u8, carry_in: bool) -> Outcome {
    let c = carry_in as i32;
    let wide = a as i32 - b as i32 - c;
    Outcome {
        a: wide as u8,
        zero: wide as u8 == 0,
        subtract: true,
        half_carry: (a & 0x0F) as i32 - (b & 0x0F) as i32 - c < 0,
        carry: wide < 0,
    }
}

#[test]
fn register_alu_matches_reference() {
    let mut machine = Machine::new();

    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            for carry in [false, true] {
                // ADD A, B ignores the incoming carry.
                let expected = add(a, b, false);
                assert_eq!(execute(&mut machine, 0x80, a, b, carry), expected, "ADD {a:#04X} {b:#04X}");

                let expected = add(a, b, carry);
                assert_eq!(execute(&mut machine, 0x88, a, b, carry), expected, "ADC {a:#04X} {b:#04X} {carry}");

                let expected = sub(a, b, false);
                assert_eq!(execute(&mut machine, 0x90, a, b, carry), expected, "SUB {a:#04X} {b:#04X}");

                let expected = sub(a, b, carry);
                assert_eq!(execute(&mut machine, 0x98, a, b, carry), expected, "SBC {a:#04X} {b:#04X} {carry}");

                let expected = Outcome { a, ..sub(a, b, false) };
                assert_eq!(execute(&mut machine, 0xB8, a, b, carry), expected, "CP {a:#04X} {b:#04X}");
            }
        }
    }
}

#[test]
fn inc_dec_match_reference_and_keep_carry() {
    let mut machine = Machine::new();

    for a in 0..=u8::MAX {
        for carry in [false, true] {
            let expected = Outcome { carry, ..add(a, 1, false) };
            assert_eq!(execute(&mut machine, 0x3C, a, 0, carry), expected, "INC {a:#04X}");

            let expected = Outcome { carry, ..sub(a, 1, false) };
            assert_eq!(execute(&mut machine, 0x3D, a, 0, carry), expected, "DEC {a:#04X}");
        }
    }
}

#[test]
fn alu_costs() {
    let mut machine = Machine::new();

    for opcode in 0x80..=0xBF {
        let cycles = machine.cycles;
        execute(&mut machine, opcode, 0x12, 0x34, false);
        let expected = if opcode & 0x07 == 6 { 8 } else { 4 };
        assert_eq!(machine.cycles - cycles, expected, "{opcode:#04X}");
    }
}
