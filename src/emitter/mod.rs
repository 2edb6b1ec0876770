//! A `Target` that writes each opcode's semantics out as straight-line source text,
//! plus the dispatch tables an interpreter needs to call them.

use std::{fmt, mem};

use crate::{decoder::CB_PREFIX, errors::OpcodeSlot};

mod impl_target;
mod render;

/// Handle to a temporary inside the handler being emitted. Renders as `tN`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Temp(usize);

impl Temp {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Names used in the generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Type the handlers are implemented on.
    pub cpu_type: String,
    pub handlers_trait: String,
    pub tables_type: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            cpu_type: "Cpu".to_owned(),
            handlers_trait: "OpcodeHandlers".to_owned(),
            tables_type: "DispatchTables".to_owned(),
        }
    }
}

/// One finished opcode handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub slot: OpcodeSlot,
    pub body: Vec<String>,
    pub writes_pc: bool,
    /// Instruction length in bytes, when the table reported it.
    pub length: Option<u8>,
}

impl Handler {
    fn undefined(slot: OpcodeSlot) -> Self {
        Self {
            slot,
            body: vec!["self.undefined_opcode();".to_owned()],
            writes_pc: false,
            length: None,
        }
    }

    /// `opcode_xx` for primary slots, `opcode_xxyy` for secondary ones.
    pub fn name(&self) -> String {
        match self.slot {
            OpcodeSlot::Primary(opcode) => format!("opcode_{:02x}", opcode),
            OpcodeSlot::Secondary(first, second) => format!("opcode_{:02x}{:02x}", first, second),
        }
    }
}

#[derive(Debug)]
pub struct Artifacts {
    pub declarations: String,
    pub definitions: String,
}

/// Code being built for one opcode.
#[derive(Debug, Default)]
struct Scope {
    lines: Vec<String>,
    next_temp: usize,
    indent: usize,
    writes_pc: bool,
    length: Option<u8>,
}

pub struct Emitter {
    options: EmitterOptions,

    /// Innermost scope. Calls made outside any opcode land in a scope that is dropped.
    current: Scope,
    /// Enclosing scopes; the prefix opcode is still open while the secondary space is built.
    outer: Vec<Scope>,

    primary: Vec<Handler>,
    secondary: Vec<Handler>,
}

impl Emitter {
    pub fn new(options: EmitterOptions) -> Self {
        Self {
            options,
            current: Scope::default(),
            outer: Vec::new(),
            primary: (0..=u8::MAX)
                .map(|opcode| Handler::undefined(OpcodeSlot::Primary(opcode)))
                .collect(),
            secondary: (0..=u8::MAX)
                .map(|opcode| Handler::undefined(OpcodeSlot::Secondary(CB_PREFIX, opcode)))
                .collect(),
        }
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    pub fn primary(&self) -> &[Handler] {
        &self.primary
    }

    pub fn secondary(&self) -> &[Handler] {
        &self.secondary
    }

    fn open_scope(&mut self) {
        let enclosing = mem::take(&mut self.current);
        self.outer.push(enclosing);
    }

    fn close_scope(&mut self, slot: OpcodeSlot) -> Handler {
        let enclosing = self.outer.pop().unwrap_or_default();
        let scope = mem::replace(&mut self.current, enclosing);

        let handler = Handler {
            slot,
            body: scope.lines,
            writes_pc: scope.writes_pc,
            length: scope.length,
        };
        tracing::debug!(
            handler = %handler.name(),
            statements = handler.body.len(),
            writes_pc = handler.writes_pc,
            "emitted handler"
        );
        handler
    }

    fn emit(&mut self, line: impl AsRef<str>) {
        let indent = "    ".repeat(self.current.indent);
        self.current.lines.push(format!("{}{}", indent, line.as_ref()));
    }

    fn temp(&mut self) -> Temp {
        let temp = Temp(self.current.next_temp);
        self.current.next_temp += 1;
        temp
    }

    /// Emits `let tN = expr;` and returns `tN`.
    fn assign(&mut self, expr: impl AsRef<str>) -> Temp {
        let temp = self.temp();
        self.emit(format!("let {} = {};", temp, expr.as_ref()));
        temp
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(EmitterOptions::default())
    }
}
