use crate::{target::Target, Result};

mod impl_families;
mod impl_helper;
mod impl_primary;
mod impl_secondary;
pub mod patterns;

/// Opcode byte that switches to the secondary space.
pub const CB_PREFIX: u8 = 0xCB;

/// The instruction semantics of both opcode spaces, expressed as calls on a `Target`.
pub struct InstructionTable<'a, T: Target> {
    target: &'a mut T,
    secondary_decoded: usize,
}

impl<'a, T: Target> InstructionTable<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target,
            secondary_decoded: 0,
        }
    }

    pub fn target(&mut self) -> &mut T {
        &mut *self.target
    }

    /// Runs one decode pass over every primary opcode. The prefix opcode generates
    /// the whole secondary space from inside its own slot.
    pub fn generate(&mut self) -> Result<()> {
        tracing::info!("generating opcode handlers");

        for first in 0..=u8::MAX {
            tracing::trace!("primary opcode {:#04X}", first);

            self.target.begin_opcode(first);
            self.target.opcode_begins();
            self.primary(first)?;
            self.target.end_opcode(first);
        }

        tracing::info!(
            primary = 256,
            secondary = self.secondary_decoded,
            "generated opcode handlers"
        );
        Ok(())
    }

    pub(crate) fn double_opcode(&mut self, first: u8) {
        self.target.opcode_cb_branching();

        for second in 0..=u8::MAX {
            tracing::trace!("secondary opcode {:#04X} {:#04X}", first, second);

            self.target.begin_double_opcode(first, second);
            self.secondary(first, second);
            self.target.end_double_opcode(first, second);
            self.secondary_decoded += 1;
        }
    }
}

/// Drives `target` through every opcode slot exactly once.
pub fn generate<T: Target>(target: &mut T) -> Result<()> {
    InstructionTable::new(target).generate()
}
