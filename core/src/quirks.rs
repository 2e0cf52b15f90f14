/// What `step` does with a word that decodes to no instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidOpcodePolicy {
    /// Report `InvalidOpcode` and leave the program counter on the bad word.
    #[default]
    Halt,
    /// Step over the word as if it were a no-op.
    Skip,
}

/// How `ADD I, Vx` treats a sum past 0xFFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexOverflow {
    /// Keep I within 12 bits.
    #[default]
    Wrap,
    /// Let I use all 16 bits; memory accesses through I still wrap at 0x1000.
    Grow,
}

/// # Quirks
/// Behaviours that differ between interpreters of this architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quirks {
    pub invalid_opcode: InvalidOpcodePolicy,
    pub index_overflow: IndexOverflow,
}

impl Quirks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invalid_opcode(self, invalid_opcode: InvalidOpcodePolicy) -> Self {
        Quirks {
            invalid_opcode,
            ..self
        }
    }

    pub fn with_index_overflow(self, index_overflow: IndexOverflow) -> Self {
        Quirks {
            index_overflow,
            ..self
        }
    }
}
