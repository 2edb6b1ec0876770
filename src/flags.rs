/// How one flag changes when an instruction completes.
///
/// `IfZero` and `IfNonZero` carry a value computed earlier in the same instruction.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum FlagSetting<V> {
    Reset,
    Set,
    Keep,
    Flip,
    IfZero(V),
    IfNonZero(V),
}

impl<V> FlagSetting<V> {
    /// Turns a carry source from an arithmetic primitive into a setting. A missing
    /// source means no carry is possible and the flag is reset.
    pub fn from_carry(source: Option<V>) -> Self {
        match source {
            Some(source) => FlagSetting::IfNonZero(source),
            None => FlagSetting::Reset,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            FlagSetting::IfZero(v) | FlagSetting::IfNonZero(v) => Some(v),
            FlagSetting::Reset | FlagSetting::Set | FlagSetting::Keep | FlagSetting::Flip => None,
        }
    }
}

impl<V> From<bool> for FlagSetting<V> {
    fn from(value: bool) -> Self {
        if value {
            FlagSetting::Set
        } else {
            FlagSetting::Reset
        }
    }
}

/// Settings for the four flags, applied together through `Target::set_flags`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FlagSettings<V> {
    pub zero: FlagSetting<V>,
    pub subtract: FlagSetting<V>,
    pub half_carry: FlagSetting<V>,
    pub carry: FlagSetting<V>,
}

impl<V> FlagSettings<V> {
    pub fn new(
        zero: FlagSetting<V>,
        subtract: FlagSetting<V>,
        half_carry: FlagSetting<V>,
        carry: FlagSetting<V>,
    ) -> Self {
        Self {
            zero,
            subtract,
            half_carry,
            carry,
        }
    }

    /// Every flag `Keep`.
    pub fn keep() -> Self {
        Self::new(
            FlagSetting::Keep,
            FlagSetting::Keep,
            FlagSetting::Keep,
            FlagSetting::Keep,
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, &FlagSetting<V>)> {
        [
            (Flag::Zero, &self.zero),
            (Flag::Subtract, &self.subtract),
            (Flag::HalfCarry, &self.half_carry),
            (Flag::Carry, &self.carry),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Flag {
    Zero,
    Subtract,
    HalfCarry,
    Carry,
}

impl Flag {
    /// Bit position inside the F register.
    pub const fn bit(self) -> u8 {
        match self {
            Flag::Zero => 7,
            Flag::Subtract => 6,
            Flag::HalfCarry => 5,
            Flag::Carry => 4,
        }
    }
}
