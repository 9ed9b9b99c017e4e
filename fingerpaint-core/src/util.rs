//! Utility types, used throughout the crate.

/// A float which is non-NaN and non-infinite.
// Because of the preconditions invalidating many bitpatterns, this is not Pod.
#[derive(Copy, Clone, PartialEq, PartialOrd, bytemuck::NoUninit, bytemuck::Zeroable, Debug)]
#[repr(transparent)]
pub struct FiniteF32(f32);
impl FiniteF32 {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        if val.is_finite() {
            Ok(Self(val))
        } else {
            Err(FiniteF32Error::NotFinite)
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for FiniteF32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f32> for FiniteF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<FiniteF32> for f32 {
    fn from(value: FiniteF32) -> Self {
        value.get()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteF32Error {
    #[error("not finite")]
    NotFinite,
    #[error("not greater than zero")]
    NotPositive,
}

// Even though f32 is !Eq, we guarantee that no value is ever NaN
// So PartialEq can act like Eq
impl Eq for FiniteF32 {}
#[allow(clippy::derive_ord_xor_partial_ord)]
impl Ord for FiniteF32 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Never NaN, so never `None`.
        self.partial_cmp(other)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
impl std::hash::Hash for FiniteF32 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.to_bits());
    }
}

/// A finite float strictly greater than zero. Used for stroke widths, where
/// a zero or negative width has no meaning.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct PositiveF32(FiniteF32);
impl PositiveF32 {
    pub const ONE: Self = Self(FiniteF32::ONE);
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        let finite = FiniteF32::new(val)?;
        if finite.get() > 0.0 {
            Ok(Self(finite))
        } else {
            Err(FiniteF32Error::NotPositive)
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0.get()
    }
}
impl TryFrom<f32> for PositiveF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<PositiveF32> for f32 {
    fn from(value: PositiveF32) -> Self {
        value.get()
    }
}
