//! Destinations for bound values.

/// A destination for a single bound value.
///
/// Each variant only accepts values of matching specifiers; binding a value
/// to a slot of another variant fails with [`crate::Error::InvalidArgs`].
#[derive(Debug)]
pub enum Slot<'o, 'b> {
    /// Receives the token of a `%s` specifier.
    Str(&'o mut &'b [u8]),
    /// Receives the value of a `%d` or `%i` specifier.
    I32(&'o mut i32),
    /// Receives the value of a `%u`, `%x`, `%o` or `%b` specifier.
    U32(&'o mut u32),
}

impl<'b> Slot<'_, 'b> {
    /// Borrow this slot again for a shorter lifetime.
    pub fn reborrow(&mut self) -> Slot<'_, 'b> {
        match self {
            Self::Str(s) => Slot::Str(&mut **s),
            Self::I32(s) => Slot::I32(&mut **s),
            Self::U32(s) => Slot::U32(&mut **s),
        }
    }
}

/// A place which can receive a bound value.
pub trait IntoSlot<'b> {
    /// Borrow this place as a slot.
    fn as_slot(&mut self) -> Slot<'_, 'b>;
}

impl<'b> IntoSlot<'b> for u32 {
    fn as_slot(&mut self) -> Slot<'_, 'b> {
        Slot::U32(self)
    }
}

impl<'b> IntoSlot<'b> for i32 {
    fn as_slot(&mut self) -> Slot<'_, 'b> {
        Slot::I32(self)
    }
}

impl<'b> IntoSlot<'b> for &'b [u8] {
    fn as_slot(&mut self) -> Slot<'_, 'b> {
        Slot::Str(self)
    }
}

/// Produce slots for the values bound during a scan.
///
/// Values are numbered from zero in the order they are bound; suppressed
/// specifiers are not numbered.
///
/// This trait is implemented for slices and arrays of `Option<Slot>`, where
/// `None` stands for a missing destination. See the
/// [`FromTokens`](macro@crate::FromTokens) derive macro for an automatic
/// implementation on structs.
pub trait FromTokens<'b> {
    /// Retrieve the slot for the value numbered `index`, if one exists.
    fn slot(&mut self, index: usize) -> Option<Slot<'_, 'b>>;
}

impl<'b> FromTokens<'b> for [Option<Slot<'_, 'b>>] {
    fn slot(&mut self, index: usize) -> Option<Slot<'_, 'b>> {
        self.get_mut(index)?.as_mut().map(Slot::reborrow)
    }
}

impl<'b, const N: usize> FromTokens<'b> for [Option<Slot<'_, 'b>>; N] {
    fn slot(&mut self, index: usize) -> Option<Slot<'_, 'b>> {
        self.as_mut_slice().slot(index)
    }
}
