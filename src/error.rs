/// An error type for slice conversions.
///
/// Raised when the input slice width does not match the field count of the
/// target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthError {
    /// Field count of the target type.
    pub expected: usize,
    /// Length of the input slice.
    pub found: usize,
}

impl core::fmt::Display for WidthError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "input slice width must be {}, found {}",
            self.expected, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WidthError {}
