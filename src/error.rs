//! Error type shared by the loop and its collaborators.
//!
//! Variants carry no payload: the device drivers all have their own error
//! types and the loop only needs to know which collaborator failed.

/// Failure of a single loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Reading the mode trigger input failed.
    Trigger,

    /// The climate sensor did not return a reading.
    Sensor,

    /// Writing to the LCD failed.
    Display,
}

pub type Result<T> = core::result::Result<T, Error>;
