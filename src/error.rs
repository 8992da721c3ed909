use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopeError {
    /// `offset..offset + size` does not fit inside a rope of `len` characters.
    OutOfRange { offset: usize, size: usize, len: usize },
}

impl RopeError {
    pub(crate) fn check(offset: usize, size: usize, len: usize) -> Result<(), Self> {
        match offset.checked_add(size) {
            Some(end) if end <= len => Ok(()),
            _ => Err(RopeError::OutOfRange { offset, size, len }),
        }
    }
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::OutOfRange { offset, size: 0, len } => {
                write!(f, "offset {} is out of range for rope of length {}", offset, len)
            }
            RopeError::OutOfRange { offset, size, len } => {
                write!(f, "range of {} characters at offset {} is out of range for rope of length {}", size, offset, len)
            }
        }
    }
}

impl error::Error for RopeError {}
