//! Runtime error types

use stax_spec::Interrupt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("interrupt raised: {0}")]
    Interrupt(#[from] Interrupt),

    #[error("image of {size} bytes exceeds memory capacity of {capacity} bytes")]
    ImageTooLarge { size: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
