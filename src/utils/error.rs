use thiserror::Error;

/// Failures when decoding the text forms used at the interface boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Malformed coordinate key: {0:?}")]
    MalformedKey(String),

    #[error("Expected {expected} components in key {key:?}")]
    WrongArity { key: String, expected: usize },

    #[error("Unknown block name: {0}")]
    UnknownBlock(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Hotbar slot {0} out of range")]
    SlotOutOfRange(usize),

    #[error("Not enough {block}: have {have}, need {need}")]
    Insufficient {
        block: String,
        have: u32,
        need: u32,
    },
}
