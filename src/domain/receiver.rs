// Receiver domain model
use std::path::PathBuf;

/// A receiver and the log files it produced, in chronological order
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverFileGroup {
    pub name: String,
    pub files: Vec<PathBuf>,
}

impl ReceiverFileGroup {
    pub fn new(name: String, files: Vec<PathBuf>) -> Self {
        Self { name, files }
    }
}
