// Utility Module
// Key-file persistence helpers

pub mod keyfile;
