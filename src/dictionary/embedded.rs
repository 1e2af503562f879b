//! Embedded word list
//!
//! Compiled into the binary at build time from `data/dictionary.txt`.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
