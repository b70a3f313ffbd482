//! Embedded word lists
//!
//! Default dictionary and sample corpus compiled into the binary at build
//! time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
include!(concat!(env!("OUT_DIR"), "/sample_corpus.rs"));
