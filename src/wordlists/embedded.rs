//! Word lists compiled into the binary by the build script

include!(concat!(env!("OUT_DIR"), "/word_lists.rs"));
