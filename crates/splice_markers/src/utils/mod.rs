pub mod atomic_write;
pub mod marker_utils;
