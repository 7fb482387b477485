pub mod file_processor;

pub use file_processor::{
    splice_file_with_processor, DefaultFileSplicer, FileSplicer, SpliceOutcome, SpliceRequest,
};
