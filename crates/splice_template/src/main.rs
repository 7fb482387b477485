// crates/splice_template/src/main.rs

