mod matcher;
mod scanner;

pub use scanner::{LineCount, LineScanner, count_bytes};

#[cfg(test)]
mod test_fixtures;
