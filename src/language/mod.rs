mod syntax;

pub use syntax::{CommentSyntax, MultiLinePair};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
