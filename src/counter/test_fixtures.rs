//! Shared comment descriptors for the counter tests.

use crate::language::CommentSyntax;

/// `//`, `/* */`
pub fn c_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::c_style(minimum_characters)
}

/// `#` only
pub fn hash_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::with_single_line("#", minimum_characters).unwrap()
}

/// `#` plus triple-quoted blocks whose start and end markers are identical
pub fn python_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::new(
        Some(b"#".as_slice()),
        Some(b"\"\"\"".as_slice()),
        Some(b"\"\"\"".as_slice()),
        minimum_characters,
    )
    .unwrap()
}

/// `<!-- -->` blocks only
pub fn html_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::with_multi_line("<!--", "-->", minimum_characters).unwrap()
}

/// `--` plus `--[[ ]]` blocks that begin with the line marker
pub fn lua_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::new(
        Some(b"--".as_slice()),
        Some(b"--[[".as_slice()),
        Some(b"]]".as_slice()),
        minimum_characters,
    )
    .unwrap()
}

/// `#` plus `#| |#` blocks
pub fn lisp_syntax(minimum_characters: usize) -> CommentSyntax {
    CommentSyntax::new(
        Some(b"#".as_slice()),
        Some(b"#|".as_slice()),
        Some(b"|#".as_slice()),
        minimum_characters,
    )
    .unwrap()
}

/// Every fixture above, so property tests can pick one by index.
pub fn all_syntaxes(minimum_characters: usize) -> [CommentSyntax; 6] {
    [
        c_syntax(minimum_characters),
        hash_syntax(minimum_characters),
        python_syntax(minimum_characters),
        html_syntax(minimum_characters),
        lua_syntax(minimum_characters),
        lisp_syntax(minimum_characters),
    ]
}
