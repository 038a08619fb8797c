//! Shared data structures for the quill lexer and parser.
//!
//! - [`Span`] and [`LineIndex`]: byte ranges and their line/column positions
//! - [`StringFlags`] and [`Delimiter`]: what opens and closes a string literal
//! - [`Token`], [`TokenKind`], [`TokenList`]: the token stream
//! - [`ExprArena`] and [`ast`]: the flat expression tree
//!
//! Tokens and nodes never own source text; they carry spans into it.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod line_index;
mod span;
mod string_flags;
mod token;

pub use arena::ExprArena;
pub use expr_id::{ExprId, ExprRange};
pub use line_index::{LineCol, LineIndex};
pub use span::Span;
pub use string_flags::{Delimiter, Quote, QuoteSize, StringFlags};
pub use token::{Token, TokenKind, TokenList};

static_assert_size!(ExprId, 4);
