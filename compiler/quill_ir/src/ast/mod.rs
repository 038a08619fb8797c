//! Expression AST.
//!
//! Flat and arena-backed: every node is an [`Expr`] in an
//! [`ExprArena`](crate::ExprArena) and refers to its children by
//! [`ExprId`](crate::ExprId).

mod dump;
mod expr;
mod operators;
mod ranges;

pub use expr::{
    CallArg, CallArgKind, Comparison, Comprehension, Constant, Conversion, DictEntry, Expr,
    ExprKind, FStringPart, Field, NumberKind, Param, ParamKind,
};
pub use operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
pub use ranges::{
    CallArgRange, ComparisonRange, ComprehensionRange, DictEntryRange, FStringPartRange,
    ParamRange,
};
