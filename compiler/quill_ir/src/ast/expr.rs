//! Expression nodes.
//!
//! `ExprKind` is `Copy`: children are `ExprId`s and ranges into the arena.
//! Identifier and literal text is not copied out of the source; it is
//! recovered from the node's span (or the span stored in the variant).

use super::operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
use super::ranges::{
    CallArgRange, ComparisonRange, ComprehensionRange, DictEntryRange, FStringPartRange,
    ParamRange,
};
use crate::{Delimiter, ExprId, ExprRange, Span};
use std::fmt;

/// An expression node with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Numeric literal flavour. The digits are the node's span text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    Int,
    Float,
    Imaginary,
}

/// Keyword constants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    None,
    True,
    False,
    Ellipsis,
}

/// Conversion specifier of an f-string field (`!s`, `!r`, `!a`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conversion {
    Str,
    Repr,
    Ascii,
}

impl Conversion {
    /// Parse the single-letter conversion name.
    pub fn from_name(name: &str) -> Option<Conversion> {
        match name {
            "s" => Some(Conversion::Str),
            "r" => Some(Conversion::Repr),
            "a" => Some(Conversion::Ascii),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Conversion::Str => 's',
            Conversion::Repr => 'r',
            Conversion::Ascii => 'a',
        }
    }
}

/// One part of an f-string body or of a field's format spec.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FStringPart {
    /// Raw literal text, escapes and doubled braces unexpanded.
    Literal(Span),
    Field(Field),
}

/// A replacement field: `{expr[=][!conv][:spec]}`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub expr: ExprId,
    /// For `{expr=}` fields: the source text from after `{` through `=`.
    pub debug_text: Option<Span>,
    pub conversion: Option<Conversion>,
    /// Parts after the top-level `:`. `Some(EMPTY)` for `{x:}`.
    pub format_spec: Option<FStringPartRange>,
    /// From `{` through `}`.
    pub span: Span,
}

/// Kind of a call argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallArgKind {
    Positional,
    /// `*args`
    Star,
    /// `**kwargs`
    DoubleStar,
    /// `name=value`; the span is the keyword.
    Keyword(Span),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallArg {
    pub kind: CallArgKind,
    pub value: ExprId,
}

/// Dict display entry. `key: None` is a `**mapping` unpacking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictEntry {
    pub key: Option<ExprId>,
    pub value: ExprId,
}

/// One `op right` link of a comparison chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub op: CmpOp,
    pub right: ExprId,
}

/// `[async] for target in iter [if cond]*`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comprehension {
    pub target: ExprId,
    pub iter: ExprId,
    pub ifs: ExprRange,
    pub is_async: bool,
}

/// Lambda parameter kinds, including the bare `*` and `/` markers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamKind {
    Normal,
    VarArgs,
    KwArgs,
    KeywordOnlyMarker,
    PositionalOnlyMarker,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub kind: ParamKind,
    /// Empty for the `*` and `/` markers.
    pub name: Span,
    pub default: Option<ExprId>,
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Identifier; text is the node span.
    Name,
    Number(NumberKind),
    Constant(Constant),

    /// Ordinary string literal. `body` excludes prefix and quotes.
    Str { delimiter: Delimiter, body: Span },
    /// Interpolated string literal.
    FString {
        delimiter: Delimiter,
        parts: FStringPartRange,
    },
    /// Implicit concatenation of adjacent `Str`/`FString` atoms.
    Concat(ExprRange),

    Attribute { value: ExprId, attr: Span },
    Call { func: ExprId, args: CallArgRange },
    Subscript { value: ExprId, index: ExprId },
    Slice {
        lower: Option<ExprId>,
        upper: Option<ExprId>,
        step: Option<ExprId>,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary { op: UnaryOp, operand: ExprId },
    Bool {
        op: BoolOp,
        left: ExprId,
        right: ExprId,
    },
    Compare {
        left: ExprId,
        comparisons: ComparisonRange,
    },
    IfElse {
        test: ExprId,
        body: ExprId,
        orelse: ExprId,
    },
    Lambda { params: ParamRange, body: ExprId },
    /// `target := value`
    NamedExpr { target: ExprId, value: ExprId },
    Starred(ExprId),
    Yield(Option<ExprId>),
    YieldFrom(ExprId),
    Await(ExprId),

    Tuple(ExprRange),
    List(ExprRange),
    Set(ExprRange),
    Dict(DictEntryRange),
    ListComp {
        elt: ExprId,
        generators: ComprehensionRange,
    },
    SetComp {
        elt: ExprId,
        generators: ComprehensionRange,
    },
    Generator {
        elt: ExprId,
        generators: ComprehensionRange,
    },
    DictComp {
        key: ExprId,
        value: ExprId,
        generators: ComprehensionRange,
    },
}
