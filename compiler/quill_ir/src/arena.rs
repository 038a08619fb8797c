//! Arena allocation for the flat AST.
//!
//! All expressions of one parse live in a contiguous `Vec`; child lists and
//! the small side records (f-string parts, call arguments, dict entries, ...)
//! live in their own flattened tables addressed by range types.

use crate::ast::{
    CallArg, CallArgRange, Comparison, ComparisonRange, Comprehension, ComprehensionRange,
    DictEntry, DictEntryRange, Expr, FStringPart, FStringPartRange, Param, ParamRange,
};
use crate::{ExprId, ExprRange};

/// Contiguous storage for all expressions of one parse.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    fstring_parts: Vec<FStringPart>,
    call_args: Vec<CallArg>,
    dict_entries: Vec<DictEntry>,
    comparisons: Vec<Comparison>,
    comprehensions: Vec<Comprehension>,
    params: Vec<Param>,
}

/// Append `items` to `table`, returning the start index and count.
#[track_caller]
fn push_all<T>(table: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> (u32, u16) {
    let start = table.len();
    table.extend(items);
    let len = table.len() - start;
    let Ok(start) = u32::try_from(start) else {
        panic!("arena table exceeds u32::MAX entries");
    };
    let Ok(len) = u16::try_from(len) else {
        panic!("arena list exceeds u16::MAX entries");
    };
    (start, len)
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from the source size
    /// (~1 expression per 8 bytes of expression source).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated / 4),
            fstring_parts: Vec::with_capacity(estimated / 4),
            ..Self::default()
        }
    }

    // ===== Expressions =====

    #[inline]
    #[track_caller]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let (start, _) = push_all(&mut self.exprs, [expr]);
        ExprId::new(start)
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Iterate over every allocated expression.
    pub fn exprs(&self) -> impl Iterator<Item = &Expr> {
        self.exprs.iter()
    }

    // ===== Side tables =====

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let (start, len) = push_all(&mut self.expr_lists, ids);
        ExprRange::new(start, len)
    }

    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    pub fn alloc_fstring_parts(
        &mut self,
        parts: impl IntoIterator<Item = FStringPart>,
    ) -> FStringPartRange {
        let (start, len) = push_all(&mut self.fstring_parts, parts);
        FStringPartRange::new(start, len)
    }

    pub fn get_fstring_parts(&self, range: FStringPartRange) -> &[FStringPart] {
        &self.fstring_parts[range.to_range()]
    }

    pub fn alloc_call_args(&mut self, args: impl IntoIterator<Item = CallArg>) -> CallArgRange {
        let (start, len) = push_all(&mut self.call_args, args);
        CallArgRange::new(start, len)
    }

    pub fn get_call_args(&self, range: CallArgRange) -> &[CallArg] {
        &self.call_args[range.to_range()]
    }

    pub fn alloc_dict_entries(
        &mut self,
        entries: impl IntoIterator<Item = DictEntry>,
    ) -> DictEntryRange {
        let (start, len) = push_all(&mut self.dict_entries, entries);
        DictEntryRange::new(start, len)
    }

    pub fn get_dict_entries(&self, range: DictEntryRange) -> &[DictEntry] {
        &self.dict_entries[range.to_range()]
    }

    pub fn alloc_comparisons(
        &mut self,
        comparisons: impl IntoIterator<Item = Comparison>,
    ) -> ComparisonRange {
        let (start, len) = push_all(&mut self.comparisons, comparisons);
        ComparisonRange::new(start, len)
    }

    pub fn get_comparisons(&self, range: ComparisonRange) -> &[Comparison] {
        &self.comparisons[range.to_range()]
    }

    pub fn alloc_comprehensions(
        &mut self,
        generators: impl IntoIterator<Item = Comprehension>,
    ) -> ComprehensionRange {
        let (start, len) = push_all(&mut self.comprehensions, generators);
        ComprehensionRange::new(start, len)
    }

    pub fn get_comprehensions(&self, range: ComprehensionRange) -> &[Comprehension] {
        &self.comprehensions[range.to_range()]
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let (start, len) = push_all(&mut self.params, params);
        ParamRange::new(start, len)
    }

    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.to_range()]
    }
}

#[cfg(test)]
mod tests;
