use super::*;
use crate::ast::{CallArgKind, ExprKind, FStringPart, NumberKind};
use crate::Span;

fn number(arena: &mut ExprArena, start: u32) -> ExprId {
    arena.alloc_expr(Expr::new(
        ExprKind::Number(NumberKind::Int),
        Span::new(start, start + 1),
    ))
}

#[test]
fn alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let a = number(&mut arena, 0);
    let b = number(&mut arena, 2);
    assert_ne!(a, b);
    assert_eq!(arena.expr_count(), 2);
    assert_eq!(arena.get_expr(b).span, Span::new(2, 3));
}

#[test]
fn expr_lists_are_independent() {
    let mut arena = ExprArena::new();
    let a = number(&mut arena, 0);
    let b = number(&mut arena, 2);
    let first = arena.alloc_expr_list([a, b]);
    let second = arena.alloc_expr_list([b]);
    assert_eq!(arena.get_expr_list(first), &[a, b]);
    assert_eq!(arena.get_expr_list(second), &[b]);
    assert!(arena.get_expr_list(ExprRange::EMPTY).is_empty());
}

#[test]
fn side_tables_round_trip() {
    let mut arena = ExprArena::new();
    let a = number(&mut arena, 0);
    let parts = arena.alloc_fstring_parts([FStringPart::Literal(Span::new(2, 5))]);
    let args = arena.alloc_call_args([CallArg {
        kind: CallArgKind::Star,
        value: a,
    }]);
    assert_eq!(
        arena.get_fstring_parts(parts),
        &[FStringPart::Literal(Span::new(2, 5))]
    );
    assert_eq!(arena.get_call_args(args)[0].kind, CallArgKind::Star);
    assert!(arena.get_fstring_parts(FStringPartRange::EMPTY).is_empty());
}
