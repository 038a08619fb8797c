use super::{dump, parse};
use pretty_assertions::assert_eq;
use quill_ir::ast::{ExprKind, NumberKind};
use quill_ir::Span;

#[test]
fn arithmetic_precedence() {
    assert_eq!(dump("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(dump("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(dump("a - b - c"), "(- (- a b) c)");
    assert_eq!(dump("a @ b // c % d"), "(% (// (@ a b) c) d)");
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_prefix() {
    assert_eq!(dump("2 ** 3 ** 4"), "(** 2 (** 3 4))");
    assert_eq!(dump("-2 ** -1"), "(- (** 2 (- 1)))");
    assert_eq!(dump("~x"), "(~ x)");
}

#[test]
fn bitwise_levels() {
    assert_eq!(dump("x | y ^ z & w << 1"), "(| x (^ y (& z (<< w 1))))");
    assert_eq!(dump("a >> b + c"), "(>> a (+ b c))");
}

#[test]
fn comparison_chains_stay_flat() {
    assert_eq!(dump("a < b <= c"), "(cmp a < b <= c)");
    assert_eq!(dump("a not in b is not c"), "(cmp a not in b is not c)");
    assert_eq!(dump("a is b == c"), "(cmp a is b == c)");
}

#[test]
fn boolean_operators() {
    assert_eq!(dump("not a and b or c"), "(or (and (not a) b) c)");
    assert_eq!(dump("not not a"), "(not (not a))");
}

#[test]
fn conditional_expression() {
    assert_eq!(dump("a if b else c"), "(if b a c)");
    assert_eq!(dump("a if b else c if d else e"), "(if b a (if d c e))");
}

#[test]
fn atoms() {
    assert_eq!(dump("None"), "None");
    assert_eq!(dump("..."), "...");
    assert_eq!(dump("1.5 + 2j"), "(+ 1.5 2j)");

    let output = parse("2j");
    assert_eq!(
        output.root_expr().kind,
        ExprKind::Number(NumberKind::Imaginary)
    );
}

#[test]
fn adjacent_strings_concatenate() {
    assert_eq!(dump("'a' \"b\""), r#"(concat (str "a") (str "b"))"#);
    assert_eq!(dump("b'a' b'b'"), r#"(concat (str "a") (str "b"))"#);
    assert_eq!(dump("'''x'''"), r#"(str "x")"#);
}

#[test]
fn trailers() {
    assert_eq!(
        dump("a.b(c, *d, e=f, **g)[1:2, ::3]"),
        "(index (call (. a b) c (* d) (kw e f) (** g)) (tuple (slice 1 2 _) (slice _ _ 3)))"
    );
    assert_eq!(dump("x[1:]"), "(index x (slice 1 _ _))");
    assert_eq!(dump("x[:]"), "(index x (slice _ _ _))");
    assert_eq!(dump("f()()"), "(call (call f))");
}

#[test]
fn tuples_and_groups() {
    assert_eq!(dump("1, 2,"), "(tuple 1 2)");
    assert_eq!(dump("()"), "(tuple)");
    assert_eq!(dump("(x)"), "x");
    assert_eq!(dump("(x,)"), "(tuple x)");
    assert_eq!(dump("*a, b"), "(tuple (* a) b)");
}

#[test]
fn displays() {
    assert_eq!(dump("[*a, b]"), "(list (* a) b)");
    assert_eq!(dump("[]"), "(list)");
    assert_eq!(dump("{}"), "(dict)");
    assert_eq!(dump("{1, *a}"), "(set 1 (* a))");
    assert_eq!(dump("{**a, 'b': 1,}"), r#"(dict (** a) ((str "b") 1))"#);
}

#[test]
fn comprehensions() {
    assert_eq!(
        dump("[x * 2 for x in xs if x if y]"),
        "(listcomp (* x 2) (for x xs (if x) (if y)))"
    );
    assert_eq!(
        dump("{k: v for k, v in items}"),
        "(dictcomp k v (for (tuple k v) items))"
    );
    assert_eq!(dump("{x for x in y}"), "(setcomp x (for x y))");
    assert_eq!(dump("(x for x in y)"), "(genexp x (for x y))");
    assert_eq!(dump("[x async for x in y]"), "(listcomp x (async-for x y))");
    assert_eq!(
        dump("[a for b in c for a in b]"),
        "(listcomp a (for b c) (for a b))"
    );
}

#[test]
fn sole_generator_argument_needs_no_parentheses() {
    assert_eq!(dump("f(x for x in y)"), "(call f (genexp x (for x y)))");
}

#[test]
fn lambdas() {
    assert_eq!(dump("lambda: 0"), "(lambda () 0)");
    assert_eq!(
        dump("lambda x, y=1, *a, **k: x"),
        "(lambda (x y=1 *a **k) x)"
    );
    assert_eq!(dump("lambda a, /, *, b: a"), "(lambda (a / * b) a)");
}

#[test]
fn named_expressions() {
    assert_eq!(dump("(y := 10)"), "(:= y 10)");
    assert_eq!(dump("[y := 1, 2]"), "(list (:= y 1) 2)");
    assert_eq!(dump("f(x := 1)"), "(call f (:= x 1))");
}

#[test]
fn yield_and_await() {
    assert_eq!(dump("yield"), "(yield)");
    assert_eq!(dump("yield x, y"), "(yield (tuple x y))");
    assert_eq!(dump("(yield from g)"), "(yield-from g)");
    assert_eq!(dump("await f()"), "(await (call f))");
}

#[test]
fn surrounding_newlines_are_ignored() {
    assert_eq!(dump("\n\nx\n\n"), "x");
    assert_eq!(dump("(1 +\n 2)"), "(+ 1 2)");
}

#[test]
fn spans_cover_the_whole_expression() {
    let output = parse("a + f(b)");
    assert_eq!(output.root_expr().span, Span::new(0, 8));

    let output = parse("(x)");
    assert_eq!(output.root_expr().span, Span::new(1, 2));
}

#[test]
fn deep_parentheses_do_not_overflow() {
    let depth = 500;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(dump(&source), "x");
}
