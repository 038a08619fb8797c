//! S-expression rendering of expression trees.
//!
//! Used by tests and debug logging to compare whole trees at once.
//! Literal text is shown raw, exactly as it appears in the source.

use super::{
    CallArgKind, ComprehensionRange, Constant, ExprKind, FStringPart, FStringPartRange, ParamKind,
};
use crate::{ExprArena, ExprId, ExprRange};
use std::fmt::Write;

impl ExprArena {
    /// Render the tree rooted at `id` as an S-expression.
    pub fn dump(&self, id: ExprId, source: &str) -> String {
        let mut out = String::new();
        Dumper {
            arena: self,
            source,
            out: &mut out,
        }
        .expr(id);
        out
    }
}

struct Dumper<'a> {
    arena: &'a ExprArena,
    source: &'a str,
    out: &'a mut String,
}

impl Dumper<'_> {
    fn expr(&mut self, id: ExprId) {
        let arena = self.arena;
        let expr = *arena.get_expr(id);
        match expr.kind {
            ExprKind::Name | ExprKind::Number(_) => {
                self.out.push_str(expr.span.text(self.source));
            }
            ExprKind::Constant(c) => self.out.push_str(match c {
                Constant::None => "None",
                Constant::True => "True",
                Constant::False => "False",
                Constant::Ellipsis => "...",
            }),
            ExprKind::Str { body, .. } => {
                let _ = write!(self.out, "(str {:?})", body.text(self.source));
            }
            ExprKind::FString { parts, .. } => {
                self.out.push_str("(fstring");
                self.parts(parts);
                self.out.push(')');
            }
            ExprKind::Concat(items) => self.list("concat", items),
            ExprKind::Attribute { value, attr } => {
                self.out.push_str("(. ");
                self.expr(value);
                let _ = write!(self.out, " {})", attr.text(self.source));
            }
            ExprKind::Call { func, args } => {
                self.out.push_str("(call ");
                self.expr(func);
                for arg in arena.get_call_args(args) {
                    self.out.push(' ');
                    match arg.kind {
                        CallArgKind::Positional => self.expr(arg.value),
                        CallArgKind::Star => self.wrap("*", &[arg.value]),
                        CallArgKind::DoubleStar => self.wrap("**", &[arg.value]),
                        CallArgKind::Keyword(name) => {
                            let _ = write!(self.out, "(kw {} ", name.text(self.source));
                            self.expr(arg.value);
                            self.out.push(')');
                        }
                    }
                }
                self.out.push(')');
            }
            ExprKind::Subscript { value, index } => self.wrap("index", &[value, index]),
            ExprKind::Slice { lower, upper, step } => {
                self.out.push_str("(slice");
                for part in [lower, upper, step] {
                    self.out.push(' ');
                    match part {
                        Some(id) => self.expr(id),
                        None => self.out.push('_'),
                    }
                }
                self.out.push(')');
            }
            ExprKind::Binary { op, left, right } => self.wrap(op.as_symbol(), &[left, right]),
            ExprKind::Unary { op, operand } => self.wrap(op.as_symbol(), &[operand]),
            ExprKind::Bool { op, left, right } => self.wrap(op.as_symbol(), &[left, right]),
            ExprKind::Compare { left, comparisons } => {
                self.out.push_str("(cmp ");
                self.expr(left);
                for link in arena.get_comparisons(comparisons) {
                    let _ = write!(self.out, " {} ", link.op.as_symbol());
                    self.expr(link.right);
                }
                self.out.push(')');
            }
            ExprKind::IfElse { test, body, orelse } => self.wrap("if", &[test, body, orelse]),
            ExprKind::Lambda { params, body } => {
                self.out.push_str("(lambda (");
                for (i, param) in arena.get_params(params).iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    let name = param.name.text(self.source);
                    match param.kind {
                        ParamKind::Normal => self.out.push_str(name),
                        ParamKind::VarArgs => {
                            let _ = write!(self.out, "*{name}");
                        }
                        ParamKind::KwArgs => {
                            let _ = write!(self.out, "**{name}");
                        }
                        ParamKind::KeywordOnlyMarker => self.out.push('*'),
                        ParamKind::PositionalOnlyMarker => self.out.push('/'),
                    }
                    if let Some(default) = param.default {
                        self.out.push('=');
                        self.expr(default);
                    }
                }
                self.out.push_str(") ");
                self.expr(body);
                self.out.push(')');
            }
            ExprKind::NamedExpr { target, value } => self.wrap(":=", &[target, value]),
            ExprKind::Starred(value) => self.wrap("*", &[value]),
            ExprKind::Yield(value) => match value {
                Some(value) => self.wrap("yield", &[value]),
                None => self.out.push_str("(yield)"),
            },
            ExprKind::YieldFrom(value) => self.wrap("yield-from", &[value]),
            ExprKind::Await(value) => self.wrap("await", &[value]),
            ExprKind::Tuple(items) => self.list("tuple", items),
            ExprKind::List(items) => self.list("list", items),
            ExprKind::Set(items) => self.list("set", items),
            ExprKind::Dict(entries) => {
                self.out.push_str("(dict");
                for entry in arena.get_dict_entries(entries) {
                    self.out.push(' ');
                    match entry.key {
                        Some(key) => {
                            self.out.push('(');
                            self.expr(key);
                            self.out.push(' ');
                            self.expr(entry.value);
                            self.out.push(')');
                        }
                        None => self.wrap("**", &[entry.value]),
                    }
                }
                self.out.push(')');
            }
            ExprKind::ListComp { elt, generators } => self.comp("listcomp", &[elt], generators),
            ExprKind::SetComp { elt, generators } => self.comp("setcomp", &[elt], generators),
            ExprKind::Generator { elt, generators } => self.comp("genexp", &[elt], generators),
            ExprKind::DictComp {
                key,
                value,
                generators,
            } => self.comp("dictcomp", &[key, value], generators),
        }
    }

    fn wrap(&mut self, head: &str, children: &[ExprId]) {
        let _ = write!(self.out, "({head}");
        for &child in children {
            self.out.push(' ');
            self.expr(child);
        }
        self.out.push(')');
    }

    fn list(&mut self, head: &str, items: ExprRange) {
        let arena = self.arena;
        self.wrap(head, arena.get_expr_list(items));
    }

    fn comp(&mut self, head: &str, elts: &[ExprId], generators: ComprehensionRange) {
        let arena = self.arena;
        let _ = write!(self.out, "({head}");
        for &elt in elts {
            self.out.push(' ');
            self.expr(elt);
        }
        for generator in arena.get_comprehensions(generators) {
            self.out
                .push_str(if generator.is_async { " (async-for " } else { " (for " });
            self.expr(generator.target);
            self.out.push(' ');
            self.expr(generator.iter);
            for &cond in arena.get_expr_list(generator.ifs) {
                self.out.push(' ');
                self.wrap("if", &[cond]);
            }
            self.out.push(')');
        }
        self.out.push(')');
    }

    fn parts(&mut self, parts: FStringPartRange) {
        let arena = self.arena;
        for part in arena.get_fstring_parts(parts) {
            self.out.push(' ');
            match *part {
                FStringPart::Literal(span) => {
                    let _ = write!(self.out, "{:?}", span.text(self.source));
                }
                FStringPart::Field(field) => {
                    self.out.push_str("(field ");
                    self.expr(field.expr);
                    if let Some(debug) = field.debug_text {
                        let _ = write!(self.out, " (debug {:?})", debug.text(self.source));
                    }
                    if let Some(conversion) = field.conversion {
                        let _ = write!(self.out, " !{}", conversion.as_char());
                    }
                    if let Some(spec) = field.format_spec {
                        self.out.push_str(" (spec");
                        self.parts(spec);
                        self.out.push(')');
                    }
                    self.out.push(')');
                }
            }
        }
    }
}
