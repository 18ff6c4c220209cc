//! Request/response mapping templates.
//!
//! Templates are built as a small [`Vtl`] tree and printed to the opaque string the
//! resolver and function descriptors carry. Printing is pure and never fails.

/// A mapping-template node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vtl {
    /// A reference or expression printed as is, e.g. `$ctx.result`.
    Raw(String),
    /// A quoted string literal.
    Str(String),
    /// A JSON object literal; entries keep their order.
    Obj(Vec<(String, Vtl)>),
    /// `$util.toJson(..)`
    ToJson(Box<Vtl>),
    /// `$util.qr(..)`, evaluates and discards the result.
    Qr(Box<Vtl>),
    /// `target.method(args..)`
    Call {
        target: Box<Vtl>,
        method: String,
        args: Vec<Vtl>,
    },
    /// Statements printed one per line.
    Compound(Vec<Vtl>),
    /// `#if( predicate ) .. #else .. #end`
    IfElse {
        predicate: Box<Vtl>,
        then: Box<Vtl>,
        otherwise: Box<Vtl>,
    },
    /// `$util.error(message, type)`
    Error { message: Box<Vtl>, error_type: Box<Vtl> },
}

pub fn raw(value: impl Into<String>) -> Vtl {
    Vtl::Raw(value.into())
}

pub fn lit(value: impl Into<String>) -> Vtl {
    Vtl::Str(value.into())
}

pub fn obj(entries: Vec<(&str, Vtl)>) -> Vtl {
    Vtl::Obj(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

pub fn to_json(value: Vtl) -> Vtl {
    Vtl::ToJson(Box::new(value))
}

pub fn qr(value: Vtl) -> Vtl {
    Vtl::Qr(Box::new(value))
}

pub fn call(target: Vtl, method: impl Into<String>, args: Vec<Vtl>) -> Vtl {
    Vtl::Call {
        target: Box::new(target),
        method: method.into(),
        args,
    }
}

pub fn compound(statements: Vec<Vtl>) -> Vtl {
    Vtl::Compound(statements)
}

pub fn if_else(predicate: Vtl, then: Vtl, otherwise: Vtl) -> Vtl {
    Vtl::IfElse {
        predicate: Box::new(predicate),
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    }
}

pub fn error(message: Vtl, error_type: Vtl) -> Vtl {
    Vtl::Error {
        message: Box::new(message),
        error_type: Box::new(error_type),
    }
}

/// Render a template tree to text.
pub fn print(node: &Vtl) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Vtl, indent: usize) {
    match node {
        Vtl::Raw(value) => out.push_str(value),
        Vtl::Str(value) => {
            out.push('"');
            for c in value.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(c),
                }
            }
            out.push('"');
        }
        Vtl::Obj(entries) if entries.is_empty() => out.push_str("{}"),
        Vtl::Obj(entries) => {
            out.push_str("{\n");
            for (i, (key, value)) in entries.iter().enumerate() {
                push_indent(out, indent + 1);
                out.push_str(&format!("\"{key}\": "));
                write_node(out, value, indent + 1);
                if i + 1 < entries.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, indent);
            out.push('}');
        }
        Vtl::ToJson(value) => {
            out.push_str("$util.toJson(");
            write_node(out, value, indent);
            out.push(')');
        }
        Vtl::Qr(value) => {
            out.push_str("$util.qr(");
            write_node(out, value, indent);
            out.push(')');
        }
        Vtl::Call {
            target,
            method,
            args,
        } => {
            write_node(out, target, indent);
            out.push('.');
            out.push_str(method);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_node(out, arg, indent);
            }
            out.push(')');
        }
        Vtl::Compound(statements) => {
            for (i, statement) in statements.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                    push_indent(out, indent);
                }
                write_node(out, statement, indent);
            }
        }
        Vtl::IfElse {
            predicate,
            then,
            otherwise,
        } => {
            out.push_str("#if( ");
            write_node(out, predicate, indent);
            out.push_str(" )\n");
            push_indent(out, indent + 1);
            write_node(out, then, indent + 1);
            out.push('\n');
            push_indent(out, indent);
            out.push_str("#else\n");
            push_indent(out, indent + 1);
            write_node(out, otherwise, indent + 1);
            out.push('\n');
            push_indent(out, indent);
            out.push_str("#end");
        }
        Vtl::Error {
            message,
            error_type,
        } => {
            out.push_str("$util.error(");
            write_node(out, message, indent);
            out.push_str(", ");
            write_node(out, error_type, indent);
            out.push(')');
        }
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}
