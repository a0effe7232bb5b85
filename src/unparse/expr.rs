//! Expressions. These never carry indentation or a line terminator of their
//! own; multi-line pieces (lambda blocks, anonymous bodies, nested array
//! initializers) close at the depth of the enclosing statement.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::Generator;
use super::types::{push_dimensions, reference_type, render_type, type_argument, type_argument_list, type_base};
use crate::ast::{
    ArrayCreator, ArrayInitializer, ArraySelector, Assignment, BinaryOperation, Cast, ClassBody,
    ClassCreator, Keyword, LambdaBody, LambdaExpression, Literal, MemberReference,
    MethodInvocation, MethodReference, Node, TernaryExpression, This, Type, UnaryOperation,
};
use crate::error::GenError;
use crate::names;

// Binding strength, loosest first.
const ASSIGNMENT: u8 = 0;
const TERNARY: u8 = 1;
const UNARY: u8 = 12;
const POSTFIX: u8 = 13;
const PRIMARY: u8 = 14;

static BINARY_PRECEDENCE: LazyLock<FxHashMap<&'static str, u8>> = LazyLock::new(|| {
    [
        ("||", 2),
        ("&&", 3),
        ("|", 4),
        ("^", 5),
        ("&", 6),
        ("==", 7),
        ("!=", 7),
        ("<", 8),
        (">", 8),
        ("<=", 8),
        (">=", 8),
        ("instanceof", 8),
        ("<<", 9),
        (">>", 9),
        (">>>", 9),
        ("+", 10),
        ("-", 10),
        ("*", 11),
        ("/", 11),
        ("%", 11),
    ]
    .into_iter()
    .collect()
});

const ASSIGNMENT_OPERATORS: [&str; 12] =
    ["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", ">>>="];
const PREFIX_OPERATORS: [&str; 6] = ["+", "-", "!", "~", "++", "--"];
const POSTFIX_OPERATORS: [&str; 2] = ["++", "--"];

fn precedence(node: &Node) -> u8 {
    match node {
        Node::Assignment(_) | Node::LambdaExpression(_) | Node::MethodReference(_) => ASSIGNMENT,
        Node::TernaryExpression(_) => TERNARY,
        Node::BinaryOperation(b) => {
            BINARY_PRECEDENCE.get(b.operator.as_str()).copied().unwrap_or(PRIMARY)
        }
        Node::UnaryOperation(u) if u.postfix => POSTFIX,
        Node::UnaryOperation(_) | Node::Cast(_) => UNARY,
        _ => PRIMARY,
    }
}

impl Generator {
    /// Render `node` as an operand that must bind at least as tightly as
    /// `min`, adding parentheses when it does not.
    pub(super) fn expression(&mut self, node: &Node, min: u8) -> Result<String, GenError> {
        if !node.is_expression() {
            return Err(GenError::malformed(node.kind(), "expected an expression"));
        }
        let text = self.dispatch(node)?;
        if precedence(node) < min {
            Ok(format!("({text})"))
        } else {
            Ok(text)
        }
    }

    /// `a, b, c`
    pub(super) fn expression_list(&mut self, nodes: &[Node]) -> Result<String, GenError> {
        let mut out = String::new();
        for (i, n) in nodes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.expression(n, ASSIGNMENT)?);
        }
        Ok(out)
    }

    /// Trailing `.member`, `.call()` and `[index]` accessors.
    fn selectors(&mut self, selectors: &[Node]) -> Result<String, GenError> {
        let mut out = String::new();
        for s in selectors {
            match s {
                Node::ArraySelector(a) => out.push_str(&self.array_selector(a)?),
                Node::MemberReference(_) | Node::MethodInvocation(_) | Node::ClassCreator(_) => {
                    out.push('.');
                    out.push_str(&self.dispatch(s)?);
                }
                other => return Err(GenError::malformed(other.kind(), "not a selector")),
            }
        }
        Ok(out)
    }

    pub(super) fn array_selector(&mut self, a: &ArraySelector) -> Result<String, GenError> {
        Ok(format!("[{}]", self.expression(&a.index, ASSIGNMENT)?))
    }

    pub(super) fn method_invocation(&mut self, inv: &MethodInvocation) -> Result<String, GenError> {
        const KIND: &str = "MethodInvocation";
        let member = names::identifier(KIND, &inv.member)?;
        let Some(ref arguments) = inv.arguments else {
            return Err(GenError::malformed(KIND, "argument list is absent"));
        };
        let mut out = qualifier_prefix(KIND, inv.qualifier.as_deref())?;
        if !inv.type_arguments.is_empty() {
            out.push('<');
            out.push_str(&type_argument_list(&inv.type_arguments)?);
            out.push('>');
        }
        out.push_str(member);
        out.push('(');
        out.push_str(&self.expression_list(arguments)?);
        out.push(')');
        out.push_str(&self.selectors(&inv.selectors)?);
        Ok(out)
    }

    pub(super) fn member_reference(&mut self, r: &MemberReference) -> Result<String, GenError> {
        const KIND: &str = "MemberReference";
        let mut out = qualifier_prefix(KIND, r.qualifier.as_deref())?;
        out.push_str(names::identifier(KIND, &r.member)?);
        out.push_str(&self.selectors(&r.selectors)?);
        Ok(out)
    }

    pub(super) fn this(&mut self, t: &This) -> Result<String, GenError> {
        let mut out = String::from("this");
        out.push_str(&self.selectors(&t.selectors)?);
        Ok(out)
    }

    pub(super) fn binary_operation(&mut self, b: &BinaryOperation) -> Result<String, GenError> {
        let Some(&prec) = BINARY_PRECEDENCE.get(b.operator.as_str()) else {
            return Err(GenError::malformed(
                "BinaryOperation",
                format!("unknown operator `{}`", b.operator),
            ));
        };
        let left = self.expression(&b.operandl, prec)?;
        let right = self.expression(&b.operandr, prec + 1)?;
        Ok(format!("{left} {} {right}", b.operator))
    }

    pub(super) fn unary_operation(&mut self, u: &UnaryOperation) -> Result<String, GenError> {
        let op = u.operator.as_str();
        if u.postfix {
            if !POSTFIX_OPERATORS.contains(&op) {
                return Err(GenError::malformed("UnaryOperation", format!("`{op}` is not a postfix operator")));
            }
            let operand = self.expression(&u.operand, POSTFIX)?;
            return Ok(format!("{operand}{op}"));
        }
        if !PREFIX_OPERATORS.contains(&op) {
            return Err(GenError::malformed("UnaryOperation", format!("`{op}` is not a prefix operator")));
        }
        let mut operand = self.expression(&u.operand, UNARY)?;
        // `- -x` must not collapse into `--x`
        if let Some(last) = op.chars().last()
            && matches!(last, '+' | '-')
            && operand.starts_with(last)
        {
            operand = format!("({operand})");
        }
        Ok(format!("{op}{operand}"))
    }

    pub(super) fn ternary_expression(&mut self, t: &TernaryExpression) -> Result<String, GenError> {
        let condition = self.expression(&t.condition, TERNARY + 1)?;
        let if_true = self.expression(&t.if_true, ASSIGNMENT)?;
        let if_false = self.expression(&t.if_false, TERNARY)?;
        Ok(format!("{condition} ? {if_true} : {if_false}"))
    }

    pub(super) fn cast(&mut self, c: &Cast) -> Result<String, GenError> {
        let ty = render_type(&c.type_)?;
        let mut operand = self.expression(&c.expression, UNARY)?;
        // `(T) -x` reads as a subtraction when `T` is not primitive
        if matches!(c.type_, Type::Reference(_)) && operand.starts_with(['+', '-']) {
            operand = format!("({operand})");
        }
        Ok(format!("({ty}) {operand}"))
    }

    pub(super) fn assignment(&mut self, a: &Assignment) -> Result<String, GenError> {
        let op = a.operator.as_str();
        if !ASSIGNMENT_OPERATORS.contains(&op) {
            return Err(GenError::malformed("Assignment", format!("unknown operator `{op}`")));
        }
        let target = self.expression(&a.expressionl, UNARY)?;
        let value = self.expression(&a.value, ASSIGNMENT)?;
        Ok(format!("{target} {op} {value}"))
    }

    /// `(a, b) -> expr` or `(a, b) -> { ... }`.
    pub(super) fn lambda_expression(&mut self, l: &LambdaExpression) -> Result<String, GenError> {
        let mut out = String::from("(");
        for (i, p) in l.parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match p {
                Node::FormalParameter(_) | Node::InferredFormalParameter(_) => {
                    out.push_str(&self.dispatch(p)?);
                }
                other => {
                    return Err(GenError::malformed(other.kind(), "not a lambda parameter"));
                }
            }
        }
        out.push_str(") -> ");
        match l.body {
            LambdaBody::Expression(ref e) => out.push_str(&self.expression(e, ASSIGNMENT)?),
            LambdaBody::Block(ref statements) => out.push_str(&self.braced(statements)?),
        }
        Ok(out)
    }

    /// `Type::method`, `Type::new`, `Type::<A> method`.
    pub(super) fn method_reference(&mut self, r: &MethodReference) -> Result<String, GenError> {
        const KIND: &str = "MethodReference";
        let method = match r.method.as_ref() {
            Node::MemberReference(m) if m.qualifier.is_none() && m.selectors.is_empty() => {
                names::identifier(KIND, &m.member)?
            }
            Node::Keyword(k) if k.value == "new" => "new",
            other => {
                return Err(GenError::malformed(
                    KIND,
                    format!("{} cannot name the referenced method", other.kind()),
                ));
            }
        };
        let mut out = self.expression(&r.expression, POSTFIX)?;
        out.push_str("::");
        for arg in &r.type_arguments {
            out.push('<');
            out.push_str(&type_argument(arg)?);
            out.push('>');
        }
        if !r.type_arguments.is_empty() {
            out.push(' ');
        }
        out.push_str(method);
        Ok(out)
    }

    pub(super) fn class_creator(&mut self, c: &ClassCreator) -> Result<String, GenError> {
        let Some(ref arguments) = c.arguments else {
            return Err(GenError::malformed("ClassCreator", "argument list is absent"));
        };
        let mut out = String::from("new ");
        out.push_str(&reference_type(&c.type_)?);
        out.push('(');
        out.push_str(&self.expression_list(arguments)?);
        out.push(')');
        match c.body {
            None => {}
            Some(ClassBody::Members(ref members)) => {
                out.push_str(" {\n");
                out.push_str(&self.members(members)?);
                out.push_str(self.pad());
                out.push('}');
            }
            Some(ClassBody::Nested(ref blocks)) => {
                out.push_str(" {\n");
                {
                    let mut inner = self.nested();
                    for block in blocks {
                        let text = inner.braced(block)?;
                        out.push_str(inner.pad());
                        out.push_str(&text);
                        out.push('\n');
                    }
                }
                out.push_str(self.pad());
                out.push('}');
            }
        }
        out.push_str(&self.selectors(&c.selectors)?);
        Ok(out)
    }

    pub(super) fn array_creator(&mut self, a: &ArrayCreator) -> Result<String, GenError> {
        if a.dimensions.is_empty() && a.initializer.is_none() {
            return Err(GenError::malformed("ArrayCreator", "neither dimensions nor an initializer"));
        }
        let mut out = String::from("new ");
        out.push_str(&type_base(&a.type_)?);
        for dim in &a.dimensions {
            out.push('[');
            if let Some(size) = dim {
                out.push_str(&self.expression(size, ASSIGNMENT)?);
            }
            out.push(']');
        }
        push_dimensions(&mut out, a.type_.dimensions());
        if let Some(ref init) = a.initializer {
            out.push(' ');
            out.push_str(&self.array_initializer(init)?);
        }
        Ok(out)
    }

    /// Inline `{1, 2, 3}` unless some element is itself an initializer, in
    /// which case every element goes on its own line one level deeper.
    pub(super) fn array_initializer(&mut self, init: &ArrayInitializer) -> Result<String, GenError> {
        let elements = &init.initializers;
        if !elements.iter().any(|e| matches!(e, Node::ArrayInitializer(_))) {
            return Ok(format!("{{{}}}", self.expression_list(elements)?));
        }
        let mut out = String::from("{\n");
        {
            let mut inner = self.nested();
            for (i, e) in elements.iter().enumerate() {
                let text = inner.expression(e, ASSIGNMENT)?;
                out.push_str(inner.pad());
                out.push_str(&text);
                if i + 1 < elements.len() {
                    out.push(',');
                }
                out.push('\n');
            }
        }
        out.push_str(self.pad());
        out.push('}');
        Ok(out)
    }
}

pub(super) fn literal(l: &Literal) -> Result<String, GenError> {
    if l.value.is_empty() {
        return Err(GenError::malformed("Literal", "empty literal"));
    }
    Ok(l.value.clone())
}

pub(super) fn keyword(k: &Keyword) -> Result<String, GenError> {
    if k.value.is_empty() {
        return Err(GenError::malformed("Keyword", "empty keyword"));
    }
    Ok(k.value.clone())
}

/// `Q.` for a present, non-empty qualifier.
fn qualifier_prefix(kind: &'static str, qualifier: Option<&str>) -> Result<String, GenError> {
    match qualifier {
        None | Some("") => Ok(String::new()),
        Some(q) => Ok(format!("{}.", names::qualified(kind, q)?)),
    }
}
