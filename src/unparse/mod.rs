//! Turn a syntax tree back into Java source text.
//!
//! One formatter per node kind, reached through [`Generator::dispatch`].
//! Statements and declarations come back as whole lines (indent included,
//! trailing newline included); expressions come back bare.
//!
//! Layout rules worth knowing when reading the output:
//! - modifiers are sorted, so `static public` prints as `public static`;
//! - opening braces sit on the header line, closing braces on their own line;
//! - `else if` joins the previous closing brace, a plain `else` starts a new line;
//! - an array initializer goes multi-line as soon as one element is itself
//!   an initializer.

mod decl;
mod expr;
mod state;
mod stmt;
mod types;

use tracing::debug;

use crate::ast::{CompilationUnit, Modifiers, Node};
use crate::config::Config;
use crate::error::GenError;
use state::Indentation;

/// Generate source for a compilation unit with the default [`Config`].
pub fn unparse(unit: &CompilationUnit) -> Result<String, GenError> {
    unparse_with(unit, &Config::default())
}

/// Generate source for a compilation unit.
///
/// Either the full text comes back or an error; nothing partial.
pub fn unparse_with(unit: &CompilationUnit, config: &Config) -> Result<String, GenError> {
    debug!(
        imports = unit.imports.len(),
        types = unit.types.len(),
        "unparsing compilation unit"
    );
    let mut generator = Generator::new(config);
    let out = generator
        .compilation_unit(unit)
        .inspect_err(|e| debug!(error = %e, "unparse failed"))?;
    debug!(bytes = out.len(), "unparsed compilation unit");
    Ok(out)
}

/// Render one node on its own, at depth zero.
pub fn unparse_node(node: &Node, config: &Config) -> Result<String, GenError> {
    Generator::new(config).dispatch(node)
}

/// State for a single generation pass.
pub(crate) struct Generator {
    indent: Indentation,
    emit_documentation: bool,
}

impl Generator {
    pub(crate) fn new(config: &Config) -> Self {
        Generator {
            indent: Indentation::new(config.indent_width),
            emit_documentation: config.emit_documentation,
        }
    }

    /// Indent string for the current depth.
    fn pad(&mut self) -> &str {
        self.indent.current()
    }

    /// Route a node to the formatter for its kind.
    pub(crate) fn dispatch(&mut self, node: &Node) -> Result<String, GenError> {
        match node {
            Node::ClassDeclaration(n) => self.class_declaration(n),
            Node::InterfaceDeclaration(n) => self.interface_declaration(n),
            Node::FieldDeclaration(n) => self.field_declaration(n),
            Node::MethodDeclaration(n) => self.method_declaration(n),
            Node::ConstructorDeclaration(n) => self.constructor_declaration(n),
            Node::LocalVariableDeclaration(n) => self.local_variable_declaration(n),
            Node::FormalParameter(n) => self.formal_parameter(n),
            Node::InferredFormalParameter(n) => {
                crate::names::identifier("InferredFormalParameter", &n.name).map(str::to_string)
            }

            Node::StatementExpression(n) => self.statement_expression(n),
            Node::IfStatement(n) => self.if_statement(n),
            Node::WhileStatement(n) => self.while_statement(n),
            Node::ForStatement(n) => self.for_statement(n),
            Node::ReturnStatement(n) => self.return_statement(n),
            Node::ThrowStatement(n) => self.throw_statement(n),
            Node::BlockStatement(n) => self.block_statement(n),
            Node::TryStatement(n) => self.try_statement(n),

            Node::MethodInvocation(n) => self.method_invocation(n),
            Node::MemberReference(n) => self.member_reference(n),
            Node::This(n) => self.this(n),
            Node::BinaryOperation(n) => self.binary_operation(n),
            Node::UnaryOperation(n) => self.unary_operation(n),
            Node::TernaryExpression(n) => self.ternary_expression(n),
            Node::Literal(n) => expr::literal(n),
            Node::Cast(n) => self.cast(n),
            Node::Assignment(n) => self.assignment(n),
            Node::LambdaExpression(n) => self.lambda_expression(n),
            Node::MethodReference(n) => self.method_reference(n),
            Node::ClassCreator(n) => self.class_creator(n),
            Node::ArrayCreator(n) => self.array_creator(n),
            Node::ArrayInitializer(n) => self.array_initializer(n),
            Node::ArraySelector(n) => self.array_selector(n),
            Node::ClassReference(n) => Ok(format!("{}.class", types::render_type(&n.type_)?)),
            Node::Keyword(n) => expr::keyword(n),
            Node::ElementValuePair(n) => self.element_value_pair(n),

            Node::EnumDeclaration(_)
            | Node::AnnotationDeclaration(_)
            | Node::DoStatement(_)
            | Node::SwitchStatement(_)
            | Node::AssertStatement(_)
            | Node::SynchronizedStatement(_) => {
                debug!(kind = node.kind(), depth = self.indent.depth(), "no formatter registered");
                Err(GenError::unsupported(node.kind()))
            }
        }
    }
}

/// Modifiers in lexicographic order, each followed by a space.
pub(crate) fn modifier_prefix(modifiers: &Modifiers) -> String {
    let mut sorted: Vec<&str> = modifiers.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let mut out = String::new();
    for m in sorted {
        out.push_str(m);
        out.push(' ');
    }
    out
}
