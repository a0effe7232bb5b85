//! Statements. Each returns whole lines at the current depth.

use super::types::render_type;
use super::{Generator, modifier_prefix};
use crate::ast::{
    BlockStatement, CatchClause, ForControl, ForInit, ForStatement, IfStatement, Node,
    ReturnStatement, StatementExpression, ThrowStatement, TryResource, TryStatement,
    WhileStatement,
};
use crate::error::GenError;
use crate::names;

impl Generator {
    /// A node in statement or member position.
    pub(super) fn statement(&mut self, node: &Node) -> Result<String, GenError> {
        match node {
            n if n.is_expression() => Err(GenError::malformed(
                n.kind(),
                "expression in statement position; wrap it in a StatementExpression",
            )),
            Node::ElementValuePair(_)
            | Node::ArraySelector(_)
            | Node::FormalParameter(_)
            | Node::InferredFormalParameter(_) => {
                Err(GenError::malformed(node.kind(), "not a statement"))
            }
            _ => self.dispatch(node),
        }
    }

    /// `{`, statements one level deeper, `}` at the current depth; `{}` when empty.
    /// No leading indent and no trailing newline.
    pub(super) fn braced(&mut self, statements: &[Node]) -> Result<String, GenError> {
        if statements.is_empty() {
            return Ok("{}".to_string());
        }
        let mut out = String::from("{\n");
        {
            let mut inner = self.nested();
            for s in statements {
                out.push_str(&inner.statement(s)?);
            }
        }
        out.push_str(self.pad());
        out.push('}');
        Ok(out)
    }

    /// Body after a control header. Blocks open on the header line; anything
    /// else goes on the next line one level deeper. The flag says whether the
    /// text ended on a closing brace (and so still needs its newline).
    fn control_body(&mut self, body: &Node) -> Result<(String, bool), GenError> {
        match body {
            Node::BlockStatement(block) => {
                let mut out = String::from(" ");
                out.push_str(&self.braced(&block.statements)?);
                Ok((out, true))
            }
            other => {
                let mut out = String::from("\n");
                let mut inner = self.nested();
                out.push_str(&inner.statement(other)?);
                Ok((out, false))
            }
        }
    }

    pub(super) fn statement_expression(&mut self, s: &StatementExpression) -> Result<String, GenError> {
        let expr = self.expression(&s.expression, 0)?;
        let mut out = String::from(self.pad());
        out.push_str(&expr);
        out.push_str(";\n");
        Ok(out)
    }

    pub(super) fn return_statement(&mut self, s: &ReturnStatement) -> Result<String, GenError> {
        let mut out = String::from(self.pad());
        out.push_str("return");
        if let Some(ref e) = s.expression {
            out.push(' ');
            out.push_str(&self.expression(e, 0)?);
        }
        out.push_str(";\n");
        Ok(out)
    }

    pub(super) fn throw_statement(&mut self, s: &ThrowStatement) -> Result<String, GenError> {
        let expr = self.expression(&s.expression, 0)?;
        Ok(format!("{}throw {expr};\n", self.pad()))
    }

    pub(super) fn block_statement(&mut self, block: &BlockStatement) -> Result<String, GenError> {
        let body = self.braced(&block.statements)?;
        Ok(format!("{}{body}\n", self.pad()))
    }

    pub(super) fn if_statement(&mut self, s: &IfStatement) -> Result<String, GenError> {
        let clause = self.if_clause(s)?;
        Ok(format!("{}{clause}", self.pad()))
    }

    /// `if (...) ...` starting at the keyword, through the end of the chain.
    fn if_clause(&mut self, s: &IfStatement) -> Result<String, GenError> {
        let mut out = String::from("if (");
        out.push_str(&self.expression(&s.condition, 0)?);
        out.push(')');
        let (then, open) = if s.else_statement.is_some() && ends_in_open_if(&s.then_statement) {
            // braces keep our `else` from binding to the inner `if`
            let body = self.braced(std::slice::from_ref(s.then_statement.as_ref()))?;
            (format!(" {body}"), true)
        } else {
            self.control_body(&s.then_statement)?
        };
        out.push_str(&then);

        match s.else_statement.as_deref() {
            None => {
                if open {
                    out.push('\n');
                }
            }
            Some(Node::IfStatement(chained)) => {
                if open {
                    out.push_str(" else ");
                } else {
                    out.push_str(self.pad());
                    out.push_str("else ");
                }
                out.push_str(&self.if_clause(chained)?);
            }
            Some(Node::BlockStatement(block)) => {
                if open {
                    out.push('\n');
                }
                let body = self.braced(&block.statements)?;
                out.push_str(self.pad());
                out.push_str("else ");
                out.push_str(&body);
                out.push('\n');
            }
            Some(other) => {
                if open {
                    out.push('\n');
                }
                out.push_str(self.pad());
                out.push_str("else\n");
                let mut inner = self.nested();
                out.push_str(&inner.statement(other)?);
            }
        }
        Ok(out)
    }

    pub(super) fn while_statement(&mut self, s: &WhileStatement) -> Result<String, GenError> {
        let mut out = String::from(self.pad());
        out.push_str("while (");
        out.push_str(&self.expression(&s.condition, 0)?);
        out.push(')');
        let (body, open) = self.control_body(&s.body)?;
        out.push_str(&body);
        if open {
            out.push('\n');
        }
        Ok(out)
    }

    pub(super) fn for_statement(&mut self, s: &ForStatement) -> Result<String, GenError> {
        let mut out = String::from(self.pad());
        out.push_str("for (");
        out.push_str(&self.for_control(&s.control)?);
        out.push(')');
        let (body, open) = self.control_body(&s.body)?;
        out.push_str(&body);
        if open {
            out.push('\n');
        }
        Ok(out)
    }

    fn for_control(&mut self, control: &ForControl) -> Result<String, GenError> {
        match control {
            ForControl::Classic { init, condition, update } => {
                let mut out = match init {
                    Some(ForInit::Declaration(decl)) => self.local_variable(decl)?,
                    Some(ForInit::Expressions(exprs)) => self.expression_list(exprs)?,
                    None => String::new(),
                };
                out.push(';');
                if let Some(c) = condition {
                    out.push(' ');
                    out.push_str(&self.expression(c, 0)?);
                }
                out.push(';');
                if !update.is_empty() {
                    out.push(' ');
                    out.push_str(&self.expression_list(update)?);
                }
                Ok(out)
            }
            ForControl::Enhanced { var, iterable } => {
                const KIND: &str = "ForStatement";
                let [declarator] = var.declarators.as_slice() else {
                    return Err(GenError::malformed(KIND, "enhanced for needs exactly one variable"));
                };
                if declarator.initializer.is_some() {
                    return Err(GenError::malformed(KIND, "enhanced for variable has an initializer"));
                }
                let name = names::identifier(KIND, &declarator.name)?;
                let mut out = modifier_prefix(&var.modifiers);
                out.push_str(&render_type(&var.type_)?);
                out.push(' ');
                out.push_str(name);
                out.push_str(" : ");
                out.push_str(&self.expression(iterable, 0)?);
                Ok(out)
            }
        }
    }

    pub(super) fn try_statement(&mut self, s: &TryStatement) -> Result<String, GenError> {
        if s.resources.is_empty() && s.catches.is_empty() && s.finally_block.is_none() {
            return Err(GenError::malformed(
                "TryStatement",
                "needs resources, a catch clause or a finally block",
            ));
        }
        let mut out = String::from(self.pad());
        out.push_str("try ");
        if !s.resources.is_empty() {
            out.push('(');
            for (i, r) in s.resources.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(&self.try_resource(r)?);
            }
            out.push_str(") ");
        }
        out.push_str(&self.braced(&s.block)?);
        for c in &s.catches {
            out.push(' ');
            out.push_str(&self.catch_clause(c)?);
        }
        if let Some(ref finally) = s.finally_block {
            out.push_str(" finally ");
            out.push_str(&self.braced(finally)?);
        }
        out.push('\n');
        Ok(out)
    }

    fn try_resource(&mut self, r: &TryResource) -> Result<String, GenError> {
        let name = names::identifier("TryResource", &r.name)?;
        let mut out = modifier_prefix(&r.modifiers);
        out.push_str(&render_type(&r.type_)?);
        out.push(' ');
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(&self.expression(&r.value, 0)?);
        Ok(out)
    }

    /// `catch (A | B e) {...}`, no indent and no newline.
    fn catch_clause(&mut self, c: &CatchClause) -> Result<String, GenError> {
        const KIND: &str = "CatchClause";
        let param = &c.parameter;
        if param.types.is_empty() {
            return Err(GenError::malformed(KIND, "catch parameter has no type"));
        }
        let types = param
            .types
            .iter()
            .map(|t| names::qualified(KIND, t))
            .collect::<Result<Vec<_>, _>>()?;
        let name = names::identifier(KIND, &param.name)?;
        let mut out = String::from("catch (");
        out.push_str(&modifier_prefix(&param.modifiers));
        out.push_str(&types.join(" | "));
        out.push(' ');
        out.push_str(name);
        out.push_str(") ");
        out.push_str(&self.braced(&c.block)?);
        Ok(out)
    }
}

/// True when an unbraced `node` ends in an `if` that has no `else`.
fn ends_in_open_if(node: &Node) -> bool {
    match node {
        Node::IfStatement(s) => match s.else_statement.as_deref() {
            None => true,
            Some(e) => ends_in_open_if(e),
        },
        Node::WhileStatement(s) => ends_in_open_if(&s.body),
        Node::ForStatement(s) => ends_in_open_if(&s.body),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::config::Config;
    use crate::error::GenError;
    use crate::unparse::unparse_node;

    fn lit(v: &str) -> Box<Node> {
        Box::new(Node::Literal(Literal { value: v.to_string() }))
    }

    fn name(n: &str) -> Box<Node> {
        Box::new(Node::MemberReference(MemberReference {
            qualifier: None,
            member: n.to_string(),
            selectors: vec![],
        }))
    }

    fn call(member: &str) -> Node {
        Node::StatementExpression(StatementExpression {
            expression: Box::new(Node::MethodInvocation(MethodInvocation {
                qualifier: None,
                member: member.to_string(),
                type_arguments: vec![],
                arguments: Some(vec![]),
                selectors: vec![],
            })),
        })
    }

    fn block(stmts: Vec<Node>) -> Box<Node> {
        Box::new(Node::BlockStatement(BlockStatement { statements: stmts }))
    }

    fn int_decl(name: &str, init: Option<Box<Node>>) -> LocalVariableDeclaration {
        LocalVariableDeclaration {
            modifiers: Modifiers::default(),
            annotations: vec![],
            type_: Type::Basic(BasicType { name: "int".into(), dimensions: 0 }),
            declarators: vec![VariableDeclarator { name: name.into(), dimensions: 0, initializer: init }],
        }
    }

    fn render(node: Node) -> Result<String, GenError> {
        unparse_node(&node, &Config::default())
    }

    #[test]
    fn if_without_else() {
        let s = Node::IfStatement(IfStatement {
            condition: name("ok"),
            then_statement: block(vec![call("go")]),
            else_statement: None,
        });
        assert_eq!(render(s).unwrap(), "if (ok) {\n    go();\n}\n");
    }

    #[test]
    fn else_if_chain_and_terminal_else() {
        let s = Node::IfStatement(IfStatement {
            condition: name("a"),
            then_statement: block(vec![call("one")]),
            else_statement: Some(Box::new(Node::IfStatement(IfStatement {
                condition: name("b"),
                then_statement: block(vec![call("two")]),
                else_statement: Some(block(vec![call("three")])),
            }))),
        });
        assert_eq!(
            render(s).unwrap(),
            "if (a) {\n    one();\n} else if (b) {\n    two();\n}\nelse {\n    three();\n}\n"
        );
    }

    #[test]
    fn unbraced_branches_go_one_level_deeper() {
        let s = Node::IfStatement(IfStatement {
            condition: name("a"),
            then_statement: Box::new(call("one")),
            else_statement: Some(Box::new(call("two"))),
        });
        assert_eq!(render(s).unwrap(), "if (a)\n    one();\nelse\n    two();\n");
    }

    #[test]
    fn else_stays_with_outer_if() {
        let s = Node::IfStatement(IfStatement {
            condition: name("a"),
            then_statement: Box::new(Node::IfStatement(IfStatement {
                condition: name("b"),
                then_statement: Box::new(call("x")),
                else_statement: None,
            })),
            else_statement: Some(Box::new(call("y"))),
        });
        assert_eq!(render(s).unwrap(), "if (a) {\n    if (b)\n        x();\n}\nelse\n    y();\n");
    }

    #[test]
    fn else_stays_with_outer_if_through_loop() {
        let s = Node::IfStatement(IfStatement {
            condition: name("a"),
            then_statement: Box::new(Node::WhileStatement(WhileStatement {
                condition: name("c"),
                body: Box::new(Node::IfStatement(IfStatement {
                    condition: name("b"),
                    then_statement: Box::new(call("x")),
                    else_statement: None,
                })),
            })),
            else_statement: Some(block(vec![call("y")])),
        });
        assert_eq!(
            render(s).unwrap(),
            "if (a) {\n    while (c)\n        if (b)\n            x();\n}\nelse {\n    y();\n}\n"
        );
    }

    #[test]
    fn closed_inner_if_needs_no_braces() {
        let s = Node::IfStatement(IfStatement {
            condition: name("a"),
            then_statement: Box::new(Node::IfStatement(IfStatement {
                condition: name("b"),
                then_statement: Box::new(call("x")),
                else_statement: Some(Box::new(call("z"))),
            })),
            else_statement: Some(Box::new(call("y"))),
        });
        assert_eq!(
            render(s).unwrap(),
            "if (a)\n    if (b)\n        x();\n    else\n        z();\nelse\n    y();\n"
        );
    }

    #[test]
    fn return_with_and_without_value() {
        let bare = Node::ReturnStatement(ReturnStatement { expression: None });
        assert_eq!(render(bare).unwrap(), "return;\n");
        let value = Node::ReturnStatement(ReturnStatement { expression: Some(lit("21")) });
        assert_eq!(render(value).unwrap(), "return 21;\n");
    }

    #[test]
    fn classic_for_loop() {
        let s = Node::ForStatement(ForStatement {
            control: ForControl::Classic {
                init: Some(ForInit::Declaration(int_decl("i", Some(lit("0"))))),
                condition: Some(Box::new(Node::BinaryOperation(BinaryOperation {
                    operator: "<".into(),
                    operandl: name("i"),
                    operandr: name("n"),
                }))),
                update: vec![Node::UnaryOperation(UnaryOperation {
                    operator: "++".into(),
                    operand: name("i"),
                    postfix: true,
                })],
            },
            body: block(vec![call("tick")]),
        });
        assert_eq!(render(s).unwrap(), "for (int i = 0; i < n; i++) {\n    tick();\n}\n");
    }

    #[test]
    fn infinite_for_loop() {
        let s = Node::ForStatement(ForStatement {
            control: ForControl::Classic { init: None, condition: None, update: vec![] },
            body: block(vec![]),
        });
        assert_eq!(render(s).unwrap(), "for (;;) {}\n");
    }

    #[test]
    fn enhanced_for_loop() {
        let s = Node::ForStatement(ForStatement {
            control: ForControl::Enhanced { var: int_decl("x", None), iterable: name("xs") },
            body: Box::new(call("use")),
        });
        assert_eq!(render(s).unwrap(), "for (int x : xs)\n    use();\n");
    }

    #[test]
    fn while_loop() {
        let s = Node::WhileStatement(WhileStatement {
            condition: lit("true"),
            body: block(vec![call("spin")]),
        });
        assert_eq!(render(s).unwrap(), "while (true) {\n    spin();\n}\n");
    }

    #[test]
    fn try_with_resources_catches_and_finally() {
        let s = Node::TryStatement(TryStatement {
            resources: vec![TryResource {
                modifiers: Modifiers::default(),
                type_: Type::Reference(ReferenceType {
                    name: "Reader".into(),
                    arguments: None,
                    sub_type: None,
                    dimensions: 0,
                }),
                name: "r".into(),
                value: Box::new(Node::MethodInvocation(MethodInvocation {
                    qualifier: None,
                    member: "open".into(),
                    type_arguments: vec![],
                    arguments: Some(vec![]),
                    selectors: vec![],
                })),
            }],
            block: vec![call("read")],
            catches: vec![CatchClause {
                parameter: CatchClauseParameter {
                    modifiers: Modifiers::default(),
                    types: vec!["IOException".into(), "RuntimeException".into()],
                    name: "e".into(),
                },
                block: vec![call("fail")],
            }],
            finally_block: Some(vec![call("close")]),
        });
        assert_eq!(
            render(s).unwrap(),
            "try (Reader r = open()) {\n    read();\n} catch (IOException | RuntimeException e) {\n    fail();\n} finally {\n    close();\n}\n"
        );
    }

    #[test]
    fn bare_try_is_malformed() {
        let s = Node::TryStatement(TryStatement { block: vec![call("x")], ..Default::default() });
        assert!(matches!(render(s), Err(GenError::MalformedNode { kind: "TryStatement", .. })));
    }

    #[test]
    fn expression_in_statement_position_is_malformed() {
        let err = unparse_node(
            &Node::BlockStatement(BlockStatement { statements: vec![Node::Literal(Literal { value: "1".into() })] }),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "Literal");
    }

    #[test]
    fn nested_blocks_indent() {
        let s = Node::BlockStatement(BlockStatement {
            statements: vec![Node::BlockStatement(BlockStatement { statements: vec![call("deep")] })],
        });
        assert_eq!(render(s).unwrap(), "{\n    {\n        deep();\n    }\n}\n");
    }
}
