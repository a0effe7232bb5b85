use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use javagen::ast::*;
use javagen::{Config, unparse, unparse_with};

fn name(n: &str) -> Node {
    Node::MemberReference(MemberReference { qualifier: None, member: n.into(), selectors: vec![] })
}

fn lit(v: &str) -> Node {
    Node::Literal(Literal { value: v.into() })
}

fn int(dimensions: usize) -> Type {
    Type::Basic(BasicType { name: "int".into(), dimensions })
}

fn call(qualifier: &str, member: &str, arguments: Vec<Node>) -> Node {
    Node::MethodInvocation(MethodInvocation {
        qualifier: Some(qualifier.into()),
        member: member.into(),
        type_arguments: vec![],
        arguments: Some(arguments),
        selectors: vec![],
    })
}

fn stmt(e: Node) -> Node {
    Node::StatementExpression(StatementExpression { expression: Box::new(e) })
}

fn bin(op: &str, l: Node, r: Node) -> Node {
    Node::BinaryOperation(BinaryOperation { operator: op.into(), operandl: Box::new(l), operandr: Box::new(r) })
}

/// A method summing a matrix, with a loop, an if/else chain and a lambda.
fn worker(index: usize) -> Node {
    let matrix = Node::ArrayInitializer(ArrayInitializer {
        initializers: (0..4)
            .map(|row| {
                Node::ArrayInitializer(ArrayInitializer {
                    initializers: (0..4).map(|col| lit(&(row * 4 + col).to_string())).collect(),
                })
            })
            .collect(),
    });
    let decl = |ty: Type, var: &str, init: Node| {
        Node::LocalVariableDeclaration(LocalVariableDeclaration {
            modifiers: Modifiers::default(),
            annotations: vec![],
            type_: ty,
            declarators: vec![VariableDeclarator { name: var.into(), dimensions: 0, initializer: Some(Box::new(init)) }],
        })
    };
    let add = Node::Assignment(Assignment {
        operator: "+=".into(),
        expressionl: Box::new(name("total")),
        value: Box::new(bin("*", bin("+", name("i"), lit("1")), lit("2"))),
    });
    let loop_ = Node::ForStatement(ForStatement {
        control: ForControl::Classic {
            init: Some(ForInit::Declaration(LocalVariableDeclaration {
                modifiers: Modifiers::default(),
                annotations: vec![],
                type_: int(0),
                declarators: vec![VariableDeclarator { name: "i".into(), dimensions: 0, initializer: Some(Box::new(lit("0"))) }],
            })),
            condition: Some(Box::new(bin("<", name("i"), lit("16")))),
            update: vec![Node::UnaryOperation(UnaryOperation {
                operator: "++".into(),
                operand: Box::new(name("i")),
                postfix: true,
            })],
        },
        body: Box::new(Node::BlockStatement(BlockStatement { statements: vec![stmt(add)] })),
    });
    let check = Node::IfStatement(IfStatement {
        condition: Box::new(bin(">", name("total"), lit("100"))),
        then_statement: Box::new(Node::BlockStatement(BlockStatement {
            statements: vec![stmt(call("log", "warn", vec![name("total")]))],
        })),
        else_statement: Some(Box::new(Node::BlockStatement(BlockStatement {
            statements: vec![stmt(call("log", "info", vec![name("total")]))],
        }))),
    });
    let each = stmt(call(
        "items",
        "forEach",
        vec![Node::LambdaExpression(LambdaExpression {
            parameters: vec![Node::InferredFormalParameter(InferredFormalParameter { name: "x".into() })],
            body: LambdaBody::Expression(Box::new(call("System.out", "println", vec![name("x")]))),
        })],
    ));
    Node::MethodDeclaration(MethodDeclaration {
        name: format!("work{index}"),
        modifiers: ["static", "public"].iter().map(|s| s.to_string()).collect(),
        return_type: Some(int(0)),
        body: Some(vec![
            decl(int(2), "grid", matrix),
            decl(int(0), "total", lit("0")),
            loop_,
            check,
            each,
            Node::ReturnStatement(ReturnStatement { expression: Some(Box::new(name("total"))) }),
        ]),
        ..Default::default()
    })
}

fn unit(methods: usize) -> CompilationUnit {
    CompilationUnit {
        package: Some(PackageDeclaration { name: "bench.gen".into() }),
        imports: vec![Import { path: "java.util".into(), is_static: false, wildcard: true }],
        types: vec![Node::ClassDeclaration(ClassDeclaration {
            name: "Workers".into(),
            modifiers: ["public", "final"].iter().map(|s| s.to_string()).collect(),
            body: (0..methods).map(worker).collect(),
            ..Default::default()
        })],
    }
}

fn bench_unparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("unparse");
    for (label, methods) in [("one_method", 1), ("small_class", 10), ("large_class", 200)] {
        let tree = unit(methods);
        group.bench_function(label, |b| b.iter(|| unparse(black_box(&tree)).unwrap()));
    }
    group.finish();
}

fn bench_indent_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("indent_width");
    let tree = unit(50);
    for width in [2, 4, 8] {
        let config = Config::default().with_indent_width(width);
        group.bench_function(format!("width_{width}"), |b| {
            b.iter(|| unparse_with(black_box(&tree), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unparse, bench_indent_width);
criterion_main!(benches);
