//! Syntax tree for the Java subset handed over by the parser.
//!
//! The generator only reads these values. Positions that accept several
//! shapes of node hold a [`Node`]; positions with a single possible shape hold
//! the concrete struct directly.

use rustc_hash::FxHashSet;

/// Unordered modifier keywords (`public`, `static`, ...).
pub type Modifiers = FxHashSet<String>;

/// Root of a source file.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub package: Option<PackageDeclaration>,
    pub imports: Vec<Import>,
    pub types: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct PackageDeclaration {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Import {
    pub path: String,
    pub is_static: bool,
    /// `import a.b.*;`
    pub wildcard: bool,
}

/// Every node that can appear where more than one variant is allowed.
#[derive(Debug, Clone)]
pub enum Node {
    // declarations
    ClassDeclaration(ClassDeclaration),
    InterfaceDeclaration(InterfaceDeclaration),
    EnumDeclaration(EnumDeclaration),
    AnnotationDeclaration(AnnotationDeclaration),
    FieldDeclaration(FieldDeclaration),
    MethodDeclaration(MethodDeclaration),
    ConstructorDeclaration(ConstructorDeclaration),
    LocalVariableDeclaration(LocalVariableDeclaration),
    FormalParameter(FormalParameter),
    InferredFormalParameter(InferredFormalParameter),

    // statements
    StatementExpression(StatementExpression),
    IfStatement(IfStatement),
    WhileStatement(WhileStatement),
    DoStatement(DoStatement),
    ForStatement(ForStatement),
    ReturnStatement(ReturnStatement),
    ThrowStatement(ThrowStatement),
    BlockStatement(BlockStatement),
    TryStatement(TryStatement),
    SwitchStatement(SwitchStatement),
    AssertStatement(AssertStatement),
    SynchronizedStatement(SynchronizedStatement),

    // expressions
    MethodInvocation(MethodInvocation),
    MemberReference(MemberReference),
    This(This),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    TernaryExpression(TernaryExpression),
    Literal(Literal),
    Cast(Cast),
    Assignment(Assignment),
    LambdaExpression(LambdaExpression),
    MethodReference(MethodReference),
    ClassCreator(ClassCreator),
    ArrayCreator(ArrayCreator),
    ArrayInitializer(ArrayInitializer),
    ArraySelector(ArraySelector),
    ClassReference(ClassReference),
    Keyword(Keyword),
    ElementValuePair(ElementValuePair),
}

impl Node {
    /// Variant name, as reported in errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::ClassDeclaration(_) => "ClassDeclaration",
            Node::InterfaceDeclaration(_) => "InterfaceDeclaration",
            Node::EnumDeclaration(_) => "EnumDeclaration",
            Node::AnnotationDeclaration(_) => "AnnotationDeclaration",
            Node::FieldDeclaration(_) => "FieldDeclaration",
            Node::MethodDeclaration(_) => "MethodDeclaration",
            Node::ConstructorDeclaration(_) => "ConstructorDeclaration",
            Node::LocalVariableDeclaration(_) => "LocalVariableDeclaration",
            Node::FormalParameter(_) => "FormalParameter",
            Node::InferredFormalParameter(_) => "InferredFormalParameter",
            Node::StatementExpression(_) => "StatementExpression",
            Node::IfStatement(_) => "IfStatement",
            Node::WhileStatement(_) => "WhileStatement",
            Node::DoStatement(_) => "DoStatement",
            Node::ForStatement(_) => "ForStatement",
            Node::ReturnStatement(_) => "ReturnStatement",
            Node::ThrowStatement(_) => "ThrowStatement",
            Node::BlockStatement(_) => "BlockStatement",
            Node::TryStatement(_) => "TryStatement",
            Node::SwitchStatement(_) => "SwitchStatement",
            Node::AssertStatement(_) => "AssertStatement",
            Node::SynchronizedStatement(_) => "SynchronizedStatement",
            Node::MethodInvocation(_) => "MethodInvocation",
            Node::MemberReference(_) => "MemberReference",
            Node::This(_) => "This",
            Node::BinaryOperation(_) => "BinaryOperation",
            Node::UnaryOperation(_) => "UnaryOperation",
            Node::TernaryExpression(_) => "TernaryExpression",
            Node::Literal(_) => "Literal",
            Node::Cast(_) => "Cast",
            Node::Assignment(_) => "Assignment",
            Node::LambdaExpression(_) => "LambdaExpression",
            Node::MethodReference(_) => "MethodReference",
            Node::ClassCreator(_) => "ClassCreator",
            Node::ArrayCreator(_) => "ArrayCreator",
            Node::ArrayInitializer(_) => "ArrayInitializer",
            Node::ArraySelector(_) => "ArraySelector",
            Node::ClassReference(_) => "ClassReference",
            Node::Keyword(_) => "Keyword",
            Node::ElementValuePair(_) => "ElementValuePair",
        }
    }

    /// True for nodes that render as a sub-expression (no indent, no newline).
    #[must_use]
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Node::MethodInvocation(_)
                | Node::MemberReference(_)
                | Node::This(_)
                | Node::BinaryOperation(_)
                | Node::UnaryOperation(_)
                | Node::TernaryExpression(_)
                | Node::Literal(_)
                | Node::Cast(_)
                | Node::Assignment(_)
                | Node::LambdaExpression(_)
                | Node::MethodReference(_)
                | Node::ClassCreator(_)
                | Node::ArrayCreator(_)
                | Node::ArrayInitializer(_)
                | Node::ClassReference(_)
                | Node::Keyword(_)
        )
    }
}

// ── Types ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Type {
    Basic(BasicType),
    Reference(ReferenceType),
}

impl Type {
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self {
            Type::Basic(t) => t.dimensions,
            Type::Reference(t) => t.dimensions,
        }
    }
}

/// Primitive type, possibly an array of it.
#[derive(Debug, Clone)]
pub struct BasicType {
    pub name: String,
    pub dimensions: usize,
}

#[derive(Debug, Clone)]
pub struct ReferenceType {
    pub name: String,
    /// `None` for a raw type, `Some(vec![])` for the diamond `<>`.
    pub arguments: Option<Vec<TypeArgument>>,
    /// `Outer.Inner`: the part after the dot.
    pub sub_type: Option<Box<ReferenceType>>,
    pub dimensions: usize,
}

#[derive(Debug, Clone)]
pub enum TypeArgument {
    Type(Type),
    /// `?`
    Wildcard,
    /// `? extends T`
    Extends(Type),
    /// `? super T`
    Super(Type),
}

/// `T extends A & B` in a generic declaration.
#[derive(Debug, Clone)]
pub struct TypeParameter {
    pub name: String,
    pub extends: Vec<ReferenceType>,
}

// ── Declarations ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Annotation {
    pub name: String,
    pub element: Option<Box<Node>>,
}

#[derive(Debug, Clone, Default)]
pub struct ClassDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<ReferenceType>,
    pub implements: Vec<ReferenceType>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<ReferenceType>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct EnumDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub constants: Vec<String>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_: Type,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, Default)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    /// `None` renders as `void`.
    pub return_type: Option<Type>,
    pub parameters: Vec<FormalParameter>,
    pub throws: Vec<String>,
    /// `None` for an abstract or interface signature.
    pub body: Option<Vec<Node>>,
}

#[derive(Debug, Clone, Default)]
pub struct ConstructorDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<FormalParameter>,
    pub throws: Vec<String>,
    pub body: Option<Vec<Node>>,
}

#[derive(Debug, Clone)]
pub struct FormalParameter {
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub type_: Type,
    pub name: String,
    pub varargs: bool,
}

/// Lambda parameter written without a type.
#[derive(Debug, Clone)]
pub struct InferredFormalParameter {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct LocalVariableDeclaration {
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub type_: Type,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub name: String,
    /// Legacy `int a[]` brackets after the name.
    pub dimensions: usize,
    pub initializer: Option<Box<Node>>,
}

// ── Statements ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StatementExpression {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: Box<Node>,
    pub then_statement: Box<Node>,
    pub else_statement: Option<Box<Node>>,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct DoStatement {
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct ForStatement {
    pub control: ForControl,
    pub body: Box<Node>,
}

#[derive(Debug, Clone)]
pub enum ForControl {
    /// `init; condition; update`
    Classic {
        init: Option<ForInit>,
        condition: Option<Box<Node>>,
        update: Vec<Node>,
    },
    /// `T x : iterable`
    Enhanced {
        var: LocalVariableDeclaration,
        iterable: Box<Node>,
    },
}

#[derive(Debug, Clone)]
pub enum ForInit {
    Declaration(LocalVariableDeclaration),
    Expressions(Vec<Node>),
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub expression: Option<Box<Node>>,
}

#[derive(Debug, Clone)]
pub struct ThrowStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct TryStatement {
    pub resources: Vec<TryResource>,
    pub block: Vec<Node>,
    pub catches: Vec<CatchClause>,
    pub finally_block: Option<Vec<Node>>,
}

#[derive(Debug, Clone)]
pub struct TryResource {
    pub modifiers: Modifiers,
    pub type_: Type,
    pub name: String,
    pub value: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct CatchClause {
    pub parameter: CatchClauseParameter,
    pub block: Vec<Node>,
}

/// `final IOException | RuntimeException e`
#[derive(Debug, Clone)]
pub struct CatchClauseParameter {
    pub modifiers: Modifiers,
    pub types: Vec<String>,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SwitchStatement {
    pub expression: Box<Node>,
    pub cases: Vec<SwitchStatementCase>,
}

#[derive(Debug, Clone)]
pub struct SwitchStatementCase {
    /// Empty for `default:`.
    pub case: Vec<Node>,
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct AssertStatement {
    pub condition: Box<Node>,
    pub value: Option<Box<Node>>,
}

#[derive(Debug, Clone)]
pub struct SynchronizedStatement {
    pub lock: Box<Node>,
    pub block: Vec<Node>,
}

// ── Expressions ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MethodInvocation {
    /// Dotted prefix such as `System.out`.
    pub qualifier: Option<String>,
    pub member: String,
    pub type_arguments: Vec<TypeArgument>,
    /// Required; an invocation without arguments carries `Some(vec![])`.
    pub arguments: Option<Vec<Node>>,
    pub selectors: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct MemberReference {
    pub qualifier: Option<String>,
    pub member: String,
    pub selectors: Vec<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct This {
    pub selectors: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct BinaryOperation {
    pub operator: String,
    pub operandl: Box<Node>,
    pub operandr: Box<Node>,
}

/// `-x`, `!x`, `i++`
#[derive(Debug, Clone)]
pub struct UnaryOperation {
    pub operator: String,
    pub operand: Box<Node>,
    pub postfix: bool,
}

#[derive(Debug, Clone)]
pub struct TernaryExpression {
    pub condition: Box<Node>,
    pub if_true: Box<Node>,
    pub if_false: Box<Node>,
}

/// Literal token text, quotes and suffixes included.
#[derive(Debug, Clone)]
pub struct Literal {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Cast {
    pub type_: Type,
    pub expression: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub operator: String,
    pub expressionl: Box<Node>,
    pub value: Box<Node>,
}

#[derive(Debug, Clone)]
pub struct LambdaExpression {
    /// `FormalParameter` or `InferredFormalParameter` nodes.
    pub parameters: Vec<Node>,
    pub body: LambdaBody,
}

#[derive(Debug, Clone)]
pub enum LambdaBody {
    Expression(Box<Node>),
    Block(Vec<Node>),
}

/// `expression::<T> method`
#[derive(Debug, Clone)]
pub struct MethodReference {
    pub expression: Box<Node>,
    /// A `MemberReference` naming the method, or the `new` keyword.
    pub method: Box<Node>,
    pub type_arguments: Vec<TypeArgument>,
}

#[derive(Debug, Clone)]
pub struct ClassCreator {
    pub type_: ReferenceType,
    pub arguments: Option<Vec<Node>>,
    pub body: Option<ClassBody>,
    pub selectors: Vec<Node>,
}

/// Anonymous class body.
#[derive(Debug, Clone)]
pub enum ClassBody {
    Members(Vec<Node>),
    /// Initializer blocks, each its own brace pair (`new T() {{ ... }}`).
    Nested(Vec<Vec<Node>>),
}

#[derive(Debug, Clone)]
pub struct ArrayCreator {
    pub type_: Type,
    /// One entry per `[]`; `None` for an unsized dimension.
    pub dimensions: Vec<Option<Box<Node>>>,
    pub initializer: Option<ArrayInitializer>,
}

#[derive(Debug, Clone, Default)]
pub struct ArrayInitializer {
    pub initializers: Vec<Node>,
}

/// `[index]` selector.
#[derive(Debug, Clone)]
pub struct ArraySelector {
    pub index: Box<Node>,
}

/// `T.class`
#[derive(Debug, Clone)]
pub struct ClassReference {
    pub type_: Type,
}

/// Bare keyword such as `new` or `super`.
#[derive(Debug, Clone)]
pub struct Keyword {
    pub value: String,
}

/// `name = value` inside an annotation.
#[derive(Debug, Clone)]
pub struct ElementValuePair {
    pub name: String,
    pub value: Box<Node>,
}
