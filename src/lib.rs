//! Java source generation from a syntax tree.
//!
//! ```
//! use javagen::ast::{ClassDeclaration, CompilationUnit, Node};
//!
//! let unit = CompilationUnit {
//!     types: vec![Node::ClassDeclaration(ClassDeclaration {
//!         name: "Empty".into(),
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//! assert_eq!(javagen::unparse(&unit).unwrap(), "class Empty {\n}\n\n");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod names;
pub mod unparse;

pub use config::Config;
pub use error::GenError;
pub use unparse::{unparse, unparse_node, unparse_with};
