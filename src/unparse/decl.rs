//! Compilation unit, type declarations and their members.

use std::fmt::Write;

use super::types::{push_dimensions, reference_type, reference_type_list, render_type, type_base, type_parameters};
use super::{Generator, modifier_prefix};
use crate::ast::{
    Annotation, ClassDeclaration, CompilationUnit, ConstructorDeclaration, ElementValuePair,
    FieldDeclaration, FormalParameter, Import, InterfaceDeclaration, LocalVariableDeclaration,
    MethodDeclaration, Node, VariableDeclarator,
};
use crate::error::GenError;
use crate::names;

impl Generator {
    pub(super) fn compilation_unit(&mut self, unit: &CompilationUnit) -> Result<String, GenError> {
        let mut out = String::new();
        if let Some(ref package) = unit.package {
            let name = names::qualified("PackageDeclaration", &package.name)?;
            let _ = writeln!(out, "package {name};");
            out.push('\n');
        }
        for import in &unit.imports {
            out.push_str(&import_line(import)?);
        }
        if !unit.imports.is_empty() {
            out.push('\n');
        }
        for node in &unit.types {
            match node {
                Node::ClassDeclaration(_)
                | Node::InterfaceDeclaration(_)
                | Node::EnumDeclaration(_)
                | Node::AnnotationDeclaration(_) => out.push_str(&self.dispatch(node)?),
                other => {
                    return Err(GenError::malformed(other.kind(), "not a top-level type declaration"));
                }
            }
        }
        Ok(out)
    }

    /// Documentation and annotation lines that precede a declaration.
    fn declaration_head(
        &mut self,
        documentation: Option<&str>,
        annotations: &[Annotation],
    ) -> Result<String, GenError> {
        let mut out = String::new();
        if self.emit_documentation
            && let Some(doc) = documentation
        {
            for (i, line) in doc.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
                out.push_str(self.pad());
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(line);
                out.push('\n');
            }
        }
        for annotation in annotations {
            let text = self.annotation(annotation)?;
            out.push_str(self.pad());
            out.push_str(&text);
            out.push('\n');
        }
        Ok(out)
    }

    fn annotation(&mut self, annotation: &Annotation) -> Result<String, GenError> {
        let mut out = String::from("@");
        out.push_str(names::qualified("Annotation", &annotation.name)?);
        if let Some(ref element) = annotation.element {
            out.push('(');
            match element.as_ref() {
                Node::ElementValuePair(pair) => out.push_str(&self.element_value_pair(pair)?),
                other => out.push_str(&self.expression(other, 0)?),
            }
            out.push(')');
        }
        Ok(out)
    }

    /// Annotations written in front of a parameter or local, space separated.
    fn inline_annotations(&mut self, annotations: &[Annotation]) -> Result<String, GenError> {
        let mut out = String::new();
        for annotation in annotations {
            out.push_str(&self.annotation(annotation)?);
            out.push(' ');
        }
        Ok(out)
    }

    pub(super) fn element_value_pair(&mut self, pair: &ElementValuePair) -> Result<String, GenError> {
        let name = names::identifier("ElementValuePair", &pair.name)?;
        Ok(format!("{name} = {}", self.expression(&pair.value, 0)?))
    }

    pub(super) fn class_declaration(&mut self, class: &ClassDeclaration) -> Result<String, GenError> {
        let name = names::identifier("ClassDeclaration", &class.name)?;
        let mut out = self.declaration_head(class.documentation.as_deref(), &class.annotations)?;
        out.push_str(self.pad());
        out.push_str(&modifier_prefix(&class.modifiers));
        out.push_str("class ");
        out.push_str(name);
        out.push_str(&type_parameters(&class.type_parameters)?);
        if let Some(ref parent) = class.extends {
            out.push_str(" extends ");
            out.push_str(&reference_type(parent)?);
        }
        if !class.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&reference_type_list(&class.implements)?);
        }
        out.push_str(&self.type_body(&class.body)?);
        Ok(out)
    }

    pub(super) fn interface_declaration(
        &mut self,
        interface: &InterfaceDeclaration,
    ) -> Result<String, GenError> {
        let name = names::identifier("InterfaceDeclaration", &interface.name)?;
        let mut out =
            self.declaration_head(interface.documentation.as_deref(), &interface.annotations)?;
        out.push_str(self.pad());
        out.push_str(&modifier_prefix(&interface.modifiers));
        out.push_str("interface ");
        out.push_str(name);
        out.push_str(&type_parameters(&interface.type_parameters)?);
        if !interface.extends.is_empty() {
            out.push_str(" extends ");
            out.push_str(&reference_type_list(&interface.extends)?);
        }
        out.push_str(&self.type_body(&interface.body)?);
        Ok(out)
    }

    /// ` {`, the members one level deeper, `}` and a blank line.
    fn type_body(&mut self, members: &[Node]) -> Result<String, GenError> {
        let mut out = String::from(" {\n");
        out.push_str(&self.members(members)?);
        out.push_str(self.pad());
        out.push_str("}\n\n");
        Ok(out)
    }

    /// Members of a class body, one level deeper than the current depth.
    pub(super) fn members(&mut self, members: &[Node]) -> Result<String, GenError> {
        let mut out = String::new();
        let mut inner = self.nested();
        for member in members {
            out.push_str(&inner.statement(member)?);
        }
        Ok(out)
    }

    pub(super) fn field_declaration(&mut self, field: &FieldDeclaration) -> Result<String, GenError> {
        let mut out = self.declaration_head(field.documentation.as_deref(), &field.annotations)?;
        out.push_str(self.pad());
        out.push_str(&modifier_prefix(&field.modifiers));
        out.push_str(&render_type(&field.type_)?);
        out.push(' ');
        out.push_str(&self.declarators("FieldDeclaration", &field.declarators)?);
        out.push_str(";\n");
        Ok(out)
    }

    pub(super) fn method_declaration(&mut self, method: &MethodDeclaration) -> Result<String, GenError> {
        let name = names::identifier("MethodDeclaration", &method.name)?;
        let mut out = self.declaration_head(method.documentation.as_deref(), &method.annotations)?;
        out.push_str(self.pad());
        out.push_str(&modifier_prefix(&method.modifiers));
        if !method.type_parameters.is_empty() {
            out.push_str(&type_parameters(&method.type_parameters)?);
            out.push(' ');
        }
        match method.return_type {
            Some(ref t) => out.push_str(&render_type(t)?),
            None => out.push_str("void"),
        }
        out.push(' ');
        out.push_str(name);
        out.push_str(&self.signature_rest(&method.parameters, &method.throws, method.body.as_deref())?);
        Ok(out)
    }

    pub(super) fn constructor_declaration(
        &mut self,
        ctor: &ConstructorDeclaration,
    ) -> Result<String, GenError> {
        const KIND: &str = "ConstructorDeclaration";
        let name = names::identifier(KIND, &ctor.name)?;
        let Some(ref body) = ctor.body else {
            return Err(GenError::malformed(KIND, "constructor without a body"));
        };
        let mut out = self.declaration_head(ctor.documentation.as_deref(), &ctor.annotations)?;
        out.push_str(self.pad());
        out.push_str(&modifier_prefix(&ctor.modifiers));
        if !ctor.type_parameters.is_empty() {
            out.push_str(&type_parameters(&ctor.type_parameters)?);
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(&self.signature_rest(&ctor.parameters, &ctor.throws, Some(body))?);
        Ok(out)
    }

    /// `(params) throws A, B` and then `;` or the body.
    fn signature_rest(
        &mut self,
        parameters: &[FormalParameter],
        throws: &[String],
        body: Option<&[Node]>,
    ) -> Result<String, GenError> {
        let mut out = String::from("(");
        for (i, p) in parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.formal_parameter(p)?);
        }
        out.push(')');
        if !throws.is_empty() {
            let thrown = throws
                .iter()
                .map(|t| names::qualified("MethodDeclaration", t))
                .collect::<Result<Vec<_>, _>>()?;
            out.push_str(" throws ");
            out.push_str(&thrown.join(", "));
        }
        match body {
            None => out.push_str(";\n"),
            Some(statements) => {
                out.push(' ');
                out.push_str(&self.braced(statements)?);
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// `String args[]`: array parameters keep their brackets after the name.
    pub(super) fn formal_parameter(&mut self, param: &FormalParameter) -> Result<String, GenError> {
        let name = names::identifier("FormalParameter", &param.name)?;
        let mut out = self.inline_annotations(&param.annotations)?;
        out.push_str(&modifier_prefix(&param.modifiers));
        if param.varargs {
            out.push_str(&render_type(&param.type_)?);
            out.push_str("... ");
            out.push_str(name);
        } else {
            out.push_str(&type_base(&param.type_)?);
            out.push(' ');
            out.push_str(name);
            push_dimensions(&mut out, param.type_.dimensions());
        }
        Ok(out)
    }

    pub(super) fn local_variable_declaration(
        &mut self,
        decl: &LocalVariableDeclaration,
    ) -> Result<String, GenError> {
        let text = self.local_variable(decl)?;
        let mut out = String::from(self.pad());
        out.push_str(&text);
        out.push_str(";\n");
        Ok(out)
    }

    /// A local declaration without indent or `;`, as used in `for` headers.
    pub(super) fn local_variable(&mut self, decl: &LocalVariableDeclaration) -> Result<String, GenError> {
        let mut out = self.inline_annotations(&decl.annotations)?;
        out.push_str(&modifier_prefix(&decl.modifiers));
        out.push_str(&render_type(&decl.type_)?);
        out.push(' ');
        out.push_str(&self.declarators("LocalVariableDeclaration", &decl.declarators)?);
        Ok(out)
    }

    fn declarators(
        &mut self,
        kind: &'static str,
        declarators: &[VariableDeclarator],
    ) -> Result<String, GenError> {
        if declarators.is_empty() {
            return Err(GenError::malformed(kind, "no variable declarators"));
        }
        let mut out = String::new();
        for (i, d) in declarators.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.variable_declarator(d)?);
        }
        Ok(out)
    }

    fn variable_declarator(&mut self, declarator: &VariableDeclarator) -> Result<String, GenError> {
        let mut out = names::identifier("VariableDeclarator", &declarator.name)?.to_string();
        push_dimensions(&mut out, declarator.dimensions);
        if let Some(ref init) = declarator.initializer {
            out.push_str(" = ");
            out.push_str(&self.expression(init, 0)?);
        }
        Ok(out)
    }
}

fn import_line(import: &Import) -> Result<String, GenError> {
    let path = names::qualified("Import", &import.path)?;
    let mut out = String::from("import ");
    if import.is_static {
        out.push_str("static ");
    }
    out.push_str(path);
    if import.wildcard {
        out.push_str(".*");
    }
    out.push_str(";\n");
    Ok(out)
}
