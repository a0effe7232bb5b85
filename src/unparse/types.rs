//! Type syntax. Types carry no layout, so these are plain functions.

use crate::ast::{BasicType, ReferenceType, Type, TypeArgument, TypeParameter};
use crate::error::GenError;
use crate::names;

/// `int[]`, `List<String>`, `Map.Entry<K, V>[]`
pub(super) fn render_type(t: &Type) -> Result<String, GenError> {
    let mut out = type_base(t)?;
    push_dimensions(&mut out, t.dimensions());
    Ok(out)
}

/// The type without its trailing `[]` pairs.
pub(super) fn type_base(t: &Type) -> Result<String, GenError> {
    match t {
        Type::Basic(b) => basic_type(b),
        Type::Reference(r) => reference_type_base(r),
    }
}

pub(super) fn push_dimensions(out: &mut String, dimensions: usize) {
    for _ in 0..dimensions {
        out.push_str("[]");
    }
}

fn basic_type(t: &BasicType) -> Result<String, GenError> {
    if names::is_primitive(&t.name) {
        Ok(t.name.clone())
    } else {
        Err(GenError::malformed("BasicType", format!("`{}` is not a primitive type", t.name)))
    }
}

pub(super) fn reference_type(t: &ReferenceType) -> Result<String, GenError> {
    let mut out = reference_type_base(t)?;
    push_dimensions(&mut out, t.dimensions);
    Ok(out)
}

fn reference_type_base(t: &ReferenceType) -> Result<String, GenError> {
    let mut out = names::qualified("ReferenceType", &t.name)?.to_string();
    if let Some(ref args) = t.arguments {
        out.push('<');
        out.push_str(&type_argument_list(args)?);
        out.push('>');
    }
    if let Some(ref sub) = t.sub_type {
        out.push('.');
        out.push_str(&reference_type(sub)?);
    }
    Ok(out)
}

/// Comma-separated, as in `implements A, B`.
pub(super) fn reference_type_list(types: &[ReferenceType]) -> Result<String, GenError> {
    let rendered = types.iter().map(reference_type).collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(", "))
}

pub(super) fn type_argument(arg: &TypeArgument) -> Result<String, GenError> {
    match arg {
        TypeArgument::Type(t) => render_type(t),
        TypeArgument::Wildcard => Ok("?".to_string()),
        TypeArgument::Extends(t) => Ok(format!("? extends {}", render_type(t)?)),
        TypeArgument::Super(t) => Ok(format!("? super {}", render_type(t)?)),
    }
}

pub(super) fn type_argument_list(args: &[TypeArgument]) -> Result<String, GenError> {
    let rendered = args.iter().map(type_argument).collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(", "))
}

/// `<T extends A & B, U>`, or nothing for an empty list.
pub(super) fn type_parameters(params: &[TypeParameter]) -> Result<String, GenError> {
    if params.is_empty() {
        return Ok(String::new());
    }
    let mut out = String::from("<");
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(names::identifier("TypeParameter", &p.name)?);
        if !p.extends.is_empty() {
            out.push_str(" extends ");
            let bounds = p.extends.iter().map(reference_type).collect::<Result<Vec<_>, _>>()?;
            out.push_str(&bounds.join(" & "));
        }
    }
    out.push('>');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> ReferenceType {
        ReferenceType { name: name.to_string(), arguments: None, sub_type: None, dimensions: 0 }
    }

    #[test]
    fn primitive_array() {
        let t = Type::Basic(BasicType { name: "int".into(), dimensions: 2 });
        assert_eq!(render_type(&t).unwrap(), "int[][]");
        assert_eq!(type_base(&t).unwrap(), "int");
    }

    #[test]
    fn generic_with_wildcards() {
        let t = ReferenceType {
            arguments: Some(vec![
                TypeArgument::Extends(Type::Reference(class("Number"))),
                TypeArgument::Wildcard,
            ]),
            ..class("Map")
        };
        assert_eq!(reference_type(&t).unwrap(), "Map<? extends Number, ?>");
    }

    #[test]
    fn diamond_and_raw() {
        let diamond = ReferenceType { arguments: Some(vec![]), ..class("ArrayList") };
        assert_eq!(reference_type(&diamond).unwrap(), "ArrayList<>");
        assert_eq!(reference_type(&class("ArrayList")).unwrap(), "ArrayList");
    }

    #[test]
    fn nested_sub_type() {
        let t = ReferenceType {
            sub_type: Some(Box::new(ReferenceType {
                arguments: Some(vec![
                    TypeArgument::Type(Type::Reference(class("K"))),
                    TypeArgument::Type(Type::Reference(class("V"))),
                ]),
                ..class("Entry")
            })),
            dimensions: 1,
            ..class("Map")
        };
        assert_eq!(reference_type(&t).unwrap(), "Map.Entry<K, V>[]");
    }

    #[test]
    fn bounded_type_parameters() {
        let params = vec![
            TypeParameter { name: "T".into(), extends: vec![class("Comparable"), class("Cloneable")] },
            TypeParameter { name: "U".into(), extends: vec![] },
        ];
        assert_eq!(type_parameters(&params).unwrap(), "<T extends Comparable & Cloneable, U>");
        assert_eq!(type_parameters(&[]).unwrap(), "");
    }

    #[test]
    fn non_primitive_basic_type_is_malformed() {
        let t = Type::Basic(BasicType { name: "string".into(), dimensions: 0 });
        assert!(matches!(render_type(&t), Err(GenError::MalformedNode { kind: "BasicType", .. })));
    }
}
