//! `New<Name>Request` factory emission.

use super::fields::{ResolvedField, resolve_fields};
use crate::go::{Expr, FuncBody, FuncDecl, Param};
use crate::message::{MESSAGE_ID_GENERATOR, MessageKind};
use crate::schema::Request;

/// Emit the factory for `request`.
///
/// Arguments follow the schema's parameter order. The envelope gets a
/// fresh id from the runtime and the request's schema name as its type.
/// Findings about the parameters are reported by the struct emitter, so
/// this returns the bare declaration.
pub fn emit_constructor(request: &Request) -> FuncDecl {
    let struct_name = MessageKind::Request.struct_name(&request.name);
    let params = resolve_fields(&struct_name, &request.params).value;
    constructor(&request.name, &struct_name, &params)
}

fn constructor(name: &str, struct_name: &str, params: &[ResolvedField]) -> FuncDecl {
    let func_name = format!("New{struct_name}");
    let envelope_type = MessageKind::Request.envelope();

    let mut fields: Vec<(String, Expr)> = params
        .iter()
        .map(|p| (p.ident.clone(), Expr::ident(&p.arg_name)))
        .collect();
    fields.push((
        envelope_type.to_string(),
        Expr::Composite {
            ty: envelope_type.to_string(),
            fields: vec![
                (
                    "ID_".to_string(),
                    Expr::Call {
                        func: MESSAGE_ID_GENERATOR.to_string(),
                        args: Vec::new(),
                    },
                ),
                ("Type_".to_string(), Expr::Str(name.to_string())),
            ],
        },
    ));

    FuncDecl {
        docs: vec![format!("{func_name} returns a new {struct_name}.")],
        name: func_name,
        params: params
            .iter()
            .map(|p| Param {
                name: p.arg_name.clone(),
                ty: p.go_type.as_go().to_string(),
            })
            .collect(),
        result: struct_name.to_string(),
        body: FuncBody::Return(Expr::Composite {
            ty: struct_name.to_string(),
            fields,
        }),
    }
}
