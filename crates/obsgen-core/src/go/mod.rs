//! Go backend: source model, writer and renderer.

pub mod ir;
pub mod render;
pub mod writer;

pub use ir::{
    Decl, Embed, Expr, FuncBody, FuncDecl, GoFile, Param, StructDecl, StructField, SwitchCase,
    TypeSwitch, VarDecl,
};
pub use render::Render;
pub use writer::CodeWriter;
