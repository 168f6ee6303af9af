//! Go source model.
//!
//! Emitters build these values; [`render`](super::render) turns them into
//! text. Only the constructs the generated bindings use are modelled.

/// One generated `.go` file.
#[derive(Debug, Clone, PartialEq)]
pub struct GoFile {
    pub package: String,
    /// Comment lines written right after the package clause.
    pub header: Vec<String>,
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Struct(StructDecl),
    Func(FuncDecl),
    Var(VarDecl),
}

/// `type Name struct { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub docs: Vec<String>,
    pub name: String,
    pub fields: Vec<StructField>,
    /// Embedded envelope, always written after the declared fields.
    pub embed: Embed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub docs: Vec<String>,
    pub name: String,
    pub ty: String,
    /// Struct tag without the surrounding backquotes.
    pub tag: Option<String>,
}

/// An anonymous embedded field.
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub type_name: String,
    pub tag: Option<String>,
}

/// `func Name(params) Result { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub docs: Vec<String>,
    pub name: String,
    pub params: Vec<Param>,
    pub result: String,
    pub body: FuncBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FuncBody {
    /// `return <expr>`
    Return(Expr),
    /// `switch binding := subject.(type) { ... }` with one return per case.
    TypeSwitch(TypeSwitch),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitch {
    pub binding: String,
    pub subject: String,
    pub cases: Vec<SwitchCase>,
    pub default: Expr,
}

/// `case Type: return <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub ty: String,
    pub result: Expr,
}

/// `var Name = <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub docs: Vec<String>,
    pub name: String,
    pub value: Expr,
}

/// Expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    /// Interpreted string literal; escaped on render.
    Str(String),
    Nil,
    Call {
        func: String,
        args: Vec<Expr>,
    },
    /// `*expr`
    Deref(Box<Expr>),
    /// `&expr`
    AddrOf(Box<Expr>),
    /// `Type{Key: value, ...}`
    Composite {
        ty: String,
        fields: Vec<(String, Expr)>,
    },
    /// `map[string]V{"key": value, ...}`
    MapLit {
        ty: String,
        entries: Vec<(String, Expr)>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// `Type{}`
    pub fn zero(ty: impl Into<String>) -> Self {
        Expr::Composite {
            ty: ty.into(),
            fields: Vec::new(),
        }
    }

    /// `&Type{}`
    pub fn zero_ptr(ty: impl Into<String>) -> Self {
        Expr::AddrOf(Box::new(Expr::zero(ty)))
    }
}
