//! Rendering of the Go source model.

use super::ir::{Decl, Embed, Expr, FuncBody, FuncDecl, GoFile, StructDecl, StructField, VarDecl};
use super::writer::CodeWriter;
use std::fmt;

/// Types that can be written as Go source.
pub trait Render {
    /// Write this node through `w`.
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result;

    /// Render into a fresh string.
    fn to_source(&self) -> String {
        let mut w = CodeWriter::new(String::new());
        // Writing into a String never fails.
        let _ = self.render(&mut w);
        w.into_inner()
    }
}

impl Render for GoFile {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.writeln(&format!("package {}", self.package))?;
        if !self.header.is_empty() {
            w.blank_line()?;
            w.comments(&self.header)?;
        }
        for decl in &self.decls {
            w.blank_line()?;
            decl.render(w)?;
        }
        Ok(())
    }
}

impl Render for Decl {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        match self {
            Decl::Struct(s) => s.render(w),
            Decl::Func(f) => f.render(w),
            Decl::Var(v) => v.render(w),
        }
    }
}

impl Render for StructDecl {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.comments(&self.docs)?;
        w.block(&format!("type {} struct", self.name), |w| {
            for field in &self.fields {
                field.render(w)?;
            }
            self.embed.render(w)
        })
    }
}

impl Render for StructField {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.comments(&self.docs)?;
        w.write(&format!("{} {}", self.name, self.ty))?;
        write_tag(w, self.tag.as_deref())?;
        w.newline()
    }
}

impl Render for Embed {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.write(&self.type_name)?;
        write_tag(w, self.tag.as_deref())?;
        w.newline()
    }
}

fn write_tag<W: fmt::Write>(w: &mut CodeWriter<W>, tag: Option<&str>) -> fmt::Result {
    match tag {
        Some(tag) => w.write(&format!(" `{tag}`")),
        None => Ok(()),
    }
}

impl Render for FuncDecl {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.comments(&self.docs)?;
        w.write(&format!("func {}(", self.name))?;
        w.write_separated(&self.params, ", ", |w, p| {
            w.write(&format!("{} {}", p.name, p.ty))
        })?;
        w.write(&format!(") {} {{", self.result))?;
        w.newline()?;
        {
            let _indent = w.indent();
            match &self.body {
                FuncBody::Return(expr) => {
                    w.write("return ")?;
                    expr.render(w)?;
                    w.newline()?;
                }
                FuncBody::TypeSwitch(switch) => {
                    // Go rejects a binding that no case uses.
                    if switch.cases.is_empty() {
                        w.write(&format!("switch {}.(type) {{", switch.subject))?;
                    } else {
                        w.write(&format!(
                            "switch {} := {}.(type) {{",
                            switch.binding, switch.subject
                        ))?;
                    }
                    w.newline()?;
                    for case in &switch.cases {
                        w.writeln(&format!("case {}:", case.ty))?;
                        let _indent = w.indent();
                        w.write("return ")?;
                        case.result.render(w)?;
                        w.newline()?;
                    }
                    w.writeln("default:")?;
                    {
                        let _indent = w.indent();
                        w.write("return ")?;
                        switch.default.render(w)?;
                        w.newline()?;
                    }
                    w.writeln("}")?;
                }
            }
        }
        w.writeln("}")
    }
}

impl Render for VarDecl {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        w.comments(&self.docs)?;
        w.write(&format!("var {} = ", self.name))?;
        self.value.render(w)?;
        w.newline()
    }
}

/// Expressions render inline; composite and map literals with entries
/// break into one entry per line with trailing commas, as gofmt prints
/// them. The caller ends the line.
impl Render for Expr {
    fn render<W: fmt::Write>(&self, w: &mut CodeWriter<W>) -> fmt::Result {
        match self {
            Expr::Ident(name) => w.write(name),
            Expr::Str(value) => w.write(&quote(value)),
            Expr::Nil => w.write("nil"),
            Expr::Call { func, args } => {
                w.write(&format!("{func}("))?;
                w.write_separated(args, ", ", |w, arg| arg.render(w))?;
                w.write(")")
            }
            Expr::Deref(inner) => {
                w.write("*")?;
                inner.render(w)
            }
            Expr::AddrOf(inner) => {
                w.write("&")?;
                inner.render(w)
            }
            Expr::Composite { ty, fields } => {
                let entries = fields.iter().map(|(k, v)| (k.clone(), v)).collect();
                render_braced(w, ty, entries)
            }
            Expr::MapLit { ty, entries } => {
                let entries = entries.iter().map(|(k, v)| (quote(k), v)).collect();
                render_braced(w, ty, entries)
            }
        }
    }
}

fn render_braced<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    ty: &str,
    entries: Vec<(String, &Expr)>,
) -> fmt::Result {
    if entries.is_empty() {
        return w.write(&format!("{ty}{{}}"));
    }

    w.write(&format!("{ty}{{"))?;
    w.newline()?;
    {
        let _indent = w.indent();
        for (key, value) in entries {
            w.write(&format!("{key}: "))?;
            value.render(w)?;
            w.write(",")?;
            w.newline()?;
        }
    }
    w.write("}")
}

/// Quote `value` as a Go interpreted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
