//! Template rendering for CRD-OUT.
//!
//! Handlebars with HTML escaping off and strict mode on, plus helpers for
//! emitting JavaScript/TypeScript source:
//! - js_str: Value as a quoted, escaped string literal
//! - join_literals: Array as comma-separated string literals
//! - union: Array as a TypeScript union of string literal types
//! - indent: Re-indent every line after the first of a block

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason,
};
use serde::Serialize;
use serde_json::Value;

use crate::templates::TemplatesFile;

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, String> {
        let mut handlebars = Handlebars::new();

        // Output is source code, not HTML
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_helper("js_str", Box::new(JsStrHelper));
        handlebars.register_helper("join_literals", Box::new(JoinLiteralsHelper));
        handlebars.register_helper("union", Box::new(UnionHelper));
        handlebars.register_helper("indent", Box::new(IndentHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| format!("Invalid template '{}': {}", name, e))?;
        }

        Ok(TemplateRenderer { handlebars, templates })
    }

    /// Renderer over the built-in template set
    pub fn builtin() -> Result<Self, String> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Render a named template with data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

/// Quote and escape `value` as a JavaScript string literal.
///
/// The result is also a valid JSON string and TypeScript literal type.
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // line terminators inside string literals before ES2019
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => js_string_literal(s),
        other => other.to_string(),
    }
}

fn literals(name: &'static str, value: Option<&Value>) -> Result<Vec<String>, RenderErrorReason> {
    let array = value
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(name, 0))?
        .as_array()
        .ok_or(RenderErrorReason::InvalidParamType("array"))?;
    Ok(array.iter().map(literal).collect())
}

// ============================================================================
// Custom Helpers
// ============================================================================

struct JsStrHelper;

impl HelperDef for JsStrHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("js_str", 0))?;
        out.write(&literal(value.value()))?;
        Ok(())
    }
}

struct JoinLiteralsHelper;

impl HelperDef for JoinLiteralsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let items = literals("join_literals", h.param(0).map(|p| p.value()))?;
        out.write(&items.join(", "))?;
        Ok(())
    }
}

/// `"A" | "B"`, or `never` for an empty array
struct UnionHelper;

impl HelperDef for UnionHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let items = literals("union", h.param(0).map(|p| p.value()))?;
        if items.is_empty() {
            out.write("never")?;
        } else {
            out.write(&items.join(" | "))?;
        }
        Ok(())
    }
}

/// Indent continuation lines so a multi-line block sits under its first line
struct IndentHelper;

impl HelperDef for IndentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("indent", 0))?
            .value()
            .as_str()
            .ok_or(RenderErrorReason::InvalidParamType("string"))?;

        let width = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(2) as usize;

        out.write(&indent_continuation(text, width))?;
        Ok(())
    }
}

fn indent_continuation(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut lines = text.split('\n');
    let mut result = lines.next().unwrap_or_default().to_string();
    for line in lines {
        result.push('\n');
        if !line.is_empty() {
            result.push_str(&pad);
        }
        result.push_str(line);
    }
    result
}
