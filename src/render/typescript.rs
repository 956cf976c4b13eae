//! TypeScript interface renderer.
//!
//! Line shapes here are consumed by the TypeScript embedder's type checker,
//! so indentation and import lines must stay exactly as they are.

use crate::model::{FunctionRecord, RunMetadata, DEFAULT_RETURN_TYPE, MEMORY_CATEGORY};
use crate::render::{group_by_category, metadata_header};

/// Default name of the generated exports interface.
pub const DEFAULT_INTERFACE_NAME: &str = "HakoExports";

const INDENT: &str = "    ";

const IMPORTED_TYPES: &[&str] = &[
    "JSRuntimePointer",
    "JSContextPointer",
    "JSValuePointer",
    "JSValueConstPointer",
    "CString",
    "JSVoid",
    "OwnedHeapChar",
    "LEPUS_BOOL",
    "LEPUSModuleDef",
];

pub struct TypeScriptRenderer<'a> {
    pub interface_name: &'a str,
}

impl Default for TypeScriptRenderer<'_> {
    fn default() -> Self {
        Self {
            interface_name: DEFAULT_INTERFACE_NAME,
        }
    }
}

impl TypeScriptRenderer<'_> {
    pub fn render(&self, records: &[FunctionRecord], meta: &RunMetadata) -> String {
        let mut lines = metadata_header(meta);
        self.push_prologue(&mut lines);

        for (category, funcs) in group_by_category(records) {
            if category != MEMORY_CATEGORY {
                lines.push(format!("{INDENT}// {}", category));
            }
            for func in funcs {
                push_member(&mut lines, func);
            }
            lines.push(String::new());
        }

        lines.push("}".to_string());
        lines.join("\n")
    }

    fn push_prologue(&self, lines: &mut Vec<String>) {
        lines.extend(
            ["/**", " * Generated TypeScript interface for QuickJS exports", " */", ""]
                .map(String::from),
        );

        lines.push("import type {".to_string());
        let last = IMPORTED_TYPES.len() - 1;
        for (i, ty) in IMPORTED_TYPES.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            lines.push(format!("{INDENT}{}{}", ty, sep));
        }
        lines.push("} from './types';".to_string());
        lines.push(String::new());

        lines.push("/**".to_string());
        lines.push(" * Interface for the raw WASM exports from QuickJS".to_string());
        lines.push(" */".to_string());
        lines.push(format!("export interface {} {{", self.interface_name));
        lines.push(format!("{INDENT}// {}", MEMORY_CATEGORY));
        lines.push(format!("{INDENT}memory: WebAssembly.Memory;"));
        lines.push(String::new());
    }
}

/// Emit the TSDoc block (when there is a brief) and the call signature.
fn push_member(lines: &mut Vec<String>, func: &FunctionRecord) {
    if let Some(brief) = func.brief.as_deref().filter(|b| !b.is_empty()) {
        lines.push(format!("{INDENT}/**"));
        lines.push(format!("{INDENT} * {}", brief));

        if !func.params.is_empty() {
            lines.push(format!("{INDENT} *"));
            for param in &func.params {
                let desc = param.description.as_deref().unwrap_or("");
                lines.push(format!("{INDENT} * @param {} {}", param.name, desc));
            }
        }

        let returns = func.return_description.as_deref().filter(|d| !d.is_empty());
        if let Some(returns) = returns.filter(|_| func.return_type() != DEFAULT_RETURN_TYPE) {
            if func.params.is_empty() {
                lines.push(format!("{INDENT} *"));
            }
            lines.push(format!("{INDENT} * @returns {}", returns));
        }

        lines.push(format!("{INDENT} */"));
    }

    let params: Vec<String> = func
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect();
    lines.push(format!(
        "{INDENT}{}({}): {};",
        func.name,
        params.join(", "),
        func.return_type()
    ));
}
