//! Usage lines and option listings.

use crate::metadata::{MetadataProvider, MethodInfo, ParamInfo, PropertyInfo};
use crate::naming;
use crate::response::Line;

/// Properties that carry console plumbing rather than user options.
const RESERVED_PROPERTIES: &[&str] = &["request", "response"];

/// Value type of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Presence flag, rendered without a value.
    Boolean,
    /// Takes a value of the named type (`string`, `array`, ...).
    Value(String),
}

impl OptionKind {
    pub fn from_declared(ty: &str) -> Self {
        match ty {
            "boolean" | "bool" => Self::Boolean,
            other => Self::Value(other.to_string()),
        }
    }
}

/// A flag accepted by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Dashed flag name without leading dashes.
    pub flag: String,
    pub kind: OptionKind,
    pub default: Option<String>,
    pub description: String,
}

impl OptionSpec {
    pub fn from_property(property: &PropertyInfo) -> Self {
        Self {
            flag: naming::dasherize(&property.name),
            kind: OptionKind::from_declared(property.declared_type()),
            default: property.default.clone().filter(|d| d != "null"),
            description: property.doc.full_text("\n"),
        }
    }

    /// `--name=<type>`, `--name` for booleans, one dash for one-letter flags.
    pub fn usage(&self) -> String {
        let dashes = if self.flag.chars().count() == 1 { "-" } else { "--" };
        match &self.kind {
            OptionKind::Boolean => format!("{dashes}{}", self.flag),
            OptionKind::Value(ty) => format!("{dashes}{}=<{ty}>", self.flag),
        }
    }

    /// Default shown under the description; booleans default to absent.
    pub fn default_note(&self) -> Option<String> {
        match (&self.kind, &self.default) {
            (OptionKind::Value(_), Some(default)) => Some(format!("Default: {default}")),
            _ => None,
        }
    }
}

/// A positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: String,
    pub optional: bool,
    pub default: Option<String>,
    pub description: String,
}

impl ArgSpec {
    pub fn from_param(method: &MethodInfo, param: &ParamInfo) -> Self {
        Self {
            name: param.name.clone(),
            optional: param.optional,
            default: param.default.clone(),
            description: method.param_description(&param.name).unwrap_or_default(),
        }
    }

    pub fn usage(&self) -> String {
        format!("<{}>", self.name)
    }

    /// Usage as it appears on a usage line: bracketed when optional.
    pub fn synopsis(&self) -> String {
        if self.optional {
            format!("[<{}>]", self.name)
        } else {
            self.usage()
        }
    }
}

/// A public method other than `run`, invoked as `<command> <task>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: String,
    pub arguments: Vec<ArgSpec>,
    pub summary: String,
}

impl TaskSpec {
    pub fn from_method(method: &MethodInfo) -> Self {
        Self {
            name: method.name.clone(),
            arguments: arguments_of(method),
            summary: method.doc.summary.clone(),
        }
    }
}

fn arguments_of(method: &MethodInfo) -> Vec<ArgSpec> {
    method
        .params
        .iter()
        .map(|param| ArgSpec::from_param(method, param))
        .collect()
}

/// Resolved description of one command's usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub options: Vec<OptionSpec>,
    pub arguments: Vec<ArgSpec>,
    pub tasks: Vec<TaskSpec>,
    pub summary: String,
    pub description: String,
}

impl CommandSpec {
    /// Build from reflected metadata. Options follow property declaration
    /// order; arguments come from `run`.
    pub fn from_provider(name: &str, provider: &dyn MetadataProvider) -> Self {
        let options = provider
            .properties()
            .into_iter()
            .filter(|p| !RESERVED_PROPERTIES.contains(&p.name.as_str()))
            .map(OptionSpec::from_property)
            .collect();

        let methods = provider.methods();
        let arguments = methods
            .iter()
            .find(|m| m.name == "run")
            .map(|run| arguments_of(run))
            .unwrap_or_default();
        let tasks = methods
            .iter()
            .filter(|m| m.name != "run")
            .map(|m| TaskSpec::from_method(m))
            .collect();

        Self {
            name: name.to_string(),
            options,
            arguments,
            tasks,
            summary: provider.summary().to_string(),
            description: provider.description().to_string(),
        }
    }

    /// Summary and description separated by a blank line.
    pub fn long_description(&self) -> String {
        [self.summary.trim(), self.description.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Formats command specs into usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageFormatter {
    script: String,
    indent: usize,
}

impl Default for UsageFormatter {
    fn default() -> Self {
        Self::new("li3", 4)
    }
}

impl UsageFormatter {
    pub fn new(script: impl Into<String>, indent: usize) -> Self {
        Self {
            script: script.into(),
            indent,
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Indent every non-empty line of `text` by `level` steps.
    pub fn pad(&self, text: &str, level: usize) -> String {
        let padding = " ".repeat(self.indent * level);
        text.lines()
            .map(|line| {
                if line.trim().is_empty() {
                    String::new()
                } else {
                    format!("{padding}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `li3 <command> [flags...] [args...]`
    pub fn usage_line(&self, spec: &CommandSpec) -> String {
        let mut line = format!("{} {}", self.script, spec.name);
        push_synopsis(&mut line, &spec.options, &spec.arguments);
        line
    }

    /// `li3 <command> <task> [flags...] [args...]`
    pub fn task_usage_line(&self, spec: &CommandSpec, task: &TaskSpec) -> String {
        let mut line = format!("{} {} {}", self.script, spec.name, task.name);
        push_synopsis(&mut line, &spec.options, &task.arguments);
        line
    }

    /// One option-style entry: usage, indented description, optional note,
    /// then a blank line.
    pub fn entry(&self, usage: &str, description: &str, note: Option<&str>) -> Vec<Line> {
        let mut lines = vec![Line::option(self.pad(usage, 1))];
        if !description.trim().is_empty() {
            lines.push(Line::plain(self.pad(description.trim(), 2)));
        }
        if let Some(note) = note {
            lines.push(Line::plain(self.pad(note, 2)));
        }
        lines.push(Line::blank());
        lines
    }

    /// Arguments of `run`, then task arguments not already listed, then flags.
    pub fn options_block(&self, spec: &CommandSpec) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut listed: Vec<&str> = Vec::new();

        let task_args = spec.tasks.iter().flat_map(|t| t.arguments.iter());
        for arg in spec.arguments.iter().chain(task_args) {
            if listed.contains(&arg.name.as_str()) {
                continue;
            }
            listed.push(&arg.name);
            lines.extend(self.entry(&arg.usage(), &arg.description, None));
        }

        for option in &spec.options {
            let note = option.default_note();
            lines.extend(self.entry(&option.usage(), &option.description, note.as_deref()));
        }
        lines
    }
}

fn push_synopsis(line: &mut String, options: &[OptionSpec], arguments: &[ArgSpec]) {
    for option in options {
        line.push_str(&format!(" [{}]", option.usage()));
    }
    for arg in arguments {
        line.push(' ');
        line.push_str(&arg.synopsis());
    }
}
