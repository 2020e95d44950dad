//! The `help` command.
//!
//! [`Help::run`] renders the command list or one command's usage;
//! [`Help::api`] renders class, method or property documentation. Both build
//! a [`HelpOutcome`] first and then write it to exactly one sink of the
//! [`Response`]:
//! - success: every rendered line to the output sink
//! - failure: a single line to the error sink
//!
//! `run` reports failure through its `bool` return; `api` returns nothing
//! and is only observable through the sinks.

pub mod usage;

use tracing::{debug, warn};

use crate::error::HelpError;
use crate::metadata::{MetadataProvider, MethodInfo, Reflector};
use crate::naming;
use crate::registry::CommandRegistry;
use crate::response::{Line, Response};

pub use usage::{ArgSpec, CommandSpec, OptionKind, OptionSpec, TaskSpec, UsageFormatter};

/// Which members of a class `api` documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ApiTarget {
    Method,
    Property,
}

/// Result of one render, before it reaches a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpOutcome {
    pub lines: Vec<Line>,
    pub error: Option<String>,
    pub success: bool,
}

impl HelpOutcome {
    pub fn rendered(lines: Vec<Line>) -> Self {
        Self {
            lines,
            error: None,
            success: true,
        }
    }

    pub fn failed(error: HelpError) -> Self {
        Self {
            lines: Vec::new(),
            error: Some(error.to_string()),
            success: false,
        }
    }

    /// Rendered text as written to the output sink.
    pub fn text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut text, line| {
            text.push_str(&line.text);
            text.push('\n');
            text
        })
    }
}

/// Help renderer bound to a registry, a metadata source and a response.
pub struct Help<'a, R> {
    registry: &'a CommandRegistry,
    reflector: &'a dyn Reflector,
    formatter: UsageFormatter,
    pub response: R,
}

impl<'a, R: Response> Help<'a, R> {
    pub fn new(registry: &'a CommandRegistry, reflector: &'a dyn Reflector, response: R) -> Self {
        Self {
            registry,
            reflector,
            formatter: UsageFormatter::default(),
            response,
        }
    }

    pub fn with_formatter(mut self, formatter: UsageFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// List all commands, or show usage for `command`.
    ///
    /// Returns `false` only when `command` does not resolve.
    pub fn run(&mut self, command: Option<&str>) -> bool {
        let outcome = self.render_run(command);
        self.emit(&outcome);
        outcome.success
    }

    /// Show API docs for a dotted class path.
    ///
    /// `class` may carry a member (`Class::method`, `Class::$property`); an
    /// explicit `target` or `name` takes precedence over it.
    pub fn api(&mut self, class: &str, target: Option<ApiTarget>, name: Option<&str>) {
        let outcome = self.render_api(class, target, name);
        self.emit(&outcome);
    }

    pub fn render_run(&self, command: Option<&str>) -> HelpOutcome {
        match command {
            None => HelpOutcome::rendered(self.render_commands()),
            Some(token) => match self.render_command(token) {
                Ok(lines) => HelpOutcome::rendered(lines),
                Err(err) => {
                    debug!(token, error = %err, "help lookup failed");
                    HelpOutcome::failed(err)
                }
            },
        }
    }

    pub fn render_api(
        &self,
        class: &str,
        target: Option<ApiTarget>,
        name: Option<&str>,
    ) -> HelpOutcome {
        let (class_path, member) = match class.split_once("::") {
            Some((class_path, member)) => (class_path, Some(member)),
            None => (class, None),
        };
        let class_name = naming::class_from_path(class_path);

        let (target, name) = match member {
            Some(member) => match member.strip_prefix('$') {
                Some(property) => (target.or(Some(ApiTarget::Property)), name.or(Some(property))),
                None => (target.or(Some(ApiTarget::Method)), name.or(Some(member))),
            },
            None => (target, name),
        };

        let Some(provider) = self.reflector.reflect(&class_name) else {
            debug!(class = %class_name, "api lookup failed");
            return HelpOutcome::failed(HelpError::ClassNotFound(class_name));
        };

        let lines = match target {
            None => self.render_class(&*provider),
            Some(ApiTarget::Method) => self.render_methods(&*provider, name),
            Some(ApiTarget::Property) => self.render_properties(&*provider, name),
        };

        if lines.is_empty() {
            debug!(class = %class_name, ?target, member = ?name, "no members to document");
        }
        HelpOutcome::rendered(lines)
    }

    fn emit(&mut self, outcome: &HelpOutcome) {
        if let Some(message) = &outcome.error {
            if let Err(err) = self.response.error(message) {
                warn!(error = %err, "failed to write to error sink");
            }
            return;
        }
        for line in &outcome.lines {
            if let Err(err) = self.response.output(line) {
                warn!(error = %err, "failed to write to output sink");
                return;
            }
        }
    }

    fn render_commands(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        for (library, commands) in self.registry.by_library() {
            lines.push(Line::heading(format!("COMMANDS via {library}")));
            for command in commands {
                let summary = match self.reflector.reflect(&command.class) {
                    Some(provider) => one_line(provider.summary()),
                    None => {
                        warn!(command = %command.name, class = %command.class, "command class not reflected");
                        String::new()
                    }
                };
                lines.push(Line::plain(
                    self.formatter.pad(&format!("{}\t{}", command.name, summary), 1),
                ));
            }
            lines.push(Line::blank());
        }
        lines.push(Line::plain(format!(
            "See `{} help COMMAND` for more information on a specific command.",
            self.formatter.script()
        )));
        lines
    }

    fn render_command(&self, token: &str) -> Result<Vec<Line>, HelpError> {
        let command = self.registry.resolve(token)?;
        let provider = self
            .reflector
            .reflect(&command.class)
            .ok_or_else(|| HelpError::CommandNotFound(command.short_class().to_string()))?;
        debug!(token, class = %command.class, "resolved command");

        let spec = CommandSpec::from_provider(&command.name, &*provider);
        let formatter = &self.formatter;

        let mut lines = vec![
            Line::heading("USAGE"),
            Line::command(formatter.pad(&formatter.usage_line(&spec), 1)),
        ];
        for task in &spec.tasks {
            lines.push(Line::command(
                formatter.pad(&formatter.task_usage_line(&spec, task), 1),
            ));
        }

        let description = spec.long_description();
        if !description.is_empty() {
            lines.push(Line::blank());
            lines.push(Line::heading("DESCRIPTION"));
            lines.push(Line::plain(formatter.pad(&description, 1)));
        }

        let options = formatter.options_block(&spec);
        if !options.is_empty() {
            lines.push(Line::blank());
            lines.push(Line::heading("OPTIONS"));
            lines.extend(options);
        }
        Ok(lines)
    }

    fn render_class(&self, provider: &dyn MetadataProvider) -> Vec<Line> {
        let description = [provider.summary(), provider.description()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        self.formatter
            .entry(provider.short_name(), &description, None)
    }

    fn render_methods(&self, provider: &dyn MetadataProvider, name: Option<&str>) -> Vec<Line> {
        let methods: Vec<&MethodInfo> = provider
            .methods()
            .into_iter()
            .filter(|m| name.is_none_or(|wanted| m.name == wanted))
            .collect();

        let mut lines = Vec::new();
        for method in methods {
            let arguments: Vec<ArgSpec> = method
                .params
                .iter()
                .map(|param| ArgSpec::from_param(method, param))
                .collect();
            let mut usage = method.name.clone();
            for arg in &arguments {
                usage.push(' ');
                usage.push_str(&arg.synopsis());
            }

            let mut entry = self
                .formatter
                .entry(&usage, &method.doc.full_text("\n"), None);
            if name.is_some() {
                // Drop the entry's trailing blank line; parameters follow it.
                entry.pop();
                for arg in &arguments {
                    entry.push(Line::blank());
                    entry.push(Line::option(self.formatter.pad(&arg.usage(), 2)));
                    if !arg.description.is_empty() {
                        entry.push(Line::plain(self.formatter.pad(&arg.description, 3)));
                    }
                }
                entry.push(Line::blank());
            }
            lines.extend(entry);
        }
        lines
    }

    fn render_properties(&self, provider: &dyn MetadataProvider, name: Option<&str>) -> Vec<Line> {
        provider
            .properties()
            .into_iter()
            .filter(|p| name.is_none_or(|wanted| p.name == wanted))
            .flat_map(|property| {
                let option = OptionSpec::from_property(property);
                let note = option.default_note();
                self.formatter
                    .entry(&option.usage(), &option.description, note.as_deref())
            })
            .collect()
    }
}

/// Collapse whitespace so multi-line summaries fit one row.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
