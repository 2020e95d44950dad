//! Command registry.
//!
//! Maps short command names to the class that implements them and the
//! library that provides it. Built-in commands come from a static table;
//! configuration may register more at start-up. Once built the registry is
//! read-only.
//!
//! # Lookup
//!
//! | Token | Looked up as |
//! |-------|--------------|
//! | `test` | `Test` |
//! | `test-with-dashes` | `TestWithDashes` |
//! | `lithium\console\command\Test` | exact class |
//!
//! ```ignore
//! let registry = CommandRegistry::builtin();
//! let test = registry.resolve("test")?;
//! assert_eq!(test.class, "lithium\\console\\command\\Test");
//! ```

use std::borrow::Cow;

use crate::config::ConfigError;
use crate::error::{HelpError, HelpResult};
use crate::naming::{self, NAMESPACE_SEPARATOR};

/// Library the built-in commands belong to.
pub const CORE_LIBRARY: &str = "lithium";

/// A command known to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    /// Name typed on the command line (e.g. "test").
    pub name: Cow<'static, str>,
    /// Fully-qualified implementing class.
    pub class: Cow<'static, str>,
    /// Library providing the command.
    pub library: Cow<'static, str>,
}

impl RegisteredCommand {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        class: impl Into<Cow<'static, str>>,
        library: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            library: library.into(),
        }
    }

    /// Class name without its namespace.
    pub fn short_class(&self) -> &str {
        naming::short_name(&self.class)
    }
}

const fn core(name: &'static str, class: &'static str) -> RegisteredCommand {
    RegisteredCommand {
        name: Cow::Borrowed(name),
        class: Cow::Borrowed(class),
        library: Cow::Borrowed(CORE_LIBRARY),
    }
}

/// Commands shipped with the console, in listing order.
pub static BUILTIN_COMMANDS: &[RegisteredCommand] = &[
    core("create", "lithium\\console\\command\\Create"),
    core("g11n", "lithium\\console\\command\\G11n"),
    core("help", "lithium\\console\\command\\Help"),
    core("library", "lithium\\console\\command\\Library"),
    core("route", "lithium\\console\\command\\Route"),
    core("test", "lithium\\console\\command\\Test"),
];

/// Check a command name against the naming rules.
///
/// Names are what users type, so they may not contain the separators that
/// token normalisation strips (`-`, `_`), whitespace, or a namespace
/// separator.
pub fn validate_command_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation("Command name cannot be empty".into()));
    }

    if name.contains(['-', '_']) {
        return Err(ConfigError::Validation(format!(
            "Command name '{name}' cannot contain dashes or underscores"
        )));
    }

    if name.contains(NAMESPACE_SEPARATOR) || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "Command name '{name}' cannot contain whitespace or namespace separators"
        )));
    }

    Ok(())
}

/// Registry of commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in commands.
    pub fn builtin() -> Self {
        Self {
            commands: BUILTIN_COMMANDS.to_vec(),
        }
    }

    /// Add a command. Names and classes must be unique.
    pub fn register(&mut self, command: RegisteredCommand) -> Result<(), ConfigError> {
        validate_command_name(&command.name)?;

        if command.class.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command '{}' has no class",
                command.name
            )));
        }

        if self.commands.iter().any(|c| c.name == command.name) {
            return Err(ConfigError::Validation(format!(
                "Command '{}' already exists",
                command.name
            )));
        }

        if self.commands.iter().any(|c| c.class == command.class) {
            return Err(ConfigError::Validation(format!(
                "Class '{}' is already registered",
                command.class
            )));
        }

        // `resolve` matches on the short class name, so it must be unique too.
        if let Some(existing) = self
            .commands
            .iter()
            .find(|c| c.short_class() == command.short_class())
        {
            return Err(ConfigError::Validation(format!(
                "Command '{}' already provides command class '{}'",
                existing.name,
                command.short_class()
            )));
        }

        tracing::debug!(name = %command.name, class = %command.class, "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// All commands in registration order.
    pub fn all(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    /// Command by exact registered name.
    pub fn get(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Resolve a user-supplied token.
    ///
    /// Tokens containing a namespace separator are matched against class
    /// names verbatim. Everything else is normalised with
    /// [`naming::classify_token`] and matched exactly against short class
    /// names; there is no partial or case-insensitive matching.
    pub fn resolve(&self, token: &str) -> HelpResult<&RegisteredCommand> {
        if token.contains(NAMESPACE_SEPARATOR) {
            let class = token.trim_start_matches(NAMESPACE_SEPARATOR);
            return self
                .commands
                .iter()
                .find(|c| c.class == class)
                .ok_or_else(|| HelpError::CommandNotFound(class.to_string()));
        }

        let wanted = naming::classify_token(token);
        self.commands
            .iter()
            .find(|c| c.short_class() == wanted)
            .ok_or(HelpError::CommandNotFound(wanted))
    }

    /// Commands grouped by library, groups ordered by first appearance.
    pub fn by_library(&self) -> Vec<(&str, Vec<&RegisteredCommand>)> {
        let mut groups: Vec<(&str, Vec<&RegisteredCommand>)> = Vec::new();
        for command in &self.commands {
            let library = command.library.as_ref();
            match groups.iter_mut().find(|(name, _)| *name == library) {
                Some((_, members)) => members.push(command),
                None => groups.push((library, vec![command])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builtin() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.len(), BUILTIN_COMMANDS.len());
        assert!(registry.get("test").is_some());
        assert!(registry.get("Test").is_none());
    }

    #[test]
    fn test_resolve_lowercase_and_capitalized() {
        let registry = CommandRegistry::builtin();
        let lower = registry.resolve("test").unwrap();
        let upper = registry.resolve("Test").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.class, "lithium\\console\\command\\Test");
    }

    #[test]
    fn test_resolve_by_class_name() {
        let registry = CommandRegistry::builtin();
        let cmd = registry.resolve("lithium\\console\\command\\Help").unwrap();
        assert_eq!(cmd.name, "help");

        let cmd = registry.resolve("\\lithium\\console\\command\\Help").unwrap();
        assert_eq!(cmd.name, "help");
    }

    #[test]
    fn test_resolve_dashes_reports_transformed_name() {
        let registry = CommandRegistry::builtin();
        let err = registry.resolve("test-with-dashes").unwrap_err();
        assert_eq!(err, HelpError::CommandNotFound("TestWithDashes".into()));

        let err = registry.resolve("test_with_underscores").unwrap_err();
        assert_eq!(err.to_string(), "Command `TestWithUnderscores` not found");
    }

    #[test]
    fn test_resolve_never_partially_matches() {
        let registry = CommandRegistry::builtin();
        assert!(registry.resolve("tes").is_err());
        assert!(registry.resolve("tests").is_err());
        assert!(registry.resolve("TEST").is_err());
    }

    #[test]
    fn test_register_rejects_separators() {
        let mut registry = CommandRegistry::new();
        for bad in ["", "my-cmd", "my_cmd", "my cmd", "app\\cmd"] {
            let result = registry.register(RegisteredCommand::new(bad, "app\\Cmd", "app"));
            assert!(result.is_err(), "accepted {bad:?}");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = CommandRegistry::builtin();
        let err = registry
            .register(RegisteredCommand::new("test", "app\\extensions\\command\\Test", "app"))
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let err = registry
            .register(RegisteredCommand::new("other", "lithium\\console\\command\\Test", "app"))
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_register_rejects_duplicate_short_class() {
        let mut registry = CommandRegistry::builtin();
        let err = registry
            .register(RegisteredCommand::new("Test", "app\\extensions\\command\\Test", "app"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Command 'test' already provides command class 'Test'"
        );
        assert_eq!(registry.len(), BUILTIN_COMMANDS.len());
        assert_eq!(
            registry.resolve("Test").unwrap().class,
            "lithium\\console\\command\\Test"
        );
    }

    #[test]
    fn test_by_library_groups_in_first_seen_order() {
        let mut registry = CommandRegistry::builtin();
        registry
            .register(RegisteredCommand::new("deploy", "app\\extensions\\command\\Deploy", "app"))
            .unwrap();

        let groups = registry.by_library();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "lithium");
        assert_eq!(groups[0].1.len(), BUILTIN_COMMANDS.len());
        assert_eq!(groups[1].0, "app");
        assert_eq!(groups[1].1[0].name, "deploy");
    }
}
