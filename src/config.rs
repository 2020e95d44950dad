//! Console configuration.
//!
//! Configuration is stored in TOML format at `~/.config/li3/console.toml`
//! (or XDG equivalent), or wherever `LI3_CONSOLE_CONFIG` points. A missing
//! file means defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! script = "li3"
//! indent = 4
//! color = "auto"
//!
//! [[commands]]
//! name = "deploy"
//! class = "app\\extensions\\command\\Deploy"
//! library = "app"
//! summary = "Deploys the application to a remote host."
//!
//! [[commands.options]]
//! name = "dryRun"
//! type = "boolean"
//! description = "Print the steps without running them."
//!
//! [[commands.arguments]]
//! name = "target"
//! description = "Host alias from the deploy manifest."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::metadata::builtin::COMMAND_BASE;
use crate::metadata::{Catalog, ClassInfo, DocBlock, MethodInfo, ParamInfo, PropertyInfo, Visibility};
use crate::naming;
use crate::registry::{CommandRegistry, RegisteredCommand, validate_command_name};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LI3_CONSOLE_CONFIG";

const MAX_INDENT: usize = 16;

/// Errors that can occur when loading console configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// When to style console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Style only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Console script name printed in usage lines.
    pub script: String,
    /// Spaces per indentation level.
    pub indent: usize,
    pub color: ColorChoice,
    /// Additional commands registered next to the built-in ones.
    pub commands: Vec<CommandDefinition>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            script: "li3".to_string(),
            indent: 4,
            color: ColorChoice::Auto,
            commands: Vec::new(),
        }
    }
}

/// A command declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    /// Fully-qualified class name.
    pub class: String,
    #[serde(default = "default_library")]
    pub library: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Inherit the `--silent`, `--plain` and `--help` flags of the base command.
    #[serde(default = "default_true")]
    pub inherit_base: bool,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
    #[serde(default)]
    pub arguments: Vec<ArgumentDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub description: String,
}

fn default_library() -> String {
    "app".to_string()
}

fn default_true() -> bool {
    true
}

fn default_type() -> String {
    "string".to_string()
}

impl CommandDefinition {
    /// Validate the definition on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_command_name(&self.name)?;

        let class = self.class.trim_start_matches(naming::NAMESPACE_SEPARATOR);
        if class.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command '{}' needs a class",
                self.name
            )));
        }

        // Lookup classifies the typed name and compares short class names exactly.
        let expected = naming::classify_token(&self.name);
        if naming::short_name(class) != expected {
            return Err(ConfigError::Validation(format!(
                "Class '{}' does not match command name '{}' (expected class '{}')",
                class, self.name, expected
            )));
        }

        if self.library.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command '{}' needs a library",
                self.name
            )));
        }

        if let Some(option) = self.options.iter().find(|o| o.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Command '{}' has an option without a name (type {})",
                self.name, option.kind
            )));
        }

        if self.arguments.iter().any(|a| a.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Command '{}' has an argument without a name",
                self.name
            )));
        }

        Ok(())
    }

    pub fn class_name(&self) -> &str {
        self.class.trim_start_matches(naming::NAMESPACE_SEPARATOR)
    }

    /// Registry entry for this command.
    pub fn to_registered(&self) -> RegisteredCommand {
        RegisteredCommand::new(
            self.name.clone(),
            self.class_name().to_string(),
            self.library.clone(),
        )
    }

    /// Reflected form of this command, shaped like a declared class.
    pub fn to_class_info(&self) -> ClassInfo {
        let mut run_doc = DocBlock::default();
        for arg in &self.arguments {
            run_doc = run_doc.with_tag("param", format!("string ${} {}", arg.name, arg.description));
        }

        let params = self
            .arguments
            .iter()
            .map(|arg| match (&arg.default, arg.optional) {
                (Some(default), _) => ParamInfo::optional(arg.name.clone(), default.clone()),
                (None, true) => ParamInfo::optional(arg.name.clone(), "null"),
                (None, false) => ParamInfo::required(arg.name.clone()),
            })
            .collect();

        let properties = self
            .options
            .iter()
            .map(|option| PropertyInfo {
                name: option.name.clone(),
                visibility: Visibility::Public,
                default: option.default.clone(),
                doc: DocBlock::new(option.description.clone(), "").with_tag("var", option.kind.clone()),
            })
            .collect();

        ClassInfo {
            name: self.class_name().to_string(),
            parent: self.inherit_base.then(|| COMMAND_BASE.to_string()),
            doc: DocBlock::new(self.summary.clone(), self.description.clone()),
            methods: vec![MethodInfo {
                name: "run".to_string(),
                visibility: Visibility::Public,
                params,
                doc: run_doc,
            }],
            properties,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the default location.
    ///
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no console config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            commands = config.commands.len(),
            "loaded console config"
        );
        Ok(config)
    }

    /// Get the default configuration file path.
    ///
    /// Resolution order:
    /// - `$LI3_CONSOLE_CONFIG`
    /// - `$XDG_CONFIG_HOME/li3/console.toml`
    /// - platform config dir (e.g., `~/.config/li3/console.toml` on Linux)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(explicit) = dotenvy::var(CONFIG_ENV) {
            return Ok(PathBuf::from(explicit));
        }

        if let Ok(xdg_config) = dotenvy::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config).join("li3").join("console.toml"));
        }

        dirs::config_dir()
            .map(|p| p.join("li3").join("console.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Validate settings and every command definition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.script.trim().is_empty() {
            return Err(ConfigError::Validation("Script name cannot be empty".into()));
        }

        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "Indent must be between 1 and {MAX_INDENT}, got {}",
                self.indent
            )));
        }

        let mut seen_names = std::collections::HashSet::new();
        for command in &self.commands {
            command.validate()?;

            if !seen_names.insert(&command.name) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate command name: {}",
                    command.name
                )));
            }
        }

        Ok(())
    }

    /// Register configured commands and their metadata.
    pub fn apply(
        &self,
        registry: &mut CommandRegistry,
        catalog: &mut Catalog,
    ) -> Result<(), ConfigError> {
        for command in &self.commands {
            command.validate()?;
            if catalog.contains(command.class_name()) {
                return Err(ConfigError::Validation(format!(
                    "Class '{}' is already defined",
                    command.class_name()
                )));
            }
            registry.register(command.to_registered())?;
            catalog.insert(command.to_class_info());
        }
        Ok(())
    }

    /// Built-in registry and catalog extended with configured commands.
    pub fn environment(&self) -> Result<(CommandRegistry, Catalog), ConfigError> {
        let mut registry = CommandRegistry::builtin();
        let mut catalog = Catalog::builtin();
        self.apply(&mut registry, &mut catalog)?;
        Ok((registry, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetadataProvider, Reflector};
    use tempfile::TempDir;

    fn deploy() -> CommandDefinition {
        CommandDefinition {
            name: "deploy".into(),
            class: "app\\extensions\\command\\Deploy".into(),
            library: "app".into(),
            summary: "Deploys the application.".into(),
            description: String::new(),
            inherit_base: true,
            options: vec![OptionDefinition {
                name: "dryRun".into(),
                kind: "boolean".into(),
                default: None,
                description: "Print the steps only.".into(),
            }],
            arguments: vec![ArgumentDefinition {
                name: "target".into(),
                optional: false,
                default: None,
                description: "Host alias.".into(),
            }],
        }
    }

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.script, "li3");
        assert_eq!(config.indent, 4);
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(config.commands.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = ConsoleConfig::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.script, "li3");
    }

    #[test]
    fn test_parse_full_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("console.toml");
        std::fs::write(
            &path,
            r#"
script = "php li3.php"
indent = 2
color = "never"

[[commands]]
name = "deploy"
class = "app\\extensions\\command\\Deploy"
summary = "Deploys the application."

[[commands.options]]
name = "dryRun"
type = "boolean"
description = "Print the steps only."

[[commands.arguments]]
name = "target"
"#,
        )
        .unwrap();

        let config = ConsoleConfig::load_from(&path).unwrap();
        assert_eq!(config.script, "php li3.php");
        assert_eq!(config.indent, 2);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.commands.len(), 1);

        let deploy = &config.commands[0];
        assert_eq!(deploy.library, "app");
        assert!(deploy.inherit_base);
        assert_eq!(deploy.options[0].kind, "boolean");
        assert!(!deploy.arguments[0].optional);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("console.toml");
        std::fs::write(&path, "indent = \"wide\"").unwrap();
        assert!(matches!(
            ConsoleConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_indent_bounds() {
        let mut config = ConsoleConfig::default();
        config.indent = 0;
        assert!(config.validate().is_err());
        config.indent = 17;
        assert!(config.validate().is_err());
        config.indent = 16;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_command_name_rules() {
        let mut bad = deploy();
        bad.name = "de-ploy".into();
        assert!(bad.validate().is_err());

        let mut mismatch = deploy();
        mismatch.class = "app\\extensions\\command\\Release".into();
        let err = mismatch.validate().unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_class_must_match_classified_name_exactly() {
        let mut inner_case = deploy();
        inner_case.name = "mytask".into();
        inner_case.class = "app\\MyTask".into();
        let err = inner_case.validate().unwrap_err();
        assert!(err.to_string().contains("expected class 'Mytask'"));

        inner_case.name = "myTask".into();
        assert!(inner_case.validate().is_ok());
    }

    #[test]
    fn test_configured_command_resolves_by_name() {
        let mut task = deploy();
        task.name = "myTask".into();
        task.class = "app\\MyTask".into();
        let config = ConsoleConfig {
            commands: vec![task],
            ..Default::default()
        };
        let (registry, _) = config.environment().unwrap();
        assert_eq!(registry.resolve("myTask").unwrap().class, "app\\MyTask");
    }

    #[test]
    fn test_apply_rejects_short_class_clash() {
        let mut shadow = deploy();
        shadow.name = "Test".into();
        shadow.class = "app\\extensions\\command\\Test".into();
        assert!(shadow.validate().is_ok());

        let config = ConsoleConfig {
            commands: vec![shadow],
            ..Default::default()
        };
        let err = config.environment().unwrap_err();
        assert!(err.to_string().contains("already provides command class 'Test'"));
    }

    #[test]
    fn test_duplicate_command_names() {
        let config = ConsoleConfig {
            commands: vec![deploy(), deploy()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate command name"));
    }

    #[test]
    fn test_apply_registers_and_reflects() {
        let config = ConsoleConfig {
            commands: vec![deploy()],
            ..Default::default()
        };
        let (registry, catalog) = config.environment().unwrap();

        let registered = registry.resolve("deploy").unwrap();
        assert_eq!(registered.library, "app");

        let reflected = catalog.reflect(&registered.class).unwrap();
        assert_eq!(reflected.summary(), "Deploys the application.");
        let flags: Vec<_> = reflected.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(flags, ["dryRun", "silent", "plain", "help", "request", "response"]);

        let run = reflected.method("run").unwrap();
        assert_eq!(run.param_description("target").as_deref(), Some("Host alias."));
    }

    #[test]
    fn test_apply_rejects_builtin_clash() {
        let mut clash = deploy();
        clash.name = "test".into();
        clash.class = "lithium\\console\\command\\Test".into();
        let config = ConsoleConfig {
            commands: vec![clash],
            ..Default::default()
        };
        assert!(config.environment().is_err());
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
        assert_eq!(ColorChoice::Never.to_string(), "never");
    }
}
