//! Static descriptors for the framework classes the console documents.
//!
//! Doc-comments are kept verbatim and parsed when the [`super::Catalog`] is
//! built, so what `li3 api` shows is exactly what the class declares.

use super::{ClassInfo, DocBlock, MethodInfo, ParamInfo, PropertyInfo, Visibility};

/// Base class every console command extends.
pub const COMMAND_BASE: &str = "lithium\\console\\Command";

#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub visibility: Visibility,
    pub default: Option<&'static str>,
    pub doc: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamDescriptor {
    pub name: &'static str,
    /// `None` for required parameters, otherwise the default literal.
    pub default: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub visibility: Visibility,
    pub params: &'static [ParamDescriptor],
    pub doc: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassDescriptor {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub doc: &'static str,
    pub properties: &'static [PropertyDescriptor],
    pub methods: &'static [MethodDescriptor],
}

impl ClassDescriptor {
    pub fn to_class_info(&self) -> ClassInfo {
        ClassInfo {
            name: self.name.to_string(),
            parent: self.parent.map(str::to_string),
            doc: DocBlock::parse(self.doc),
            methods: self
                .methods
                .iter()
                .map(|m| MethodInfo {
                    name: m.name.to_string(),
                    visibility: m.visibility,
                    params: m
                        .params
                        .iter()
                        .map(|p| match p.default {
                            Some(default) => ParamInfo::optional(p.name, default),
                            None => ParamInfo::required(p.name),
                        })
                        .collect(),
                    doc: DocBlock::parse(m.doc),
                })
                .collect(),
            properties: self
                .properties
                .iter()
                .map(|p| PropertyInfo {
                    name: p.name.to_string(),
                    visibility: p.visibility,
                    default: p.default.map(str::to_string),
                    doc: DocBlock::parse(p.doc),
                })
                .collect(),
        }
    }
}

const fn public(
    name: &'static str,
    default: Option<&'static str>,
    doc: &'static str,
) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        visibility: Visibility::Public,
        default,
        doc,
    }
}

const fn protected(name: &'static str, doc: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        visibility: Visibility::Protected,
        default: None,
        doc,
    }
}

const fn method(
    name: &'static str,
    params: &'static [ParamDescriptor],
    doc: &'static str,
) -> MethodDescriptor {
    MethodDescriptor {
        name,
        visibility: Visibility::Public,
        params,
        doc,
    }
}

const fn helper(name: &'static str, params: &'static [ParamDescriptor]) -> MethodDescriptor {
    MethodDescriptor {
        name,
        visibility: Visibility::Protected,
        params,
        doc: "",
    }
}

const fn req(name: &'static str) -> ParamDescriptor {
    ParamDescriptor {
        name,
        default: None,
    }
}

const fn opt(name: &'static str, default: &'static str) -> ParamDescriptor {
    ParamDescriptor {
        name,
        default: Some(default),
    }
}

pub static CLASSES: &[ClassDescriptor] = &[
    COMMAND,
    CREATE,
    G11N,
    HELP,
    LIBRARY,
    ROUTE,
    TEST,
    INFLECTOR,
    LIBRARIES,
    MESSAGE,
    MOCK_COMMAND_HELP,
];

// =============================================================================
// Console commands
// =============================================================================

const COMMAND: ClassDescriptor = ClassDescriptor {
    name: COMMAND_BASE,
    parent: None,
    doc: r#"/**
 * All Commands to be run from the Lithium console must extend this class.
 *
 * The `run()` method is automatically called if it exists. Otherwise, if a
 * method does not exist the `help` command will be run.
 */"#,
    properties: &[
        public(
            "silent",
            Some("false"),
            r#"/**
     * Only shows error output.
     *
     * @var boolean
     */"#,
        ),
        public(
            "plain",
            Some("false"),
            r#"/**
     * Enables plain output by disabling any colorization.
     *
     * @var boolean
     */"#,
        ),
        public(
            "help",
            Some("false"),
            r#"/**
     * If set to `true` will run the command with help output.
     *
     * @var boolean
     */"#,
        ),
        public(
            "request",
            None,
            r#"/**
     * The Request object.
     *
     * @var object
     */"#,
        ),
        public(
            "response",
            None,
            r#"/**
     * The Response object.
     *
     * @var object
     */"#,
        ),
        protected(
            "_classes",
            r#"/**
     * Dynamic dependencies.
     *
     * @var array
     */"#,
        ),
    ],
    methods: &[
        method(
            "out",
            &[opt("output", "null"), opt("options", "['nl' => 1]")],
            r#"/**
     * Writes a string to the output stream.
     *
     * @param string|array $output The string or an array of strings to write.
     * @param mixed $options When passed an integer or boolean it is used as the number of
     *        newlines, when passed a string it is interpreted as style to use.
     * @return integer
     */"#,
        ),
        method(
            "error",
            &[opt("error", "null"), opt("options", "['nl' => 1]")],
            r#"/**
     * Writes a string to error stream.
     *
     * @param string|array $error The string or an array of strings to write.
     * @param mixed $options See `out()`.
     * @return integer
     */"#,
        ),
        helper("_response", &[req("type"), req("string"), req("options")]),
    ],
};

const CREATE: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\Create",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * The `create` command allows you to rapidly develop your models, views, controllers, and tests
 * by generating the minimum code necessary to test and run your application.
 *
 * `li3 create --template=controller Posts`
 * `li3 create --template=model Posts`
 */"#,
    properties: &[
        public(
            "library",
            Some("app"),
            r#"/**
     * Name of library to use.
     *
     * @var string
     */"#,
        ),
        public(
            "template",
            None,
            r#"/**
     * The name of the template to use to generate the file. This allows you to add a custom
     * template to be used in place of the core template for each command. Place templates in
     * `<library>\extensions\command\create\template`.
     *
     * @var string
     */"#,
        ),
        protected("_library", "/** Holds library data from `lithium\\core\\Libraries::get()`. */"),
        protected("_commands", "/** Class name of the commands. */"),
    ],
    methods: &[
        method(
            "run",
            &[opt("command", "null")],
            r#"/**
     * Run the create command. Takes `$command` and delegates to `$command::$method`.
     *
     * @param string $command
     * @return boolean
     */"#,
        ),
        helper("_execute", &[req("command")]),
        helper("_default", &[req("name")]),
    ],
};

const G11N: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\G11n",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * The `G11n` set of commands deals with the extraction and merging of message templates.
 */"#,
    properties: &[],
    methods: &[
        method(
            "run",
            &[],
            r#"/**
     * The main method of the command.
     *
     * @return void
     */"#,
        ),
    ],
};

const HELP: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\Help",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * Get information about a particular class including methods, properties,
 * and descriptions.
 */"#,
    properties: &[],
    methods: &[
        method(
            "run",
            &[opt("command", "null")],
            r#"/**
     * Auto run the help command.
     *
     * @param string $command Name of the command to return help about.
     * @return boolean
     */"#,
        ),
        method(
            "api",
            &[opt("class", "null"), opt("type", "null"), opt("name", "null")],
            r#"/**
     * Gets the API for the class.
     *
     * @param string $class fully namespaced class in dot notation
     * @param string $type method|property
     * @param string $name the name of the method or property
     * @return void
     */"#,
        ),
        helper("_methods", &[req("class"), opt("options", "[]")]),
        helper("_properties", &[req("class"), opt("options", "[]")]),
        helper("_render", &[req("params")]),
    ],
};

const LIBRARY: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\Library",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * The Library command is used to archive and extract Phar::GZ archives. Requires zlib extension.
 *
 * In addition, the library command can also be used to interact with a plugin server.
 */"#,
    properties: &[
        public(
            "conf",
            None,
            r#"/**
     * Absolute path to config file.
     *
     * @var string
     */"#,
        ),
        public(
            "path",
            None,
            r#"/**
     * Path to where plugins will be installed. Relative to current working directory.
     *
     * @var string
     */"#,
        ),
        public(
            "server",
            Some("lab.li3.me"),
            r#"/**
     * Server host to query for plugins.
     *
     * @var string
     */"#,
        ),
        public(
            "force",
            Some("false"),
            r#"/**
     * Force operation to complete. Typically used for overwriting files.
     *
     * @var boolean
     */"#,
        ),
    ],
    methods: &[
        method(
            "extract",
            &[opt("name", "'new'"), opt("result", "null")],
            r#"/**
     * Extract an archive into a path. If one param exists, the app.phar.gz template will be
     * used. If both parameters exist, then the first will be the template and the second will
     * be the name of the extracted archive.
     *
     * @param string $name if only param, command.phar.gz will be used as the template.
     * @param string $result path to the extracted archive.
     * @return boolean
     */"#,
        ),
        method(
            "archive",
            &[opt("name", "null"), opt("result", "null")],
            r#"/**
     * Create the Phar::GZ archive from a given directory.
     *
     * @param string $name the name of the directory to archive.
     * @param string $result name of the archive file, defaults to the directory name.
     * @return boolean
     */"#,
        ),
        method(
            "find",
            &[opt("type", "'plugins'")],
            r#"/**
     * List all the plugins and extensions available on the server.
     *
     * @param string $type plugins|extensions
     * @return void
     */"#,
        ),
    ],
};

const ROUTE: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\Route",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * The route command lets you inspect your routes and issue requests against the router.
 */"#,
    properties: &[
        public(
            "routesFile",
            None,
            r#"/**
     * Override the default 'routes.php' file location.
     *
     * @var string
     */"#,
        ),
        public(
            "env",
            Some("development"),
            r#"/**
     * The environment to use when loading the routes.
     *
     * @var string
     */"#,
        ),
    ],
    methods: &[
        method(
            "run",
            &[],
            r#"/**
     * Lists all connected routes to the router. See the `all()` method for details and
     * examples.
     *
     * @return void
     */"#,
        ),
        method(
            "show",
            &[],
            r#"/**
     * Returns the corresponding params for a given URL and an optional request method.
     *
     * @return array Array with the route information.
     */"#,
        ),
    ],
};

const TEST: ClassDescriptor = ClassDescriptor {
    name: "lithium\\console\\command\\Test",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * Runs a given set of tests and outputs the results.
 *
 * @see lithium\test
 */"#,
    properties: &[
        public(
            "filters",
            None,
            r#"/**
     * Used as the exclusive filter.
     *
     * @var string
     */"#,
        ),
        public(
            "format",
            Some("txt"),
            r#"/**
     * Format to use for rendering results. Any other format than `txt` will
     * cause the command to enter quiet mode, surpressing headers and any other
     * decoration.
     *
     * @var string Either `txt` or `json`.
     */"#,
        ),
        public(
            "verbose",
            Some("false"),
            r#"/**
     * Enable verbose output especially for the `txt` format.
     *
     * @var boolean
     */"#,
        ),
        public(
            "justAssertions",
            Some("false"),
            r#"/**
     * Enable displaying of just the assertions.
     *
     * @var boolean
     */"#,
        ),
        protected(
            "_handlers",
            "/** An array of closures, mapped by type, which are set up to handle different test output formats. */",
        ),
    ],
    methods: &[
        method(
            "run",
            &[opt("path", "null")],
            r#"/**
     * Runs tests given a path to a directory or file containing tests. The path to the
     * test(s) may be absolute or relative to the current working directory.
     *
     * ```
     * li3 test lithium/tests/cases/core/ObjectTest.php
     * li3 test lithium/tests/cases/core
     * ```
     *
     * @param string $path Absolute or relative path to tests or a file containing tests.
     * @return integer|boolean Will (indirectly) exit with status `1` if one or more tests
     *         failed, `0` if all passed. `false` when no tests were executed.
     */"#,
        ),
        helper("_path", &[req("path")]),
    ],
};

// =============================================================================
// Framework classes
// =============================================================================

const INFLECTOR: ClassDescriptor = ClassDescriptor {
    name: "lithium\\util\\Inflector",
    parent: None,
    doc: r#"/**
 * Utility for modifying format of words. Change singular to plural and vice versa.
 * Under_score a CamelCased word and vice versa. Replace spaces and special characters.
 * Create a human readable word from the others. Used when consistency in naming
 * conventions must be enforced.
 */"#,
    properties: &[
        protected("_transliteration", "/** Contains a default map of accented and special characters to ASCII characters. */"),
        protected("_uninflected", "/** Indexed array of words which are the same in both singular and plural form. */"),
        protected("_singular", "/** Contains the list of pluralization rules. */"),
        protected("_plural", "/** Contains the list of pluralization rules. */"),
    ],
    methods: &[
        method(
            "rules",
            &[req("type"), opt("config", "[]")],
            r#"/**
     * Gets or adds inflection and transliteration rules.
     *
     * @param string $type Either `'transliteration'`, `'uninflected'`, `'singular'` or `'plural'`.
     * @param array $config
     * @return mixed If `$config` is empty, returns the rules list specified
     *         by `$type`, otherwise returns `null`.
     */"#,
        ),
        method(
            "pluralize",
            &[req("word")],
            r#"/**
     * Changes the form of a word from singular to plural.
     *
     * @param string $word Word in singular form.
     * @return string Word in plural form.
     */"#,
        ),
        method(
            "singularize",
            &[req("word")],
            r#"/**
     * Changes the form of a word from plural to singular.
     *
     * @param string $word Word in plural form.
     * @return string Word in singular form.
     */"#,
        ),
        method(
            "reset",
            &[],
            r#"/**
     * Clears local in-memory caches. Can be used to force a full-cache clear when updating
     * inflection rules mid-way through request execution.
     */"#,
        ),
        method(
            "camelize",
            &[req("word"), opt("cased", "true")],
            r#"/**
     * Takes a under_scored word and turns it into a CamelCased or camelBack word
     *
     * @param string $word An under_scored or slugged word (i.e. `'red_bike'` or `'red-bike'`).
     * @param boolean $cased If false, first character is not upper cased
     * @return string CamelCased version of the word (i.e. `'RedBike'`).
     */"#,
        ),
        method(
            "underscore",
            &[req("word")],
            r#"/**
     * Takes a CamelCased version of a word and turns it into an under_scored one.
     *
     * @param string $word CamelCased version of a word (i.e. `'RedBike'`).
     * @return string Under_scored version of the workd (i.e. `'red_bike'`).
     */"#,
        ),
        method(
            "slug",
            &[req("string"), opt("replacement", "'-'")],
            r#"/**
     * Returns a string with all spaces converted to given replacement and
     * non word characters removed.
     *
     * @param string $string An arbitrary string to convert.
     * @param string $replacement The replacement to use for spaces.
     * @return string The converted string.
     */"#,
        ),
        method(
            "humanize",
            &[req("word"), opt("separator", "'_'")],
            r#"/**
     * Takes an under_scored version of a word and turns it into an human- readable form
     * by replacing underscores with a space, and by upper casing the initial character.
     *
     * @param string $word Under_scored version of a word (i.e. `'red_bike'`).
     * @param string $separator The separator character used in the initial string.
     * @return string Human readable version of the word (i.e. `'Red Bike'`).
     */"#,
        ),
        method(
            "tableize",
            &[req("className")],
            r#"/**
     * Takes a CamelCased class name and returns corresponding under_scored table name.
     *
     * @param string $className CamelCased class name (i.e. `'Post'`).
     * @return string Under_scored and plural table name (i.e. `'posts'`).
     */"#,
        ),
        method(
            "classify",
            &[req("tableName")],
            r#"/**
     * Takes an under_scored table name and returns corresponding class name.
     *
     * @param string $tableName Under_scored and plural table name (i.e. `'posts'`).
     * @return string Singular and CamelCased version of a table name (i.e. `'Post'`).
     */"#,
        ),
        helper("_enclose", &[req("string")]),
    ],
};

const LIBRARIES: ClassDescriptor = ClassDescriptor {
    name: "lithium\\core\\Libraries",
    parent: None,
    doc: r#"/**
 * Manages all aspects of class and file location, naming and mapping. Implements auto-loading for
 * the Lithium core, as well as all applications, plugins and vendor libraries registered.
 *
 * ### Auto-loading classes
 *
 * Lithium defines several rules, based on the PSR-0 standard, that all libraries are expected
 * to follow: class names map directly to file paths, namespace separators become directory
 * separators, and every library is registered under a unique name.
 *
 * ### Class locating
 *
 * `Libraries::locate()` finds classes by type (i.e. `'command'`, `'model'`) across every
 * registered library, in registration order.
 */"#,
    properties: &[
        protected("_configurations", "/** Stores the library configuration settings. */"),
        protected("_paths", "/** Contains a cascading list of search path templates. */"),
        protected("_cachedPaths", "/** Holds cached class paths generated by `path()`. */"),
    ],
    methods: &[
        method(
            "add",
            &[req("name"), opt("config", "[]")],
            r#"/**
     * Adds a class library from which files can be loaded.
     *
     * The `add()` method registers a named library configuration to your application, and is
     * used to allow the framework to auto-load classes on an as-needed basis.
     *
     * ### Adding libraries to your application
     *
     * In Lithium, libraries represent the broadest unit of class organization in an
     * application, and _everything_ is a library; this includes your application, and the
     * Lithium framework itself.
     *
     * @param string $name Library name, i.e. `'app'`, `'lithium'`, `'pear'` or `'aura'`.
     * @param array $config Specifies where the library is in the filesystem, and how classes
     *        should be loaded from it.
     * @return array Returns the resulting set of options created for this library.
     */"#,
        ),
        method(
            "get",
            &[opt("name", "null"), opt("key", "null")],
            r#"/**
     * Returns configuration for given name.
     *
     * @param string $name Registered library to retrieve configuration for.
     * @param string $key Optional key name.
     * @return mixed Configuration for library or a single value.
     */"#,
        ),
        method(
            "remove",
            &[req("name")],
            r#"/**
     * Removes a registered library, and unregister's the library's autoloader, if it has one.
     *
     * @param mixed $name A string or array of library names indicating the libraries you wish
     *        to remove.
     */"#,
        ),
        method(
            "locate",
            &[req("type"), opt("name", "null"), opt("options", "[]")],
            r#"/**
     * Finds the classes or namespaces belonging to a particular library.
     *
     * @param string $type The type of class to search for.
     * @param string $name The name of a particular class to search for.
     * @param array $options Options for locating the class.
     * @return mixed If `$name` is specified, returns the name of the first class found that
     *         matches `$name` and `$type`, or `null` if none are found.
     */"#,
        ),
        helper("_params", &[req("type"), opt("name", "'*'")]),
    ],
};

const MESSAGE: ClassDescriptor = ClassDescriptor {
    name: "lithium\\net\\Message",
    parent: None,
    doc: r#"/**
 * Base message class for any URI based request/response.
 *
 * @see http://tools.ietf.org/html/rfc3986#section-1.1.1
 */"#,
    properties: &[
        public(
            "scheme",
            Some("tcp"),
            r#"/**
     * The URI scheme.
     *
     * @var string
     */"#,
        ),
        public(
            "host",
            Some("localhost"),
            r#"/**
     * The hostname for this endpoint.
     *
     * @var string
     */"#,
        ),
        public(
            "port",
            None,
            r#"/**
     * The port for this endpoint.
     *
     * @var string
     */"#,
        ),
        public(
            "path",
            None,
            r#"/**
     * Absolute path of the request.
     *
     * @var string
     */"#,
        ),
        public(
            "username",
            None,
            r#"/**
     * The username for this endpoint.
     *
     * @var string
     */"#,
        ),
        public(
            "password",
            None,
            r#"/**
     * The password for this endpoint.
     *
     * @var string
     */"#,
        ),
        public(
            "body",
            None,
            r#"/**
     * The body of the message.
     *
     * @var array
     */"#,
        ),
    ],
    methods: &[
        method(
            "__construct",
            &[opt("config", "[]")],
            r#"/**
     * Constructor. Adds config values to the public properties when a new object is created.
     *
     * @param array $config Configuration options.
     */"#,
        ),
        method(
            "body",
            &[opt("data", "null"), opt("options", "[]")],
            r#"/**
     * Add body parts.
     *
     * @param mixed $data
     * @param array $options
     *        - `'buffer'`: split the body string
     * @return array
     */"#,
        ),
        method(
            "to",
            &[req("format"), opt("options", "[]")],
            r#"/**
     * Converts the data in the record set to a different format, i.e. an array.
     *
     * @param string $format Format to convert to.
     * @param array $options
     * @return mixed
     */"#,
        ),
    ],
};

const MOCK_COMMAND_HELP: ClassDescriptor = ClassDescriptor {
    name: "lithium\\tests\\mocks\\console\\command\\MockCommandHelp",
    parent: Some(COMMAND_BASE),
    doc: r#"/**
 * This is the Mock Command Help.
 */"#,
    properties: &[
        public(
            "long",
            Some("default"),
            r#"/**
     * This is a long param.
     *
     * @var string
     */"#,
        ),
        public(
            "blong",
            Some("true"),
            r#"/**
     * This is a bool param.
     *
     * @var boolean
     */"#,
        ),
        public(
            "s",
            Some("true"),
            r#"/**
     * This is a short param.
     *
     * @var boolean
     */"#,
        ),
        protected("_dontShow", "/** This is protected. */"),
    ],
    methods: &[
        method(
            "run",
            &[],
            r#"/**
     * This is the run command so dont show me.
     *
     * @return boolean
     */"#,
        ),
        method(
            "sampleTaskWithRequiredArgs",
            &[req("arg1"), req("arg2")],
            r#"/**
     * This is a task with required args.
     *
     * @param string $arg1 This is the first required arg.
     * @param string $arg2 This is the second required arg.
     * @return boolean
     */"#,
        ),
        method(
            "sampleTaskWithOptionalArgs",
            &[opt("arg1", "null"), opt("arg2", "null")],
            r#"/**
     * This is a task with optional args.
     *
     * @param string $arg1 This is the first optional arg.
     * @param string $arg2 This is the second optional arg.
     * @return boolean
     */"#,
        ),
        helper("_sampleHelper", &[]),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn class_names_are_unique() {
        let mut seen = HashSet::new();
        for class in CLASSES {
            assert!(seen.insert(class.name), "duplicate class {}", class.name);
        }
    }

    #[test]
    fn every_parent_is_described() {
        let names: HashSet<_> = CLASSES.iter().map(|c| c.name).collect();
        for class in CLASSES {
            if let Some(parent) = class.parent {
                assert!(names.contains(parent), "{} extends unknown {}", class.name, parent);
            }
        }
    }

    #[test]
    fn every_class_has_a_summary() {
        for class in CLASSES {
            let info = class.to_class_info();
            assert!(!info.doc.summary.is_empty(), "{} lacks a summary", class.name);
        }
    }

    #[test]
    fn test_command_declares_options_in_order() {
        let info = TEST.to_class_info();
        let names: Vec<_> = info.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["filters", "format", "verbose", "justAssertions", "_handlers"]);
        assert_eq!(info.properties[2].declared_type(), "boolean");
    }

    #[test]
    fn tags_are_kept_out_of_summaries() {
        for class in CLASSES {
            let info = class.to_class_info();
            assert!(!info.doc.summary.contains('@'), "{} summary has a tag", class.name);
            for property in &info.properties {
                assert!(
                    !property.doc.summary.contains("@var"),
                    "{}::{} summary has a tag",
                    class.name,
                    property.name
                );
            }
        }

        let command = COMMAND.to_class_info();
        let classes = command.properties.iter().find(|p| p.name == "_classes").unwrap();
        assert_eq!(classes.doc.summary, "Dynamic dependencies.");
        assert_eq!(classes.declared_type(), "array");
    }

    #[test]
    fn run_parameter_is_documented() {
        let info = TEST.to_class_info();
        let run = info.methods.iter().find(|m| m.name == "run").unwrap();
        assert!(run.params[0].optional);
        assert_eq!(
            run.param_description("path").as_deref(),
            Some("Absolute or relative path to tests or a file containing tests.")
        );
    }
}
