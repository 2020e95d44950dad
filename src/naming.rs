//! Name transformations shared by command lookup and flag rendering.

/// Namespace separator used by fully-qualified class names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Turn a command token into the class name it is looked up under.
///
/// Each `-` or `_` separated segment gets its first character upper-cased;
/// every other character is left exactly as typed.
///
/// `test` becomes `Test`, `test-with-dashes` becomes `TestWithDashes`.
pub fn classify_token(token: &str) -> String {
    token
        .split(['-', '_'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a property name to its command-line flag form.
///
/// `justAssertions` becomes `just-assertions`, `routes_file` becomes
/// `routes-file`.
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Last segment of a fully-qualified class name.
pub fn short_name(class: &str) -> &str {
    class
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or(class)
}

/// Map a dotted class path (`lithium.util.Inflector`) to a class name.
pub fn class_from_path(path: &str) -> String {
    path.trim()
        .trim_start_matches(NAMESPACE_SEPARATOR)
        .replace('.', "\\")
}
