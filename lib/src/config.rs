//! Simple, general-purpose, hierarchical configuration.
//!
//! Configuration *value*s are referred to using a *path* of *name*s (slice of
//! strings), each of which walks a level down the hierarchy of *section*s.  For
//! example, `&["db", "sqlite", "db-path"]`.
//!
//! Configuration paths are case-insensitive.
//!
//! A [`Config`] implementation may or may not allow a value and a section to
//! exist at the same path.
//!
//! All configuration values are strings; [`ValueRef`] describes how to turn
//! one into a typed value.

pub mod parse;
pub mod validate;

pub trait ValueParser<T>: std::fmt::Debug {
    fn parse(&self, value: &str) -> Result<T, String>;
}

pub trait ValueValidator<T>: std::fmt::Debug {
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Everything needed to read a configuration value.
#[derive(Clone, Debug)]
pub struct ValueRef<'a, T> {
    /// Path to read the value from.
    pub names: &'a [&'a str],
    /// Default to use when there is no value at the path.
    pub def: &'a str,
    pub type_: &'a dyn ValueParser<T>,
    pub validators: &'a [&'a dyn ValueValidator<T>],
}

/// Read configuration values.
pub trait Config {
    /// Get the value at the path given by `names`, if there is one.
    fn find(&self, names: &[&str]) -> Option<&str>;

    /// Get the value at the path given by `names`, or the default `def`.
    fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
        self.find(names).unwrap_or(def)
    }
}

/// Get a value using a [reference](ValueRef).
pub fn get_ref<C, T>(config: &C, vref: &ValueRef<T>) -> Result<T, String>
where
    C: Config + ?Sized,
{
    let raw = config.get(vref.names, vref.def);
    let describe = |e: String| {
        format!("invalid configuration value ({}): {e}", vref.names.join("."))
    };
    let parsed = vref.type_.parse(raw).map_err(describe)?;
    for val in vref.validators {
        val.validate(&parsed).map_err(describe)?;
    }
    Ok(parsed)
}

/// Implementation of [`Config`] using an in-memory map.
///
/// A value and a section may not exist at the same path.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), reading the value at the path will always return the same
/// value, but there is no defined scheme for how this value is chosen.
pub mod map {
    use std::collections::HashMap;

    /// A value or a section.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum Entry {
        Value(String),
        Section(HashMap<String, Entry>),
    }

    impl Entry {
        fn find(&self, names: &[&str]) -> Option<&str> {
            match (names.split_first(), self) {
                (Some((first_name, other_names)), Entry::Section(section)) =>
                    section.get(&first_name.to_ascii_lowercase())
                        .and_then(|entry| entry.find(other_names)),
                (None, Entry::Value(value)) => Some(value.as_str()),
                _ => None,
            }
        }
    }

    /// Implementation of [`Config`](super::Config) using an in-memory map.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        cfg: Entry,
    }

    impl super::Config for Config {
        fn find(&self, names: &[&str]) -> Option<&str> {
            self.cfg.find(names)
        }
    }

    /// Copy an entry and lowercase its keys.
    fn normalise(entry: &Entry) -> Entry {
        match entry {
            Entry::Value(v) => Entry::Value(v.to_owned()),
            Entry::Section(m) => {
                let m: HashMap<String, Entry> = m.iter()
                    .map(|(k, v)| (k.to_lowercase(), normalise(v)))
                    .collect();
                Entry::Section(m)
            }
        }
    }

    /// Construct a config from a hierarchical map.
    pub fn new(cfg: HashMap<String, Entry>) -> Config {
        Config { cfg: normalise(&Entry::Section(cfg)) }
    }

    /// Construct a config from `(path, value)` pairs, with path names
    /// separated by `.` characters.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let mut root = HashMap::new();
        for (path, value) in pairs {
            let names: Vec<&str> = path.split('.').collect();
            insert(&mut root, &names, value);
        }
        new(root)
    }

    fn insert(section: &mut HashMap<String, Entry>, names: &[&str], value: &str) {
        match names.split_first() {
            Some((name, [])) => {
                section.insert((*name).to_owned(), Entry::Value(value.to_owned()));
            }
            Some((name, rest)) => {
                let entry = section.entry((*name).to_owned())
                    .or_insert_with(|| Entry::Section(HashMap::new()));
                if let Entry::Value(_) = entry {
                    *entry = Entry::Section(HashMap::new());
                }
                if let Entry::Section(child) = entry {
                    insert(child, rest, value);
                }
            }
            None => {}
        }
    }
}

/// Implementation of [`Config`] using the process's environment variables.
///
/// - The configuration values become fixed at the time of construction.
/// - If reading an environment variable fails, it is ignored.
/// - Path names are separated using `_` characters.
/// - Only environment variables starting with the prefix are included.
/// - A value and a section may exist at the same path.
/// - When reading a value, `-` characters in path names will match `_`
///   characters in environment variable names.
pub mod env {
    use std::collections::HashMap;

    /// Implementation of [`Config`](super::Config) using the process's
    /// environment variables.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        prefix: String,
        env: HashMap<String, String>,
    }

    impl Config {
        fn env_name(&self, names: &[&str]) -> String {
            let mapped_names: Vec<String> = names.iter().map(|name| {
                name.to_ascii_uppercase().replace('-', "_")
            }).collect();
            self.prefix.to_owned() + &mapped_names.join("_")
        }
    }

    impl super::Config for Config {
        fn find(&self, names: &[&str]) -> Option<&str> {
            self.env.get(&self.env_name(names)).map(String::as_str)
        }
    }

    /// Construct a config from the current process environment.
    ///
    /// Only environment variables starting with `prefix` are included, and
    /// `prefix` is removed when reading values.
    pub fn new(prefix: &str) -> Config {
        let env = std::env::vars_os()
            .filter_map(|(name_os, val_os)| {
                match (name_os.into_string(), val_os.into_string()) {
                    (Ok(name), Ok(val)) if name.starts_with(prefix) =>
                        Some((name, val)),
                    _ => None,
                }
            })
            .collect();
        Config { prefix: prefix.to_owned(), env }
    }

    #[cfg(test)]
    pub(super) fn from_vars(prefix: &str, vars: &[(&str, &str)]) -> Config {
        Config {
            prefix: prefix.to_owned(),
            env: vars.iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}

/// Implementation of [`Config`] using a YAML file.
///
/// A value and a section may not exist at the same path.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), the last matching value in the file is returned.
pub mod file {
    use std::{fs::File, path::Path};
    use super::map::{self, Entry};
    use serde_yaml::Value;

    fn parse(value: &Value) -> Entry {
        match value {
            Value::Null => Entry::Value("".to_owned()),
            Value::Bool(b) => Entry::Value(b.to_string()),
            Value::Number(n) => Entry::Value(n.to_string()),
            Value::String(s) => Entry::Value(s.to_owned()),
            Value::Sequence(s) => {
                Entry::Section(s.iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), parse(v)))
                    .collect())
            }
            Value::Mapping(m) => {
                Entry::Section(m.iter()
                    .filter_map(|(k, v)| {
                        k.as_str().map(|k_str| (k_str.to_owned(), parse(v)))
                    })
                    .collect())
            }
            Value::Tagged(tagged) => parse(&tagged.value),
        }
    }

    /// Construct a config from YAML text.
    pub fn from_str(yaml: &str) -> Result<map::Config, String> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| format!("error loading config: {e}"))?;
        from_value(&value)
    }

    fn from_value(value: &Value) -> Result<map::Config, String> {
        if let Entry::Section(e) = parse(value) {
            Ok(map::new(e))
        } else {
            Err("invalid config file: top-level must be a map".to_owned())
        }
    }

    /// Construct a config from a YAML file.
    pub fn new<P>(path: P) -> Result<map::Config, String>
    where
        P: AsRef<Path> + core::fmt::Debug
    {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("error opening file ({path:?}): {e}"))?;
        let value: Value = serde_yaml::from_reader(file)
            .map_err(|e| format!(
                "error loading config from file ({path:?}): {e}"))?;
        from_value(&value)
    }
}

/// Implementation of [`Config`] which reads from a list of other configs in
/// order, using the first one which has a value.
pub mod layered {
    /// Implementation of [`Config`](super::Config) over other configs.
    pub struct Config {
        layers: Vec<Box<dyn super::Config>>,
    }

    impl super::Config for Config {
        fn find(&self, names: &[&str]) -> Option<&str> {
            self.layers.iter().find_map(|layer| layer.find(names))
        }
    }

    /// Earlier layers take priority.
    pub fn new(layers: Vec<Box<dyn super::Config>>) -> Config {
        Config { layers }
    }
}
