use std::path::PathBuf;
use super::ValueParser;

#[derive(Clone, Debug)]
pub struct StringParser { }

impl ValueParser<String> for self::StringParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }
}

pub const STRING: StringParser = StringParser {};

#[derive(Clone, Debug)]
pub struct BoolParser { }

impl ValueParser<bool> for self::BoolParser {
    fn parse(&self, value: &str) -> Result<bool, String> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(format!("invalid boolean value: {value}")),
        }
    }
}

pub const BOOL: BoolParser = BoolParser {};

/// Expands a leading `~`.
#[derive(Clone, Debug)]
pub struct FilePathParser { }

impl ValueParser<PathBuf> for self::FilePathParser {
    fn parse(&self, value: &str) -> Result<PathBuf, String> {
        if value.is_empty() {
            Err("file path is empty".to_owned())
        } else {
            Ok(PathBuf::from(shellexpand::tilde(value).into_owned()))
        }
    }
}

pub const FILE_PATH: FilePathParser = FilePathParser {};

#[derive(Clone, Debug)]
pub struct WebPortParser { }

impl ValueParser<u16> for self::WebPortParser {
    fn parse(&self, value: &str) -> Result<u16, String> {
        match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(format!("invalid port number: {value}")),
            Ok(port) => Ok(port),
        }
    }
}

pub const WEB_PORT: WebPortParser = WebPortParser {};
