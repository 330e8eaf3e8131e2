use super::ValueValidator;

/// Absolute URL path, without a trailing `/` unless it is the root.
#[derive(Clone, Debug)]
pub struct WebPathValidator { }

impl ValueValidator<String> for self::WebPathValidator {
    fn validate(&self, path: &String) -> Result<(), String> {
        if !path.starts_with('/') {
            Err(format!("path must start with / character: {path}"))
        } else if path.len() > 1 && path.ends_with('/') {
            Err(format!("path must not end with / character: {path}"))
        } else {
            Ok(())
        }
    }
}

pub const WEB_PATH: &WebPathValidator = &WebPathValidator {};
