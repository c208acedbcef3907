//! Presentation layer
//!
//! Query commands build a serializable view and hand it to [`emit`], which
//! prints JSON or YAML directly or defers to a text renderer from
//! [`display`].

pub mod display;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Result, io_error};

/// Print `value` in the requested format; `text` renders the text form
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(),
{
    match format {
        OutputFormat::Text => text(),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| io_error(format!("Failed to render JSON: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
        }
    }
    Ok(())
}
