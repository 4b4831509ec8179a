use std::path::Path;

use pharmgen_generate::GenerateOptions;

use crate::CliError;

/// Load generation options from a TOML file. Missing keys keep their defaults.
pub fn load_options(path: &Path) -> Result<GenerateOptions, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let options: GenerateOptions = toml::from_str(&content)?;
    Ok(options)
}

pub fn render_options(options: &GenerateOptions) -> Result<String, CliError> {
    Ok(toml::to_string_pretty(options)?)
}
