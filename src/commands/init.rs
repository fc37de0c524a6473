use crate::config::CONFIG_FILE_NAME;
use crate::errors::KeywordmapError;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(KeywordmapError::ConfigExists { path: config_path }.into());
    }

    let default_config = r#"# Keywordmap Configuration

[synthesis]
# Simulated backend latency, in milliseconds
metrics_latency_ms = 800
suggestion_latency_ms = 600
# Uncomment for reproducible output
# seed = 42

[suggestions]
page_size = 10

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
