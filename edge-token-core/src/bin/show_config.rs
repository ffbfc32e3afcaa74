use anyhow::Context;
use edge_token_core::shared::config::CoreConfig;
use edge_token_core::shared::constants::{ENV_LOG_LEVEL, ENV_MAX_CODE_CHARS};

fn main() -> anyhow::Result<()> {
    let config = CoreConfig::from_env().context("Failed to load token core configuration")?;

    println!("Edge Token Core Configuration:\n");
    println!("  Version: {}", edge_token_core::VERSION);
    println!("  Max token code characters ({}): {}", ENV_MAX_CODE_CHARS, config.max_token_code_characters);
    println!("  Log level ({}): {}", ENV_LOG_LEVEL, config.log_level);
    Ok(())
}
