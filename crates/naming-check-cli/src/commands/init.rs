//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# naming-check configuration

# Exit with status 1 when a warning reaches this severity (info | warning | error)
fail_on = "error"

[analyzer]
# Glob patterns to exclude from directory walks
exclude = [
    "**/build/**",
    "**/vendor/**",
    "**/.venv/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Rules are keyed by name or code and can be disabled or have their
# severity overridden

[rules.variable-min-length]
enabled = true
# severity = "error"

# [rules.py-variable-snake-case]
# enabled = true

# [rules.py-function-snake-case]
# enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default_config(Path::new("naming-check.toml"), force)?;

    println!("Created naming-check.toml");
    println!("\nNext steps:");
    println!("  1. Edit naming-check.toml to configure rules");
    println!("  2. Run: naming-check check .");

    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
