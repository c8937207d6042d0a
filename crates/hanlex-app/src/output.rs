use std::fs;
use std::path::Path;

use anyhow::Context;

use hanlex_core::Dictionary;

/// Flatten the aggregate and write it as one compact JSON artifact.
/// serde_json leaves non-Latin text unescaped, so scripts pass through
/// verbatim.
pub fn write(dictionary: Dictionary, path: &Path) -> anyhow::Result<()> {
    let artifact = dictionary.into_output();
    tracing::info!(
        "writing {} words and {} characters to {}",
        artifact.words.len(),
        artifact.characters.len(),
        path.display()
    );

    let json = serde_json::to_string(&artifact).context("serializing dictionary")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
