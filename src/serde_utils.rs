use std::path::Path;

use eyre::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn read_deserialize<T>(path: impl AsRef<Path>) -> eyre::Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading from {}", path.display()))?;

    let value = serde_yaml::from_str(&content).with_context(|| {
        format!("Parsing {} content was {content}", path.display())
    })?;

    Ok(value)
}

pub async fn write_serialize_json<T>(
    path: impl AsRef<Path>,
    value: T,
) -> eyre::Result<()>
where
    T: Serialize,
{
    let path = path.as_ref();

    let content = serde_json::to_string_pretty(&value)
        .with_context(|| format!("Serializing {}", path.display()))?;

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Writing to {}", path.display()))?;

    Ok(())
}
