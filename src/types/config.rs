use serde::Deserialize;

/// Optional tool configuration. Every table and key is optional; command-line
/// flags win over anything configured here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrengthsConfig {
    pub storage: Option<StorageConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub state_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfiguredFormat {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ConfiguredFormat>,
}

impl StrengthsConfig {
    pub fn state_file(&self) -> Option<&str> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.state_file.as_deref())
    }

    pub fn format(&self) -> Option<&ConfiguredFormat> {
        self.output.as_ref().and_then(|output| output.format.as_ref())
    }
}
