use anyhow::{Result, bail};

/// Extensions scanned when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &["go"];

/// Runtime configuration for file discovery.
///
/// Built from CLI arguments; there is no configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// File extensions (without the leading dot) that are scanned.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Build a config from user supplied extensions, falling back to the
    /// defaults when the list is empty. Leading dots are stripped.
    pub fn from_extensions<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.');
            if !normalized.iter().any(|e| e == ext) {
                normalized.push(ext.to_string());
            }
        }

        let config = if normalized.is_empty() {
            Self::default()
        } else {
            Self {
                extensions: normalized,
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("At least one file extension is required");
        }
        for ext in &self.extensions {
            if ext.is_empty() {
                bail!("File extension must not be empty");
            }
            if ext.contains(['/', '\\']) {
                bail!("Invalid file extension: \"{}\"", ext);
            }
        }
        Ok(())
    }

    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}
