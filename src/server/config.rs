use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Expand environment variables in a string.
/// Supports $VAR_NAME and ${VAR_NAME} syntax.
fn expand_env_vars(input: &str) -> String {
  let mut result = input.to_string();

  let mut i = 0;
  while let Some(offset) = result[i..].find("${") {
    let start = i + offset;
    let Some(end) = result[start..].find('}') else {
      break;
    };
    let value = std::env::var(&result[start + 2..start + end]).unwrap_or_default();
    result.replace_range(start..start + end + 1, &value);
    // substituted text is never expanded again
    i = start + value.len();
  }

  let mut i = 0;
  while let Some(offset) = result[i..].find('$') {
    let at = i + offset;
    let var_len = result[at + 1..]
      .chars()
      .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
      .count();
    if var_len == 0 {
      i = at + 1;
      continue;
    }
    let value = std::env::var(&result[at + 1..at + 1 + var_len]).unwrap_or_default();
    result.replace_range(at..at + 1 + var_len, &value);
    i = at + value.len();
  }

  result
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub site: BundleSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Seconds to wait for in-flight requests on shutdown
  #[serde(default = "default_shutdown_grace_secs")]
  pub shutdown_grace_secs: u64,
}

fn default_host() -> String {
  "0.0.0.0".into()
}
fn default_port() -> u16 {
  8080
}
fn default_shutdown_grace_secs() -> u64 {
  5
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      shutdown_grace_secs: default_shutdown_grace_secs(),
    }
  }
}

/// Where the built WASM bundle lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleSection {
  #[serde(default = "default_root")]
  pub root: PathBuf,
  /// Serve index.html for unknown paths
  #[serde(default = "default_true")]
  pub spa_fallback: bool,
}

fn default_root() -> PathBuf {
  PathBuf::from("dist")
}
fn default_true() -> bool {
  true
}

impl Default for BundleSection {
  fn default() -> Self {
    Self {
      root: default_root(),
      spa_fallback: true,
    }
  }
}

impl BundleSection {
  pub fn index_file(&self) -> PathBuf {
    self.root.join("index.html")
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "info".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl SiteConfig {
  pub fn from_yaml(content: &str) -> Result<Self, anyhow::Error> {
    Ok(serde_yaml::from_str(&expand_env_vars(content))?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Self::from_yaml(&content)
  }

  pub fn find_and_load() -> Result<Option<Self>, anyhow::Error> {
    for p in ["lunare.yaml", "lunare.yml"] {
      if Path::new(p).exists() {
        tracing::info!("Loading config from {}", p);
        return Ok(Some(Self::from_file(p)?));
      }
    }
    Ok(None)
  }

  pub fn validate(&self) -> Result<(), anyhow::Error> {
    if self.server.port == 0 {
      anyhow::bail!("server.port must be non-zero");
    }
    if self.site.root.as_os_str().is_empty() {
      anyhow::bail!("site.root must not be empty");
    }
    Ok(())
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
