use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    calculator::{
        input::{DEFAULT_DURATION_MONTHS, DEFAULT_PRINCIPAL},
        CalculatorConfig, CalculatorInput,
    },
    currency::{CurrencyCode, LocaleConfig},
    errors::Result,
    utils::paths,
};

const TMP_SUFFIX: &str = "tmp";

/// User preferences persisted between CLI runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_amount")]
    pub default_amount: f64,
    #[serde(default = "Config::default_duration_months")]
    pub default_duration_months: u32,
    /// Bank rates file. Defaults to `data/banksData.json` under the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banks_file: Option<PathBuf>,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            default_amount: Self::default_amount(),
            default_duration_months: Self::default_duration_months(),
            banks_file: None,
            calculator: CalculatorConfig::default(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-PH".into()
    }

    pub fn default_currency() -> String {
        "PHP".into()
    }

    pub fn default_amount() -> f64 {
        DEFAULT_PRINCIPAL
    }

    pub fn default_duration_months() -> u32 {
        DEFAULT_DURATION_MONTHS
    }

    pub fn resolve_banks_file(&self) -> PathBuf {
        self.banks_file
            .clone()
            .unwrap_or_else(paths::default_banks_file)
    }

    pub fn default_input(&self) -> CalculatorInput {
        CalculatorInput::new(self.default_amount, self.default_duration_months)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            language_tag: self.locale.clone(),
            ..LocaleConfig::default()
        }
    }
}

/// Loads and saves [`Config`] as pretty JSON inside the data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    /// Returns the stored config, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            config.calculator.validate()?;
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.calculator.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
