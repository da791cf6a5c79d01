use eyre::{Context, Result};
use folio::content::Content;
use folio::render::{DEFAULT_SCENE_URL, PageContext};
use folio::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub output: PathBuf,
    pub scene_url: String,
    pub theme: Theme,
    /// YAML file replacing the builtin content; relative paths are taken
    /// from the directory of the config file that names them
    pub content: Option<PathBuf>,
    pub profile: ProfileOverrides,
    /// Directory of the file this config was read from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// What `Config::load` tried before settling on a config.
///
/// Loading happens before the logger exists, so nothing is logged there;
/// `main` replays this once logging is up.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn log(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => log::info!("Loaded config from: {}", path.display()),
            None => log::info!("No config file found, using defaults"),
        }
    }
}

/// Individual profile fields to change without writing a whole content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            output: PathBuf::from("dist").join("index.html"),
            scene_url: DEFAULT_SCENE_URL.to_string(),
            theme: Theme::default(),
            content: None,
            profile: ProfileOverrides::default(),
            base_dir: None,
        }
    }
}

impl ProfileOverrides {
    fn apply(&self, content: &mut Content) {
        let profile = &mut content.profile;
        let fields = [
            (&self.name, &mut profile.name),
            (&self.role, &mut profile.role),
            (&self.specialization, &mut profile.specialization),
            (&self.github, &mut profile.links.github),
            (&self.linkedin, &mut profile.links.linkedin),
            (&self.email, &mut profile.links.email),
        ];
        for (value, target) in fields {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<(Self, LoadReport)> {
        // If explicit config path provided, it must load
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            let report = LoadReport {
                source: Some(path.clone()),
                warnings: Vec::new(),
            };
            return Ok((config, report));
        }

        let project_name = env!("CARGO_PKG_NAME");
        let mut candidates = Vec::new();

        // Primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }

        // Fallback location: ./<project>.yml
        candidates.push(PathBuf::from(format!("{}.yml", project_name)));

        Ok(Self::load_first(&candidates))
    }

    /// First candidate that exists and loads wins; broken ones are reported and skipped
    fn load_first(candidates: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report
                    .warnings
                    .push(format!("Failed to load config from {}: {:#}", path.display(), e)),
            }
        }
        (Self::default(), report)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.theme.validate().context("Invalid theme in config file")?;
        config.base_dir = path.as_ref().parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Content file path, anchored at the config file's directory when relative
    pub fn content_path(&self) -> Option<PathBuf> {
        let path = self.content.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// Content to render: the content file if set, else the builtin set, then profile overrides
    pub fn resolve_content(&self) -> Result<Content> {
        let mut content = match self.content_path() {
            Some(path) => Content::load_from_file(&path)
                .context(format!("Failed to load content from {}", path.display()))?,
            None => Content::builtin(),
        };
        self.profile.apply(&mut content);
        Ok(content)
    }

    /// Page context for this run; `year` pins the footer year, otherwise the clock decides
    pub fn page_context(&self, year: Option<i32>) -> PageContext {
        let ctx = PageContext::current(self.theme.clone(), self.scene_url.clone());
        match year {
            Some(year) => ctx.with_year(year),
            None => ctx,
        }
    }
}
