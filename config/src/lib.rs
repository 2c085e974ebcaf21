use serde::Deserialize;
use tracing::debug;
use std::{env, num::NonZeroU32, path::Path};
use std::path::PathBuf;
use std::fs::read_to_string;
use anyhow::{anyhow, bail, Result};


pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_SOURCE: &str = "public/logo.png";
pub const DEFAULT_TARGETS: [&str; 2] = ["resources/icon.png", "public/icon.png"];

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

fn default_targets() -> Vec<PathBuf> {
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub dir: PathBuf,
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_targets")]
    pub targets: Vec<PathBuf>,
    /// Edge length of a square fit target. Source dimensions are kept when unset.
    pub size: Option<NonZeroU32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            source: default_source(),
            targets: default_targets(),
            size: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        let path = match env::args().nth(1) {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("."),
        };

        Self::from_path(path)
    }
    /// Path may point to a config file or to a dir that may contain a 'config.toml' file.
    pub fn from_path<T>(path: T) -> Result<Self>
    where T: AsRef<Path> {
        let path = path.as_ref();

        let (dir, file) = match path {
            p if p.is_file() => (
                p.parent().unwrap_or_else(|| Path::new(".")).to_owned(),
                Some(p.to_owned()),
            ),
            p if p.is_dir() => {
                let file = p.join(CONFIG_FILE);

                match file.is_file() {
                    true => (p.to_owned(), Some(file)),
                    false => (p.to_owned(), None),
                }
            },
            _ => bail!("Unable to determine config path from {:?}", path),
        };

        let mut config = match file {
            Some(f) => {
                let contents = read_to_string(&f).map_err(|e|
                    anyhow!("Unable to read {} to string: {}", f.display(), e)
                )?;

                debug!("Reading config from {}", f.display());

                Self::from_toml(&contents)?
            },
            None => {
                debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());

                Self::default()
            }
        };

        // Treat a bare file name as relative to the working dir
        config.dir = match dir.as_os_str().is_empty() {
            true => PathBuf::from("."),
            false => dir,
        };

        debug!("Config dir set to {}", config.dir.display());

        Ok(config)
    }
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(contents).map_err(|e|
            anyhow!("Unable to read config as toml: {}", e)
        )?;

        if config.targets.is_empty() {
            bail!("Config must list at least one target path")
        }

        Ok(config)
    }
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.source)
    }
    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.targets.iter().map(|t| self.dir.join(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;

    #[test]
    fn defaults_without_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::from_path(tmp.path()).unwrap();

        assert_eq!(config.dir, tmp.path());
        assert_eq!(config.source_path(), tmp.path().join("public/logo.png"));
        assert_eq!(
            config.target_paths(),
            vec![tmp.path().join("resources/icon.png"), tmp.path().join("public/icon.png")]
        );
        assert!(config.size.is_none());
    }

    #[test]
    fn reads_config_file_from_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path().join(CONFIG_FILE),
            "source = \"brand/mark.png\"\ntargets = [\"out/a.png\"]\nsize = 128\n",
        ).unwrap();

        let config = Config::from_path(tmp.path()).unwrap();

        assert_eq!(config.source_path(), tmp.path().join("brand/mark.png"));
        assert_eq!(config.target_paths(), vec![tmp.path().join("out/a.png")]);
        assert_eq!(config.size.map(|s| s.get()), Some(128));
    }

    #[test]
    fn config_file_path_sets_dir_to_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("icons.toml");
        write(&file, "size = 64\n").unwrap();

        let config = Config::from_path(&file).unwrap();

        assert_eq!(config.dir, tmp.path());
        assert_eq!(config.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(config.size.map(|s| s.get()), Some(64));
    }

    #[test]
    fn rejects_zero_size() {
        assert!(Config::from_toml("size = 0").is_err());
    }

    #[test]
    fn rejects_empty_targets() {
        assert!(Config::from_toml("targets = []").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(Config::from_toml("source = ").is_err());
    }

    #[test]
    fn rejects_missing_path() {
        let tmp = tempfile::tempdir().unwrap();

        assert!(Config::from_path(tmp.path().join("nope")).is_err());
    }
}
