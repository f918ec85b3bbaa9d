use std::fmt;
use std::path;

use super::*;

pub const CONFIG_FILE: &str = "_site.yml";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub destination: path::PathBuf,
    #[serde(skip)]
    pub abs_dest: Option<path::PathBuf>,
    pub site: Site,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            destination: path::PathBuf::from("./_site"),
            abs_dest: Default::default(),
            site: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {CONFIG_FILE} file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Where rendered files are written
    pub fn output_dir(&self) -> path::PathBuf {
        self.abs_dest
            .clone()
            .unwrap_or_else(|| self.root.join(&self.destination))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Look for `name` in `dir` and then in each of its ancestors
pub fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/config/_site.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site.title(), "Fixture Battles");
        assert_eq!(result.destination, path::Path::new("./public"));
        assert_eq!(result.site.nav().len(), 2);
        assert!(matches!(result.site.nav()[1], MenuNode::Leaf(_)));
    }

    #[test]
    fn test_from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site, Site::default());
    }

    #[test]
    fn test_from_file_destination_only() {
        let result = Config::from_file("tests/fixtures/config/destination_only.yml").unwrap();
        assert_eq!(result.destination, path::Path::new("out"));
        assert_eq!(result.site, Site::default());
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing_field() {
        let result = Config::from_file("tests/fixtures/config/missing_field.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unknown_field() {
        let result = Config::from_file("tests/fixtures/config/unknown_field.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
        assert_eq!(result.site, Site::default());
    }

    #[test]
    fn output_dir_joins_root() {
        let config = Config {
            root: "site".into(),
            ..Default::default()
        };
        assert_eq!(config.output_dir(), path::Path::new("site/./_site"));
    }

    #[test]
    fn output_dir_prefers_override() {
        let config = Config {
            root: "site".into(),
            abs_dest: Some("/tmp/out".into()),
            ..Default::default()
        };
        assert_eq!(config.output_dir(), path::Path::new("/tmp/out"));
    }

    #[test]
    fn display_round_trips() {
        let config = Config::default();
        let dumped = config.to_string();
        assert!(dumped.contains("title: Gas Giant Battles"));
        let parsed: Config = serde_yaml::from_str(&dumped).unwrap();
        assert_eq!(parsed.site, config.site);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", "_site.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", "_site.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", "_site.yml").unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
