use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::downloader::{self, DownloadMode};
use crate::paths;

/// Filename template handed to the downloader; it fills in the tokens.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

fn default_output_template() -> String {
    DEFAULT_OUTPUT_TEMPLATE.to_string()
}

/// Optional user configuration (`~/.config/clipgrab/config.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipgrabConfig {
    /// Downloader executable. Defaults to `yt-dlp` next to the clipgrab binary.
    #[serde(default)]
    pub downloader: Option<PathBuf>,
    /// Filename template joined onto the project folder.
    #[serde(default = "default_output_template")]
    pub output_template: String,
    /// Mode used when `--type` is not given.
    #[serde(default)]
    pub default_mode: Option<DownloadMode>,
}

impl Default for ClipgrabConfig {
    fn default() -> Self {
        Self {
            downloader: None,
            output_template: default_output_template(),
            default_mode: None,
        }
    }
}

impl ClipgrabConfig {
    /// CLI choice first, then the config file, then video.
    pub fn resolve_mode(&self, cli: Option<DownloadMode>) -> DownloadMode {
        cli.or(self.default_mode).unwrap_or_default()
    }

    /// Rejects an `output_template` that would leave the project folder
    /// (absolute, rooted, or climbing out with `..`).
    pub fn validate(&self) -> Result<()> {
        if !downloader::template_stays_inside(&self.output_template) {
            bail!(
                "output_template {:?} must be a relative path inside the project folder",
                self.output_template
            );
        }
        Ok(())
    }
}

/// Parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<ClipgrabConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ClipgrabConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load the user's config, or built-in defaults if there is none.
/// The file is never created; the tool writes nothing but the download.
pub fn load_or_default() -> Result<ClipgrabConfig> {
    match paths::find_config_file()? {
        Some(path) => {
            let cfg = load_from(&path)?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None => Ok(ClipgrabConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = ClipgrabConfig::default();
        assert!(cfg.downloader.is_none());
        assert_eq!(cfg.output_template, "%(title)s.%(ext)s");
        assert!(cfg.default_mode.is_none());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: ClipgrabConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ClipgrabConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            downloader = "/opt/yt-dlp/yt-dlp"
            output_template = "%(uploader)s - %(title)s.%(ext)s"
            default_mode = "audio"
        "#;
        let cfg: ClipgrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.downloader, Some(PathBuf::from("/opt/yt-dlp/yt-dlp")));
        assert_eq!(cfg.output_template, "%(uploader)s - %(title)s.%(ext)s");
        assert_eq!(cfg.default_mode, Some(DownloadMode::Audio));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let res: Result<ClipgrabConfig, _> = toml::from_str(r#"default_mode = "podcast""#);
        assert!(res.is_err());
    }

    #[test]
    fn mode_precedence() {
        let mut cfg = ClipgrabConfig::default();
        assert_eq!(cfg.resolve_mode(None), DownloadMode::Video);
        cfg.default_mode = Some(DownloadMode::Audio);
        assert_eq!(cfg.resolve_mode(None), DownloadMode::Audio);
        assert_eq!(
            cfg.resolve_mode(Some(DownloadMode::Video)),
            DownloadMode::Video
        );
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"default_mode = \"video\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.default_mode, Some(DownloadMode::Video));
        assert_eq!(cfg.output_template, DEFAULT_OUTPUT_TEMPLATE);
    }

    #[test]
    fn default_template_is_valid() {
        ClipgrabConfig::default().validate().unwrap();
    }

    #[test]
    fn template_with_subfolder_is_accepted() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_template = \"%(uploader)s/%(title)s.%(ext)s\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.output_template, "%(uploader)s/%(title)s.%(ext)s");
    }

    #[test]
    fn template_leaving_project_folder_is_rejected() {
        for template in [
            "/tmp/elsewhere/%(title)s.%(ext)s",
            "../%(title)s.%(ext)s",
            "",
        ] {
            let mut f = tempfile::NamedTempFile::new().unwrap();
            writeln!(f, "output_template = {:?}", template).unwrap();
            f.flush().unwrap();
            let err = load_from(f.path()).unwrap_err();
            assert!(
                format!("{:#}", err).contains("inside the project folder"),
                "{template:?}: {err:#}"
            );
        }
    }

    #[test]
    fn load_from_malformed_file_errors() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_template = [1, 2]\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
