//! solarblog: markdown-backed blog content for the company website
//!
//! The library reads a directory of markdown posts with YAML front-matter
//! and exposes two operations over it: list every post's metadata (newest
//! first) and load one post with its body rendered to HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, MarkdownRenderer};

/// Name of the optional config file in the site base directory
pub const CONFIG_FILE: &str = "solarblog.yml";

/// A blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post markdown files
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Point the site at a different content directory
    pub fn set_content_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.content_dir = self.base_dir.join(dir);
    }

    /// Build a content loader for this site's posts
    pub fn loader(&self) -> ContentLoader {
        let renderer = MarkdownRenderer::from_config(&self.config);
        ContentLoader::new(&self.content_dir, renderer)
    }
}
