//! Content loader - reads blog posts from the content directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{BlogPost, FrontMatter, MarkdownRenderer, PostMetadata};

const POST_EXTENSION: &str = "md";

/// Loads posts from a directory of markdown files.
///
/// Every call goes back to disk; nothing is cached between calls.
#[derive(Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    renderer: Arc<MarkdownRenderer>,
}

impl ContentLoader {
    /// Create a loader over `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P, renderer: MarkdownRenderer) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            renderer: Arc::new(renderer),
        }
    }

    /// Directory the posts are read from
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load the metadata of every post, newest first.
    ///
    /// Dates are compared as plain strings, so they must be in a lexically
    /// sortable format such as `YYYY-MM-DD`.
    pub fn list_posts(&self) -> Result<Vec<PostMetadata>> {
        let mut posts = Vec::new();

        // walkdir filters out a non-directory root at depth 0 without an error
        let is_dir = fs::metadata(&self.content_dir)
            .map_err(|source| self.read_dir_error(source))?
            .is_dir();
        if !is_dir {
            let source = io::Error::new(io::ErrorKind::Other, "not a directory");
            return Err(self.read_dir_error(source));
        }

        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| self.read_dir_error(e.into()))?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(slug) = post_slug(path) else {
                tracing::debug!("Skipping non-post file {:?}", path);
                continue;
            };

            let content = read_post(path)?;
            let (fm, _) = parse_front_matter(path, &content)?;
            posts.push(fm.metadata.with_slug(slug));
        }

        // Newest first. Stable sort keeps file-name order for equal dates.
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }

    /// Load a single post by slug and render its body to HTML
    pub fn get_post(&self, slug: &str) -> Result<BlogPost> {
        validate_slug(slug)?;

        let path = self.post_path(slug);
        let content = read_post(&path)?;
        let (fm, body) = parse_front_matter(&path, &content)?;

        let html = self.renderer.render(body);
        tracing::debug!("Rendered post {} ({} bytes)", slug, html.len());

        Ok(BlogPost {
            metadata: fm.metadata.with_slug(slug),
            content: html,
        })
    }

    fn read_dir_error(&self, source: io::Error) -> ContentError {
        ContentError::ReadDir {
            path: self.content_dir.clone(),
            source,
        }
    }

    /// Path of the file backing `slug`
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.content_dir.join(format!("{}.{}", slug, POST_EXTENSION))
    }
}

/// File name without the `.md` extension, if this is a post file
fn post_slug(path: &Path) -> Option<&str> {
    let is_post = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == POST_EXTENSION)
        .unwrap_or(false);
    if !is_post {
        return None;
    }
    path.file_stem().and_then(|s| s.to_str())
}

fn read_post(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ContentError::ReadPost {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_front_matter<'c>(path: &Path, content: &'c str) -> Result<(FrontMatter, &'c str)> {
    FrontMatter::parse(content).map_err(|message| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message,
    })
}

/// A slug must name a file directly inside the content directory
fn validate_slug(slug: &str) -> Result<()> {
    let invalid = matches!(slug, "" | "." | "..") || slug.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ContentError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
