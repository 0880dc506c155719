//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Front-matter keys written into a new post, in order
const SCAFFOLD_FIELDS: [&str; 7] = [
    "title", "excerpt", "author", "date", "readTime", "category", "image",
];

/// Create a new post file in the content directory
pub fn create_post(
    site: &Site,
    title: &str,
    slug: Option<&str>,
    category: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    fs::create_dir_all(&site.content_dir)
        .with_context(|| format!("Failed to create {:?}", site.content_dir))?;

    let file_path = site.content_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let config = &site.config;
    let date = now.format("%Y-%m-%d").to_string();
    let values = [
        title,
        "",
        config.author.as_str(),
        date.as_str(),
        "1 min read",
        category.unwrap_or(config.default_category.as_str()),
        config.default_image.as_str(),
    ];

    let mut content = String::from("---\n");
    for (key, value) in SCAFFOLD_FIELDS.iter().zip(values) {
        content.push_str(&format!("{}: {}\n", key, yaml_scalar(value)?));
    }
    content.push_str("---\n\nWrite the post here.\n");

    fs::write(&file_path, content).with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Quote a value only when YAML needs it
fn yaml_scalar(value: &str) -> Result<String> {
    Ok(serde_yaml::to_string(value)?.trim_end().to_string())
}

/// Run the new command
pub fn run(site: &Site, title: &str, slug: Option<&str>, category: Option<&str>) -> Result<()> {
    let path = create_post(site, title, slug, category)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_in(dir: &std::path::Path) -> Site {
        let mut site = Site::new(dir).unwrap();
        site.set_content_dir("posts");
        site
    }

    #[test]
    fn test_new_post_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());

        let path = create_post(&site, "Net Metering: A Primer", None, Some("Solar")).unwrap();
        assert_eq!(path, dir.path().join("posts/net-metering-a-primer.md"));

        let post = site.loader().get_post("net-metering-a-primer").unwrap();
        assert_eq!(post.metadata.title, "Net Metering: A Primer");
        assert_eq!(post.metadata.category, "Solar");
        assert_eq!(post.metadata.author, site.config.author);
        assert_eq!(post.metadata.date.len(), "2024-01-01".len());
        assert!(post.content.contains("Write the post here."));
    }

    #[test]
    fn test_new_post_custom_slug_and_default_category() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());

        create_post(&site, "Anything", Some("Custom Slug"), None).unwrap();
        let posts = site.loader().list_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "custom-slug");
        assert_eq!(posts[0].category, site.config.default_category);
    }

    #[test]
    fn test_new_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());

        create_post(&site, "Twice", None, None).unwrap();
        assert!(create_post(&site, "Twice", None, None).is_err());
    }

    #[test]
    fn test_new_post_needs_a_slug() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        assert!(create_post(&site, "!!!", None, None).is_err());
    }
}
