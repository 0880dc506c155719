//! Show a single post

use anyhow::{Context, Result};

use crate::content::BlogPost;
use crate::Site;

/// Print one post's metadata and rendered body
pub fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    let post = site
        .loader()
        .get_post(slug)
        .with_context(|| format!("Failed to load post {:?}", slug))?;

    let output = if json {
        serde_json::to_string_pretty(&post)?
    } else {
        format_post(&post)
    };

    println!("{}", output);
    Ok(())
}

fn format_post(post: &BlogPost) -> String {
    let meta = &post.metadata;
    let mut out = String::new();
    out.push_str(&format!("Title:     {}\n", meta.title));
    out.push_str(&format!("Slug:      {}\n", meta.slug));
    out.push_str(&format!("Date:      {}\n", meta.date));
    out.push_str(&format!("Author:    {}\n", meta.author));
    out.push_str(&format!("Category:  {}\n", meta.category));
    out.push_str(&format!("Read time: {}\n", meta.read_time));
    out.push_str(&format!("Image:     {}\n", meta.image));
    out.push_str(&format!("Excerpt:   {}\n", meta.excerpt));
    for (key, value) in &meta.extra {
        let value = serde_yaml::to_string(value).unwrap_or_default();
        out.push_str(&format!("{}: {}\n", key, value.trim_end()));
    }
    out.push('\n');
    out.push_str(&post.content);
    out
}
