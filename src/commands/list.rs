//! List site content

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::content::PostMetadata;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    let loader = site.loader();
    let posts = loader
        .list_posts()
        .with_context(|| format!("Failed to list posts in {:?}", loader.content_dir()))?;

    let output = match content_type {
        "post" | "posts" if json => serde_json::to_string_pretty(&posts)?,
        "post" | "posts" => format_posts(&posts),
        "category" | "categories" => format_categories(&posts),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    };

    println!("{}", output);
    Ok(())
}

fn format_posts(posts: &[PostMetadata]) -> String {
    let mut out = format!("Posts ({}):", posts.len());
    for post in posts {
        out.push_str(&format!("\n  {} - {} [{}]", post.date, post.title, post.slug));
    }
    out
}

/// Post count per category, most frequent first
fn category_counts(posts: &[PostMetadata]) -> Vec<(String, usize)> {
    let mut categories: HashMap<String, usize> = HashMap::new();
    for post in posts {
        *categories.entry(post.category.clone()).or_insert(0) += 1;
    }

    let mut categories: Vec<_> = categories.into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    categories
}

fn format_categories(posts: &[PostMetadata]) -> String {
    let categories = category_counts(posts);
    let mut out = format!("Categories ({}):", categories.len());
    for (cat, count) in categories {
        out.push_str(&format!("\n  {} ({})", cat, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, category: &str, date: &str) -> PostMetadata {
        PostMetadata {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_posts() {
        let posts = vec![meta("b", "Solar", "2024-02-01"), meta("a", "Roofing", "2024-01-01")];
        let out = format_posts(&posts);
        assert_eq!(
            out,
            "Posts (2):\n  2024-02-01 - B [b]\n  2024-01-01 - A [a]"
        );
    }

    #[test]
    fn test_category_counts_most_frequent_first() {
        let posts = vec![
            meta("a", "Solar", "2024-01-01"),
            meta("b", "Roofing", "2024-01-02"),
            meta("c", "Solar", "2024-01-03"),
            meta("d", "Commercial", "2024-01-04"),
        ];
        let counts = category_counts(&posts);
        assert_eq!(
            counts,
            vec![
                ("Solar".to_string(), 2),
                ("Commercial".to_string(), 1),
                ("Roofing".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_unknown_type_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut site = Site::new(dir.path()).unwrap();
        site.set_content_dir(dir.path());
        assert!(run(&site, "tags", false).is_err());
    }
}
