use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use pulldown_cmark::{Options, Parser};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

#[derive(Embed)]
#[folder = "blog"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Deserialize, Debug)]
struct FrontMatter {
    id: u32,
    title: String,
    date: NaiveDate,
    read_time: String,
    excerpt: String,
    category: String,
    author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub excerpt: String,
    pub category: String,
    pub author: Author,
    /// Article body rendered to HTML.
    pub content: String,
}

impl BlogPost {
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Parses a markdown file with YAML front matter. `name` is the file name
    /// inside the blog folder.
    pub fn parse(name: &str, source: &str) -> Result<Self, BlogError> {
        let slug = name.strip_suffix(".md").unwrap_or(name).to_string();
        let matter = Matter::<YAML>::new();
        let parsed = matter
            .parse_with_struct::<FrontMatter>(source)
            .ok_or_else(|| BlogError::FrontMatter(slug.clone()))?;
        let fm = parsed.data;
        Ok(Self {
            id: fm.id,
            slug,
            title: fm.title,
            date: fm.date,
            read_time: fm.read_time,
            excerpt: fm.excerpt,
            category: fm.category,
            author: fm.author,
            content: render_markdown(&parsed.content),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Blog post {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse front matter of blog post {0}")]
    FrontMatter(String),
}

pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

pub fn get_post(name: &str) -> Result<BlogPost, BlogError> {
    let file = Assets::get(name).ok_or_else(|| BlogError::NotFound(name.to_string()))?;
    let source =
        String::from_utf8(file.data.into()).map_err(|_| BlogError::Encoding(name.to_string()))?;
    BlogPost::parse(name, &source)
}

/// Every embedded post, newest first.
pub fn get_posts() -> Result<Vec<BlogPost>, BlogError> {
    let mut posts = Assets::iter()
        .filter(|name| name.ends_with(".md"))
        .map(|name| get_post(&name))
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"---
id: 9
title: "Sample"
date: "2023-01-05"
read_time: "1 min read"
excerpt: "Short."
category: "Notes"
author:
  name: "Jo"
  role: "Writer"
  avatar: "https://example.com/jo.png"
---

First paragraph.

Second *paragraph*.
"#;

    #[test]
    fn test_parse_front_matter_and_body() {
        let post = BlogPost::parse("sample.md", SAMPLE).expect("sample should parse");
        assert_eq!(post.id, 9);
        assert_eq!(post.slug, "sample");
        assert_eq!(post.title, "Sample");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
        assert_eq!(post.author.name, "Jo");
        assert_eq!(post.display_date(), "Jan 5, 2023");
        assert!(post.content.contains("<p>First paragraph.</p>"));
        assert!(post.content.contains("<em>paragraph</em>"));
        assert!(!post.content.contains("read_time"));
    }

    #[test]
    fn test_missing_front_matter_fails() {
        let err = BlogPost::parse("bare.md", "just text").unwrap_err();
        assert_eq!(err, BlogError::FrontMatter("bare".to_string()));
    }

    #[test]
    fn test_missing_post() {
        assert_eq!(
            get_post("nope.md").unwrap_err(),
            BlogError::NotFound("nope.md".to_string())
        );
    }

    #[test]
    fn test_embedded_posts_newest_first() {
        let posts = get_posts().expect("embedded posts should parse");
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(posts[0].slug, "the-future-of-web-interactivity");
        assert_eq!(posts[0].display_date(), "Oct 12, 2024");
    }
}
