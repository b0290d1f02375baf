use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{Datelike, Local};
use log::{debug, info};

use crate::{
    asset::{ensure_css_exists, ensure_default_stylesheet, CSS_FILE},
    context::Context,
    error::PublishError,
    metadata::split_metadata,
    renderer::markdown_to_html,
};

mod data;
mod utils;

use data::{ArticleEntry, ArticlePageData, ArticlePreview, ListPageData};
use utils::{html_filename, is_document, render_to_file, sort_article};

pub(crate) const DEFAULT_TITLE: &str = "Untitled Article";
pub(crate) const UNTITLED: &str = "Untitled";
pub(crate) const INDEX_FILE: &str = "articles.html";
pub(crate) const INDEX_TITLE: &str = "Article Archive";
pub(crate) const DOCUMENT_EXTENSION: &str = "md";

fn read_document(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        return Err(PublishError::FileNotFound(path.to_path_buf()).into());
    }
    std::fs::read_to_string(path).with_context(|| format!("while reading {path:?}"))
}

pub(crate) fn convert_document(
    ctx: &Context,
    md_path: &Path,
    css_path: &Path,
) -> anyhow::Result<PathBuf> {
    let content = read_document(md_path)?;
    let (body, metadata) = split_metadata(&content);
    let body_html = markdown_to_html(body);

    let output_dir = md_path.parent().unwrap_or(Path::new(""));
    let out_path = output_dir.join(html_filename(md_path));

    // a missing stylesheet is created from the default theme, never an error
    ensure_default_stylesheet(css_path)?;
    let css_dest = ensure_css_exists(output_dir, css_path)?;
    let stylesheet = css_dest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CSS_FILE.to_string());

    let now = Local::now();
    let today = now.format("%Y-%m-%d").to_string();
    let data = ArticlePageData {
        site_name: &ctx.site_name,
        stylesheet: &stylesheet,
        index_file: INDEX_FILE,
        year: now.year(),
        title: metadata.title().unwrap_or(DEFAULT_TITLE),
        date: metadata.date().unwrap_or(&today),
        body: body_html,
    };
    render_to_file(ctx, "article", &data, &out_path)
        .with_context(|| format!("while converting {md_path:?}"))?;

    info!("Successfully converted: {out_path:?}");
    Ok(out_path)
}

fn scan_articles(content_dir: &Path) -> anyhow::Result<Vec<ArticleEntry>> {
    let mut articles = vec![];

    for entry in std::fs::read_dir(content_dir)
        .with_context(|| format!("while listing {content_dir:?}"))?
    {
        let path = entry?.path();
        if !is_document(&path) {
            continue;
        }

        let content = read_document(&path)?;
        let (_, metadata) = split_metadata(&content);
        if metadata.is_empty() {
            debug!("{path:?} has no metadata header");
        } else {
            debug!("{path:?}: {} header field(s)", metadata.len());
        }

        articles.push(ArticleEntry {
            filename: html_filename(&path),
            metadata,
        });
    }

    articles.sort_by(sort_article);
    Ok(articles)
}

pub(crate) fn generate_index(ctx: &Context, content_dir: &Path) -> anyhow::Result<PathBuf> {
    let articles = scan_articles(content_dir)?;

    let data = ListPageData {
        site_name: &ctx.site_name,
        stylesheet: CSS_FILE,
        index_file: INDEX_FILE,
        year: Local::now().year(),
        title: INDEX_TITLE,
        articles: articles
            .iter()
            .map(|article| ArticlePreview {
                filename: &article.filename,
                title: article.metadata.title().unwrap_or(UNTITLED),
                date: article.metadata.date().unwrap_or(""),
            })
            .collect(),
    };

    let index_path = content_dir.join(INDEX_FILE);
    render_to_file(ctx, "index", &data, &index_path).context("while generating article index")?;

    info!("Created article index: {index_path:?} ({} articles)", articles.len());
    Ok(index_path)
}
