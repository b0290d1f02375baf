use serde::Serialize;

use crate::metadata::Metadata;

/// One document seen while building the archive.
#[derive(Debug, Clone)]
pub(super) struct ArticleEntry {
    pub filename: String,
    pub metadata: Metadata,
}

#[derive(Serialize, Debug)]
pub(super) struct ArticlePageData<'a> {
    pub site_name: &'a str,
    pub stylesheet: &'a str,
    pub index_file: &'static str,
    pub year: i32,
    pub title: &'a str,
    pub date: &'a str,
    pub body: String,
}

#[derive(Serialize, Debug)]
pub(super) struct ArticlePreview<'a> {
    pub filename: &'a str,
    pub title: &'a str,
    pub date: &'a str,
}

#[derive(Serialize, Debug)]
pub(super) struct ListPageData<'a> {
    pub site_name: &'a str,
    pub stylesheet: &'static str,
    pub index_file: &'static str,
    pub year: i32,
    pub title: &'static str,
    pub articles: Vec<ArticlePreview<'a>>,
}
