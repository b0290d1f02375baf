use std::{
    cmp::Ordering,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;

use crate::context::Context as RenderContext;

use super::{data::ArticleEntry, DOCUMENT_EXTENSION};

// ordering by date(descending, as plain strings). undated ones come last.
pub(super) fn sort_article(a: &ArticleEntry, b: &ArticleEntry) -> Ordering {
    let a_date = a.metadata.date().unwrap_or("");
    let b_date = b.metadata.date().unwrap_or("");
    b_date
        .cmp(a_date)
        .then_with(|| a.filename.cmp(&b.filename))
}

/// `foo.md` -> `foo.html`
pub(super) fn html_filename(path: &Path) -> String {
    let mut file_path_html = PathBuf::from(path.file_name().unwrap_or(path.as_os_str()));
    file_path_html.set_extension("html");
    file_path_html.to_string_lossy().into_owned()
}

pub(super) fn is_document(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&format!(".{DOCUMENT_EXTENSION}")))
}

pub(super) fn render_to_file<T: Serialize>(
    ctx: &RenderContext,
    template: &str,
    data: &T,
    out_path: &Path,
) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_path)
        .with_context(|| format!("while opening {out_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    ctx.handlebars
        .render_to_write(template, data, &mut writer)
        .with_context(|| format!("while generating {out_path:?}"))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::split_metadata;

    fn entry(filename: &str, header: &str) -> ArticleEntry {
        ArticleEntry {
            filename: filename.to_string(),
            metadata: split_metadata(header).1,
        }
    }

    #[test]
    fn test_sort_newest_first_missing_last() {
        let mut entries = vec![
            entry("undated.html", "no header"),
            entry("old.html", "---\ndate: 2024-01-15\n---\n"),
            entry("new.html", "---\ndate: 2024-03-01\n---\n"),
        ];
        entries.sort_by(sort_article);
        let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["new.html", "old.html", "undated.html"]);
    }

    #[test]
    fn test_sort_is_lexical() {
        // not a real date, but lexically greater than any `2...` value
        let mut entries = vec![
            entry("a.html", "---\ndate: 2024-12-31\n---\n"),
            entry("b.html", "---\ndate: yesterday\n---\n"),
        ];
        entries.sort_by(sort_article);
        assert_eq!(entries[0].filename, "b.html");
    }

    #[test]
    fn test_sort_ties_by_filename() {
        let mut entries = vec![
            entry("b.html", "---\ndate: 2024-01-01\n---\n"),
            entry("a.html", "---\ndate: 2024-01-01\n---\n"),
        ];
        entries.sort_by(sort_article);
        assert_eq!(entries[0].filename, "a.html");
    }

    #[test]
    fn test_html_filename() {
        assert_eq!(html_filename(Path::new("posts/foo.md")), "foo.html");
        assert_eq!(html_filename(Path::new("my.post.md")), "my.post.html");
        assert_eq!(html_filename(Path::new("README")), "README.html");
    }
}
