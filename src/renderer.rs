use anyhow::Context;
use handlebars::Handlebars;
use pulldown_cmark::{html, Options, Parser};

const LAYOUT_TEMPLATE: &str = include_str!("../template/layout.hbs");
const ARTICLE_TEMPLATE: &str = include_str!("../template/article.hbs");
const INDEX_TEMPLATE: &str = include_str!("../template/index.hbs");

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_partial("layout", LAYOUT_TEMPLATE)
        .context("layout.hbs")?;
    handlebars
        .register_template_string("article", ARTICLE_TEMPLATE)
        .context("article.hbs")?;
    handlebars
        .register_template_string("index", INDEX_TEMPLATE)
        .context("index.hbs")?;

    Ok(handlebars)
}

pub(crate) fn markdown_to_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(body, options);
    let mut body_html = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut body_html, parser);
    body_html
}
