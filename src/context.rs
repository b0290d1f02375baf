use handlebars::Handlebars;

use crate::renderer::generate_renderer;

pub(crate) const DEFAULT_SITE_NAME: &str = "Minimal Publishing";

/// Everything a page render needs besides the page itself.
#[derive(Debug)]
pub(crate) struct Context {
    pub site_name: String,
    pub handlebars: Handlebars<'static>,
}

impl Context {
    pub fn new(site_name: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            site_name: site_name.into(),
            handlebars: generate_renderer()?,
        })
    }
}
