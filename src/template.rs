use std::fmt;

use anyhow::Context as _;

use crate::error::Result;

pub struct Liquid {
    parser: liquid::Parser,
}

impl Liquid {
    pub fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .context("Failed to set up liquid parser")?;
        Ok(Self { parser })
    }

    pub fn parse(&self, name: &str, template: &str) -> Result<liquid::Template> {
        let template = self
            .parser
            .parse(template)
            .with_context(|| format!("Failed to parse template `{name}`"))?;
        Ok(template)
    }
}

impl fmt::Debug for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Liquid{{}}")
    }
}

/// Globals seen by every template: `site` is the site configuration
pub(crate) fn site_globals(site: &ggb_config::Site) -> Result<liquid::Object> {
    let site = liquid::to_object(site).context("Failed to convert site for templates")?;
    let mut globals = liquid::Object::new();
    globals.insert("site".into(), liquid::model::Value::Object(site));
    Ok(globals)
}
