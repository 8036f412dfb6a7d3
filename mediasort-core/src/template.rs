// File: mediasort-core/src/template.rs
//! Path template rendering.
//!
//! Templates use `tinytemplate` syntax, e.g.
//! `{album_artist}/{album}/{{ if track }}{track | two_digits}. {{ endif }}{title}`.
//! Besides the built-in `unescaped` formatter, every template can use
//! `two_digits` and one formatter per configured bracket filter. Output is
//! never HTML-escaped.
//!
//! A multi-line template is flattened before compilation: each line is
//! trimmed and the lines are concatenated, so YAML block scalars can be used
//! to lay out long templates.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::config::NamingConfig;
use crate::errors::MediasortError;
use crate::filters::brackets::BracketSpec;
use crate::metadata::Metadata;
use crate::path_sanitizer::clean_path;

const TEMPLATE_NAME: &str = "path";

/// A bracket filter compiled for use as a template formatter.
#[derive(Debug, Clone)]
struct FilterFormatter {
    name: String,
    spec: BracketSpec,
    replacement: String,
}

/// A validated path template with its compiled filters.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    source: String,
    filters: Vec<FilterFormatter>,
}

fn flatten_lines(template: &str) -> String {
    if !template.contains('\n') {
        return template.to_string();
    }
    template.lines().map(str::trim).collect()
}

fn format_two_digits(value: &Value, out: &mut String) -> Result<(), tinytemplate::error::Error> {
    match value.as_u64() {
        Some(n) => {
            out.push_str(&format!("{:02}", n));
            Ok(())
        }
        None => format_unescaped(value, out),
    }
}

impl PathTemplate {
    /// Compiles the configured filters and checks the template by rendering it
    /// once against empty metadata.
    pub fn new(config: &NamingConfig) -> Result<Self> {
        let mut filters = Vec::with_capacity(config.filters.len());
        for (name, filter) in &config.filters {
            let spec = BracketSpec::try_new(&filter.brackets)
                .with_context(|| format!("Failed to compile filter '{}'", name))?;
            filters.push(FilterFormatter {
                name: name.clone(),
                spec,
                replacement: filter.replacement.clone(),
            });
        }

        let template = Self {
            source: flatten_lines(&config.template),
            filters,
        };
        template
            .render_raw(&Metadata::default())
            .context("Failed to compile path template")?;

        debug!(
            "Path template '{}' ready with {} filter(s).",
            template.source,
            template.filters.len()
        );
        Ok(template)
    }

    /// The flattened template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn engine(&self) -> Result<TinyTemplate<'_>, MediasortError> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&format_unescaped);
        tt.add_formatter("two_digits", format_two_digits);
        for filter in &self.filters {
            let spec = filter.spec.clone();
            let replacement = filter.replacement.clone();
            tt.add_formatter(filter.name.as_str(), move |value: &Value, out: &mut String| {
                let mut raw = String::new();
                format_unescaped(value, &mut raw)?;
                out.push_str(&spec.replace(&raw, &replacement));
                Ok(())
            });
        }
        tt.add_template(TEMPLATE_NAME, &self.source)?;
        Ok(tt)
    }

    /// Renders the template without sanitizing the result.
    pub fn render_raw(&self, metadata: &Metadata) -> Result<String, MediasortError> {
        let tt = self.engine()?;
        Ok(tt.render(TEMPLATE_NAME, &metadata.template_context())?)
    }

    /// Renders the template and turns the output into a safe relative path.
    pub fn render(&self, metadata: &Metadata) -> Result<String, MediasortError> {
        let raw = self.render_raw(metadata)?;
        let path = clean_path(&raw);
        debug!("Rendered '{}' -> '{}'", raw, path);
        Ok(path)
    }
}
