//! Dump and fetch helpers.
//!
//! A [`Dumper`] owns a renderer and writes each rendered tree straight to a
//! writer (`dump`) or captures it in a string (`fetch`). In HTML output the
//! skin stylesheet and toggle script are written once per dumper, ahead of
//! the first tree. `queue` holds captured output until the queue is flushed
//! or the dumper is dropped.

use std::io::{self, Write};

use peek_api::{RenderNode, Value};
use peek_kernel::{CallableResolver, Collection, RenderConfig, Renderer, DEFAULT_LABEL};

use crate::error::Result;
use crate::html::HtmlEmitter;
use crate::skin::Skin;
use crate::text::TextEmitter;

/// How dumped trees are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

pub struct Dumper {
    renderer: Renderer,
    skin: Skin,
    format: OutputFormat,
    html: HtmlEmitter,
    text: TextEmitter,
    assets_written: bool,
    queued: String,
}

impl Dumper {
    pub fn new(config: RenderConfig) -> Self {
        let skin = Skin::load(&config);
        Self {
            renderer: Renderer::new(config),
            skin,
            format: OutputFormat::default(),
            html: HtmlEmitter::new(),
            text: TextEmitter::new(),
            assets_written: false,
            queued: String::new(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_callables(mut self, resolver: impl CallableResolver + 'static) -> Self {
        let renderer = std::mem::take(&mut self.renderer);
        self.renderer = renderer.with_callables(resolver);
        self
    }

    pub fn with_html(mut self, html: HtmlEmitter) -> Self {
        self.html = html;
        self
    }

    pub fn enabled(&self) -> bool {
        self.renderer.config().enabled
    }

    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    /// Render `value` and write it.
    pub fn dump<W: Write>(&mut self, out: &mut W, value: &Value, label: &str) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }
        let node = self.renderer.render(value, label);
        self.write_node(out, None, &node)
    }

    /// Render and write several values, each as its own tree.
    pub fn dump_all<W: Write>(&mut self, out: &mut W, values: &[Value]) -> Result<()> {
        for value in values {
            self.dump(out, value, DEFAULT_LABEL)?;
        }
        Ok(())
    }

    /// Render a collected host collection under its title.
    pub fn dump_collection<W: Write>(&mut self, out: &mut W, collection: &Collection) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }
        let node = self.renderer.render(&collection.value, &collection.label);
        self.write_node(out, Some(&collection.title), &node)
    }

    /// Render `value` into a string instead of a writer.
    ///
    /// Returns an empty string when disabled.
    pub fn fetch(&mut self, value: &Value, label: &str) -> Result<String> {
        let mut buf = Vec::new();
        self.dump(&mut buf, value, label)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render `value` now and hold the output until the queue is flushed.
    pub fn queue(&mut self, value: &Value, label: &str) -> Result<()> {
        let output = self.fetch(value, label)?;
        self.queued.push_str(&output);
        Ok(())
    }

    /// Output queued so far.
    pub fn queued(&self) -> &str {
        &self.queued
    }

    /// Write and clear the queued output.
    pub fn flush_queue<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.queued.is_empty() {
            return Ok(());
        }
        out.write_all(self.queued.as_bytes())?;
        out.flush()?;
        self.queued.clear();
        Ok(())
    }

    fn write_node<W: Write>(
        &mut self,
        out: &mut W,
        title: Option<&str>,
        node: &RenderNode,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Html => {
                if !self.assets_written {
                    out.write_all(self.html.assets(&self.skin).as_bytes())?;
                    self.assets_written = true;
                }
                if let Some(title) = title {
                    out.write_all(self.html.title(title).as_bytes())?;
                }
                out.write_all(self.html.tree(node).as_bytes())?;
            }
            OutputFormat::Text => {
                if let Some(title) = title {
                    writeln!(out, "{}", title)?;
                }
                out.write_all(self.text.tree(node).as_bytes())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, node)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

// Queued output that was never flushed goes to stdout.
impl Drop for Dumper {
    fn drop(&mut self) {
        if self.queued.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.flush_queue(&mut stdout) {
            tracing::warn!("dropping queued output: {}", e);
        }
    }
}
