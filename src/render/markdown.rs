use super::{escape_table_cell, table_cell_link};
use crate::core::model::{Link, Representation, Target};
use crate::render::Renderer;
use crate::Result;

const MAX_HEADING_LEVEL: usize = 6;

/// Renders a human-readable summary of a representation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, repr: &Representation) -> Result<String> {
        let mut out = String::new();
        self.render_section(repr, 1, &mut out)?;
        Ok(out)
    }
}

impl MarkdownRenderer {
    fn render_section(&self, repr: &Representation, level: usize, out: &mut String) -> Result<()> {
        let hashes = "#".repeat(level.min(MAX_HEADING_LEVEL));
        match repr.href() {
            Some(href) => out.push_str(&format!("{} {}\n\n", hashes, href)),
            None => out.push_str(&format!("{} (anonymous)\n\n", hashes)),
        }

        if !repr.properties().is_empty() {
            let props = serde_json::to_string_pretty(repr.properties())?;
            out.push_str(&format!("```json\n{}\n```\n\n", props));
        }

        let addressable: Vec<&Link> = repr.all_links().iter().filter(|l| !l.is_embedded()).collect();
        if !addressable.is_empty() {
            out.push_str("| rel | relation | target | templated |\n");
            out.push_str("|---|---|---|---|\n");
            for link in addressable {
                out.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    escape_table_cell(link.literal_rel()),
                    escape_table_cell(link.fully_qualified_rel()),
                    render_target(link.target()),
                    if link.is_templated() { "yes" } else { "no" },
                ));
            }
            out.push('\n');
        }

        for link in repr.all_links() {
            if let Some(nested) = link.embedded() {
                out.push_str(&format!(
                    "{} Embedded `{}`\n\n",
                    "#".repeat((level + 1).min(MAX_HEADING_LEVEL)),
                    link.literal_rel()
                ));
                self.render_section(nested, level + 2, out)?;
            }
        }

        Ok(())
    }
}

fn render_target(target: Option<&Target>) -> String {
    match target {
        Some(Target::Url { href, .. }) => table_cell_link(href),
        Some(other) => format!("`{}`", escape_table_cell(other.as_str())),
        None => "-".to_string(),
    }
}
