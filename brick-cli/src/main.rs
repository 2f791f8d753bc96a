//! brick CLI
//!
//! Renders content described as JSON to an HTML string, and lists the
//! standard tag catalog.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use brick_common::warning::{clear_warnings, warn_once};
use brick_html::{Tag, document, raw, render};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::Value;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[command(name = "brick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a JSON file
    brick render page.json

    # Render a JSON string directly
    brick render --json '{"tag": "p", "children": ["Hello"]}'

    # Wrap the output in <!DOCTYPE html><html>...<body>
    brick render --document page.json

    # List known tag names
    brick tags

CONTENT FORMAT:
    "text"                                  escaped text
    42                                      number
    null                                    nothing
    [ ... ]                                 items in order
    {"raw": "<hr>"}                         unescaped markup
    {"tag": "a", "attributes": {"href": "/"}, "children": ["Home"]}
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render JSON content to HTML
    Render {
        /// JSON file to render (reads stdin when omitted)
        #[arg(value_name = "FILE", conflicts_with = "json")]
        path: Option<PathBuf>,

        /// Render a JSON string directly instead of a file
        #[arg(long, value_name = "JSON")]
        json: Option<String>,

        /// Wrap the output in a document root, with the content as the body
        #[arg(short, long)]
        document: bool,
    },
    /// List the standard tag names
    Tags,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            path,
            json,
            document,
        } => {
            let source = read_source(path.as_deref(), json)?;
            let value: Value = serde_json::from_str(&source).context("input is not valid JSON")?;
            let output = render_value(&value, document)?;
            clear_warnings();
            for tag in unknown_tags(&value) {
                warn_once("render", &format!("<{tag}> is not a standard tag"));
            }
            println!("{output}");
        }
        Command::Tags => {
            for tag in Tag::iter() {
                println!("{tag}");
            }
        }
    }
    Ok(())
}

/// Inline JSON wins, then the file, then stdin.
fn read_source(path: Option<&Path>, json: Option<String>) -> Result<String> {
    if let Some(json) = json {
        return Ok(json);
    }
    if let Some(path) = path {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()));
    }
    let mut source = String::new();
    let _ = io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok(source)
}

/// Tag names in element objects that are not in the standard catalog, in
/// document order.
fn unknown_tags(value: &Value) -> Vec<&str> {
    let mut tags = Vec::new();
    collect_unknown_tags(value, &mut tags);
    tags
}

fn collect_unknown_tags<'a>(value: &'a Value, tags: &mut Vec<&'a str>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_unknown_tags(item, tags);
            }
        }
        Value::Object(object) => {
            if let Some(Value::String(name)) = object.get("tag")
                && Tag::from_str(name).is_err()
            {
                tags.push(name);
            }
            if let Some(children) = object.get("children") {
                collect_unknown_tags(children, tags);
            }
        }
        _ => {}
    }
}

fn render_value(value: &Value, as_document: bool) -> Result<String> {
    let content = render(value).context("failed to render content")?;
    if !as_document {
        return Ok(content);
    }
    let root = document(None, None, [raw(content)]);
    render(&root).context("failed to render document")
}
