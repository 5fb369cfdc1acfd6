//! unwrap-images - Remove paragraphs around standalone images

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use unwrap_images::dom::{Dom, NodeData, NodeId, serialize};
use unwrap_images::{Error, Format, unwrap_images_counted};

#[derive(Parser)]
#[command(name = "unwrap-images")]
#[command(version, about = "Remove paragraphs around standalone images", long_about = None)]
#[command(after_help = "EXAMPLES:
    unwrap-images post.md -o post.html     Render markdown, unwrapping images
    unwrap-images page.html                Rewrite an HTML document to stdout
    echo '<p><img src=a.png></p>' | unwrap-images
                                           Rewrite an HTML fragment from stdin
    unwrap-images --tree page.html         Print the rewritten tree as JSON")]
struct Cli {
    /// Input file (HTML or Markdown); stdin when absent or `-`
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file; stdout when absent
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Input format: html (fragment), document, markdown
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Print the rewritten tree as JSON instead of HTML
    #[arg(long)]
    tree: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = cli.input.as_deref().filter(|path| *path != "-");

    let format = match (&cli.format, input) {
        (Some(name), _) => name.parse()?,
        (None, Some(path)) => Format::from_path(path)?,
        (None, None) => Format::Html,
    };

    let bytes = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let mut dom = format.parse(&bytes);
    let unwrapped = unwrap_images_counted(&mut dom);

    let rendered = if cli.tree {
        let mut json = tree_json(&dom).map_err(io::Error::from)?;
        json.push('\n');
        json
    } else {
        serialize(&dom)
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    if !cli.quiet {
        let noun = if unwrapped == 1 { "paragraph" } else { "paragraphs" };
        eprintln!("unwrapped {unwrapped} {noun}");
    }

    Ok(())
}

/// JSON fields of one node for `--tree`; children are written separately.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TreeNode<'a> {
    Root,
    Element {
        tag: &'a str,
        properties: BTreeMap<&'a str, &'a str>,
    },
    Text {
        value: &'a str,
    },
    Comment {
        value: &'a str,
    },
    Doctype {
        name: &'a str,
    },
}

impl<'a> TreeNode<'a> {
    fn new(dom: &'a Dom, id: NodeId) -> Self {
        match dom.node(id).map(|n| &n.data) {
            Some(NodeData::Element { name, attrs }) => TreeNode::Element {
                tag: &name.local,
                properties: attrs
                    .iter()
                    .map(|a| (&*a.name.local, a.value.as_str()))
                    .collect(),
            },
            Some(NodeData::Text(value)) => TreeNode::Text {
                value: value.as_str(),
            },
            Some(NodeData::Comment(value)) => TreeNode::Comment {
                value: value.as_str(),
            },
            Some(NodeData::Doctype { name, .. }) => TreeNode::Doctype {
                name: name.as_str(),
            },
            Some(NodeData::Document) | None => TreeNode::Root,
        }
    }

    fn has_children(&self) -> bool {
        matches!(self, TreeNode::Root | TreeNode::Element { .. })
    }
}

enum Frame {
    Open(NodeId),
    Close,
}

/// Render the tree as JSON with an explicit stack, so nesting depth is
/// bounded by memory rather than the call stack.
fn tree_json(dom: &Dom) -> serde_json::Result<String> {
    let mut out = String::new();
    let mut stack = vec![Frame::Open(dom.document())];

    while let Some(frame) = stack.pop() {
        let id = match frame {
            Frame::Open(id) => id,
            Frame::Close => {
                out.push_str("]}");
                continue;
            }
        };

        if !out.is_empty() && !out.ends_with('[') {
            out.push(',');
        }

        let node = TreeNode::new(dom, id);
        let fields = serde_json::to_string(&node)?;
        if !node.has_children() {
            out.push_str(&fields);
            continue;
        }

        // Reopen the object to append its children.
        out.push_str(fields.strip_suffix('}').unwrap_or(fields.as_str()));
        out.push_str(",\"children\":[");
        stack.push(Frame::Close);
        let start = stack.len();
        stack.extend(dom.children(id).map(Frame::Open));
        stack[start..].reverse();
    }

    Ok(out)
}
