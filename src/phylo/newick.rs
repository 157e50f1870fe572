// newick.rs - Newick serialization and file output

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::phylo::nj::Node;

/// Serialize a tree to a Newick string with branch lengths
pub fn to_newick(root: &Node) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out.push(';');
    out
}

fn write_node(node: &Node, out: &mut String) {
    if node.is_leaf() {
        out.push_str(node.name.as_deref().unwrap_or(""));
        return;
    }

    out.push('(');
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_node(child, out);
        out.push(':');
        out.push_str(&child.length.to_string());
    }
    out.push(')');
    if let Some(name) = &node.name {
        out.push_str(name);
    }
}

/// Write the tree to a Newick file
pub fn write_newick(root: &Node, file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }

    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create tree file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", to_newick(root)).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    println!("🌲 Tree written to: {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, length: f64) -> Node {
        Node {
            name: Some(name.to_string()),
            length,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(to_newick(&leaf("A", 0.0)), "A;");
    }

    #[test]
    fn test_nested_tree_with_branch_lengths() {
        let tree = Node {
            name: None,
            length: 0.0,
            children: vec![
                Node {
                    name: None,
                    length: 0.0,
                    children: vec![leaf("A", 2.0), leaf("B", 3.0)],
                },
                Node {
                    name: None,
                    length: 1.0,
                    children: vec![leaf("C", 4.0), leaf("D", 5.0)],
                },
            ],
        };

        assert_eq!(to_newick(&tree), "((A:2,B:3):0,(C:4,D:5):1);");
    }

    #[test]
    fn test_fractional_lengths() {
        let tree = Node {
            name: None,
            length: 0.0,
            children: vec![leaf("x", 0.25), leaf("y", 0.5)],
        };

        assert_eq!(to_newick(&tree), "(x:0.25,y:0.5);");
    }
}
