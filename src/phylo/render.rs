// render.rs - Terminal tree rendering (display only)

use crate::phylo::nj::Node;

/// Display scaling applied to every branch before printing
const BRANCH_SCALE: f64 = 1.5;
/// Floor so short branches stay visible
const MIN_BRANCH: f64 = 0.1;

/// Print the tree to the console with normalized branch lengths.
///
/// Purely observational: nothing downstream consumes this output.
pub fn print_tree(root: &Node) {
    println!("🌳 Neighbor-joining tree ({} leaves):", root.leaf_count());
    let mut lines = Vec::new();
    render_node(root, "", "", true, &mut lines);
    for line in lines {
        println!("{}", line);
    }
}

fn render_node(node: &Node, connector: &str, prefix: &str, is_root: bool, out: &mut Vec<String>) {
    let label = match &node.name {
        Some(name) => name.clone(),
        None => "+".to_string(),
    };

    if is_root {
        out.push(label);
    } else {
        out.push(format!(
            "{}{} {} ({:.2})",
            prefix,
            connector,
            label,
            display_length(node.length)
        ));
    }

    let child_prefix = if is_root {
        String::new()
    } else if connector == "└─" {
        format!("{}   ", prefix)
    } else {
        format!("{}│  ", prefix)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_connector = if i + 1 == node.children.len() {
            "└─"
        } else {
            "├─"
        };
        render_node(child, child_connector, &child_prefix, false, out);
    }
}

fn display_length(length: f64) -> f64 {
    (length * BRANCH_SCALE).max(MIN_BRANCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_length_scales_and_floors() {
        assert_eq!(display_length(2.0), 3.0);
        assert_eq!(display_length(0.0), 0.1);
        assert_eq!(display_length(0.01), 0.1);
    }
}
