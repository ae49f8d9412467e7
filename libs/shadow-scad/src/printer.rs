//! # OpenSCAD Printer
//!
//! Renders a CSG tree as OpenSCAD source. Transforms chain onto their child
//! on one line; booleans open an indented block.

use config::constants::approx_equal;

use crate::node::CsgNode;

const INDENT: &str = "  ";

/// Renders `root` as a complete OpenSCAD file.
///
/// ```rust
/// use shadow_scad::{print_scad, CsgNode};
///
/// let tree = CsgNode::translate([1.0, 2.5, 0.0], CsgNode::cube([2.2, 2.2, 6.0]));
/// assert_eq!(print_scad(&tree), "translate([1, 2.5, 0]) cube([2.2, 2.2, 6]);\n");
/// ```
pub fn print_scad(root: &CsgNode) -> String {
    let mut out = String::new();
    print_node(root, 0, &mut out);
    out
}

fn print_node(node: &CsgNode, depth: usize, out: &mut String) {
    out.push_str(&INDENT.repeat(depth));
    print_chain(node, depth, out);
}

fn print_chain(node: &CsgNode, depth: usize, out: &mut String) {
    match node {
        CsgNode::Cube { size } => {
            out.push_str(&format!("cube({});\n", print_vec(size)));
        }
        CsgNode::Translate { offset, child } => {
            out.push_str(&format!("translate({}) ", print_vec(offset)));
            print_chain(child, depth, out);
        }
        CsgNode::Rotate { angles, child } => {
            out.push_str(&format!("rotate({}) ", print_vec(angles)));
            print_chain(child, depth, out);
        }
        CsgNode::Union { children } => print_block("union", children, depth, out),
        CsgNode::Difference { children } => print_block("difference", children, depth, out),
    }
}

fn print_block(name: &str, children: &[CsgNode], depth: usize, out: &mut String) {
    if children.is_empty() {
        out.push_str(&format!("{name}() {{}}\n"));
        return;
    }
    out.push_str(&format!("{name}() {{\n"));
    for child in children {
        print_node(child, depth + 1, out);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push_str("}\n");
}

fn print_vec(v: &[f64; 3]) -> String {
    format!("[{}]", v.iter().map(|&x| print_number(x)).collect::<Vec<_>>().join(", "))
}

/// Prints `v` rounded to six decimals without trailing zeros.
fn print_number(v: f64) -> String {
    if approx_equal(v, 0.0) {
        return "0".to_string();
    }
    let text = format!("{v:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
