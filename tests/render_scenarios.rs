// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use memviz::model::Place;
use memviz::{render_to_string, render_value, Config};
use pretty_assertions::assert_eq;

struct Tree {
    id: i64,
    left: Option<Rc<Tree>>,
    right: Option<Rc<Tree>>,
}

memviz::record!(Tree { id, left, right });

fn tree(id: i64, left: Option<Rc<Tree>>, right: Option<Rc<Tree>>) -> Rc<Tree> {
    Rc::new(Tree { id, left, right })
}

fn node_count(dot: &str) -> usize {
    dot.matches("[label=").count()
}

fn edge_count(dot: &str) -> usize {
    dot.matches(" -> ").count()
}

#[test]
fn slice_of_tree_pointers_reuses_each_tree() {
    let leaf = tree(3, None, None);
    let left = tree(1, None, Some(leaf.clone()));
    let right = tree(2, Some(leaf.clone()), None);
    let root = tree(0, Some(left.clone()), Some(right.clone()));
    let slice = vec![root, left, right, leaf];

    let out = render_value(&Config::default(), &slice);
    assert_eq!(node_count(&out), 5);
    for edge in [
        "  1:i1_0 -> 2:name;\n",
        "  1:i1_1 -> 3:name;\n",
        "  1:i1_2 -> 5:name;\n",
        "  1:i1_3 -> 4:name;\n",
    ] {
        assert!(out.contains(edge), "missing {edge:?} in\n{out}");
    }
}

#[test]
fn variadic_roots_are_drawn_into_one_graph() {
    let leaf = tree(0, None, None);
    let inner1 = tree(1, None, Some(leaf.clone()));
    let inner2 = tree(2, Some(leaf), None);
    let root1 = tree(3, Some(inner1), Some(inner2.clone()));
    let root2 = tree(4, Some(inner2), None);

    let out = render_to_string(
        &Config::default(),
        &[Place::stored(&*root1), Place::stored(&*root2)],
    );
    assert_eq!(node_count(&out), 5);
    assert_eq!(edge_count(&out), 5);
    assert!(out.contains("<f0> id: 4|<f1> left|"));
}

struct Fib {
    index: i64,
    prev: Option<Rc<Fib>>,
    prevprev: Option<Rc<Fib>>,
}

memviz::record!(Fib { index, prev, prevprev });

#[test]
fn fibonacci_dag_draws_each_number_once() {
    let mut numbers: Vec<Rc<Fib>> = Vec::new();
    for index in 0..6 {
        let prev = numbers.last().cloned();
        let prevprev = numbers.len().checked_sub(2).map(|at| numbers[at].clone());
        numbers.push(Rc::new(Fib { index, prev, prevprev }));
    }
    let top = numbers.last().cloned().expect("six numbers");

    let out = render_value(&Config::default(), &*top);
    assert_eq!(node_count(&out), 6);
    assert_eq!(edge_count(&out), 9);
    assert!(out.contains("  1:f1 -> 2:name;\n"));
    assert!(out.contains("  1:f2 -> 3:name;\n"));
    assert!(out.contains(r#"  6 [label="<name> Fib|<f0> index: 0|<f1> prev: Rc\<Fib\>(nil)|<f2> prevprev: Rc\<Fib\>(nil)"];"#));
}

struct StructMap {
    id: String,
    links: RefCell<BTreeMap<String, Rc<StructMap>>>,
}

memviz::record!(StructMap { id, links });

impl StructMap {
    fn new(id: &str) -> Rc<Self> {
        Rc::new(Self { id: id.to_owned(), links: RefCell::new(BTreeMap::new()) })
    }
}

#[test]
fn map_links_and_self_links_terminate() {
    let parent = StructMap::new("parent");
    let leaf = StructMap::new("leaf");
    let leaf2 = StructMap::new("leaf2");
    leaf.links.borrow_mut().insert("parent".to_owned(), parent.clone());
    {
        let mut links = parent.links.borrow_mut();
        links.insert("leaf".to_owned(), leaf.clone());
        links.insert("leaf2".to_owned(), leaf2.clone());
        links.insert("parent".to_owned(), parent.clone());
    }

    let out = render_value(&Config::default(), &*parent);
    assert_eq!(node_count(&out), 4);
    for edge in [
        "  3:v4_0 -> 1:name;\n",
        "  2:v2_0 -> 3:name;\n",
        "  2:v2_1 -> 5:name;\n",
        "  2:v2_2 -> 1:name;\n",
        "  1:f1 -> 2:name;\n",
    ] {
        assert!(out.contains(edge), "missing {edge:?} in\n{out}");
    }
    assert_eq!(edge_count(&out), 5);
    assert!(out.contains(r#"<f1> links: BTreeMap\<String, Rc\<StructMap\>\>\{\}"#));

    parent.links.borrow_mut().clear();
    leaf.links.borrow_mut().clear();
}

#[test]
fn pointer_chain_draws_every_hop() {
    let text = "Hello world".to_owned();
    let hop1 = &text;
    let hop2 = &hop1;
    let hop3 = &hop2;

    let out = render_value(&Config::default(), &hop3);
    assert_eq!(node_count(&out), 4);
    assert_eq!(edge_count(&out), 3);
    assert!(out.contains(r#"  4 [label="<name> \"Hello world\""];"#));
    assert!(out.contains(r#"  1 [label="<name> &&&String"];"#));
}

struct Aliasing<'a> {
    left: &'a &'a String,
    right: &'a String,
}

memviz::record!(Aliasing<'a> { left, right });

#[test]
fn aliased_pointers_converge_on_one_string() {
    let leaf = "leaf".to_owned();
    let parent0 = &leaf;
    let root = Aliasing { left: &parent0, right: &leaf };

    let out = render_value(&Config::default(), &root);
    let expected = concat!(
        "digraph structs {\n",
        "  node [shape=Mrecord];\n",
        r#"  3 [label="<name> \"leaf\""];"#,
        "\n",
        r#"  2 [label="<name> &String"];"#,
        "\n",
        "  2:name -> 3:name;\n",
        r#"  1 [label="<name> Aliasing|<f0> left|<f1> right"];"#,
        "\n",
        "  1:f0 -> 2:name;\n",
        "  1:f1 -> 3:name;\n",
        "}\n",
    );
    assert_eq!(out, expected);
}

struct Empty;

memviz::record!(Empty {});

#[test]
fn zero_sized_elements_share_one_node() {
    let empties = vec![Empty, Empty, Empty];
    let out = render_value(&Config::default(), &empties);
    assert_eq!(node_count(&out), 2);
    assert!(out.contains(r#"  2 [label="<name> Empty"];"#));
    assert_eq!(out.matches("-> 2:name;").count(), 3);
}

#[test]
fn map_with_absent_value_renders_nil_inline() {
    let map: HashMap<String, Option<Rc<Tree>>> = HashMap::from([("none".to_owned(), None)]);
    let out = render_value(&Config::default(), &map);
    assert!(out.contains(r#"{<k1_0> \"none\"|<v1_0> Rc\<Tree\>(nil)}"#));
    assert_eq!(edge_count(&out), 0);
}

#[test]
fn json_documents_render_through_their_values() {
    let document: serde_json::Value = serde_json::from_str(
        r#"{"tags": ["a", "b"], "name": "memviz", "nested": {"x": 1, "y": null}}"#,
    )
    .expect("valid json");

    let out = render_value(&Config::default(), &document);
    assert_eq!(node_count(&out), 1);
    assert!(out.contains(r#"  1 [label="<name> object|{<k1_0> \"name\"|<v1_0> \"memviz\"}|"#));
    assert!(out.contains(r#"{<k1_1> \"nested\"|<v1_1> {{<k2_0> \"x\"|<v2_0> 1}|{<k2_1> \"y\"|<v2_1> null(nil)}}}"#));
    assert!(out.contains(r#"{<k1_2> \"tags\"|<v1_2> {<i3_0> 0: \"a\"|<i3_1> 1: \"b\"}}"#));
}

#[test]
fn png_export_without_graphviz_is_reported() {
    if which::which(memviz::export::DOT_PROGRAM).is_ok() {
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let leaf = tree(1, None, None);
    let err = memviz::write_png(&dir.path().join("tree"), &Config::default(), &[Place::stored(&*leaf)])
        .expect_err("dot is not installed");
    assert!(matches!(err, memviz::ExportError::DotNotFound(_)));
}
