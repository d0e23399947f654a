// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree basics.
//!
//! Builds a small tree through child views, walks it in pre-order and in-order,
//! and shows how removal treats single-child and double nodes.
//!
//! Run:
//! - `cargo run -p quadbit_demos --example tree_basics`

use quadbit_tree::{BinaryTree, RecursiveTree};

fn main() {
    //        1
    //      /   \
    //     2     3
    //    /     / \
    //   4     6   7
    let mut tree = BinaryTree::leaf(1);
    let (_, left, right) = tree.node_mut().unwrap();
    left.create_root_with_value(2).unwrap();
    left.left_mut().unwrap().create_root_with_value(4).unwrap();
    right.create_root_with_value(3).unwrap();
    let (_, six, seven) = right.node_mut().unwrap();
    six.create_root_with_value(6).unwrap();
    seven.create_root_with_value(7).unwrap();

    println!("tree:      {tree}");
    println!("size={} height={}", tree.size(), tree.height());
    println!("pre-order: {:?}", tree.pre_order().collect::<Vec<_>>());
    println!("in-order:  {:?}", tree.in_order().collect::<Vec<_>>());

    // Node 2 has only a left child, so removing it promotes 4.
    let removed = tree.left_mut().unwrap().remove_root().unwrap();
    println!("removed {removed}: {tree}");

    // Node 3 has two children and cannot be removed.
    match tree.right_mut().unwrap().remove_root() {
        Ok(v) => println!("unexpectedly removed {v}"),
        Err(err) => println!("refused: {err}"),
    }

    let copy = tree.clone();
    println!("copy equal: {}", copy == tree);
}
