// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in sample data for `memviz --demo`.

use std::rc::Rc;

/// A binary tree node whose children may be shared.
#[derive(Debug)]
pub struct Tree {
    pub id: i64,
    pub left: Option<Rc<Tree>>,
    pub right: Option<Rc<Tree>>,
}

crate::record!(Tree { pub id, pub left, pub right });

impl Tree {
    pub fn leaf(id: i64) -> Rc<Self> {
        Rc::new(Self { id, left: None, right: None })
    }
}

/// A three-level tree whose two inner nodes share leaf `3`: the leaf is drawn once with two
/// incoming edges.
pub fn shared_leaf_tree() -> Tree {
    let leaf = Tree::leaf(3);
    let left = Rc::new(Tree { id: 1, left: None, right: Some(leaf.clone()) });
    let right = Rc::new(Tree { id: 2, left: Some(leaf), right: None });
    Tree { id: 0, left: Some(left), right: Some(right) }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::shared_leaf_tree;
    use crate::config::Config;
    use crate::render::render_value;

    #[test]
    fn demo_tree_shares_its_leaf() {
        let tree = shared_leaf_tree();
        let (Some(left), Some(right)) = (&tree.left, &tree.right) else {
            panic!("demo tree has two children");
        };
        let (Some(a), Some(b)) = (&left.right, &right.left) else {
            panic!("both children point at the leaf");
        };
        assert!(Rc::ptr_eq(a, b));

        let out = render_value(&Config::default(), &tree);
        assert_eq!(out.matches("[label=").count(), 4);
        assert_eq!(out.matches("-> 3:name;").count(), 2);
    }
}
