// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

pub mod dag {
    use super::*;

    pub struct Node {
        pub id: u64,
        pub label: String,
        pub children: Vec<Rc<Node>>,
    }

    memviz::record!(Node { pub id, pub label, pub children });

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub layers: usize,
        pub nodes_per_layer: usize,
        pub fanout: usize,
        pub label_len: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeLongLabels,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeLongLabels => "large_long_labels",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params { layers: 4, nodes_per_layer: 4, fanout: 2, label_len: 8 },
                Self::MediumDense => {
                    Params { layers: 8, nodes_per_layer: 16, fanout: 6, label_len: 12 }
                }
                Self::LargeLongLabels => {
                    Params { layers: 16, nodes_per_layer: 32, fanout: 3, label_len: 96 }
                }
            }
        }
    }

    /// Layered DAG: every node links to `fanout` nodes of the next layer, so lower layers are
    /// heavily shared.
    pub fn roots(params: Params) -> Vec<Rc<Node>> {
        let mut next_id = 0_u64;
        let mut below: Vec<Rc<Node>> = Vec::new();
        for layer in (0..params.layers).rev() {
            let mut current = Vec::with_capacity(params.nodes_per_layer);
            for idx in 0..params.nodes_per_layer {
                let children = if below.is_empty() {
                    Vec::new()
                } else {
                    (0..params.fanout).map(|k| below[(idx + k * 7) % below.len()].clone()).collect()
                };
                let label = ascii_repeat_to_len(&format!("L{layer}N{idx}"), '.', params.label_len);
                current.push(Rc::new(Node { id: next_id, label, children }));
                next_id += 1;
            }
            below = current;
        }
        below
    }

    pub fn fixture(case: Case) -> Vec<Rc<Node>> {
        roots(case.params())
    }
}

pub mod ring {
    use super::*;

    pub struct Member {
        pub name: String,
        pub attributes: HashMap<String, i64>,
        pub next: RefCell<Option<Rc<Member>>>,
    }

    memviz::record!(Member { pub name, pub attributes, pub next });

    /// Members linked into one cycle. The cycle is broken when the ring is dropped.
    pub struct Ring {
        pub head: Rc<Member>,
        members: Vec<Rc<Member>>,
    }

    impl Drop for Ring {
        fn drop(&mut self) {
            for member in &self.members {
                member.next.borrow_mut().take();
            }
        }
    }

    pub fn fixture(len: usize, attributes: usize) -> Ring {
        let members = (0..len)
            .map(|idx| {
                let attributes =
                    (0..attributes).map(|k| (format!("attr{k}"), (idx * k) as i64)).collect();
                Rc::new(Member {
                    name: format!("member{idx}"),
                    attributes,
                    next: RefCell::new(None),
                })
            })
            .collect::<Vec<_>>();
        for (idx, member) in members.iter().enumerate() {
            let next = members[(idx + 1) % members.len()].clone();
            *member.next.borrow_mut() = Some(next);
        }
        Ring { head: members[0].clone(), members }
    }
}
