//! Index-addressed contour hierarchy.
//!
//! Contour tracers report nesting as four links per contour: next sibling,
//! previous sibling, first child and parent. The links are stored in a flat
//! arena keyed by contour index; nodes never own each other.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nesting links of one contour. `None` marks an absent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchyNode {
    /// Next contour at the same nesting level.
    pub next: Option<usize>,
    /// Previous contour at the same nesting level.
    pub previous: Option<usize>,
    /// First contour nested directly inside this one.
    pub first_child: Option<usize>,
    /// Contour this one is nested directly inside.
    pub parent: Option<usize>,
}

impl HierarchyNode {
    /// Builds a node from `[next, previous, first_child, parent]`, `-1` meaning absent.
    pub fn from_links(links: [i32; 4]) -> Result<Self> {
        let link = |value: i32| -> Result<Option<usize>> {
            match value {
                -1 => Ok(None),
                v if v >= 0 => Ok(Some(v as usize)),
                v => Err(Error::InvalidHierarchy(format!("negative link {}", v))),
            }
        };
        Ok(Self {
            next: link(links[0])?,
            previous: link(links[1])?,
            first_child: link(links[2])?,
            parent: link(links[3])?,
        })
    }

    /// Returns true if the contour has no parent.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    fn links(&self) -> [Option<usize>; 4] {
        [self.next, self.previous, self.first_child, self.parent]
    }
}

/// Hierarchy of all contours of one trace, parallel to the contour list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Creates a hierarchy from nodes ordered by contour index.
    pub fn new(nodes: Vec<HierarchyNode>) -> Self {
        Self { nodes }
    }

    /// Parses the `[next, previous, first_child, parent]` tuple convention.
    pub fn from_links(links: &[[i32; 4]]) -> Result<Self> {
        let nodes = links
            .iter()
            .map(|&l| HierarchyNode::from_links(l))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { nodes })
    }

    /// Builds full links from a parent index per contour.
    ///
    /// Siblings are chained in ascending contour index; each contour's first
    /// child is its lowest-indexed child.
    pub fn from_parents(parents: &[Option<usize>]) -> Result<Self> {
        let mut nodes = vec![HierarchyNode::default(); parents.len()];
        // Last contour seen per parent; `parents.len()` keys the root level.
        let mut last_child: Vec<Option<usize>> = vec![None; parents.len() + 1];

        for (i, &parent) in parents.iter().enumerate() {
            let level = match parent {
                Some(p) if p >= parents.len() || p == i => {
                    return Err(Error::InvalidHierarchy(format!(
                        "contour {} has invalid parent {}",
                        i, p
                    )));
                }
                Some(p) => p,
                None => parents.len(),
            };

            nodes[i].parent = parent;
            match last_child[level] {
                Some(prev) => {
                    nodes[prev].next = Some(i);
                    nodes[i].previous = Some(prev);
                }
                None => {
                    if let Some(p) = parent {
                        nodes[p].first_child = Some(i);
                    }
                }
            }
            last_child[level] = Some(i);
        }

        Ok(Self { nodes })
    }

    /// Returns the node of a contour, if the index is in range.
    pub fn node(&self, index: usize) -> Option<&HierarchyNode> {
        self.nodes.get(index)
    }

    /// Returns all nodes ordered by contour index.
    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of contours without a parent.
    pub fn top_level_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_top_level()).count()
    }

    /// Checks that the hierarchy describes exactly `contour_count` contours
    /// and that every link points at one of them.
    pub fn validate(&self, contour_count: usize) -> Result<()> {
        if self.nodes.len() != contour_count {
            return Err(Error::InvalidHierarchy(format!(
                "{} hierarchy entries for {} contours",
                self.nodes.len(),
                contour_count
            )));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(target) = node.links().into_iter().flatten().find(|&t| t >= contour_count) {
                return Err(Error::InvalidHierarchy(format!(
                    "contour {} links to {} (only {} contours)",
                    i, target, contour_count
                )));
            }
        }
        Ok(())
    }
}
