//! The placement tree.
//!
//! A `Cell` is an axis-aligned region of the container. The root spans the
//! whole box; every successful placement turns a leaf into an internal cell
//! holding the item plus up to three residual children. The tree is owned
//! top-down and never merged back.
//!
//! Cell anchors (`center`) use the frame of the rendering collaborator: the
//! container is centered on the origin, `center.x`/`center.z` mark the cell's
//! maximum corner on the length/depth axes and `center.y` its floor on the
//! vertical axis (hence the negative half-height of the root).

use serde::Serialize;

use crate::model::{CatalogEntry, Item, Section};
use crate::types::{Dimensional, Vec3};

/// A region of the container, possibly holding one item.
#[derive(Clone, Debug, Serialize)]
pub struct Cell {
    pub dims: Vec3,
    pub center: Vec3,
    pub volume: f64,
    pub remaining_volume: f64,
    pub occupant: Option<Item>,
    /// Residual regions in creation order: upper, side, behind.
    pub parts: Vec<Cell>,
    /// Split path from the root.
    pub sections: Vec<Section>,
}

impl Cell {
    /// Creates the root cell spanning a whole box.
    ///
    /// # Examples
    /// ```
    /// use boxfit::cell::Cell;
    /// use boxfit::types::Vec3;
    ///
    /// let root = Cell::root(Vec3::new(10.0, 8.0, 6.0));
    /// assert_eq!(root.center, Vec3::new(5.0, -4.0, 3.0));
    /// assert_eq!(root.remaining_volume, 480.0);
    /// ```
    pub fn root(dims: Vec3) -> Self {
        Self::child(
            dims,
            Vec3::new(dims.x / 2.0, -dims.y / 2.0, dims.z / 2.0),
            Vec::new(),
        )
    }

    /// Creates an empty cell at an explicit anchor.
    pub fn child(dims: Vec3, center: Vec3, sections: Vec<Section>) -> Self {
        let volume = dims.volume();
        Self {
            dims,
            center,
            volume,
            remaining_volume: volume,
            occupant: None,
            parts: Vec::new(),
            sections,
        }
    }

    /// A cell is a leaf until an item has been placed in it.
    pub fn is_leaf(&self) -> bool {
        self.occupant.is_none()
    }

    /// Number of occupied cells on the deepest root-to-leaf path.
    pub fn placement_depth(&self) -> usize {
        if self.occupant.is_none() {
            return 0;
        }
        1 + self
            .parts
            .iter()
            .map(Cell::placement_depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of cells in this subtree, including this one.
    pub fn cell_count(&self) -> usize {
        1 + self.parts.iter().map(Cell::cell_count).sum::<usize>()
    }
}

/// Collects every item-holding cell, depth first, self before children.
///
/// Empty cells are skipped. The order only depends on the tree, so repeated
/// calls on the same tree return the same sequence.
pub fn flatten(cell: &Cell) -> Vec<&Cell> {
    let mut out = Vec::new();
    collect_occupied(cell, &mut out);
    out
}

fn collect_occupied<'a>(cell: &'a Cell, out: &mut Vec<&'a Cell>) {
    if cell.occupant.is_some() {
        out.push(cell);
    }
    for part in &cell.parts {
        collect_occupied(part, out);
    }
}

/// The chosen box together with its placement tree.
#[derive(Clone, Debug, Serialize)]
pub struct PackedBox {
    pub entry: CatalogEntry,
    pub root: Cell,
    /// Identifiers of all placed items in traversal order.
    pub manifest: Vec<String>,
}

impl PackedBox {
    pub fn label(&self) -> &str {
        &self.entry.label
    }

    pub fn price(&self) -> &str {
        &self.entry.price
    }

    /// Box dimensions, as handed to shipment and rate collaborators.
    pub fn dimensions(&self) -> (f64, f64, f64) {
        self.root.dims.as_tuple()
    }

    pub fn volume(&self) -> f64 {
        self.root.volume
    }

    /// Root volume not taken by any placed item.
    pub fn remaining_volume(&self) -> f64 {
        self.root.remaining_volume
    }

    /// All placed items in traversal order.
    pub fn items(&self) -> Vec<&Item> {
        flatten(&self.root)
            .into_iter()
            .filter_map(|cell| cell.occupant.as_ref())
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.manifest.len()
    }

    /// Percentage of the box volume taken by items (0.0 to 100.0).
    pub fn utilization_percent(&self) -> f64 {
        if self.root.volume <= 0.0 {
            return 0.0;
        }
        (self.root.volume - self.root.remaining_volume) / self.root.volume * 100.0
    }
}

/// Rolls the placements of the whole tree up into the root.
///
/// A root without children is returned as is. Otherwise every item-holding
/// descendant is appended to the manifest and its volume is taken off the
/// root's remaining volume; empty residual cells contribute nothing.
pub fn finalize(mut root: Cell, entry: CatalogEntry) -> PackedBox {
    let mut manifest: Vec<String> = root.occupant.iter().map(|item| item.id.clone()).collect();

    if root.parts.is_empty() {
        return PackedBox {
            entry,
            root,
            manifest,
        };
    }

    let mut aggregated = 0.0;
    for part in &root.parts {
        for cell in flatten(part) {
            if let Some(item) = &cell.occupant {
                aggregated += item.volume();
                manifest.push(item.id.clone());
            }
        }
    }
    root.remaining_volume -= aggregated;

    PackedBox {
        entry,
        root,
        manifest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DimensionPolicy, ItemSpec};

    fn placed(id: &str, dims: (f64, f64, f64)) -> Item {
        let mut item = Item::from_spec(&ItemSpec::new(id, dims), DimensionPolicy::Reject).unwrap();
        item.oriented = Some(item.dims);
        item
    }

    fn occupy(cell: &mut Cell, item: Item) {
        cell.remaining_volume -= item.volume();
        cell.occupant = Some(item);
    }

    fn sample_tree() -> Cell {
        let mut root = Cell::root(Vec3::new(10.0, 10.0, 10.0));
        occupy(&mut root, placed("A", (4.0, 4.0, 4.0)));

        let mut upper = Cell::child(
            Vec3::new(4.0, 6.0, 4.0),
            Vec3::new(5.0, -1.0, 5.0),
            vec![Section::Upper],
        );
        occupy(&mut upper, placed("B", (2.0, 2.0, 2.0)));
        upper.parts.push(Cell::child(
            Vec3::new(2.0, 4.0, 2.0),
            Vec3::new(5.0, 1.0, 5.0),
            vec![Section::Upper, Section::Upper],
        ));

        let side = Cell::child(
            Vec3::new(6.0, 10.0, 10.0),
            Vec3::new(1.0, -5.0, 5.0),
            vec![Section::Side],
        );
        let mut behind = Cell::child(
            Vec3::new(4.0, 10.0, 6.0),
            Vec3::new(5.0, -5.0, 1.0),
            vec![Section::Behind],
        );
        occupy(&mut behind, placed("C", (3.0, 3.0, 3.0)));

        root.parts = vec![upper, side, behind];
        root
    }

    #[test]
    fn root_anchor_uses_negative_half_height() {
        let root = Cell::root(Vec3::new(12.0, 6.0, 4.0));
        assert_eq!(root.center, Vec3::new(6.0, -3.0, 2.0));
        assert!(root.is_leaf());
        assert!(root.sections.is_empty());
    }

    #[test]
    fn flatten_is_preorder_and_skips_empty_cells() {
        let root = sample_tree();
        let ids: Vec<_> = flatten(&root)
            .iter()
            .map(|c| c.occupant.as_ref().unwrap().id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn flatten_is_stable_across_calls() {
        let root = sample_tree();
        let first: Vec<*const Cell> = flatten(&root).into_iter().map(|c| c as *const _).collect();
        let second: Vec<*const Cell> = flatten(&root).into_iter().map(|c| c as *const _).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn placement_depth_counts_occupied_cells_on_deepest_branch() {
        let root = sample_tree();
        assert_eq!(root.placement_depth(), 2);
        assert_eq!(root.cell_count(), 5);
        assert_eq!(Cell::root(Vec3::new(1.0, 1.0, 1.0)).placement_depth(), 0);
    }

    #[test]
    fn finalize_without_children_returns_root_unchanged() {
        let mut root = Cell::root(Vec3::new(4.0, 4.0, 4.0));
        occupy(&mut root, placed("A", (4.0, 4.0, 4.0)));

        let packed = finalize(root, CatalogEntry::new((4.0, 4.0, 4.0), "Cube", "1"));
        assert_eq!(packed.remaining_volume(), 0.0);
        assert_eq!(packed.manifest, vec!["A".to_string()]);
        assert!(packed.root.parts.is_empty());
    }

    #[test]
    fn finalize_aggregates_descendants_and_skips_empty_cells() {
        let packed = finalize(sample_tree(), CatalogEntry::new((10.0, 10.0, 10.0), "Box", "5"));

        // Empty side and empty upper-upper cells add nothing to the manifest.
        assert_eq!(packed.manifest, vec!["A", "B", "C"]);
        assert_eq!(packed.item_count(), 3);
        assert_eq!(packed.remaining_volume(), 1000.0 - 64.0 - 8.0 - 27.0);
        assert!((packed.utilization_percent() - 9.9).abs() < 1e-9);
        assert_eq!(packed.items().len(), 3);
        assert_eq!(packed.label(), "Box");
        assert_eq!(packed.dimensions(), (10.0, 10.0, 10.0));
    }
}
