//! Geometric checks on the placement tree.
//!
//! Converts cell anchors into bounding boxes and verifies that splits keep
//! their residual regions apart from each other and from the placed item.

use crate::cell::{Cell, flatten};
use crate::types::{BoundingBox, Vec3};

/// Region covered by a cell in the container-centered frame.
///
/// The anchor is the maximum corner on the length and depth axes and the
/// floor on the vertical axis.
pub fn cell_region(cell: &Cell) -> BoundingBox {
    anchored_region(cell.center, cell.dims)
}

/// Region taken by the cell's occupant, if any.
///
/// The item sits in the corner of its cell that the anchor marks.
pub fn occupied_region(cell: &Cell) -> Option<BoundingBox> {
    let item = cell.occupant.as_ref()?;
    Some(anchored_region(cell.center, item.oriented_dims()))
}

fn anchored_region(anchor: Vec3, dims: Vec3) -> BoundingBox {
    BoundingBox::new(
        Vec3::new(anchor.x - dims.x, anchor.y, anchor.z - dims.z),
        Vec3::new(anchor.x, anchor.y + dims.y, anchor.z),
    )
}

/// Checks a single split: children stay inside the parent, do not overlap
/// each other and do not overlap the parent's item.
pub fn split_is_disjoint(cell: &Cell) -> bool {
    let parent = cell_region(cell);
    let occupied = occupied_region(cell);
    let children: Vec<BoundingBox> = cell.parts.iter().map(cell_region).collect();

    if let Some(item) = occupied {
        if !parent.contains(&item) {
            return false;
        }
    }

    for (i, child) in children.iter().enumerate() {
        if !parent.contains(child) {
            return false;
        }
        if occupied.is_some_and(|item| item.intersects(child)) {
            return false;
        }
        if children[i + 1..].iter().any(|other| other.intersects(child)) {
            return false;
        }
    }
    true
}

/// Checks every split in the tree.
pub fn tree_is_disjoint(root: &Cell) -> bool {
    split_is_disjoint(root) && root.parts.iter().all(tree_is_disjoint)
}

/// Checks that no two placed items share interior volume.
pub fn placements_are_disjoint(root: &Cell) -> bool {
    let regions: Vec<BoundingBox> = flatten(root)
        .into_iter()
        .filter_map(occupied_region)
        .collect();

    regions
        .iter()
        .enumerate()
        .all(|(i, a)| regions[i + 1..].iter().all(|b| !a.intersects(b)))
}
