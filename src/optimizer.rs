//! Placement engine.
//!
//! Picks the smallest candidate box that can hold every item and records
//! where each item sits. The heuristic is greedy:
//! - Boxes are tried smallest first, items largest first
//! - Each item takes the first of six orientations that fits (first fit)
//! - A placed item cuts its cell into up to three residual cells (guillotine)
//! - The first item that does not fit aborts the whole box attempt
//!
//! Nothing is backtracked, so some feasible packings are missed.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{
    BoxSource, filter_by_volume, select_candidate_boxes, sort_boxes_by_volume_asc,
    sort_items_by_volume_desc, total_volume,
};
use crate::cell::{Cell, PackedBox, finalize};
use crate::error::PackError;
use crate::model::{CatalogEntry, DimensionPolicy, Item, ItemSpec, Section, expand_items};
use crate::types::{Dimensional, Vec3};

/// Configuration for the packing run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PackingConfig {
    /// How missing item dimensions are handled
    pub dimension_policy: DimensionPolicy,
    /// Upper bound on the number of items after quantity expansion
    pub max_items: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            dimension_policy: DimensionPolicy::default(),
            max_items: Self::DEFAULT_MAX_ITEMS,
        }
    }
}

impl PackingConfig {
    pub const DEFAULT_MAX_ITEMS: usize = 10_000;

    pub fn builder() -> PackingConfigBuilder {
        PackingConfigBuilder::default()
    }
}

/// Builder for `PackingConfig`.
#[derive(Clone, Debug, Default)]
pub struct PackingConfigBuilder {
    config: PackingConfig,
}

impl PackingConfigBuilder {
    pub fn dimension_policy(mut self, policy: DimensionPolicy) -> Self {
        self.config.dimension_policy = policy;
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.config.max_items = max_items;
        self
    }

    pub fn build(self) -> PackingConfig {
        self.config
    }
}

/// Events emitted while packing, for live visualization of the attempts.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub enum PackEvent {
    /// Candidate boxes survived the volume filter.
    CandidatesSelected { total_volume: f64, candidates: usize },
    /// A candidate box is being tried.
    BoxAttemptStarted {
        attempt: usize,
        label: String,
        dims: (f64, f64, f64),
    },
    /// An item was placed in the current box.
    ItemPlaced {
        attempt: usize,
        item_id: String,
        orientation: (f64, f64, f64),
        sections: Vec<Section>,
    },
    /// An item found no cell in the current box.
    ItemRejected { attempt: usize, item_id: String },
    /// The current box was abandoned.
    BoxRejected { attempt: usize, label: String },
    /// Packing succeeded.
    Finished {
        label: String,
        dims: (f64, f64, f64),
        items: usize,
        remaining_volume: f64,
    },
    /// Packing failed.
    Failed { code: String, message: String },
}

/// Where an item ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub orientation: Vec3,
    pub sections: Vec<Section>,
}

/// Packs items into the smallest fitting box of a source.
///
/// # Parameters
/// * `items` - Input lines; quantities are expanded before packing
/// * `source` - Carrier catalog or caller-supplied boxes
///
/// # Returns
/// The chosen box with its placement tree, or the reason no box was chosen
pub fn pack(items: &[ItemSpec], source: &BoxSource) -> Result<PackedBox, PackError> {
    pack_with_config(items, source, &PackingConfig::default())
}

/// Like `pack`, with an explicit configuration.
pub fn pack_with_config(
    items: &[ItemSpec],
    source: &BoxSource,
    config: &PackingConfig,
) -> Result<PackedBox, PackError> {
    pack_with_progress(items, source, config, |_| {})
}

/// Packing with a progress callback.
///
/// Calls `on_event` for every box attempt and placement (suitable for SSE).
/// Always ends with either `Finished` or `Failed`.
pub fn pack_with_progress(
    items: &[ItemSpec],
    source: &BoxSource,
    config: &PackingConfig,
    mut on_event: impl FnMut(&PackEvent),
) -> Result<PackedBox, PackError> {
    let result = run(items, source, config, &mut on_event);
    match &result {
        Ok(packed) => on_event(&PackEvent::Finished {
            label: packed.label().to_string(),
            dims: packed.dimensions(),
            items: packed.item_count(),
            remaining_volume: packed.remaining_volume(),
        }),
        Err(err) => {
            debug!(code = err.code(), "Packing failed: {}", err);
            on_event(&PackEvent::Failed {
                code: err.code().to_string(),
                message: err.to_string(),
            })
        }
    }
    result
}

fn run<F: FnMut(&PackEvent)>(
    specs: &[ItemSpec],
    source: &BoxSource,
    config: &PackingConfig,
    on_event: &mut F,
) -> Result<PackedBox, PackError> {
    let boxes = select_candidate_boxes(source)?;
    let mut items = expand_items(specs, config.dimension_policy, config.max_items)?;

    let total = total_volume(&items);
    let mut boxes = filter_by_volume(boxes, total)?;

    sort_boxes_by_volume_asc(&mut boxes);
    sort_items_by_volume_desc(&mut items);

    debug!(
        source = %source.describe(),
        items = items.len(),
        candidates = boxes.len(),
        total_volume = total,
        "Candidate boxes selected"
    );
    on_event(&PackEvent::CandidatesSelected {
        total_volume: total,
        candidates: boxes.len(),
    });

    find_box(&items, boxes, on_event)
}

/// Tries the boxes in order and returns the first that takes every item.
///
/// `items` must already be sorted largest first and `boxes` smallest first.
fn find_box<F: FnMut(&PackEvent)>(
    items: &[Item],
    boxes: Vec<CatalogEntry>,
    on_event: &mut F,
) -> Result<PackedBox, PackError> {
    let candidates = boxes.len();

    for (attempt, entry) in boxes.into_iter().enumerate() {
        on_event(&PackEvent::BoxAttemptStarted {
            attempt,
            label: entry.label.clone(),
            dims: entry.dims,
        });

        match place_all(items, &entry, attempt, on_event) {
            Some(root) => {
                debug!(attempt, label = %entry.label, "Box accepted");
                return Ok(finalize(root, entry));
            }
            None => {
                debug!(attempt, label = %entry.label, "Box rejected");
                on_event(&PackEvent::BoxRejected {
                    attempt,
                    label: entry.label,
                });
            }
        }
    }

    Err(PackError::PlacementExhausted { candidates })
}

/// Places every item into a fresh tree for `entry`.
///
/// Returns `None` on the first item that does not fit; the partial tree is
/// dropped with it.
fn place_all<F: FnMut(&PackEvent)>(
    items: &[Item],
    entry: &CatalogEntry,
    attempt: usize,
    on_event: &mut F,
) -> Option<Cell> {
    let mut root = Cell::root(entry.dims_as_vec3());

    for item in items {
        match fit_item(item, &mut root) {
            Some(placement) => on_event(&PackEvent::ItemPlaced {
                attempt,
                item_id: item.id.clone(),
                orientation: placement.orientation.as_tuple(),
                sections: placement.sections,
            }),
            None => {
                on_event(&PackEvent::ItemRejected {
                    attempt,
                    item_id: item.id.clone(),
                });
                return None;
            }
        }
    }
    Some(root)
}

/// Finds a leaf for `item` below `cell`.
///
/// Leaves are checked directly. Internal cells hand the item to their
/// children in creation order (upper, side, behind) and stop at the first
/// child that accepts it.
pub fn fit_item(item: &Item, cell: &mut Cell) -> Option<Placement> {
    if cell.is_leaf() {
        return check_dimensions(item, cell);
    }
    cell.parts.iter_mut().find_map(|part| fit_item(item, part))
}

/// Places `item` in the leaf `cell` if one of its orientations fits.
///
/// Fails right away when the item volume exceeds the cell's remaining
/// volume. Otherwise the six permutations are tried in fixed order and the
/// first one whose dimensions are all `<=` the cell's wins; the cell is then
/// split around the item.
pub fn check_dimensions(item: &Item, cell: &mut Cell) -> Option<Placement> {
    if item.volume() > cell.remaining_volume {
        return None;
    }

    let orientation = item
        .dims
        .permutations()
        .into_iter()
        .find(|candidate| candidate.fits_within(&cell.dims))?;

    let mut placed = item.clone();
    placed.oriented = Some(orientation);
    split_box(placed, cell);

    Some(Placement {
        orientation,
        sections: cell.sections.clone(),
    })
}

/// Guillotine split of `cell` around an oriented item.
///
/// The item takes the anchor corner. Residual cells are created only for
/// non-zero residuals:
/// - upper: `(ix, y - iy, iz)`, floor raised by `iy`
/// - side: `(x - ix, y, z)`, shifted along the length axis by `ix`
/// - behind: `(ix, y, z - iz)`, shifted along the depth axis by `iz`
pub fn split_box(mut item: Item, cell: &mut Cell) {
    let oriented = item.oriented_dims();
    item.sections = cell.sections.clone();
    cell.remaining_volume -= item.volume();

    let residual_x = cell.dims.x - oriented.x;
    let residual_y = cell.dims.y - oriented.y;
    let residual_z = cell.dims.z - oriented.z;
    let anchor = cell.center;

    let mut parts = Vec::with_capacity(3);
    if residual_y > 0.0 {
        parts.push(Cell::child(
            Vec3::new(oriented.x, residual_y, oriented.z),
            Vec3::new(anchor.x, anchor.y + oriented.y, anchor.z),
            extend_path(&cell.sections, Section::Upper),
        ));
    }
    if residual_x > 0.0 {
        parts.push(Cell::child(
            Vec3::new(residual_x, cell.dims.y, cell.dims.z),
            Vec3::new(anchor.x - oriented.x, anchor.y, anchor.z),
            extend_path(&cell.sections, Section::Side),
        ));
    }
    if residual_z > 0.0 {
        parts.push(Cell::child(
            Vec3::new(oriented.x, cell.dims.y, residual_z),
            Vec3::new(anchor.x, anchor.y, anchor.z - oriented.z),
            extend_path(&cell.sections, Section::Behind),
        ));
    }

    cell.parts = parts;
    cell.occupant = Some(item);
}

fn extend_path(path: &[Section], next: Section) -> Vec<Section> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(next);
    extended
}
