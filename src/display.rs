//! Projection of a packed box into render coordinates.
//!
//! The renderer works in the container-centered frame of the placement tree,
//! divided by a caller-chosen scale. Each placed item gets a color, a slightly
//! shrunk geometry so neighbouring faces stay visible, and a position at the
//! middle of its occupied region.

use serde::Serialize;

use crate::cell::{PackedBox, flatten};
use crate::error::PackError;
use crate::model::Item;
use crate::types::Vec3;

/// Colors assigned to placed items in traversal order, wrapping around.
pub const PALETTE: [&str; 10] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500", "#800080",
    "#008000", "#000080",
];

/// Amount taken off every rendered edge.
pub const DEFAULT_GAP: f64 = 0.005;

/// Render data for one placed item.
///
/// Borrows the item from the packed box; the box keeps ownership of item
/// identity and dimensions.
#[derive(Clone, Debug, Serialize)]
pub struct DisplayItem<'a> {
    pub item: &'a Item,
    pub color: &'static str,
    /// Scaled size, shrunk by the gap.
    pub geometry: Vec3,
    /// Scaled center of the item.
    pub position: Vec3,
    /// Center of the item in box units.
    pub absolute: Vec3,
    pub box_label: &'a str,
}

/// Projects every placed item of `packed` with the default gap.
///
/// # Examples
/// ```
/// use boxfit::catalog::BoxSource;
/// use boxfit::display::create_display;
/// use boxfit::model::{CatalogEntry, ItemSpec};
/// use boxfit::optimizer::pack;
///
/// let source = BoxSource::Explicit(vec![CatalogEntry::new((10.0, 10.0, 10.0), "Box", "5")]);
/// let packed = pack(&[ItemSpec::new("A", (4.0, 4.0, 4.0))], &source).unwrap();
/// let display = create_display(&packed, 10.0).unwrap();
/// assert_eq!(display.len(), 1);
/// assert_eq!(display[0].color, "#FF0000");
/// ```
pub fn create_display(packed: &PackedBox, scale: f64) -> Result<Vec<DisplayItem<'_>>, PackError> {
    create_display_with_gap(packed, scale, DEFAULT_GAP)
}

/// Projects every placed item of `packed`.
///
/// # Errors
/// `PackError::InvalidScale` if `scale` is zero, negative or not finite.
pub fn create_display_with_gap(
    packed: &PackedBox,
    scale: f64,
    gap: f64,
) -> Result<Vec<DisplayItem<'_>>, PackError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PackError::InvalidScale(scale));
    }

    let display = flatten(&packed.root)
        .into_iter()
        .filter_map(|cell| cell.occupant.as_ref().map(|item| (cell, item)))
        .enumerate()
        .map(|(index, (cell, item))| {
            let oriented = item.oriented_dims();
            // The anchor is the max corner on x/z and the floor on y.
            let absolute = Vec3::new(
                cell.center.x - oriented.x / 2.0,
                cell.center.y + oriented.y / 2.0,
                cell.center.z - oriented.z / 2.0,
            );
            DisplayItem {
                item,
                color: PALETTE[index % PALETTE.len()],
                geometry: (oriented / scale).shrink(gap),
                position: absolute / scale,
                absolute,
                box_label: packed.label(),
            }
        })
        .collect();

    Ok(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BoxSource;
    use crate::model::{CatalogEntry, ItemSpec};
    use crate::optimizer::pack;

    fn packed(specs: &[ItemSpec], dims: (f64, f64, f64)) -> PackedBox {
        let source = BoxSource::Explicit(vec![CatalogEntry::new(dims, "Crate", "7.50")]);
        pack(specs, &source).unwrap()
    }

    #[test]
    fn single_item_at_unit_scale() {
        let packed = packed(&[ItemSpec::new("A", (4.0, 4.0, 4.0))], (10.0, 10.0, 10.0));
        let display = create_display(&packed, 1.0).unwrap();

        assert_eq!(display.len(), 1);
        let entry = &display[0];
        assert_eq!(entry.item.id, "A");
        assert_eq!(entry.color, PALETTE[0]);
        assert_eq!(entry.position, Vec3::new(3.0, -3.0, 3.0));
        assert_eq!(entry.absolute, entry.position);
        for side in [entry.geometry.x, entry.geometry.y, entry.geometry.z] {
            assert!((side - 3.995).abs() < 1e-12);
        }
        assert_eq!(entry.box_label, "Crate");
    }

    #[test]
    fn scale_divides_position_and_geometry() {
        let packed = packed(&[ItemSpec::new("A", (4.0, 4.0, 4.0))], (10.0, 10.0, 10.0));
        let display = create_display_with_gap(&packed, 2.0, 0.0).unwrap();

        assert_eq!(display[0].geometry, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(display[0].position, Vec3::new(1.5, -1.5, 1.5));
        assert_eq!(display[0].absolute, Vec3::new(3.0, -3.0, 3.0));
    }

    #[test]
    fn stacked_item_renders_above_its_base() {
        let specs = [ItemSpec::new("Cube", (2.0, 2.0, 2.0)).with_quantity(2)];
        let packed = packed(&specs, (2.0, 4.0, 2.0));
        let display = create_display(&packed, 1.0).unwrap();

        assert_eq!(display[0].position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(display[1].position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn one_entry_per_item_with_wrapping_colors() {
        let specs = [ItemSpec::new("Cube", (1.0, 1.0, 1.0)).with_quantity(12)];
        let packed = packed(&specs, (1.0, 12.0, 1.0));
        let display = create_display(&packed, 1.0).unwrap();

        assert_eq!(display.len(), 12);
        assert_eq!(display[10].color, PALETTE[0]);
        assert_eq!(display[11].color, PALETTE[1]);
    }

    #[test]
    fn order_matches_traversal_and_is_stable() {
        let specs = [
            ItemSpec::new("A", (4.0, 4.0, 4.0)),
            ItemSpec::new("B", (3.0, 3.0, 3.0)),
            ItemSpec::new("C", (2.0, 2.0, 2.0)),
        ];
        let packed = packed(&specs, (10.0, 10.0, 10.0));

        let first: Vec<_> = create_display(&packed, 5.0)
            .unwrap()
            .iter()
            .map(|d| (d.item.id.clone(), d.color))
            .collect();
        let second: Vec<_> = create_display(&packed, 5.0)
            .unwrap()
            .iter()
            .map(|d| (d.item.id.clone(), d.color))
            .collect();

        assert_eq!(first, second);
        let ids: Vec<_> = first.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, packed.manifest.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let packed = packed(&[ItemSpec::new("A", (1.0, 1.0, 1.0))], (2.0, 2.0, 2.0));
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                create_display(&packed, scale),
                Err(PackError::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn empty_box_projects_nothing() {
        let packed = packed(&[], (2.0, 2.0, 2.0));
        assert!(create_display(&packed, 1.0).unwrap().is_empty());
    }
}
