//! Data models for box selection and placement.
//!
//! This module defines the input and entity types of the packing engine:
//! - `ItemSpec`: One input line (dimensions, identifier, quantity)
//! - `Item`: A single quantity-expanded item, later carrying its orientation
//! - `CatalogEntry`: A candidate box from a carrier catalog or a caller list
//! - `Section`: Split-path tags recording where in the tree a cell came from

use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::error::PackError;
use crate::types::{Dimensional, Vec3, validation};

const DIMENSION_NAMES: [&str; 3] = ["Length", "Width", "Height"];

/// What to do with a missing item dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DimensionPolicy {
    /// Fail the call with `PackError::InvalidDimension`.
    #[default]
    Reject,
    /// Treat the missing value as zero and log a warning.
    DefaultToZero,
}

/// Which residual region of a split a cell was created as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Space stacked on top of the placed item.
    Upper,
    /// Full-height slab beside the item along the length axis.
    Side,
    /// Slab behind the item along the depth axis.
    Behind,
}

/// One line of the packing input.
///
/// `dims` holds length, width and height; an entry may be `None` when the
/// caller has no value for it, which is then handled by [`DimensionPolicy`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemSpec {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[schema(value_type = Vec<f64>, example = json!([4.0, 4.0, 4.0]))]
    pub dims: [Option<f64>; 3],
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl ItemSpec {
    /// Creates a spec for a single item with all dimensions present.
    ///
    /// # Examples
    /// ```
    /// use boxfit::model::ItemSpec;
    ///
    /// let spec = ItemSpec::new("A", (4.0, 4.0, 4.0)).with_quantity(2);
    /// assert_eq!(spec.quantity, 2);
    /// ```
    pub fn new(id: impl Into<String>, dims: (f64, f64, f64)) -> Self {
        Self {
            id: id.into(),
            name: None,
            dims: [Some(dims.0), Some(dims.1), Some(dims.2)],
            tags: Vec::new(),
            quantity: 1,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// A single item to be packed.
///
/// `oriented` stays `None` until the placement engine accepts an orientation
/// for the item; after that it is never changed.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Item {
    pub id: String,
    pub name: Option<String>,
    pub dims: Vec3,
    pub oriented: Option<Vec3>,
    pub sections: Vec<Section>,
    pub tags: Vec<String>,
}

impl Item {
    /// Builds an item from a spec, validating every dimension.
    ///
    /// Quantity is ignored here; see [`expand_items`].
    pub fn from_spec(spec: &ItemSpec, policy: DimensionPolicy) -> Result<Self, PackError> {
        let mut resolved = [0.0; 3];
        for (slot, (value, name)) in resolved
            .iter_mut()
            .zip(spec.dims.iter().zip(DIMENSION_NAMES))
        {
            *slot = resolve_dimension(*value, name, &spec.id, policy)?;
        }

        Ok(Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            dims: Vec3::new(resolved[0], resolved[1], resolved[2]),
            oriented: None,
            sections: Vec::new(),
            tags: spec.tags.clone(),
        })
    }

    /// Name shown next to the item in visualizations.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Item")
    }

    /// Oriented dimensions once placed, the input dimensions before that.
    pub fn oriented_dims(&self) -> Vec3 {
        self.oriented.unwrap_or(self.dims)
    }

    pub fn is_placed(&self) -> bool {
        self.oriented.is_some()
    }
}

impl Dimensional for Item {
    fn dimensions(&self) -> Vec3 {
        self.dims
    }
}

fn resolve_dimension(
    value: Option<f64>,
    name: &str,
    item_id: &str,
    policy: DimensionPolicy,
) -> Result<f64, PackError> {
    let invalid = |msg: String| PackError::InvalidDimension(format!("item '{}': {}", item_id, msg));
    match (value, policy) {
        (Some(v), DimensionPolicy::Reject) => {
            validation::validate_dimension(v, name).map_err(invalid)?;
            Ok(v)
        }
        (Some(v), DimensionPolicy::DefaultToZero) => {
            validation::validate_non_negative(v, name).map_err(invalid)?;
            Ok(v)
        }
        (None, DimensionPolicy::Reject) => Err(invalid(format!("{} is missing", name))),
        (None, DimensionPolicy::DefaultToZero) => {
            warn!(item = item_id, dimension = name, "⚠️ Missing dimension, using 0");
            Ok(0.0)
        }
    }
}

/// Validates all specs and expands each into `quantity` identical items.
///
/// Input order is preserved: copies of one spec are adjacent. The expanded
/// count is checked against `max_items` before anything is allocated.
pub fn expand_items(
    specs: &[ItemSpec],
    policy: DimensionPolicy,
    max_items: usize,
) -> Result<Vec<Item>, PackError> {
    let requested = specs
        .iter()
        .try_fold(0u64, |sum, spec| sum.checked_add(u64::from(spec.quantity)))
        .unwrap_or(u64::MAX);
    let count = usize::try_from(requested)
        .ok()
        .filter(|&count| count <= max_items)
        .ok_or(PackError::TooManyItems {
            requested,
            limit: max_items,
        })?;

    let mut items = Vec::with_capacity(count);
    for spec in specs {
        let item = Item::from_spec(spec, policy)?;
        items.extend(std::iter::repeat_n(item, spec.quantity as usize));
    }
    Ok(items)
}

/// A candidate box, either from a carrier catalog or supplied by the caller.
///
/// # Fields
/// * `dims` - Length, width, height
/// * `label` - Box type shown to the user
/// * `price` - Price text, passed through untouched
/// * `default_price` - Whether `price` is the catalog's own price
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    #[schema(value_type = [f64; 3], example = json!([12.0, 12.0, 12.0]))]
    pub dims: (f64, f64, f64),
    pub label: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub default_price: bool,
}

impl CatalogEntry {
    /// Creates a caller-supplied entry.
    pub fn new(dims: (f64, f64, f64), label: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            dims,
            label: label.into(),
            price: price.into(),
            default_price: false,
        }
    }

    /// Marks the price as the catalog default (Builder pattern light).
    pub fn with_default_price(mut self, default_price: bool) -> Self {
        self.default_price = default_price;
        self
    }

    /// Checks that all three dimensions are positive and finite.
    pub fn validate(&self) -> Result<(), PackError> {
        let (l, w, h) = self.dims;
        for (value, name) in [l, w, h].into_iter().zip(DIMENSION_NAMES) {
            validation::validate_dimension(value, name).map_err(|msg| {
                PackError::InvalidDimension(format!("box '{}': {}", self.label, msg))
            })?;
        }
        Ok(())
    }

    #[inline]
    pub fn dims_as_vec3(&self) -> Vec3 {
        Vec3::from_tuple(self.dims)
    }
}

impl Dimensional for CatalogEntry {
    fn dimensions(&self) -> Vec3 {
        self.dims_as_vec3()
    }
}
