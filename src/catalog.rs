//! Carrier catalogs and candidate box selection.
//!
//! Each carrier offers a fixed list of standard boxes. Before the placement
//! engine runs, the candidate list is narrowed to boxes that can hold the
//! combined item volume and ordered smallest first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PackError;
use crate::model::{CatalogEntry, Item};
use crate::types::Dimensional;

/// Carriers with a built-in box catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Carrier {
    #[serde(rename = "USPS")]
    Usps,
    #[serde(rename = "FedEx")]
    FedEx,
    #[serde(rename = "UPS")]
    Ups,
    /// Generic store boxes, used when shipping without a carrier preference.
    #[serde(rename = "No Carrier")]
    Generic,
}

impl Carrier {
    pub const ALL: [Carrier; 4] = [Carrier::Usps, Carrier::FedEx, Carrier::Ups, Carrier::Generic];

    /// Name as used by callers and in the HTTP API.
    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Usps => "USPS",
            Carrier::FedEx => "FedEx",
            Carrier::Ups => "UPS",
            Carrier::Generic => "No Carrier",
        }
    }

    /// The carrier's standard boxes, in catalog order.
    pub fn boxes(&self) -> Vec<CatalogEntry> {
        let rows = match self {
            Carrier::Usps => USPS_BOXES,
            Carrier::FedEx => FEDEX_BOXES,
            Carrier::Ups => UPS_BOXES,
            Carrier::Generic => GENERIC_BOXES,
        };
        rows.iter()
            .map(|&(l, w, h, label, price)| {
                CatalogEntry::new((l, w, h), label, price).with_default_price(true)
            })
            .collect()
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Carrier {
    type Err = PackError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Carrier::ALL
            .into_iter()
            .find(|carrier| carrier.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PackError::Configuration(trimmed.to_string()))
    }
}

/// Returns the catalog of the named carrier.
///
/// # Examples
/// ```
/// use boxfit::catalog::carrier_boxes;
///
/// assert!(!carrier_boxes("UPS").unwrap().is_empty());
/// assert!(carrier_boxes("Pony Express").is_err());
/// ```
pub fn carrier_boxes(carrier: &str) -> Result<Vec<CatalogEntry>, PackError> {
    Ok(carrier.parse::<Carrier>()?.boxes())
}

/// Where candidate boxes come from.
#[derive(Clone, Debug, PartialEq)]
pub enum BoxSource {
    Carrier(Carrier),
    Explicit(Vec<CatalogEntry>),
}

impl BoxSource {
    /// Resolves the caller's choice.
    ///
    /// An explicit list wins over the carrier name. Without a list the carrier
    /// must be recognized, otherwise `PackError::Configuration`.
    pub fn resolve(
        carrier: Option<&str>,
        explicit: Option<Vec<CatalogEntry>>,
    ) -> Result<Self, PackError> {
        if let Some(boxes) = explicit {
            return Ok(BoxSource::Explicit(boxes));
        }
        match carrier {
            Some(name) => Ok(BoxSource::Carrier(name.parse()?)),
            None => Err(PackError::Configuration("(none)".to_string())),
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            BoxSource::Carrier(carrier) => carrier.name().to_string(),
            BoxSource::Explicit(boxes) => format!("{} caller-supplied boxes", boxes.len()),
        }
    }
}

/// Returns the candidate boxes of a source, validating caller-supplied ones.
pub fn select_candidate_boxes(source: &BoxSource) -> Result<Vec<CatalogEntry>, PackError> {
    match source {
        BoxSource::Carrier(carrier) => Ok(carrier.boxes()),
        BoxSource::Explicit(boxes) => {
            for entry in boxes {
                entry.validate()?;
            }
            Ok(boxes.clone())
        }
    }
}

/// Sum of item volumes.
pub fn total_volume(items: &[Item]) -> f64 {
    items.iter().map(|item| item.volume()).sum()
}

/// Keeps boxes whose volume is at least `total_volume`.
///
/// An empty result is reported as `PackError::NoFeasibleBox` so that no
/// placement is attempted.
pub fn filter_by_volume(
    boxes: Vec<CatalogEntry>,
    total_volume: f64,
) -> Result<Vec<CatalogEntry>, PackError> {
    let largest_box_volume = boxes
        .iter()
        .map(|entry| entry.volume())
        .fold(0.0, f64::max);

    let feasible: Vec<CatalogEntry> = boxes
        .into_iter()
        .filter(|entry| entry.volume() >= total_volume)
        .collect();

    if feasible.is_empty() {
        return Err(PackError::NoFeasibleBox {
            total_volume,
            largest_box_volume,
        });
    }
    Ok(feasible)
}

/// Largest items first. Stable: equal volumes keep input order.
pub fn sort_items_by_volume_desc(items: &mut [Item]) {
    items.sort_by(|a, b| b.volume().total_cmp(&a.volume()));
}

/// Smallest boxes first. Stable: equal volumes keep catalog order.
pub fn sort_boxes_by_volume_asc(boxes: &mut [CatalogEntry]) {
    boxes.sort_by(|a, b| a.volume().total_cmp(&b.volume()));
}

/// (length, width, height, label, price)
type BoxRow = (f64, f64, f64, &'static str, &'static str);

const USPS_BOXES: &[BoxRow] = &[
    (12.5, 9.5, 5.375, "USPS Small Flat Rate Box", "Flat Rate"),
    (11.875, 3.375, 13.625, "USPS Medium Flat Rate Box 1", "Flat Rate"),
    (11.0, 8.5, 5.5, "USPS Medium Flat Rate Box 2", "Flat Rate"),
    (12.25, 12.0, 5.5, "USPS Large Flat Rate Box", "Flat Rate"),
    (23.6875, 11.75, 3.0, "USPS Board Game Flat Rate Box", "Flat Rate"),
    (10.125, 7.125, 5.0, "USPS Regional Rate Box A1", "Regional Rate"),
    (10.9375, 8.6875, 2.75, "USPS Regional Rate Box A2", "Regional Rate"),
    (12.25, 10.5, 5.5, "USPS Regional Rate Box B1", "Regional Rate"),
    (14.375, 11.875, 2.75, "USPS Regional Rate Box B2", "Regional Rate"),
    (11.625, 8.375, 5.375, "USPS Priority Mail Express Box", "Express"),
    (13.625, 11.875, 3.375, "USPS Priority Mail Express Box 2", "Express"),
    (12.5, 9.5, 0.5, "USPS Priority Mail Envelope", "Flat Rate Envelope"),
    (15.0, 9.5, 0.5, "USPS Priority Mail Legal Envelope", "Flat Rate Envelope"),
    (12.5, 9.5, 0.75, "USPS Priority Mail Padded Envelope", "Flat Rate Envelope"),
    (15.0, 9.5, 0.75, "USPS Priority Mail Legal Padded Envelope", "Flat Rate Envelope"),
    (12.5, 9.5, 0.5, "USPS Priority Mail Express Envelope", "Express Envelope"),
    (15.0, 9.5, 0.5, "USPS Priority Mail Express Legal Envelope", "Express Envelope"),
    (12.5, 9.5, 0.75, "USPS Priority Mail Express Padded Envelope", "Express Envelope"),
    (9.0, 6.0, 0.25, "USPS First-Class Envelope", "First-Class"),
    (10.0, 7.0, 0.5, "USPS First-Class Package", "First-Class"),
    (12.0, 8.0, 0.75, "USPS First-Class Large Package", "First-Class"),
    (11.0, 8.5, 5.5, "USPS Media Mail Box - Small", "Media Mail"),
    (12.0, 12.0, 5.5, "USPS Media Mail Box - Medium", "Media Mail"),
    (14.0, 12.0, 8.0, "USPS Media Mail Box - Large", "Media Mail"),
    (12.0, 12.0, 12.0, "USPS Variable Size - Small", "Variable"),
    (18.0, 18.0, 18.0, "USPS Variable Size - Medium", "Variable"),
    (24.0, 24.0, 24.0, "USPS Variable Size - Large", "Variable"),
    (30.0, 30.0, 30.0, "USPS Variable Size - Extra Large", "Variable"),
];

const GENERIC_BOXES: &[BoxRow] = &[
    (4.0, 4.0, 4.0, "Small Cube Box", "Box Only Price: $1.25"),
    (6.0, 6.0, 4.0, "Small Box", "Box Only Price: $1.50"),
    (8.0, 6.0, 4.0, "Small Rectangle Box", "Box Only Price: $1.75"),
    (8.0, 8.0, 8.0, "Medium Cube Box", "Box Only Price: $2.25"),
    (9.0, 6.0, 6.0, "Book Box Small", "Box Only Price: $2.00"),
    (10.0, 8.0, 6.0, "Shoe Box", "Box Only Price: $2.50"),
    (12.0, 9.0, 6.0, "Shoebox Large", "Box Only Price: $2.75"),
    (12.0, 12.0, 8.0, "Medium Square Box", "Box Only Price: $3.25"),
    (14.0, 14.0, 14.0, "Large Cube Box", "Box Only Price: $4.25"),
    (16.0, 12.0, 8.0, "Medium Moving Box", "Box Only Price: $3.75"),
    (18.0, 14.0, 12.0, "Medium Large Box", "Box Only Price: $4.50"),
    (18.0, 18.0, 16.0, "Extra Large Cube Box", "Box Only Price: $5.25"),
    (20.0, 20.0, 20.0, "Giant Cube Box", "Box Only Price: $6.50"),
    (20.0, 16.0, 12.0, "Large Box", "Box Only Price: $4.75"),
    (22.0, 22.0, 22.0, "Extra Large Cube", "Box Only Price: $7.25"),
    (24.0, 18.0, 18.0, "Large Moving Box", "Box Only Price: $5.50"),
    (24.0, 24.0, 24.0, "XXL Cube Box", "Box Only Price: $8.25"),
    (28.0, 16.0, 16.0, "Large Storage Box", "Box Only Price: $6.25"),
    (30.0, 18.0, 18.0, "Extra Large Moving Box", "Box Only Price: $7.50"),
    (36.0, 24.0, 24.0, "Wardrobe Box", "Box Only Price: $12.50"),
    (40.0, 22.0, 22.0, "Large Equipment Box", "Box Only Price: $14.75"),
    (48.0, 24.0, 24.0, "Extra Large Storage Box", "Box Only Price: $16.50"),
    (24.0, 14.0, 6.0, "Keyboard Box", "Box Only Price: $4.25"),
    (28.0, 20.0, 6.0, "Monitor Box Small", "Box Only Price: $6.75"),
    (32.0, 24.0, 6.0, "Monitor Box Large", "Box Only Price: $8.50"),
    (40.0, 30.0, 6.0, "TV Box Medium", "Box Only Price: $12.75"),
    (48.0, 32.0, 6.0, "TV Box Large", "Box Only Price: $16.50"),
    (60.0, 40.0, 6.0, "TV Box Extra Large", "Box Only Price: $22.50"),
    (30.0, 20.0, 4.0, "Picture Box Small", "Box Only Price: $5.25"),
    (36.0, 24.0, 4.0, "Picture Box Medium", "Box Only Price: $6.75"),
    (48.0, 32.0, 4.0, "Picture Box Large", "Box Only Price: $9.50"),
    (60.0, 40.0, 4.0, "Picture Box Extra Large", "Box Only Price: $12.75"),
    (36.0, 6.0, 6.0, "Tube Box Small", "Box Only Price: $4.50"),
    (48.0, 6.0, 6.0, "Tube Box Medium", "Box Only Price: $5.75"),
    (60.0, 6.0, 6.0, "Tube Box Large", "Box Only Price: $7.25"),
    (72.0, 8.0, 8.0, "Long Box Extra Large", "Box Only Price: $9.50"),
    (24.0, 16.0, 16.0, "Computer Box", "Box Only Price: $8.25"),
    (40.0, 12.0, 12.0, "Golf Club Box", "Box Only Price: $11.50"),
    (54.0, 8.0, 32.0, "Bike Box", "Box Only Price: $18.75"),
    (15.0, 15.0, 15.0, "File Box", "Box Only Price: $4.75"),
    (18.0, 18.0, 28.0, "Wine Box 2-Bottle", "Box Only Price: $6.25"),
    (18.0, 18.0, 42.0, "Wine Box 3-Bottle", "Box Only Price: $7.50"),
    (16.0, 16.0, 16.0, "Heavy Duty Small", "Box Only Price: $5.25"),
    (18.0, 18.0, 18.0, "Heavy Duty Medium", "Box Only Price: $6.50"),
    (24.0, 24.0, 24.0, "Heavy Duty Large", "Box Only Price: $8.75"),
    (30.0, 30.0, 30.0, "Heavy Duty Extra Large", "Box Only Price: $12.50"),
    (12.0, 9.0, 6.0, "Book Box Medium", "Box Only Price: $3.25"),
    (15.0, 12.0, 10.0, "Book Box Large", "Box Only Price: $4.50"),
    (20.0, 12.0, 12.0, "Media Box", "Box Only Price: $5.25"),
    (18.0, 18.0, 18.0, "Dish Pack Box", "Box Only Price: $7.25"),
    (24.0, 24.0, 24.0, "Kitchen Box Large", "Box Only Price: $8.50"),
    (16.0, 16.0, 16.0, "Kitchen Box Medium", "Box Only Price: $6.25"),
    (12.0, 9.0, 2.0, "Large Letter Mailer", "Box Only Price: $1.75"),
    (15.0, 12.0, 3.0, "Document Box", "Box Only Price: $2.25"),
    (20.0, 16.0, 4.0, "Flat Item Box", "Box Only Price: $3.50"),
    (24.0, 18.0, 4.0, "Large Flat Box", "Box Only Price: $4.25"),
    (10.0, 7.0, 0.25, "Small Envelope", "Box Only Price: $0.75"),
    (12.5, 9.5, 0.25, "Standard Envelope", "Box Only Price: $0.95"),
    (15.0, 9.5, 0.25, "Legal Envelope", "Box Only Price: $1.15"),
    (12.5, 9.5, 0.5, "Padded Envelope", "Box Only Price: $1.45"),
    (14.75, 11.5, 1.0, "Bubble Mailer - Small", "Box Only Price: $1.75"),
    (19.0, 12.5, 1.5, "Bubble Mailer - Large", "Box Only Price: $2.25"),
    (14.75, 11.5, 0.75, "Poly Mailer - Small", "Box Only Price: $1.25"),
    (19.0, 12.5, 0.75, "Poly Mailer - Large", "Box Only Price: $1.75"),
    (24.0, 14.0, 1.0, "Poly Mailer - Extra Large", "Box Only Price: $2.25"),
];

const FEDEX_BOXES: &[BoxRow] = &[
    (9.5, 12.5, 1.0, "FedEx Envelope", "Free with Service"),
    (9.5, 15.5, 1.0, "FedEx Legal Envelope", "Free with Service"),
    (9.75, 11.5, 1.0, "FedEx Clinical Pak", "Box Only Price: $3.65"),
    (10.25, 12.75, 1.0, "FedEx Pak", "Box Only Price: $1.65"),
    (12.0, 15.5, 3.0, "FedEx Large Pak", "Box Only Price: $2.05"),
    (11.75, 14.75, 1.5, "FedEx Padded Pak", "Box Only Price: $2.05"),
    (12.375, 10.875, 1.5, "FedEx Small Box", "Box Only Price: $1.95"),
    (13.25, 11.5, 2.375, "FedEx Medium Box", "Box Only Price: $2.35"),
    (17.5, 12.375, 3.0, "FedEx Large Box", "Box Only Price: $2.75"),
    (11.875, 11.0, 10.375, "FedEx Extra Large Box", "Box Only Price: $3.15"),
    (6.0, 6.0, 38.0, "FedEx Tube", "Box Only Price: $5.05"),
    (15.0, 15.0, 48.0, "FedEx Golf Club Box", "Box Only Price: $12.95"),
    (54.0, 8.0, 32.0, "FedEx Bike Box", "Box Only Price: $21.95"),
    (20.0, 8.0, 50.0, "FedEx Guitar Box", "Box Only Price: $18.95"),
    (38.0, 8.0, 26.0, "FedEx TV Box Small", "Box Only Price: $15.95"),
    (46.0, 8.0, 30.0, "FedEx TV Box Medium", "Box Only Price: $19.95"),
    (56.0, 8.0, 36.0, "FedEx TV Box Large", "Box Only Price: $24.95"),
    (24.0, 16.0, 16.0, "FedEx Computer Box", "Box Only Price: $8.95"),
    (18.0, 18.0, 28.0, "FedEx Wine Box - 2 Bottles", "Box Only Price: $10.95"),
    (18.0, 18.0, 42.0, "FedEx Wine Box - 3 Bottles", "Box Only Price: $12.95"),
    (24.0, 20.0, 12.0, "FedEx Picture Box Small", "Box Only Price: $9.95"),
    (36.0, 24.0, 12.0, "FedEx Picture Box Medium", "Box Only Price: $14.95"),
    (48.0, 32.0, 12.0, "FedEx Picture Box Large", "Box Only Price: $19.95"),
    (10.9, 1.5, 12.3, "FedEx Small Box", "FedEx One Rate: From $12.95"),
    (11.5, 2.4, 13.0, "FedEx Medium Box", "FedEx One Rate: From $18.25"),
    (12.4, 3.0, 17.9, "FedEx Large Box", "FedEx One Rate: From $24.45"),
    (15.75, 14.13, 6.0, "FedEx Extra Large Box", "FedEx One Rate: From $24.45"),
    (38.0, 6.0, 6.0, "FedEx Tube", "FedEx One Rate: From $22.85"),
    (8.0, 8.0, 8.0, "FedEx Small Box", "Box Only Price: $1.75"),
    (12.0, 12.0, 18.0, "FedEx Store Box", "Box Only Price: $3.75"),
    (13.0, 9.0, 11.0, "FedEx Standard Box", "Box Only Price: $2.75"),
    (16.0, 16.0, 16.0, "FedEx Standard Box", "Box Only Price: $4.29"),
    (14.0, 14.0, 14.0, "FedEx Standard Box", "Box Only Price: $3.75"),
    (14.0, 14.0, 14.0, "FedEx Standard Box", "Box Only Price: $6.29"),
    (23.0, 17.0, 12.0, "FedEx Standard Box", "Box Only Price: $4.75"),
    (12.0, 9.0, 6.0, "FedEx Standard In-Store Box", "Box Only Price: $3.75"),
    (11.0, 11.0, 11.0, "FedEx Standard In-Store Box", "Box Only Price: $2.50"),
    (17.0, 17.0, 7.0, "FedEx Standard In-Store Box", "Box Only Price: $3.25"),
    (20.0, 20.0, 12.0, "FedEx Standard In-Store Box", "Box Only Price: $4.50"),
    (11.0, 11.0, 11.0, "FedEx Standard In-Store Box", "Box Only Price: $2.50"),
    (22.0, 22.0, 22.0, "FedEx Standard In-Store Box", "Box Only Price: $7.00"),
    (18.0, 13.0, 11.75, "FedEx Standard In-Store Box", "Box Only Price: $2.50"),
    (48.0, 48.0, 5.5, "FedEx Freight Box 48x40", "Contact FedEx Store for price"),
    (48.0, 48.0, 6.0, "FedEx Freight Box 48x40", "Contact FedEx Store for price"),
];

const UPS_BOXES: &[BoxRow] = &[
    (6.0, 6.0, 6.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (6.0, 6.0, 48.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (8.0, 8.0, 8.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (10.0, 10.0, 10.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (12.0, 12.0, 6.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (12.0, 12.0, 12.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (14.0, 14.0, 14.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (15.0, 12.0, 10.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (15.0, 15.0, 48.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (16.0, 16.0, 4.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (16.0, 16.0, 16.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (17.0, 11.0, 8.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (18.0, 18.0, 18.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (20.0, 12.0, 12.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (20.0, 20.0, 12.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (20.0, 20.0, 20.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (24.0, 18.0, 6.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (24.0, 18.0, 18.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (24.0, 24.0, 16.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (24.0, 24.0, 24.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (30.0, 24.0, 6.0, "UPS Standard Box", "Contact your local UPS Store® for box price"),
    (13.0, 11.0, 2.0, "UPS Express Box - Small", "Free with Express Service"),
    (16.0, 11.0, 3.0, "UPS Express Box - Medium", "Free with Express Service"),
    (18.0, 13.0, 3.0, "UPS Express Box - Large", "Free with Express Service"),
    (38.0, 3.5, 3.5, "UPS Express Tube", "Free with Express Service"),
    (12.5, 9.5, 0.25, "UPS Express Envelope", "Free with Express Service"),
    (15.0, 9.5, 0.25, "UPS Express Legal Envelope", "Free with Express Service"),
    (14.75, 11.5, 2.0, "UPS Express Pak", "Free with Express Service"),
    (16.0, 13.0, 2.0, "UPS Laboratory Pak", "Free with Express Service"),
    (12.5, 9.5, 0.25, "UPS Standard Envelope", "Box Only Price: $1.25"),
    (15.0, 9.5, 0.25, "UPS Legal Envelope", "Box Only Price: $1.50"),
    (14.75, 11.5, 1.0, "UPS Padded Envelope", "Box Only Price: $2.25"),
    (16.0, 11.75, 1.5, "UPS Poly Mailer", "Box Only Price: $1.95"),
    (19.0, 12.5, 2.0, "UPS Bubble Mailer", "Box Only Price: $2.75"),
    (11.75, 11.0, 2.0, "UPS Small Express Box", "Free with Express Service"),
    (13.25, 11.5, 3.0, "UPS Medium Express Box", "Free with Express Service"),
    (17.25, 13.0, 3.0, "UPS Large Express Box", "Free with Express Service"),
    (24.0, 18.0, 18.0, "UPS Extra Large Express Box", "Free with Express Service"),
    (11.0, 8.0, 2.0, "UPS Simple Rate - Extra Small", "Box Only Price: $2.85"),
    (13.0, 11.0, 2.0, "UPS Simple Rate - Small", "Box Only Price: $3.15"),
    (16.0, 11.0, 3.0, "UPS Simple Rate - Medium", "Box Only Price: $3.45"),
    (18.0, 13.0, 3.0, "UPS Simple Rate - Large", "Box Only Price: $3.95"),
    (21.0, 16.0, 15.0, "UPS Simple Rate - Extra Large", "Box Only Price: $4.95"),
    (8.0, 6.0, 4.0, "UPS Store Box - Extra Small", "Box Only Price: $2.85"),
    (13.0, 11.0, 2.0, "UPS Store Box - Small", "Box Only Price: $3.15"),
    (16.0, 13.0, 3.0, "UPS Store Box - Medium", "Box Only Price: $3.45"),
    (18.0, 13.0, 3.0, "UPS Store Box - Large", "Box Only Price: $3.95"),
    (24.0, 18.0, 18.0, "UPS Store Box - Extra Large", "Box Only Price: $4.95"),
    (37.0, 4.5, 4.5, "UPS Store Express Tube", "Box Only Price: $6.95"),
    (48.0, 8.0, 6.0, "UPS Store Golf Club Box", "Box Only Price: $15.95"),
    (54.0, 8.0, 28.0, "UPS Store Bike Box", "Box Only Price: $24.95"),
    (48.0, 32.0, 8.0, "UPS Store TV Box - 42\"", "Box Only Price: $19.95"),
    (56.0, 36.0, 8.0, "UPS Store TV Box - 55\"", "Box Only Price: $24.95"),
    (65.0, 43.0, 8.0, "UPS Store TV Box - 70\"", "Box Only Price: $29.95"),
    (28.0, 15.0, 15.0, "UPS Store Laptop Box", "Box Only Price: $9.95"),
    (24.0, 16.0, 16.0, "UPS Store Desktop Box", "Box Only Price: $12.95"),
    (16.0, 16.0, 16.0, "UPS Store Heavy-Duty - Small", "Box Only Price: $6.95"),
    (18.0, 18.0, 18.0, "UPS Store Heavy-Duty - Medium", "Box Only Price: $7.95"),
    (24.0, 24.0, 24.0, "UPS Store Heavy-Duty - Large", "Box Only Price: $9.95"),
    (30.0, 30.0, 30.0, "UPS Store Heavy-Duty - XL", "Box Only Price: $12.95"),
    (24.0, 20.0, 12.0, "UPS Store Picture Box - Small", "Box Only Price: $11.95"),
    (36.0, 24.0, 12.0, "UPS Store Picture Box - Medium", "Box Only Price: $15.95"),
    (48.0, 32.0, 12.0, "UPS Store Picture Box - Large", "Box Only Price: $19.95"),
    (18.0, 18.0, 28.0, "UPS Store Wine Box - 2 Bottle", "Box Only Price: $14.95"),
    (18.0, 18.0, 42.0, "UPS Store Wine Box - 3 Bottle", "Box Only Price: $16.95"),
    (48.0, 48.0, 5.5, "UPS Freight Box 48x40", "Contact UPS Store for price"),
    (48.0, 48.0, 6.0, "UPS Freight Box 48x40", "Contact UPS Store for price"),
];
