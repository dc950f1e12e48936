use std::fs::File;
use std::path::Path;

use log::warn;

use crate::error::{NutriError, Result};
use crate::models::Food;

/// In-memory food composition table, loaded once per session.
#[derive(Debug, Default)]
pub struct Catalog {
    foods: Vec<Food>,
}

impl Catalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// Empty catalog, used when the source fails to load and the
    /// session degrades instead of aborting.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Food> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// All rows in source order.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Resolved indices of the columns the loader cares about.
struct ColumnMap {
    name: usize,
    kcal: Option<usize>,
    protein: Option<usize>,
    carb: Option<usize>,
    lipid: Option<usize>,
}

/// Collapse whitespace (the raw Ciqual export wraps headers over
/// several lines) and lowercase for variant matching.
fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    let mut name = None;
    let mut kcal = None;
    let mut protein = None;
    let mut carb = None;
    let mut lipid = None;

    for (index, raw) in headers.iter().enumerate() {
        let header = normalize_header(raw);
        if name.is_none() && (header == "alim_nom_fr" || header == "name" || header == "nom") {
            name = Some(index);
        } else if kcal.is_none()
            && (header == "kcal"
                || header.starts_with("energie")
                || header.starts_with("énergie"))
        {
            kcal = Some(index);
        } else if protein.is_none() && header.starts_with("prot") {
            protein = Some(index);
        } else if carb.is_none() && (header == "carb" || header.starts_with("glucides")) {
            carb = Some(index);
        } else if lipid.is_none() && (header == "lip" || header.starts_with("lipides")) {
            lipid = Some(index);
        }
    }

    let name = name.ok_or_else(|| {
        NutriError::CatalogLoad(format!(
            "no food name column among headers: {:?}",
            headers.iter().collect::<Vec<_>>()
        ))
    })?;

    if kcal.is_none() || protein.is_none() || carb.is_none() || lipid.is_none() {
        warn!("some macro columns are missing; their values default to 0");
    }

    Ok(ColumnMap {
        name,
        kcal,
        protein,
        carb,
        lipid,
    })
}

/// Parse one macro cell from the composition table.
///
/// The source uses comma decimals and a few sentinel spellings:
/// `-` and `traces` mean zero, `<x` means x. Anything else
/// unparseable degrades to zero rather than failing the row.
pub fn parse_macro_value(raw: &str) -> f64 {
    let value = raw.trim();
    if value.is_empty() || value == "-" || value.eq_ignore_ascii_case("traces") {
        return 0.0;
    }
    let value = value.strip_prefix('<').map(str::trim).unwrap_or(value);
    value.replace(',', ".").parse().unwrap_or(0.0)
}

/// Load the catalog from a CSV export of the Ciqual table.
///
/// Header names are matched against the known variants (raw Ciqual
/// headers, the renamed import columns, or short names). A missing or
/// unreadable file is a `CatalogLoad` error; the caller decides
/// whether to degrade to an empty catalog.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| NutriError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| NutriError::CatalogLoad(e.to_string()))?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut foods = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| NutriError::CatalogLoad(e.to_string()))?;

        let Some(name) = record.get(columns.name).map(str::trim) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let cell = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .map(parse_macro_value)
                .unwrap_or(0.0)
        };

        let food = Food {
            name: name.to_string(),
            kcal_per_100g: cell(columns.kcal),
            protein_per_100g: cell(columns.protein),
            carb_per_100g: cell(columns.carb),
            lipid_per_100g: cell(columns.lipid),
        };

        if !food.is_valid() {
            warn!("skipping row with negative macros: {}", food.name);
            continue;
        }

        foods.push(food);
    }

    Ok(Catalog::new(foods))
}
