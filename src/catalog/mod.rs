mod parse;
mod records;

use std::collections::HashSet;

use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::radius::Located;

pub use parse::parse_catalog;
pub use records::{PROGRAM_DISCLAIMER, ProgramEvent, ReceivingUnit};

const VOLUNTEERING_JSON: &str = include_str!("data/volunteering.json");
const WORKSHOPS_JSON: &str = include_str!("data/workshops.json");
const DROP_OFF_JSON: &str = include_str!("data/drop_off.json");

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate id `{0}` in catalog")]
    DuplicateId(String),
    #[error("item `{id}` has an invalid distance of {distance_km} km")]
    InvalidDistance { id: String, distance_km: f64 },
    #[error("unit `{unit}` lists program `{program}` more than once")]
    DuplicateProgram { unit: String, program: String },
}

pub trait Validate {
    fn validate(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: Located + Validate> Catalog<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id().to_owned()));
            }

            let distance_km = item.distance_km();
            if !distance_km.is_finite() || distance_km < 0.0 {
                return Err(CatalogError::InvalidDistance {
                    id: item.id().to_owned(),
                    distance_km,
                });
            }

            item.validate()?;
        }

        Ok(Self { items })
    }
}

impl<T> Catalog<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Located> Catalog<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

#[derive(Clone, Debug)]
pub struct Catalogs {
    pub volunteering: Catalog<ProgramEvent>,
    pub workshops: Catalog<ProgramEvent>,
    pub drop_off: Catalog<ReceivingUnit>,
}

pub fn load_builtin() -> Result<Catalogs> {
    let catalogs = Catalogs {
        volunteering: parse_catalog("volunteering", VOLUNTEERING_JSON)?,
        workshops: parse_catalog("workshops", WORKSHOPS_JSON)?,
        drop_off: parse_catalog("drop-off units", DROP_OFF_JSON)?,
    };

    info!(
        volunteering = catalogs.volunteering.len(),
        workshops = catalogs.workshops.len(),
        drop_off = catalogs.drop_off.len(),
        "loaded built-in catalogs"
    );

    Ok(catalogs)
}
