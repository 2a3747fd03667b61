use std::collections::HashSet;

use serde::Deserialize;

use crate::radius::Located;

use super::{CatalogError, Validate};

pub const PROGRAM_DISCLAIMER: &str = "Este programa es público, ajeno a cualquier partido político. \
Queda prohibido el uso para fines distintos a los establecidos en el programa.";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEvent {
    pub id: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub verified: bool,
    pub date: String,
    pub distance_km: f64,
    pub summary: String,
    pub meetup_point: String,
    pub contact: String,
    #[serde(default)]
    pub show_disclaimer: bool,
}

impl Located for ProgramEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl Validate for ProgramEvent {}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingUnit {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance_km: f64,
    pub contact: String,
    pub notes: String,
    #[serde(default)]
    pub programs: Vec<UnitProgram>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitProgram {
    pub id: String,
    pub title: String,
    pub coordinator: String,
    pub schedule: String,
}

impl Located for ReceivingUnit {
    fn id(&self) -> &str {
        &self.id
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl Validate for ReceivingUnit {
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.programs.len());
        for program in &self.programs {
            if !seen.insert(program.id.as_str()) {
                return Err(CatalogError::DuplicateProgram {
                    unit: self.id.clone(),
                    program: program.id.clone(),
                });
            }
        }
        Ok(())
    }
}
