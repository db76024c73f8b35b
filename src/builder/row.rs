// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw cabling rows
//!
//! A row is the already-extracted cell text of one workbook line. Columns are
//! positional:
//!
//! ```text
//!  0 source             5 destination
//!  1 source rack        6 destination rack
//!  2 source location    7 destination location
//!  3 source slot        8 destination slot
//!  4 source port        9 destination port
//! 10 parent (optional) 11 speed (optional)
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{normalize_slot, LinkSpeed, Location, PortLabel};
use crate::errors::{MalformedInputError, RowOrigin};

/// Column names in workbook order
pub const COLUMNS: [&str; 12] = [
    "source",
    "source rack",
    "source location",
    "source slot",
    "source port",
    "destination",
    "destination rack",
    "destination location",
    "destination slot",
    "destination port",
    "parent",
    "speed",
];

const MIN_CELLS: usize = 10;
const MAX_CELLS: usize = 12;
const PARENT: usize = 10;
const SPEED: usize = 11;

/// One extracted workbook row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub tab: String,
    pub row: usize,
    #[serde(deserialize_with = "cells_as_text")]
    pub cells: Vec<String>,
}

/// Workbook extractors emit numbers for numeric-looking cells and null for
/// empty ones; both become plain text here.
fn cells_as_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|cell| match cell {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(D::Error::custom(format!("unsupported cell value: {other}"))),
        })
        .collect()
}

/// One end of a parsed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub location: Location,
    pub slot: Option<String>,
    pub port: PortLabel,
}

/// A row with every field checked and normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub origin: RowOrigin,
    pub source: Endpoint,
    pub destination: Endpoint,
    pub speed: Option<LinkSpeed>,
}

impl RawRow {
    pub fn new<I, S>(tab: impl Into<String>, row: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tab: tab.into(),
            row,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn origin(&self) -> RowOrigin {
        RowOrigin::new(self.tab.clone(), self.row)
    }

    /// Check required fields and normalize the row
    ///
    /// # Errors
    /// [`MalformedInputError`] naming the tab, row and column of the first
    /// problem found.
    pub fn parse(&self) -> Result<ParsedRow, MalformedInputError> {
        let origin = self.origin();
        if !(MIN_CELLS..=MAX_CELLS).contains(&self.cells.len()) {
            return Err(MalformedInputError::new(
                origin,
                format!(
                    "expected {MIN_CELLS} to {MAX_CELLS} cells, found {}",
                    self.cells.len()
                ),
            ));
        }

        let parent = self
            .cells
            .get(PARENT)
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty());
        let speed = match self.cells.get(SPEED) {
            Some(cell) => LinkSpeed::parse(cell).map_err(|text| {
                MalformedInputError::in_column(
                    origin.clone(),
                    COLUMNS[SPEED],
                    format!("unrecognised speed '{text}'"),
                )
            })?,
            None => None,
        };

        let mut source = self.endpoint(0)?;
        if let Some(parent) = parent {
            source.location = source.location.with_parent(parent);
        }
        let destination = self.endpoint(5)?;

        if source.name == destination.name
            && source.port == destination.port
            && source.slot == destination.slot
        {
            return Err(MalformedInputError::new(
                origin,
                format!(
                    "source and destination are the same port ({} port {})",
                    source.name, source.port
                ),
            ));
        }

        Ok(ParsedRow {
            origin,
            source,
            destination,
            speed,
        })
    }

    fn endpoint(&self, first: usize) -> Result<Endpoint, MalformedInputError> {
        let name = self.required(first)?;
        let rack = self.required(first + 1)?;
        let elevation = self.required(first + 2)?;
        let slot = normalize_slot(&self.cells[first + 3]);
        let port = PortLabel::new(&self.cells[first + 4]).ok_or_else(|| self.blank(first + 4))?;
        Ok(Endpoint {
            name: name.to_string(),
            location: Location::new(rack, elevation),
            slot,
            port,
        })
    }

    fn required(&self, column: usize) -> Result<&str, MalformedInputError> {
        let cell = self.cells[column].trim();
        if cell.is_empty() {
            Err(self.blank(column))
        } else {
            Ok(cell)
        }
    }

    fn blank(&self, column: usize) -> MalformedInputError {
        MalformedInputError::in_column(self.origin(), COLUMNS[column], "required field is blank")
    }
}
