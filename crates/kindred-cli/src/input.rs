//! Reading a population from JSON.

use crate::error::{CliError, Result};
use kindred_domain::{Person, Union};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// People and unions to run queries against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    /// Everyone in the tree
    pub people: Vec<Person>,
    /// Recorded marriages and partnerships
    pub unions: Vec<Union>,
}

/// Accepted document shapes: a full object, or a bare array of people.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Full {
        people: Vec<Person>,
        #[serde(default)]
        unions: Vec<Union>,
    },
    PeopleOnly(Vec<Person>),
}

impl Population {
    /// Parse a population from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let population = match serde_json::from_str(json)? {
            Document::Full { people, unions } => Self { people, unions },
            Document::PeopleOnly(people) => Self {
                people,
                unions: Vec::new(),
            },
        };

        if population.people.is_empty() {
            return Err(CliError::InvalidInput("No people provided".to_string()));
        }
        Ok(population)
    }

    /// Read a population from a file, or from stdin when no path is given.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        let json = match path {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let population = Self::from_json(&json)?;
        tracing::debug!(
            people = population.people.len(),
            unions = population.unions.len(),
            "read population"
        );
        Ok(population)
    }
}
