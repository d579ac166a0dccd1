//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kindred_domain::{Link, MutualRelationship, Person, PersonId, Relationship};
use kindred_relate::PersonIndex;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a relate query.
    ///
    /// `index` supplies display names for the two people.
    pub fn format_relationship(&self, found: &MutualRelationship, index: &PersonIndex) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(found)?),
            OutputFormat::Table => Ok(self.format_relationship_table(found, index)),
            OutputFormat::Quiet => Ok(format!("{}\n{}", found.r1.description, found.r2.description)),
        }
    }

    fn format_relationship_table(&self, found: &MutualRelationship, index: &PersonIndex) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Person", "Is the", "Of", "Generations", "Path"]);

        for relationship in [&found.r1, &found.r2] {
            builder.push_record([
                display_id(index, &relationship.source_id),
                self.colorize(&relationship.description, "cyan"),
                display_id(index, &relationship.target_id),
                format!("{:+}", relationship.generations_removed),
                format_path(relationship),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let link = match &found.link {
            Link::CommonPerson(person) => format!("Common ancestor: {}", display_person(person)),
            Link::Union(union) => {
                let partners: Vec<String> = union.partners().map(|id| display_id(index, id)).collect();
                match &union.id {
                    Some(id) => format!("Related by marriage ({}): {}", id, partners.join(" & ")),
                    None => format!("Related by marriage: {}", partners.join(" & ")),
                }
            }
        };

        format!("{}\n{}", table, self.colorize(&link, "green"))
    }

    /// Format a list of people.
    ///
    /// `index` supplies parent names.
    pub fn format_people(&self, people: &[&Person], index: &PersonIndex) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(people)?),
            OutputFormat::Table => Ok(self.format_people_table(people, index)),
            OutputFormat::Quiet => Ok(people
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_people_table(&self, people: &[&Person], index: &PersonIndex) -> String {
        if people.is_empty() {
            return self.colorize("No people found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Born", "Died", "Parents"]);

        for person in people {
            let parents: Vec<String> = index
                .parent_ids_of(person.id.as_str())
                .map(|id| display_id(index, id))
                .collect();
            builder.push_record([
                person.id.to_string(),
                person.name.full(),
                person.birth_date.clone().unwrap_or_default(),
                person.death_date.clone().unwrap_or_default(),
                parents.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// "Name (ID)", or the bare ID for unnamed people.
fn display_person(person: &Person) -> String {
    if person.name.is_empty() {
        person.id.to_string()
    } else {
        format!("{} ({})", person.name, person.id)
    }
}

fn display_id(index: &PersonIndex, id: &PersonId) -> String {
    index
        .lookup(id.as_str())
        .map(display_person)
        .unwrap_or_else(|| id.to_string())
}

fn format_path(relationship: &Relationship) -> String {
    relationship
        .path
        .iter()
        .map(display_person)
        .collect::<Vec<_>>()
        .join(" → ")
}
