//! People command implementation.

use crate::cli::PeopleArgs;
use crate::error::Result;
use crate::input::Population;
use crate::output::Formatter;
use kindred_domain::Person;
use kindred_relate::PersonIndex;

/// Execute the people command.
pub async fn execute_people(args: PeopleArgs, population: Population, formatter: &Formatter) -> Result<()> {
    let output = list_people(args, population, formatter)?;
    println!("{}", output);
    Ok(())
}

/// Render the people matching the filter, sorted by ID.
pub fn list_people(args: PeopleArgs, population: Population, formatter: &Formatter) -> Result<String> {
    let index = PersonIndex::build(population.people);
    let filter = args.filter.map(|f| f.to_lowercase());

    let mut people: Vec<&Person> = index
        .people()
        .filter(|person| match &filter {
            Some(filter) => matches_filter(person, filter),
            None => true,
        })
        .collect();
    people.sort_by(|a, b| a.id.cmp(&b.id));

    tracing::debug!(matched = people.len(), total = index.len(), "listing people");
    formatter.format_people(&people, &index)
}

fn matches_filter(person: &Person, filter: &str) -> bool {
    person.id.as_str().to_lowercase().contains(filter) || person.name.full().to_lowercase().contains(filter)
}
