//! Relate command implementation.

use crate::cli::RelateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::Population;
use crate::output::Formatter;
use kindred_relate::Relator;
use std::sync::Arc;
use std::time::Duration;

/// Execute the relate command.
pub async fn execute_relate(
    args: RelateArgs,
    population: Population,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let output = relate(args, population, config, formatter).await?;
    println!("{}", output);
    Ok(())
}

/// Run the query and render its result.
///
/// The engine has no internal cancellation point, so the wall-clock limit
/// is imposed around the whole query running on a blocking thread.
pub async fn relate(
    args: RelateArgs,
    population: Population,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let timeout_secs = args.timeout_secs.unwrap_or(config.settings.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::InvalidInput("Timeout must be at least 1 second".to_string()));
    }

    let relator = Arc::new(Relator::with_unions(
        population.people,
        population.unions,
        config.relator_config(args.max_generations),
    )?);

    let RelateArgs { person1, person2, .. } = args;
    tracing::info!(person1 = %person1, person2 = %person2, timeout_secs, "relating");

    let query = {
        let relator = Arc::clone(&relator);
        tokio::task::spawn_blocking(move || relator.relate(&person1, &person2))
    };

    let joined = tokio::time::timeout(Duration::from_secs(timeout_secs), query)
        .await
        .map_err(|_| CliError::Timeout(timeout_secs))?;
    let found = joined??;

    formatter.format_relationship(&found, relator.index())
}
