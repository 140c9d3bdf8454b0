use anyhow::Context;

use super::super::args::{GraphArgs, OutputFormat};
use super::load_source;
use crate::exit_codes;

pub fn run(args: GraphArgs) -> anyhow::Result<i32> {
    let Some(source) = load_source(&args.manifest_path, args.source_format.into())? else {
        return Ok(exit_codes::CONFIG_ERROR);
    };
    let deployment = source.deployment();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&deployment)
                .context("failed to serialize deployment graph")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for release in &deployment.releases {
                println!("{} -> [{}]", release.name, release.jobs.join(", "));
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
