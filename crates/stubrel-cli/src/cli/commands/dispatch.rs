use super::super::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Build(args) => super::build::run(args),
        Command::Graph(args) => super::graph::run(args),
        Command::Inspect(args) => super::inspect::run(args),
        Command::Fingerprint(args) => super::fingerprint::run(args),
    }
}
