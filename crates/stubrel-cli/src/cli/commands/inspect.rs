use anyhow::Context;
use serde::Serialize;

use super::super::args::{InspectArgs, OutputFormat};
use crate::exit_codes;
use stubrel_core::digest::sha1_hex;
use stubrel_core::{read_members, ArchiveMember, EntryKind};

#[derive(Debug, Serialize)]
struct MemberView {
    path: String,
    kind: EntryKind,
    mode: String,
    owner: String,
    group: String,
    size: u64,
    mtime: u64,
    sha1: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    members: Vec<MemberView>,
}

impl MemberView {
    fn new(member: &ArchiveMember, recursive: bool) -> anyhow::Result<Self> {
        let members = if recursive && member.path().ends_with(".tgz") {
            read_members(member.payload.as_slice())
                .with_context(|| format!("failed to read embedded archive {}", member.path()))?
                .iter()
                .map(|m| MemberView::new(m, false))
                .collect::<anyhow::Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: member.header.path.clone(),
            kind: member.header.kind,
            mode: format!("{:04o}", member.header.mode),
            owner: member.header.owner.clone(),
            group: member.header.group.clone(),
            size: member.header.size,
            mtime: member.header.mtime,
            sha1: sha1_hex(&member.payload),
            members,
        })
    }
}

pub fn run(args: InspectArgs) -> anyhow::Result<i32> {
    let file = match std::fs::File::open(&args.archive) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: cannot open {}: {}", args.archive.display(), e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    let members = read_members(std::io::BufReader::new(file))
        .with_context(|| format!("failed to read archive: {}", args.archive.display()))?;
    let views = members
        .iter()
        .map(|m| MemberView::new(m, args.recursive))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&views).context("failed to serialize archive listing")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for view in &views {
                print_view(view, 0);
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn print_view(view: &MemberView, depth: usize) {
    let kind = match view.kind {
        EntryKind::Directory => 'd',
        EntryKind::Regular => '-',
    };
    println!(
        "{:indent$}{} {} {}/{} {:>8} {}  {}",
        "",
        kind,
        view.mode,
        view.owner,
        view.group,
        view.size,
        view.sha1,
        view.path,
        indent = depth * 4
    );
    for child in &view.members {
        print_view(child, depth + 1);
    }
}
