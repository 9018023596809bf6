//! Command execution for the `gymdesk` binary.

use std::io::Write;

use gymdesk_core::clock::Clock;
use gymdesk_core::member::{aggregate, filter_members, validate_draft, Member, MemberDraft};
use gymdesk_core::status::StatusCache;
use gymdesk_core::storage::MemberStore;

use crate::cli::{Commands, OutputFormat};
use crate::error::Result;
use crate::output::{format_output, pretty, MemberRow};
use crate::repository::MemberRepository;

/// Runs one command against the repository, writing its output to `out`.
///
/// Drafts are validated before any request is made.
pub async fn run<S, K, C, W>(
    command: Commands,
    format: OutputFormat,
    quiet: bool,
    repository: &MemberRepository<S, K>,
    statuses: &mut StatusCache<C>,
    out: &mut W,
) -> Result<()>
where
    S: MemberStore + 'static,
    K: Clock,
    C: Clock,
    W: Write,
{
    match command {
        Commands::List { search, status } => {
            let members = repository.list().await?;
            let rows: Vec<MemberRow<'_>> = filter_members(&members, &search, status, statuses)
                .into_iter()
                .map(|member| MemberRow {
                    member,
                    status: statuses.status(member.expiry_date),
                })
                .collect();
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&rows, format)?)?,
                OutputFormat::Pretty => writeln!(out, "{}", pretty::format_members(&rows))?,
            }
        }
        Commands::Stats => {
            let members = repository.list().await?;
            let stats = aggregate(&members, statuses);
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&stats, format)?)?,
                OutputFormat::Pretty => writeln!(out, "{}", pretty::format_stats(&stats))?,
            }
        }
        Commands::Create(args) => {
            let draft = MemberDraft::from(args);
            validate_draft(&draft)?;
            let member = repository.register(draft).await?;
            write_member(out, format, "Created", &member, statuses)?;
        }
        Commands::Update { id, changes } => {
            let mut member = repository.get(&id).await?;
            let mut draft = member.to_draft();
            changes.apply(&mut draft);
            validate_draft(&draft)?;
            member.apply_draft(draft);
            repository.update(&member).await?;
            write_member(out, format, "Updated", &member, statuses)?;
        }
        Commands::Renew { id, renewal } => {
            let mut member = repository.get(&id).await?;
            let mut draft = member.to_draft();
            renewal.apply(&mut draft);
            validate_draft(&draft)?;
            member.apply_draft(draft);
            repository.update(&member).await?;
            write_member(out, format, "Renewed", &member, statuses)?;
        }
        Commands::Delete { id } => {
            repository.delete(&id).await?;
            if !quiet {
                writeln!(out, "Deleted member {}", id.trim())?;
            }
        }
        Commands::SuggestId => {
            let code = repository.suggest_next_member_code().await?;
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&code, format)?)?,
                OutputFormat::Pretty => writeln!(out, "{}", code)?,
            }
        }
        Commands::CheckId { code } => {
            let available = repository.is_member_code_available(&code).await?;
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&available, format)?)?,
                OutputFormat::Pretty if available => writeln!(out, "{} is available", code.trim())?,
                OutputFormat::Pretty => writeln!(out, "{} is already taken", code.trim())?,
            }
        }
    }

    Ok(())
}

fn write_member<W: Write, C: Clock>(
    out: &mut W,
    format: OutputFormat,
    heading: &str,
    member: &Member,
    statuses: &mut StatusCache<C>,
) -> Result<()> {
    let row = MemberRow {
        member,
        status: statuses.status(member.expiry_date),
    };
    match format {
        OutputFormat::Json => writeln!(out, "{}", format_output(&row, format)?)?,
        OutputFormat::Pretty => writeln!(out, "{heading}:\n{}", pretty::format_member(&row))?,
    }
    Ok(())
}
