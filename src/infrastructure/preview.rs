use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::application::agenda;
use crate::domain::{Locale, OrganizationRepository};
use crate::infrastructure::config::PreviewConfig;
use crate::infrastructure::repositories::JsonOrganizationRepository;
use crate::infrastructure::timezone::reference_day;

/// Loads the configured organizations and prints their next meetings to stdout
pub fn run_preview(config: &PreviewConfig) -> Result<()> {
    let repository = JsonOrganizationRepository::open(&config.rules_path).with_context(|| {
        format!(
            "Failed to load organizations from {}",
            config.rules_path.display()
        )
    })?;
    let today = reference_day(config);

    info!(
        %today,
        timezone = %config.timezone,
        locale = config.locale.tag(),
        "Previewing next meetings"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let printed = write_agenda(&repository, today, config.locale, &mut out)?;
    info!(organizations = printed, "Preview finished");
    Ok(())
}

/// Writes one line per organization and returns how many were written
pub fn write_agenda<W: Write>(
    repository: &dyn OrganizationRepository,
    today: NaiveDate,
    locale: Locale,
    out: &mut W,
) -> Result<usize> {
    let organizations = repository
        .list()
        .context("Failed to list organizations")?;

    if organizations.is_empty() {
        warn!("No organizations to preview");
        return Ok(0);
    }

    let rows = agenda(&organizations, today, locale);
    for row in &rows {
        if let Some(issue) = row.info.occurrence.issue() {
            warn!(
                organization = %row.organization_name,
                %issue,
                "Organization has an incomplete meeting rule"
            );
        }

        let mut line = format!(
            "{} | {} | {}",
            row.organization_name,
            row.info.schedule,
            row.info.message()
        );
        if row.info.has_meeting() {
            line.push_str(&format!(" | {} | {}", row.info.detail, row.info.time));
        }
        writeln!(out, "{}", line).context("Failed to write preview line")?;
    }

    Ok(rows.len())
}
