use crate::provision::{ProvisionReport, RowOutcome};
use crate::{CliClientResult, Client};

use sp_core::{InputRecord, ScimUser};

use std::collections::HashSet;

use log::{error, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    /// Look users up but never issue the create call
    pub dry_run: bool,
}

/// Create every user in `records` that does not exist yet.
///
/// Rows are handled one at a time in input order. A failing row is logged and
/// counted; the loop moves on to the next row without retrying.
pub async fn provision_users(
    client: &Client,
    records: &[InputRecord],
    options: &ProvisionOptions,
) -> ProvisionReport {
    let mut report = ProvisionReport::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        let outcome = if !record.has_user_name() {
            warn!("Skipping user with missing userName{}", line_suffix(record));
            RowOutcome::Invalid
        } else if !seen.insert(record.user_name.as_str()) {
            warn!(
                "Skipping duplicate userName {}{}",
                record.user_name,
                line_suffix(record)
            );
            RowOutcome::Duplicate
        } else {
            match provision_one(client, record, options).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Error processing user {}: {}", record.user_name, e);
                    RowOutcome::Failed
                }
            }
        };

        report.record(&outcome);
    }

    info!("Provisioning finished: {}", report);
    report
}

async fn provision_one(
    client: &Client,
    record: &InputRecord,
    options: &ProvisionOptions,
) -> CliClientResult<RowOutcome> {
    let user_name = record.user_name.as_str();

    if client.get_user(user_name).await?.is_some() {
        info!("User {} already exists, skipping creation", user_name);
        return Ok(RowOutcome::Skipped);
    }

    let scim_user = ScimUser::from(record);

    if options.dry_run {
        info!(
            "Dry run: would create user {} (email {}, role {})",
            user_name,
            scim_user.primary_email().unwrap_or("<none>"),
            record.role()
        );
        return Ok(RowOutcome::WouldCreate);
    }

    let created = client.create_user(&scim_user).await?;
    info!(
        "Created user {} with ID {}",
        user_name,
        created.id.as_deref().unwrap_or("<none>")
    );

    Ok(RowOutcome::Created(created.id))
}

fn line_suffix(record: &InputRecord) -> String {
    record
        .line
        .map(|line| format!(" (line {})", line))
        .unwrap_or_default()
}
