use crate::{ProvisionReport, RowOutcome};

#[test]
fn test_report_counts_each_outcome() {
    let mut report = ProvisionReport::default();

    for outcome in [
        RowOutcome::Created(Some("1".to_string())),
        RowOutcome::Created(None),
        RowOutcome::WouldCreate,
        RowOutcome::Skipped,
        RowOutcome::Duplicate,
        RowOutcome::Invalid,
        RowOutcome::Failed,
    ] {
        report.record(&outcome);
    }

    assert_eq!(report.created, 2);
    assert_eq!(report.would_create, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.duplicate, 1);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total(), 7);
    assert!(!report.is_success());
}

#[test]
fn test_report_without_failures_is_success() {
    let mut report = ProvisionReport::default();
    report.record(&RowOutcome::Skipped);
    report.record(&RowOutcome::Invalid);

    assert!(report.is_success());
}

#[test]
fn test_report_display() {
    let report = ProvisionReport {
        created: 2,
        skipped: 1,
        ..ProvisionReport::default()
    };

    assert_eq!(
        report.to_string(),
        "3 rows: 2 created, 0 would be created, 1 already existed, 0 duplicate, 0 invalid, 0 failed"
    );
}
