mod provision_report;
