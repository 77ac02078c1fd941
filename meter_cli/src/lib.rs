use meter_core::{RecordStatus, UsageSnapshot};

/// Render one snapshot as the aligned table `meter status` prints.
pub fn format_status_table(snapshot: &UsageSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("Updated: {}\n", snapshot.updated_at));
    output.push_str(&format!(
        "{:<18} | {:<7} | {:>12} | {:>12} | {}\n",
        "Provider", "Status", "Balance", "Monthly", "Message"
    ));
    output.push_str(&"-".repeat(96));
    output.push('\n');

    for record in &snapshot.providers {
        let status = match record.status {
            RecordStatus::Ok => "ok",
            RecordStatus::Warning => "warning",
            RecordStatus::Error => "error",
        };
        output.push_str(&format!(
            "{:<18} | {:<7} | {:>8} {} | {:>8} {} | {}\n",
            record.label,
            status,
            format!("{:.2}", record.balance),
            record.currency,
            format!("{:.2}", record.monthly_total),
            record.currency,
            record.message.as_deref().unwrap_or(""),
        ));
    }

    output
}
