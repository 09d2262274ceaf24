use izero::domain::ComputedNames;
use izero::workflow::FileReport;

/// Shows empty names as `-` so columns stay aligned.
fn cell(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Prints the resolved names of every environment as a table.
pub fn render_names_table(names: &[ComputedNames]) {
    println!(
        "{:<12} {:<24} {:<16} {:<28} {:<10}",
        "Environment", "API Host", "Web Host", "Hosted Zone", "Build"
    );
    println!("{:-<94}", "");

    for n in names {
        println!(
            "{:<12} {:<24} {:<16} {:<28} {:<10}",
            n.environment.as_ref(),
            cell(&n.api_hostname),
            cell(&n.web_hostname),
            cell(&n.api_hosted_zone),
            n.build_mode.as_ref(),
        );
    }
}

/// Prints one line per rewritten workflow, followed by its warnings.
pub fn render_file_report(report: &FileReport) {
    let file = report.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");
    let status = if report.preview.is_some() { "previewed" } else { "updated" };
    println!("{file:<26} {status:<10} nonce {}", report.nonce);

    for warning in &report.warnings {
        println!("  ! {warning}");
    }
}
