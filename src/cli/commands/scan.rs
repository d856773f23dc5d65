//! Directory scan command: runs the analyzer and renders the report.

use anyhow::Result;
use console::style;

use crate::analyzer::{ScanReport, Scanner, Verdict};
use crate::cli::{Cli, Output};
use crate::codec::CodecRegistry;

pub fn execute(cli: &Cli, output: &Output) -> Result<()> {
    let registry = CodecRegistry::resolve();

    let effective = registry.effective(cli.algo);
    if effective != cli.algo {
        output.warning(&format!(
            "{} backend not built in; falling back to {}",
            cli.algo.as_str(),
            effective.as_str()
        ));
    }

    output.info(&format!(
        "Analyzing key material in {} ({} probe, threshold {})",
        cli.target.display(),
        effective.as_str(),
        cli.threshold
    ));

    let scanner = Scanner::new(registry, cli.algo, cli.threshold);
    let report = scanner.scan_directory(&cli.target)?;

    render(&report, output);
    Ok(())
}

fn render(report: &ScanReport, output: &Output) {
    for warning in &report.warnings {
        output.warning(&warning.message);
    }

    println!();
    println!(
        "{}",
        style(format!(
            "{:<28} {:>14} {:>10}   {}",
            "FILENAME", "SIZE (bytes)", "RATIO", "STATUS"
        ))
        .bold()
    );
    println!("{}", style("─".repeat(66)).dim());

    for row in &report.rows {
        let status = match row.verdict {
            Verdict::Production => style(row.verdict.as_str()).green(),
            Verdict::Honeypot => style(row.verdict.as_str()).red().bold(),
        };
        println!(
            "{:<28} {:>14} {:>10.4}   {}",
            row.metrics.name, row.metrics.original_size, row.metrics.ratio, status
        );
        if output.is_verbose() {
            println!(
                "    {}",
                style(format!(
                    "compressed to {} bytes in {} ms",
                    row.metrics.compressed_size, row.metrics.duration_ms
                ))
                .dim()
            );
        }
    }

    output.header("Scan Summary");
    output.summary_stats("Production:", report.summary.production);
    output.summary_stats("Honeypot:", report.summary.honeypot);
    output.summary_stats("Total analyzed:", report.summary.total);

    output.blank_line();
    if report.summary.honeypot > 0 {
        output.warning(&format!(
            "Flagged {} low-entropy candidate(s)",
            report.summary.honeypot
        ));
    } else if report.summary.total > 0 {
        output.success("No low-entropy candidates detected");
    }
}
