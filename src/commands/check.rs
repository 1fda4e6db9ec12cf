use std::fs;
use std::io::{self, Read};

use log::info;

use crate::checks::{parse_agent_output, run_checks, CheckParams, ServiceReport};
use crate::cli::CheckCli;
use crate::error::Result;
use crate::output::output_data;

fn print_pretty(reports: &[ServiceReport]) {
    for report in reports {
        let texts: Vec<&str> = report
            .results
            .iter()
            .filter_map(|r| r.summary.as_deref())
            .collect();
        println!("[{}] {}: {}", report.state.label(), report.service, texts.join(", "));
        for result in &report.results {
            if let Some(notice) = &result.notice {
                println!("    {}", notice);
            }
        }
    }
}

pub fn handle_check_command(cli: &CheckCli) -> Result<()> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let params = match &cli.params {
        Some(path) => CheckParams::load(path)?,
        None => CheckParams::default(),
    };

    let parsed = parse_agent_output(&text);
    info!("Parsed {} sections", parsed.len());

    let reports = run_checks(&parsed, cli.host.as_deref(), &params);
    match cli.format.as_str() {
        "pretty" => print_pretty(&reports),
        format => output_data(&reports, format)?,
    }
    Ok(())
}
