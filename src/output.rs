use std::io::Write;

use log::LevelFilter;
use serde::Serialize;

use crate::error::Result;

pub fn output_data<T: Serialize>(data: &T, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string(data)?);
        }
        "yaml" => {
            println!("{}", serde_yaml::to_string(data)?);
        }
        "pretty" | _ => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Configure stderr logging from the number of `-v` flags.
///
/// The HTTP stack stays at warn unless `-vvv` is given.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));

    if verbosity < 3 {
        for module in ["reqwest", "hyper", "rustls", "native_tls"] {
            builder.filter_module(module, LevelFilter::Warn);
        }
    }

    if verbosity >= 2 {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{:>5}: (line {:>3}) {}",
                record.level(),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{:>5}: {}", record.level(), record.args()));
    }

    // A second initialization (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Debug);
    }

    #[test]
    fn test_output_data_formats() {
        let data = serde_json::json!({"service": "oVirt Engine"});
        assert!(output_data(&data, "json").is_ok());
        assert!(output_data(&data, "yaml").is_ok());
        assert!(output_data(&data, "pretty").is_ok());
    }
}
