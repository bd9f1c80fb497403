#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use tessera_ui::{component::text, font, theme};

use tessera_gui::{
    config::{self, Config},
    dir::TesseraDirectory,
    logger,
    tessera::Tessera,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(TesseraDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: tessera [OPTIONS]

Options:
    --datadir <PATH>    Path of the tessera datadir
    -v, --version       Display tessera version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut res = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(TesseraDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if i > 0 && arg.starts_with("--") {
            return Err(format!("unknown option '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => TesseraDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.path().join(config::DEFAULT_FILE_NAME)) {
        Ok(config) => config,
        Err(config::ConfigError::NotFound) => Config::default(),
        Err(e) => {
            return Err(format!("Failed to read configuration file: {}", e).into());
        }
    };

    let log_level = logger::parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Tessera".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 800.0,
            height: 600.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 600.0,
            height: 450.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Tessera".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(Tessera::title, Tessera::update, Tessera::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(Tessera::scale_factor)
        .subscription(Tessera::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || Tessera::new((datadir, config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or("'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["tessera".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["tessera".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(TesseraDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "tessera --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["tessera".into()]).ok());
    }
}
