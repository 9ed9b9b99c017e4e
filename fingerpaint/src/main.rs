#![warn(clippy::pedantic)]

pub mod global;
pub mod host;
pub mod script;

use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use std::path::PathBuf;

/// Replay a recorded gesture script onto a drawing surface
#[derive(Parser, Debug, PartialEq)]
#[command(name = "fingerpaint")]
#[command(version)]
struct Args {
    /// Gesture script to play
    script: PathBuf,

    /// Write the final frame to this PNG
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Preferences file to use instead of the one in the user's preferences directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let args = Args::parse();

    let preferences = match &args.config {
        Some(path) => global::preferences::Preferences::load_or_default(path),
        None => global::preferences::Preferences::load_default_path(),
    };

    let script = script::Script::load(&args.script)
        .with_context(|| format!("failed to load script {:?}", args.script))?;

    let mut host = host::Host::new(preferences.resolve());
    host.play(&script);

    if let Some(out) = &args.out {
        let Some(display) = host.display() else {
            anyhow::bail!("surface was never drawable, nothing to write to {out:?}");
        };
        display.save_png(out)?;
        log::info!("wrote frame to {out:?}");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;
    #[test]
    fn args() {
        let args = Args::try_parse_from(["fingerpaint", "session.toml", "--out", "frame.png"]).unwrap();
        assert_eq!(args.script, std::path::PathBuf::from("session.toml"));
        assert_eq!(args.out, Some("frame.png".into()));
        assert_eq!(args.config, None);

        let args = Args::try_parse_from(["fingerpaint", "-c", "prefs.toml", "s.toml"]).unwrap();
        assert_eq!(args.config, Some("prefs.toml".into()));
        assert_eq!(args.script, std::path::PathBuf::from("s.toml"));
    }
    #[test]
    fn bad_args() {
        assert!(Args::try_parse_from(["fingerpaint"]).is_err());
        assert!(Args::try_parse_from(["fingerpaint", "a.toml", "b.toml"]).is_err());
        assert!(Args::try_parse_from(["fingerpaint", "a.toml", "--out"]).is_err());
    }
}
