use anyhow::{Context, Result};
use clap::Parser;
use ring_playlist::catalog;
use ring_playlist::session::{Command, LogOutput, RepeatMode, Response, Session};
use ring_playlist::SessionConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ring-playlist")]
#[command(about = "Play a Rhythmbox library through a circular playlist", long_about = None)]
struct Args {
    /// Path to the track database (rhythmdb.xml)
    #[arg(
        short = 'd',
        long,
        default_value = "~/.local/share/rhythmbox/rhythmdb.xml"
    )]
    database: String,

    /// Path to the playlists file (playlists.xml)
    #[arg(short = 'p', long)]
    playlists: Option<String>,

    /// Play only this playlist (needs --playlists)
    #[arg(long = "playlist")]
    playlist: Option<String>,

    /// Repeat mode: off, all or one
    #[arg(short = 'r', long, default_value = "off")]
    repeat: RepeatMode,

    /// Shuffle as soon as the tracks are loaded
    #[arg(short = 's', long)]
    shuffle: bool,

    /// Track ID to start from
    #[arg(long)]
    start: Option<String>,

    /// Run these commands instead of reading stdin (can be specified multiple times)
    #[arg(short = 'e', long = "exec")]
    exec: Vec<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let db_path = PathBuf::from(shellexpand::tilde(&args.database).as_ref());
    let playlists_path = args
        .playlists
        .as_ref()
        .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()));

    let library = catalog::load_library(&db_path, playlists_path.as_deref())?;

    let mut config = SessionConfig::new()
        .with_repeat(args.repeat)
        .with_shuffle(args.shuffle);
    if let Some(start) = args.start {
        config = config.with_start_track(start);
    }
    if let Some(name) = args.playlist {
        log::info!("Restricting to playlist: {}", name);
        config = config.with_playlist(name);
    }

    let tracks = catalog::select_tracks(&library, config.playlist.as_deref())?;

    let mut session = Session::new(config, LogOutput::new());
    session.start(tracks).context("Failed to start playback")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", Response::Track(session.ring().current().cloned()))?;

    if !args.exec.is_empty() {
        for line in &args.exec {
            if !run_line(&mut session, line, &mut out)? {
                break;
            }
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        if !run_line(&mut session, &line, &mut out)? {
            break;
        }
    }

    Ok(())
}

/// Parse and run one command line. Returns false once the session should end.
fn run_line<W: Write>(session: &mut Session<LogOutput>, line: &str, out: &mut W) -> Result<bool> {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            return Ok(true);
        }
    };

    let response = session.execute(command)?;
    writeln!(out, "{}", response)?;

    Ok(response != Response::Quit)
}
