use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use glide_core::replay::{Replay, ReplayFrame, Script};
use glide_core::AppConfig;

pub async fn run(config: &AppConfig, path: &Path, pretty: bool, last: bool) -> Result<()> {
    let script = Script::load(path)
        .with_context(|| format!("Failed to load replay script {}", path.display()))?;
    tracing::info!(
        "Replaying {} frames from {}",
        script.frame_count(),
        path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut final_frame = None;

    Replay::new(&script, config).run(&script, |frame| {
        if last {
            final_frame = Some(frame);
            Ok(())
        } else {
            write_frame(&mut out, &frame, pretty)
        }
    })?;

    if let Some(frame) = final_frame {
        write_frame(&mut out, &frame, pretty)?;
    }
    out.flush()?;

    Ok(())
}

fn write_frame<W: Write>(out: &mut W, frame: &ReplayFrame, pretty: bool) -> glide_core::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, frame)?;
    } else {
        serde_json::to_writer(&mut *out, frame)?;
    }
    writeln!(out)?;
    Ok(())
}
