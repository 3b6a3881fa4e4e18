// Copyright (c) 2026 rezky_nightky

mod buffer;
mod config;
mod droplet;
mod glyphs;
mod palette;
mod rain;
mod render;
mod terminal;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::config::Args;
use crate::rain::Rain;
use crate::terminal::{restore_terminal_best_effort, Terminal};

fn require_u64_range(name: &str, v: u64, min: u64, max: u64) -> u64 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_f32_range(name: &str, v: f32, min: f32, max: f32) -> f32 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_f64_range(name: &str, v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let args = Args::parse();

    let speed_ms = require_u64_range("--speed", args.speed, 5, 500);
    let density = require_f32_range("--density", args.density, 0.05, 1.0);
    let duration_s = args.duration.map(|s| {
        if s > 0.0 {
            return require_f64_range("--duration", s, 0.1, 86400.0);
        }
        s
    });

    // Handlers only flip the flag; the loop notices it between ticks and
    // unwinds normally, so terminal cleanup runs exactly once.
    let interrupted = Arc::new(AtomicBool::new(false));

    #[cfg(unix)]
    {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            if let Err(e) = signal_hook::flag::register(sig, Arc::clone(&interrupted)) {
                eprintln!("failed to install signal handler: {}", e);
            }
        }
    }

    #[cfg(windows)]
    {
        let flag = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let mut term = match Terminal::new() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("unable to take control of the terminal: {}", e);
            std::process::exit(1);
        }
    };

    let glyph_set = glyphs::build();
    let mut glyph_rng = StdRng::from_os_rng();

    let (mut width, mut height) = term.poll_size();
    let mut rain = Rain::new(density, StdRng::from_os_rng());
    rain.reset(width, height);

    let tick = Duration::from_millis(speed_ms);
    let start_time = Instant::now();
    let end_time = duration_s
        .and_then(|s| (s > 0.0).then(|| start_time + Duration::from_secs_f64(s)));
    let mut next_tick = Instant::now();

    loop {
        if interrupted.load(Ordering::Relaxed) {
            break;
        }
        if end_time.is_some_and(|end| Instant::now() >= end) {
            break;
        }

        let now = Instant::now();
        if now < next_tick {
            // never sleeps longer than one tick, so an interrupt is
            // observed promptly
            thread::sleep(next_tick - now);
            continue;
        }

        next_tick += tick;
        let now = Instant::now();
        if now > next_tick {
            // running behind: drop the backlog instead of bursting
            next_tick = now;
        }

        let (w, h) = term.poll_size();
        if (w, h) != (width, height) {
            width = w;
            height = h;
            term.clear()?;
            rain.reset(width, height);
        }

        rain.tick();
        render::draw(term.writer(), rain.buffer(), &glyph_set, &mut glyph_rng)?;
    }

    Ok(())
}
