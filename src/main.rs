use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod carousel;
mod constants;
mod content;
mod icon;
mod slide;
mod texture_loader;

use crate::carousel::engine::CarouselEngine;
use crate::carousel::slide::Slide;
use crate::constants::*;
use crate::content::fetch_slide_content;
use crate::slide::build_slide_set;
use crate::texture_loader::load_texture_from_url;

/// Carousel of eight travel-destination cards, one expanded at a time.
#[derive(Parser)]
#[command(name = "travel-slider", version, about)]
struct Cli {
    /// API key for the generative content service (GEMINI_API_KEY also works)
    #[arg(long)]
    api_key: Option<String>,

    /// Model name the content service should use
    #[arg(long, default_value = "gemini-3-flash-preview")]
    model: String,

    /// Skip the content service and use the built-in destinations
    #[arg(long)]
    offline: bool,

    /// Skip image downloads and render flat cards
    #[arg(long)]
    no_images: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("GEMINI_API_KEY").ok());

    // --- Fetch Card Content ---
    // One attempt per session; the slider is not built until the call
    // resolves or fails. An error and an undersized batch are treated the
    // same: the builder falls back to the static destinations.
    let triples = if cli.offline {
        Vec::new()
    } else if let Some(key) = api_key.as_deref() {
        match fetch_slide_content(key, &cli.model) {
            Ok(triples) => {
                println!("Content service returned {} destinations", triples.len());
                triples
            }
            Err(e) => {
                eprintln!("Content service unavailable, using fallback destinations: {e:#}");
                Vec::new()
            }
        }
    } else {
        eprintln!("No API key (use --api-key or GEMINI_API_KEY), using fallback destinations");
        Vec::new()
    };

    let records = build_slide_set(&triples);

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Travel Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Card Images ---
    let mut slides = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let image = if cli.no_images {
            None
        } else {
            match load_texture_from_url(&mut rl, &thread, &record.image_url) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    eprintln!("Warning: card {} renders without an image: {e:#}", record.id);
                    None
                }
            }
        };
        slides.push(Slide::new(record, image, position));
    }

    let mut engine = CarouselEngine::new(slides)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    Ok(())
}
