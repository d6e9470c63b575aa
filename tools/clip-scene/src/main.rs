// Copyright 2025. Command-line driver for line-clip scene scripts.
//
// Usage:
//   clip-scene clip <scene> [--algorithm <name|index>] [--display [WxH]]
//   clip-scene compare <scene>
//   clip-scene list

use std::path::Path;
use std::process;

use clip_scene::{load_scene, Result};
use line_clip::{Algorithm, ClipConfig, ClipScene, DisplayTransform};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "clip" => cmd_clip(&args[2..]),
        "compare" => cmd_compare(&args[2..]),
        "list" => cmd_list(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("clip-scene: clip the lines of a scene script against its window");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  clip <scene> [--algorithm <name|index>] [--display [WxH]]");
    eprintln!("      Print the accepted segments, optionally in display coordinates.");
    eprintln!();
    eprintln!("  compare <scene>");
    eprintln!("      Clip with every algorithm and print the results side by side.");
    eprintln!();
    eprintln!("  list");
    eprintln!("      List available algorithms.");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for clipping diagnostics.");
}

fn cmd_list() {
    println!("Available algorithms:");
    for a in Algorithm::ALL {
        println!("  {}  {}", a.index(), a);
    }
}

fn read_scene(path: &str) -> Result<ClipScene> {
    let text = std::fs::read_to_string(Path::new(path))?;
    load_scene(&text, ClipConfig::default())
}

fn open_scene_or_exit(path: &str) -> ClipScene {
    read_scene(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(1);
    })
}

fn parse_viewport(s: &str) -> Option<DisplayTransform> {
    let (w, h) = s.split_once('x')?;
    Some(DisplayTransform::new(w.parse().ok()?, h.parse().ok()?))
}

fn cmd_clip(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: clip-scene clip <scene> [--algorithm <name|index>] [--display [WxH]]");
        process::exit(1);
    }

    let mut scene = open_scene_or_exit(&args[0]);
    let mut display: Option<DisplayTransform> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--algorithm" | "-a" if i + 1 < args.len() => {
                let a: Algorithm = args[i + 1].parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(1);
                });
                scene.set_algorithm(a);
                i += 2;
            }
            "--display" | "-d" => {
                match args.get(i + 1).and_then(|s| parse_viewport(s)) {
                    Some(t) => {
                        display = Some(t);
                        i += 2;
                    }
                    None => {
                        display = Some(DisplayTransform::default());
                        i += 1;
                    }
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                i += 1;
            }
        }
    }

    println!("window {} ({})", scene.window(), scene.algorithm());
    if let Some(t) = &display {
        let (x, y, w, h) = t.window_outline(scene.window());
        println!("outline {} {} {} {}", x, y, w, h);
    }

    let mut dropped = 0;
    for clipped in scene.clip_lines() {
        if let Some(e) = &clipped.error {
            println!("#{} {} error: {}", clipped.index, clipped.source, e);
            dropped += 1;
            continue;
        }
        if clipped.is_rejected() {
            println!("#{} {} rejected", clipped.index, clipped.source);
            continue;
        }
        for piece in &clipped.accepted {
            let piece = match &display {
                Some(t) => t.to_display_segment(piece),
                None => *piece,
            };
            println!("#{} {} -> {}", clipped.index, clipped.source, piece);
        }
    }

    if dropped > 0 {
        process::exit(1);
    }
}

fn cmd_compare(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: clip-scene compare <scene>");
        process::exit(1);
    }

    let mut scene = open_scene_or_exit(&args[0]);
    println!("window {}", scene.window());

    let mut results = Vec::new();
    for a in Algorithm::ALL {
        scene.set_algorithm(a);
        results.push((a, scene.clip_lines()));
    }

    for (index, source) in scene.lines().iter().enumerate() {
        println!("#{} {}", index, source);
        for (a, lines) in &results {
            let clipped = &lines[index];
            let text = match &clipped.error {
                Some(e) => format!("error: {}", e),
                None if clipped.is_rejected() => "rejected".to_string(),
                None => clipped
                    .accepted
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            println!("    {:<18} {}", a.name(), text);
        }
    }
}
