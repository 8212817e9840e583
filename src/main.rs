use driftfield::{FieldEngine, MotionPreference, Rect, SceneLayout};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let width: u32 = parse_arg(&args, "--width").unwrap_or(1280);
    let height: u32 = parse_arg(&args, "--height").unwrap_or(720);
    let seed: Option<u64> = parse_arg(&args, "--seed");
    let particles: Option<usize> = parse_arg(&args, "--particles");
    let capture: Option<String> = parse_arg(&args, "--capture");
    let ticks: u32 = parse_arg(&args, "--ticks").unwrap_or(180);

    let mut builder = FieldEngine::builder(width, height).with_scene(demo_scene(width, height));
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    if let Some(count) = particles {
        builder = builder.with_particle_count(count);
    }
    if has_flag(&args, "--reduced") {
        builder = builder.with_motion(MotionPreference::Reduced);
    }
    let mut engine = builder.build();

    println!(
        "driftfield | {}x{} | {} particles | seed {}{}",
        width,
        height,
        engine.field().len(),
        engine.seed(),
        if engine.motion().is_reduced() {
            " | reduced motion"
        } else {
            ""
        }
    );

    if let Some(path) = capture {
        // Headless: park the pointer mid-frame, advance, save one frame.
        engine.pointer_moved(width as f32 * 0.5, height as f32 * 0.5);
        for _ in 0..ticks {
            engine.tick(1.0 / 60.0);
        }
        match engine.render().save_png(&path) {
            Ok(()) => println!("Captured {} ticks to {}", ticks, path),
            Err(err) => {
                eprintln!("Capture failed: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Space pauses, Escape quits.");
    if let Err(err) = engine.run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// A stand-in page layout: one column of content (an attractor) and a pair
/// of button-sized interactive rects below it.
fn demo_scene(width: u32, height: u32) -> SceneLayout {
    let w = width as f32;
    let h = height as f32;
    let mut scene = SceneLayout::new();
    scene.add_content(Rect::new(w * 0.25, h * 0.15, w * 0.5, h * 0.55));
    scene.add_interactive(Rect::new(w * 0.30, h * 0.80, 140.0, 44.0));
    scene.add_interactive(Rect::new(w * 0.55, h * 0.80, 140.0, 44.0));
    scene
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|v| v == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse::<T>().ok())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|v| v == flag)
}

fn print_usage() {
    println!("driftfield demo");
    println!();
    println!("Usage: driftfield [options]");
    println!();
    println!("Options:");
    println!("  --width N       Window width in pixels (default 1280)");
    println!("  --height N      Window height in pixels (default 720)");
    println!("  --particles N   Exact particle count (default: auto budget)");
    println!("  --seed N        RNG seed (default: from the clock)");
    println!("  --reduced       Force reduced motion");
    println!("  --capture PATH  Render headless and save a PNG, no window");
    println!("  --ticks N       Ticks to advance before capturing (default 180)");
}
