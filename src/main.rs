use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use std::time::Instant;

use log::{error, info};

use raycast::{cli_options, renderer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: {}", cli_options::CliOptions::message());
            process::exit(1);
        }
    };
    let scene_file = match options.scene_file {
        Some(scene_file) => scene_file,
        None => {
            eprintln!("usage: {}", cli_options::CliOptions::message());
            process::exit(1);
        }
    };

    let scene = match scene::load_scene_file(&scene_file) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let num_threads = if options.use_multi_thread {
        options.num_threads.unwrap_or(0) // 0 lets rayon pick the core count
    } else {
        1
    };
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            error!("cannot build worker pool: {}", e);
            process::exit(2);
        }
    };

    info!(
        "rendering {}x{} with {} worker threads",
        scene.width,
        scene.height,
        pool.current_num_threads()
    );
    let start = Instant::now();
    let pixels = pool.install(|| renderer::render(&scene));
    info!("rendered in {:.2?}", start.elapsed());

    if let Err(e) = write_png(&scene.output_file, scene.width, scene.height, &pixels) {
        error!("cannot write {}: {}", scene.output_file, e);
        process::exit(2);
    }
    info!("wrote {}", scene.output_file);
}

fn write_png(
    path: &str,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(Path::new(path))?;
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::RGB);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    Ok(())
}
