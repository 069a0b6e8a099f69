mod app;
mod people;
mod util;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "memoir.json")]
    project: PathBuf,
    #[arg(long)]
    sample: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = if args.sample {
        app::ProjectSource::Sample
    } else {
        app::ProjectSource::File(args.project)
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kinweb",
        options,
        Box::new(move |cc| Ok(Box::new(app::KinwebApp::new(cc, source)))),
    )
}
