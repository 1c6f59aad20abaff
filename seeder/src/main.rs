use bd_stations::config::Config;
use tracing::info;

fn main() -> anyhow::Result<()> {
    seeder_lib::init_tracing();

    let config = Config::default();
    info!(
        "Generating stations seed: {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let report = seeder_lib::run(&config)?;
    print!("{}", seeder_lib::render_report(&report));

    Ok(())
}
