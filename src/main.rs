use restoreland::asset::{export_scenejson, import_scenejson};
use restoreland::settings::Settings;
use restoreland::{Error, RestoreOutcome, Restorer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load_global()?;

    let data =
        std::fs::read(&settings.scene_path).map_err(|err| Error::io(&settings.scene_path, err))?;
    let mut scene = import_scenejson(&data)?;

    match Restorer::new(&settings.state_path).restore(&mut scene)? {
        RestoreOutcome::MissingFile { .. } => {}
        RestoreOutcome::Completed(report) => {
            tracing::debug!(
                "restored {}, skipped {}",
                report.restored.len(),
                report.skipped.len()
            );

            println!("{}", export_scenejson(&scene)?);
        }
    }

    Ok(())
}
