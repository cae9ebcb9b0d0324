use std::path::PathBuf;

use anyhow::Result;
use wlset::{
    app::App,
    cli,
    config::Config,
    executor::{DryRun, Executor, SudoExecutor},
    form::WifiForm,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::cli().get_matches();

    let mut config = Config::new(args.get_one::<String>("config").map(PathBuf::from).as_deref())?;

    if let Some(interface) = args.get_one::<String>("interface") {
        config.interface = interface.clone();
    }

    if let Some(mode) = args.get_one::<String>("mode") {
        config.exec_mode = mode.parse()?;
    }

    let form = WifiForm::from_pairs(args.get_many::<String>("field").unwrap_or_default())?;
    let app = App::new(config)?;

    if args.get_flag("print") {
        let script = app.script(&form)?;
        println!("{script}");
        return Ok(());
    }

    let executor: Box<dyn Executor> = if args.get_flag("dry-run") {
        Box::new(DryRun)
    } else {
        Box::new(SudoExecutor::new(app.config.exec_mode, app.config.sudo.clone()))
    };

    if app.apply(&form, executor.as_ref()).await?.is_some() {
        log::info!("Wireless networks updated");
    }

    Ok(())
}
