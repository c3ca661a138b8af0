use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter, SetLoggerError};

pub fn setup_logging(level: LevelFilter) -> Result<(), SetLoggerError>
{
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sqlx::query", level)
        .level_for("mongodb", LevelFilter::Warn)
        .level_for("neo4rs", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}
