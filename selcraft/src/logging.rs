use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, Registry};

pub type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// Registry with a reloadable level filter in front of a stderr `fmt` layer.
pub fn subscriber(level: LevelFilter) -> (impl Subscriber + Send + Sync + 'static, LevelHandle) {
    let (level_layer, level_handle) = reload::Layer::new(level);

    let subscriber = tracing_subscriber::registry()
        .with(level_layer)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    (subscriber, level_handle)
}

pub fn tracing_init(level: LevelFilter) -> LevelHandle {
    let (subscriber, level_handle) = self::subscriber(level);
    subscriber.init();
    level_handle
}

pub fn set_level(handle: &LevelHandle, level: impl Into<LevelFilter>) -> anyhow::Result<()> {
    let level = level.into();
    handle.reload(level)?;
    tracing::debug!(%level, "log level changed");
    Ok(())
}
