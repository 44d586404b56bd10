use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable with the filter directives for console logging.
pub const CONSOLE_LOG_VAR: &str = "CONSOLE_LOG";
/// Environment variable with the filter directives for file logging.
pub const FILE_LOG_VAR: &str = "FILE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the global subscriber. Keep the returned [`AppTracing`] alive until the end of `main`, so that buffered
  /// file output is flushed.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_LOG_VAR));
    let file_filter = self.file_filter;
    let file = self.log_file_path.map(|p| (p, file_filter.unwrap_or_else(|| filter_from_env(FILE_LOG_VAR))));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_default()
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(#[allow(dead_code)] Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
    );

    let _file_tracing = match file {
      Some((file_path, file_filter)) => Self::with_file_layer(layered, &file_path, file_filter),
      None => {
        layered.init();
        FileTracing::default()
      }
    };

    Self { _file_tracing }
  }

  #[cfg(feature = "app_tracing_file")]
  fn with_file_layer<S>(layered: S, file_path: &Path, filter: EnvFilter) -> FileTracing where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync + 'static,
  {
    use std::fs::{create_dir_all, File};
    use std::io::BufWriter;

    let result = (|| {
      if let Some(parent) = file_path.parent() {
        create_dir_all(parent)?;
      }
      File::create(file_path)
    })();
    match result {
      Err(e) => {
        layered.init();
        tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
        FileTracing::default()
      }
      Ok(log_file) => {
        let writer = BufWriter::new(log_file);
        let (non_blocking, guard) = tracing_appender::non_blocking(writer);
        let layered = layered.with(
          tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter)
        );
        layered.init();
        FileTracing(Some(guard))
      }
    }
  }

  #[cfg(not(feature = "app_tracing_file"))]
  fn with_file_layer<S>(layered: S, file_path: &Path, _filter: EnvFilter) -> FileTracing where
    S: tracing::Subscriber + Send + Sync + 'static,
  {
    layered.init();
    tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
    FileTracing
  }
}
