mod config;
mod indicator_config;
mod library_config;

pub(crate) use {
    config::Config, indicator_config::IndicatorConfig, library_config::LibraryConfig,
};

pub(crate) const DEFAULT_HOMEPAGE_URL: &str = "https://github.com/noise-tray/noise-tray";

pub(crate) fn default_homepage_url() -> String {
    DEFAULT_HOMEPAGE_URL.to_string()
}
