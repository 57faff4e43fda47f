mod plugins;

pub use plugins::{DashboardPlugin, PluginContext, PluginEvent};
