pub mod widget_config;
