use deputados::ui::{make_config, App};

fn main() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .launch(App);
}
