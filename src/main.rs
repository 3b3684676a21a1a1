fn main() {
    tracing_subscriber::fmt().init();
    tracing::info!("NeoFolio - AI developer portfolio starting");
    dioxus::launch(neofolio::ui::App);
}
