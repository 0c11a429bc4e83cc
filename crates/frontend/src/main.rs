mod app;
mod components;
mod routes;
mod session;
mod views;

use app::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

fn init_logging() {
    console_error_panic_hook::set_once();

    // `log` records from dependencies
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    if let Err(error) = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .try_init()
    {
        web_sys::console::warn_1(
            &format!("tracing subscriber not installed: {error}").into(),
        );
    }
}

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}
