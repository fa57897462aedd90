mod components;
mod config;
mod hooks;
mod services;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Booking calendar starting...");

    yew::Renderer::<App>::new().render();
}
