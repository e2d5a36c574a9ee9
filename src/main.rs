use securitylens::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting SecurityLens landing page");
    yew::Renderer::<App>::new().render();
}
