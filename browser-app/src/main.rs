// Wellbeing dashboard entry point (wasm32, served as a single page)

use wellbeing_web_ui::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
