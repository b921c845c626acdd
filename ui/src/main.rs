fn main() {
    yew::Renderer::<trip_ui::App>::new().render();
}
