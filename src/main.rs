mod config;
mod contact;
mod content;
mod education;
mod experience;
mod home;
mod navigation;
mod projects;
mod relay;
mod routes;
mod scroll;
mod toast;
mod typewriter;

fn main() {
    dioxus::launch(routes::App);
}
