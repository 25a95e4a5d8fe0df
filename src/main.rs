use injbuilder::builder::build;

#[tokio::main]
async fn main() {
    build("cheatgui.js", "cheatgui.css", "build").await.unwrap();
}
