use axum::extract::Path;

pub async fn hello() -> &'static str {
    "Hello!"
}

pub async fn greet(Path(name): Path<String>) -> String {
    format!("Hello!, {name}!")
}
