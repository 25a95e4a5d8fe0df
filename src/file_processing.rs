use colored::Colorize;
use std::{error::Error, path::Path};
use tokio::{
    fs::{create_dir_all, read_to_string, File},
    io::AsyncWriteExt
};

// Reads the content of a file and returns it as a string
pub async fn read_file(path: &Path) -> Result<String, Box<dyn Error>> {
    read_to_string(path).await.map_err(Into::into)
}

// Writes text to a file, creating the parent directory first if it is missing.
// A failed directory creation is logged and the write is attempted anyway.
pub async fn write_file(path: &Path, text: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(err) = create_dir_all(parent).await {
                eprintln!("{}", format!("Failed to create {}: {}", parent.display(), err).red());
            }
        }
    }

    let mut file = File::create(path).await?;
    file.write_all(text.as_bytes()).await?;

    // dropping a tokio File does not wait for in-flight writes
    file.flush().await?;

    Ok(())
}
