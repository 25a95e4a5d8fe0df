use crate::file_processing::{read_file, write_file};
use crate::minifier::{minify_css, minify_js};
use colored::Colorize;
use std::{error::Error, path::Path};
use tokio::time::Instant;

// Wraps the minified script and stylesheet in the loader executed by the host
// page. The script runs first, then the stylesheet is injected through the
// host-side utility. The stylesheet is not escaped against the backtick
// delimiter.
pub fn render_inject(js: &str, css: &str) -> String {
    format!("{};cheatgui.utils.includeCSS(`{}`)", js, css)
}

// Minifies the script and stylesheet and writes the three build artifacts to
// the output directory
pub async fn build(js_path: &str, css_path: &str, out_dir: &str) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    // Read both sources and minify them independently
    let js = read_file(Path::new(js_path)).await?;
    let css = read_file(Path::new(css_path)).await?;

    let minified_js = minify_js(&js)?;
    let minified_css = minify_css(&css)?;

    // Write the minified sources and the combined injection artifact
    let out = Path::new(out_dir);
    write_file(&out.join("cheatgui.min.js"), &minified_js).await?;
    write_file(&out.join("cheatgui.min.css"), &minified_css).await?;
    write_file(&out.join("cheatgui.inj.js"), &render_inject(&minified_js, &minified_css)).await?;

    println!("{}", format!("{} {} {}", "Built".blue(), out_dir, format!("in {:?}", start.elapsed()).dimmed()));

    Ok(())
}
