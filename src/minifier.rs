use regex::Regex;
use std::error::Error;

// Matches block comments: /* ... */
const BLOCK_COMMENT_PATTERN: &str = r"/\*[\s\S]*?\*/";

// Matches line comments that start a line: // ...
const LINE_COMMENT_PATTERN: &str = r"(?m)^\s*//.*$";

// Matches a newline and the indentation that follows it
const NEWLINE_RUN_PATTERN: &str = r"\n\s*";

// Matches block comments or newline/indentation runs in a stylesheet
const CSS_STRIP_PATTERN: &str = r"/\*[\s\S]*?\*/|\n\s*";

// Matches whitespace around a non-word character
const CSS_TIGHTEN_PATTERN: &str = r"\s*(\W)\s*";

// Minifies a script by stripping comments and newline/indentation runs.
// Comment-like sequences inside string literals are stripped too; a trailing
// line comment after code on the same line is left in place.
pub fn minify_js(contents: &str) -> Result<String, Box<dyn Error>> {
    let block_comment = Regex::new(BLOCK_COMMENT_PATTERN)?;
    let line_comment = Regex::new(LINE_COMMENT_PATTERN)?;
    let newline_run = Regex::new(NEWLINE_RUN_PATTERN)?;

    let minified = block_comment.replace_all(contents, "");
    let minified = line_comment.replace_all(&minified, "");
    let minified = newline_run.replace_all(&minified, "");

    Ok(minified.into_owned())
}

// Minifies a stylesheet by stripping comments and newline/indentation runs,
// then collapsing whitespace around non-word characters
pub fn minify_css(contents: &str) -> Result<String, Box<dyn Error>> {
    let strip = Regex::new(CSS_STRIP_PATTERN)?;
    let tighten = Regex::new(CSS_TIGHTEN_PATTERN)?;

    let minified = strip.replace_all(contents, "");
    let minified = tighten.replace_all(&minified, "${1}");

    Ok(minified.into_owned())
}
