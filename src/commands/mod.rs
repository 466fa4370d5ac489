pub mod browse;
pub mod names;
pub mod path;
pub mod roster;
pub mod show;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use roster_core::store::DocumentOrigin;

use crate::render::report_status;

/// Tell the user when the roster was just created from the built-in default.
pub fn report_origin(origin: &DocumentOrigin) {
    if let DocumentOrigin::Default(status) = origin {
        eprintln!("{}", "Created a new roster with the default pattern".dimmed());
        report_status(status);
    }
}

/// Prompt with a prefilled value until `parse` accepts the input.
pub fn prompt_with_retry<T, F>(prompt: &str, initial: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Free-text prompt prefilled with the current value; may be left blank.
pub fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
