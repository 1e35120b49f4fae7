use std::str::FromStr;

pub fn prompt_text_handle_errors<T>(prompt: &str) -> eyre::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error,
{
    prompt_text_until(prompt, |_| Ok(()))
}

/// Re-prompts until the input parses and passes `check`
pub fn prompt_text_until<T, F>(prompt: &str, check: F) -> eyre::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error,
    F: Fn(&T) -> Result<(), String>,
{
    loop {
        let t = inquire::Text::new(prompt).prompt()?;

        match t.trim().parse() {
            Ok(t) => match check(&t) {
                Ok(()) => return Ok(t),
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            },
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        }
    }
}
