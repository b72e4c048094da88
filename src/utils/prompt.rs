use std::io::{self, BufRead, Write};

use crate::utils::flow::Interact;

// Plain stdin/stdout implementation of the selection capability: a numbered
// list and a retry loop until the answer is a number in range.
pub struct TermPrompt;

impl Interact for TermPrompt {
    fn choose_one(&mut self, label: &str, options: &[String]) -> io::Result<usize> {
        println!("{}:", label);
        for (index, option) in options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while choosing",
                ));
            }
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
                _ => println!("Unesi broj izmedju 1 i {}", options.len()),
            }
        }
    }

    // TODO: suppress terminal echo here once a readline/termios crate is
    // adopted; for now the secret is read as a plain line.
    fn read_secret(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
