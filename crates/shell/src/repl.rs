//! Interactive shell loop
//!
//! Reads one command line at a time, dispatches it, and prints the response.
//! Handler failures are caught here and printed; the loop itself only exits
//! on `exit` or end of input.

use std::io::{self, Write};

use s3sh_core::{Error, ObjectStore};

use crate::dispatch;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

const PROMPT: &str = "Enter command ('help' to see all commands, 'exit' to quit)> ";

/// The numbered verb list printed for `help`
pub fn help_text() -> String {
    [
        "Supported Commands:",
        "1. createdir <directory_name>",
        "2. upload <source_file> <directory_name> [<object_name>]",
        "3. download <object_name> <directory_name> [<target_file>]",
        "4. delete <object_name> <directory_name>",
        "5. deletedir <directory_name>",
        "6. find <pattern> [<directory_name>]",
        "7. listdir [<directory_name>]",
        "8. help",
        "9. exit",
    ]
    .join("\n")
}

/// Run the interactive loop until `exit` or EOF
pub async fn run(store: &dyn ObjectStore, output: &OutputConfig) -> anyhow::Result<()> {
    let formatter = Formatter::new(output.clone());
    let stdin = io::stdin();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let mut buf = String::new();
        if stdin.read_line(&mut buf)? == 0 {
            // EOF: leave the prompt on its own line
            println!();
            break;
        }

        let line = normalize(&buf);
        if line.is_empty() {
            continue;
        }

        match line.as_str() {
            "exit" => {
                formatter.println("Good bye!");
                break;
            }
            "help" => formatter.println(&help_text()),
            _ => {
                tracing::debug!(command = %line, "dispatching");
                match dispatch::dispatch(store, output, &line).await {
                    Ok(response) => formatter.output(&response),
                    Err(e) => formatter.error(&e.to_string()),
                }
            }
        }
    }

    Ok(())
}

/// Run a single command line non-interactively (the -c flag)
pub async fn run_command(store: &dyn ObjectStore, output: &OutputConfig, line: &str) -> ExitCode {
    let formatter = Formatter::new(output.clone());
    let line = normalize(line);

    match line.as_str() {
        "" => {
            formatter.error(&Error::MissingParameters.to_string());
            ExitCode::UsageError
        }
        "help" => {
            formatter.println(&help_text());
            ExitCode::Success
        }
        "exit" => ExitCode::Success,
        _ => match dispatch::dispatch(store, output, &line).await {
            Ok(response) => {
                formatter.output(&response);
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(&e.to_string());
                ExitCode::from(&e)
            }
        },
    }
}

/// Collapse repeated whitespace so arity checks see clean tokens
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
