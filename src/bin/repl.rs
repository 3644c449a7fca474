use dice_expr::command::strip_roll_command;
use dice_expr::{MarkdownStringifier, RollContext, Stringify};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dice_expr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut ctx = RollContext::default();
    let mut stringifier = MarkdownStringifier::new();

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            let expression = strip_roll_command(line).unwrap_or(line);
            let outcome = ctx.evaluate(expression)?;
            println!("{}", stringifier.stringify(&outcome));
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
