use clap::Parser;

#[derive(Parser)]
#[command(name = "color-quiz")]
#[command(about = "A terminal color-name matching quiz with a countdown and themes")]
#[command(version)]
pub struct Cli {
    /// Startup theme name (e.g. "Classic Red", "Dark Mode", "Ocean Blue")
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
