use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{debug, error, LevelFilter};
use tokio::io::{AsyncBufReadExt, BufReader};

use moodmate::{Companion, CompanionConfig, Message};

/// Moodmate - wellbeing chat companion and journal prompt generator
#[derive(Parser)]
#[command(name = "moodmate", version, about)]
struct Cli
{   /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8

  , #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command
{   /// Chat interactively in the terminal
    Chat
    {   /// Your location, used for local crisis resources
        #[arg(short, long, env = "MOODMATE_LOCATION")]
        location: Option<String>
    }
  , /// Print journal prompts for a mood as JSON
    Journal
    {   /// Current mood, e.g. "stressed"
        mood: String
    }
  , /// Serve the web UI
    Serve
    {   /// Address to listen on (overrides MOODMATE_BIND)
        #[arg(long)]
        bind: Option<String>
    }
}

fn init_logging(verbose: u8)
{   let level = match verbose
    {   0 => LevelFilter::Warn
      , 1 => LevelFilter::Info
      , 2 => LevelFilter::Debug
      , _ => LevelFilter::Trace
    };
    env_logger::Builder::new()
      .filter_level(level)
      .parse_default_env()
      .init();
}

#[tokio::main]
async fn main() -> ExitCode
{   let cli = Cli::parse();
    init_logging(cli.verbose);

    if dotenvy::dotenv().is_err()
    {   debug!("No .env file found; using process environment");
    }

    let config = match CompanionConfig::from_env()
    {   Ok(config) => config
      , Err(e) => {
          error!("Startup failed: {}", e);
          eprintln!("moodmate: {}", e);
          return ExitCode::FAILURE;
        }
    };

    match run(cli.command, config).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          eprintln!("moodmate: {}", e);
          ExitCode::FAILURE
        }
    }
}

async fn run(
  command: Command
, mut config: CompanionConfig
) -> Result<(), moodmate::Error>
{   if let Command::Serve { bind: Some(addr) } = &command
    {   config.bind_addr = addr.clone();
    }
    let companion = Companion::from_config(config)?;

    match command
    {   Command::Chat { location } => {
          chat_loop(&companion, location.as_deref()).await
        }
      , Command::Journal { mood } => {
          println!("{}", companion.journal_prompts_text(&mood).await);
          Ok(())
        }
      , Command::Serve { .. } => {
          let addr = companion.config().bind_addr.clone();
          println!("Serving on http://{}", addr);
          moodmate::web::serve(Arc::new(companion), &addr).await
        }
    }
}

async fn chat_loop(
  companion: &Companion
, location: Option<&str>
) -> Result<(), moodmate::Error>
{   println!("Mental Health Companion (type 'quit' to exit)");
    let mut history: Vec<Message> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop
    {   print!("You: ");
        std::io::stdout().flush()
          .map_err(|e| moodmate::Error::Other(e.to_string()))?;

        let line = match lines.next_line().await
        {   Ok(Some(line)) => line
          , Ok(None) => break
          , Err(e) => return Err(moodmate::Error::Other(e.to_string()))
        };
        let input = line.trim();
        if input.is_empty()
        {   continue;
        }
        if input.eq_ignore_ascii_case("quit")
          || input.eq_ignore_ascii_case("exit")
        {   break;
        }

        match companion.chat(input, &history, location).await
        {   Ok(reply) => {
              println!("Bot: {}", reply);
              history.push(Message::user(input));
              history.push(Message::assistant(reply));
            }
          , Err(e) => {
              println!(
                "Bot: {}: {}",
                moodmate::companion::CHAT_ERROR_PREFIX, e
              );
            }
        }
    }
    Ok(())
}
