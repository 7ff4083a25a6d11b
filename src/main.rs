use anyhow::Context;
use casual_chess::{
    config::{Config, ConfigError, USAGE},
    model::Board,
    net,
    render,
    session::{Role, Session}
};
use std::{
    env,
    io::{self, Write},
    process
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match Config::parse_from_args(env::args_os()) {
        Ok(config) => config,
        Err(ConfigError::Display(error)) => error.exit(),
        Err(ConfigError::Usage(error)) => {
            eprintln!("{}", USAGE);
            eprintln!("{}", error.render());
            process::exit(1);
        }
    };
    //Logs go to stderr, the board owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Err(error) = run(config).await {
        eprintln!("ERROR: {:#}", error);
        process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let role = config.role();
    let board = Board::standard();
    let mut stdout = io::stdout();
    stdout.write_all(render::DIRECTIONS.as_bytes())?;
    stdout.write_all(render::render(&board, config.render).as_bytes())?;
    stdout.flush()?;
    //Connect
    let stream = match role {
        Role::Listener => net::listen(config.port).await?,
        Role::Connector => net::connect(&config.host, config.port).await?
    };
    //Play
    let input = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    let mut session = Session::new(role, board, stream, input, stdout, config.render);
    let outcome = session.run().await.context("session")?;
    info!(%role, ?outcome, "game over");
    Ok(())
}
