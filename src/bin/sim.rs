use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Match, MatchConfig, DEFAULT_GRID_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed> [size]", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_GRID_SIZE,
    };

    let config = MatchConfig::new(size)?;
    let mut game = Match::new(
        &config,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(seed),
    );
    game.run()?;

    let result = json!({
        "seed": seed,
        "summary": game.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
