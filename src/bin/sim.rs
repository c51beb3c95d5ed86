use game2048::{init_logging, Game2048Env, PlayerNode, ScriptedPlayer};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <moves>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let player = ScriptedPlayer::from_tokens(&args[2])?;

    let mut node = PlayerNode::new(Box::new(player), Game2048Env::new(Some(seed)));
    let summary = node.run()?;

    let result = json!({
        "summary": summary,
        "done": node.env().is_done(),
        "board": node.env().observation(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
