use anyhow::Result;

fn main() -> Result<()> {
    travel_planner::cli::run()
}
